//! Provider error types.

use thiserror::Error;

/// Errors that can occur when talking to an evidence provider.
#[derive(Debug, Error)]
pub enum SourceError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the provider.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The provider answered 429 Too Many Requests.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds the provider asked us to wait.
        retry_after_secs: u64,
    },

    /// Failed to parse a provider response.
    #[error("parse error: {0}")]
    Parse(String),
}
