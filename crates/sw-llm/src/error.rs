//! Model provider error types.

use thiserror::Error;

/// Errors that can occur when calling the model provider.
#[derive(Debug, Error)]
pub enum LlmError {
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

    /// Failed to parse a provider response.
    #[error("parse error: {0}")]
    Parse(String),

    /// No API key configured.
    #[error("model provider is not configured (set SWISE_OPENAI__API_KEY)")]
    NotConfigured,

    /// Reading a local file for upload failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
