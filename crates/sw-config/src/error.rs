//! Errors raised while loading or checking [`crate::SwConfig`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A TOML layer or `SWISE_*` variable could not be merged or deserialized.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// A provider section needed by the current command has no credentials,
    /// e.g. `openai` without `api_key` for `train` or `analyze`.
    #[error("Configuration section '{section}' is not configured (missing required fields)")]
    NotConfigured { section: String },

    /// A value the clients cannot work with, e.g. `pubmed.retmax = 0` or a
    /// `query.temperature` outside `0..=2`.
    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}
