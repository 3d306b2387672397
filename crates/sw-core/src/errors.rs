//! Cross-cutting error types for suppwise.
//!
//! Provider-specific errors (`SourceError`, `LlmError`) live in their own crates.
//! `anyhow` only appears in `sw-cli` where all crate errors converge.

use thiserror::Error;

/// Errors that can be raised by any suppwise crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Input failed validation (empty entity list, blank names).
    #[error("Validation error: {0}")]
    Validation(String),
}

impl CoreError {
    /// Reject an entity list with no usable names.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if `entities` is empty or any name is blank.
    pub fn check_entities(entities: &[String]) -> Result<(), Self> {
        if entities.is_empty() {
            return Err(Self::Validation("at least one entity is required".into()));
        }
        if entities.iter().any(|name| name.trim().is_empty()) {
            return Err(Self::Validation("entity names must not be blank".into()));
        }
        Ok(())
    }
}
