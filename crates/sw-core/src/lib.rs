//! # sw-core
//!
//! Core types, evidence filtering, and error types for suppwise.
//!
//! This crate provides the foundational types shared across all suppwise crates:
//! - Entity structs for retrieved evidence, training examples, fine-tuning jobs and verdicts
//! - Status and classification enums
//! - The direct-interaction evidence filter
//! - Source traits implemented by the provider clients
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod filter;
pub mod sources;

pub use errors::CoreError;

/// Normalize a free-text entity list: trim each name and drop empties.
///
/// Accepts the comma-separated form users type (`"칼슘, 마그네슘"`).
#[must_use]
pub fn parse_entity_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(ToString::to_string)
        .collect()
}
