//! # sw-sources
//!
//! HTTP clients for the two evidence providers:
//! - PubMed E-utilities (`esearch` + `efetch`) for literature records
//! - NIH Office of Dietary Supplements fact sheets for reference interaction text
//!
//! Both clients recover from provider failures locally: a failed literature request
//! contributes no articles, and a failed fact-sheet request yields
//! [`ReferenceFact::Missing`](sw_core::entities::ReferenceFact::Missing). The
//! [`SourceError`] type is used internally and surfaced only in logs.

pub mod ods;
pub mod pubmed;

mod error;
mod http;
mod xml;

pub use error::SourceError;
pub use ods::OdsClient;
pub use pubmed::PubMedClient;

use std::time::Duration;

/// Build the shared `reqwest` client used by both providers.
fn build_http(timeout: Duration) -> Result<reqwest::Client, SourceError> {
    Ok(reqwest::Client::builder()
        .user_agent(concat!("suppwise/", env!("CARGO_PKG_VERSION")))
        .timeout(timeout)
        .build()?)
}
