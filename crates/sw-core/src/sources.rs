//! Evidence source traits.
//!
//! Implemented by the provider clients in `sw-sources` and by in-memory fakes in
//! tests, so the pipelines never depend on a concrete HTTP client.

use std::future::Future;

use crate::entities::{LiteratureArticle, ReferenceFact};

/// Source of reference fact sheets, one supplement at a time.
pub trait ReferenceSource: Send + Sync {
    /// Medication-interaction passage for `entity`. Provider failures are reported
    /// as [`ReferenceFact::Missing`], never as errors.
    fn reference_fact(&self, entity: &str) -> impl Future<Output = ReferenceFact> + Send;
}

/// Source of literature records matching a set of entities.
pub trait LiteratureSource: Send + Sync {
    /// Articles whose title or abstract mentions every entity. Individual request
    /// failures contribute no articles rather than failing the search.
    fn literature(&self, entities: &[String]) -> impl Future<Output = Vec<LiteratureArticle>> + Send;
}
