//! Direct-interaction evidence filter.
//!
//! Keeps only reference passages and articles that co-mention the entities under
//! analysis. Reference facts and articles are matched differently:
//!
//! - facts are matched case-sensitively, and under [`FactMatchPolicy::LeadingPair`]
//!   only against the first two entities, whatever the list length;
//! - articles are matched case-insensitively against every entity.
//!
//! For lists longer than two the default policy therefore admits facts that say
//! nothing about the third entity. [`FactMatchPolicy::AllEntities`] closes that gap.

use crate::entities::{LiteratureArticle, ReferenceFact};
use crate::enums::FactMatchPolicy;

/// Evidence that mentions the analysed combination directly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectEvidence {
    /// Passage texts of the retained reference facts.
    pub facts: Vec<String>,
    pub articles: Vec<LiteratureArticle>,
}

impl DirectEvidence {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.facts.is_empty() && self.articles.is_empty()
    }
}

/// Filter facts and articles down to direct co-occurrence evidence.
///
/// Pure function of its inputs. Missing facts never match.
#[must_use]
pub fn filter_direct<S: AsRef<str>>(
    facts: &[ReferenceFact],
    articles: &[LiteratureArticle],
    entities: &[S],
    policy: FactMatchPolicy,
) -> DirectEvidence {
    let fact_names: &[S] = match policy {
        FactMatchPolicy::LeadingPair => &entities[..entities.len().min(2)],
        FactMatchPolicy::AllEntities => entities,
    };

    let facts = facts
        .iter()
        .filter_map(ReferenceFact::text)
        .filter(|text| fact_names.iter().all(|name| text.contains(name.as_ref())))
        .map(ToString::to_string)
        .collect();

    let articles = articles
        .iter()
        .filter(|article| article.mentions_all(entities))
        .cloned()
        .collect();

    DirectEvidence { facts, articles }
}
