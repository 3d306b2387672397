//! Entity structs for suppwise domain objects.
//!
//! Values flowing between the provider clients, the pipelines, and the files the
//! pipelines persist.

mod article;
mod fact;
mod job;
mod training;
mod verdict;

pub use article::LiteratureArticle;
pub use fact::ReferenceFact;
pub use job::FineTuneJob;
pub use training::{ChatRecord, ChatTurn, TrainingExample};
pub use verdict::{
    InteractionVerdict, MALFORMED_RESPONSE_EXPLANATION, UNEXPECTED_ERROR_EXPLANATION,
};
