//! # sw-pipeline
//!
//! The three workflows built on top of the evidence sources and the model provider:
//!
//! 1. [`dataset`]: per-supplement reference facts and literature turned into a
//!    JSONL fine-tuning file.
//! 2. [`fine_tune`]: upload the file, start a job, poll it to a terminal state,
//!    persist the tuned model id.
//! 3. [`query`]: translate names if needed, gather and filter evidence, ask the
//!    tuned model for a risk verdict.
//!
//! All three are generic over the `sw-core` source traits and the `sw-llm` model
//! traits; concrete clients are wired in by the binary.

pub mod dataset;
pub mod fine_tune;
pub mod query;

mod error;
mod fs;

pub use dataset::DatasetBuilder;
pub use error::{DatasetError, JobFailure, TranslationError};
pub use fine_tune::{FineTuneSupervisor, PollPolicy};
pub use query::{InteractionAnalysis, InteractionQueryPipeline, QueryOptions};
