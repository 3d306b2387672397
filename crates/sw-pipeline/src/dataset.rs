//! Fine-tuning dataset construction.
//!
//! For every supplement, in order: one example answered with its reference
//! interaction passage (when one was found), then one example per article from a
//! single-supplement literature search. The result is written as JSON Lines in
//! the chat fine-tuning format.

use std::io;
use std::path::Path;

use serde::Serialize;
use serde_jsonlines::JsonLinesWriter;
use sw_core::entities::{ChatRecord, TrainingExample};
use sw_core::sources::{LiteratureSource, ReferenceSource};

use crate::error::DatasetError;
use crate::fs::write_atomically;

/// Example counts for one build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DatasetSummary {
    pub entities: usize,
    pub reference_examples: usize,
    pub article_examples: usize,
}

impl DatasetSummary {
    #[must_use]
    pub const fn total(&self) -> usize {
        self.reference_examples + self.article_examples
    }
}

/// Examples in emission order plus their counts.
#[derive(Debug, Clone, Default)]
pub struct TrainingDataset {
    pub examples: Vec<TrainingExample>,
    pub summary: DatasetSummary,
}

impl TrainingDataset {
    #[must_use]
    pub fn into_examples(self) -> Vec<TrainingExample> {
        self.examples
    }
}

pub struct DatasetBuilder<R, L> {
    reference: R,
    literature: L,
}

impl<R: ReferenceSource, L: LiteratureSource> DatasetBuilder<R, L> {
    pub const fn new(reference: R, literature: L) -> Self {
        Self {
            reference,
            literature,
        }
    }

    /// Collect examples for `entities`. Provider failures shrink the dataset
    /// rather than aborting the build.
    pub async fn build(&self, entities: &[String]) -> TrainingDataset {
        let mut dataset = TrainingDataset::default();

        for entity in entities {
            let fact = self.reference.reference_fact(entity).await;
            match fact.text() {
                Some(text) if !text.trim().is_empty() => {
                    dataset.examples.push(TrainingExample::reference(entity, text));
                    dataset.summary.reference_examples += 1;
                }
                _ => {
                    tracing::debug!(entity, reason = %fact.display_text(), "no reference example");
                }
            }

            let articles = self.literature.literature(std::slice::from_ref(entity)).await;
            tracing::debug!(entity, articles = articles.len(), "literature collected");
            for article in &articles {
                dataset
                    .examples
                    .push(TrainingExample::research(entity, article.render()));
            }
            dataset.summary.article_examples += articles.len();
            dataset.summary.entities += 1;
        }

        tracing::info!(
            entities = dataset.summary.entities,
            reference_examples = dataset.summary.reference_examples,
            article_examples = dataset.summary.article_examples,
            "training dataset built"
        );
        dataset
    }
}

/// Write `examples` to `path` as chat-format JSON Lines, replacing any existing file.
///
/// # Errors
///
/// Returns [`DatasetError::Io`] if the file cannot be written.
pub fn write_jsonl(path: &Path, examples: &[TrainingExample]) -> Result<(), DatasetError> {
    write_atomically(path, |out| {
        let mut writer = JsonLinesWriter::new(out);
        for example in examples {
            writer.write(&ChatRecord::from(example))?;
        }
        writer.flush()
    })?;
    tracing::info!(path = %path.display(), records = examples.len(), "dataset written");
    Ok(())
}

/// Read a dataset file back, e.g. to check it before uploading.
///
/// # Errors
///
/// Returns [`DatasetError::Io`] if the file is missing or a line is not a chat record.
pub fn read_jsonl(path: &Path) -> Result<Vec<ChatRecord>, DatasetError> {
    let records = serde_jsonlines::json_lines(path)?.collect::<io::Result<Vec<ChatRecord>>>()?;
    Ok(records)
}
