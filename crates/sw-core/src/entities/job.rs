use serde::{Deserialize, Serialize};

use crate::enums::JobStatus;

/// Snapshot of a remote fine-tuning job.
///
/// `fine_tuned_model` is set only once the job succeeded; `error` only once it failed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FineTuneJob {
    pub id: String,
    pub status: JobStatus,
    pub fine_tuned_model: Option<String>,
    pub error: Option<String>,
}
