//! Training file upload and fine-tuning job types, and the [`FineTuneProvider`] seam.

use std::future::Future;
use std::path::Path;

use serde::Deserialize;
use sw_core::entities::FineTuneJob;
use sw_core::enums::JobStatus;

use crate::error::LlmError;

#[derive(Deserialize)]
pub(crate) struct FileObject {
    pub id: String,
}

#[derive(Deserialize)]
pub(crate) struct JobObject {
    id: String,
    status: String,
    #[serde(default)]
    fine_tuned_model: Option<String>,
    #[serde(default)]
    error: Option<JobErrorObject>,
}

#[derive(Deserialize)]
struct JobErrorObject {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl From<JobObject> for FineTuneJob {
    fn from(job: JobObject) -> Self {
        let status = JobStatus::from_provider(&job.status);
        let error = job.error.and_then(|e| match (e.code, e.message) {
            (_, Some(message)) if !message.is_empty() => Some(message),
            (Some(code), _) if !code.is_empty() => Some(code),
            _ => None,
        });
        Self {
            id: job.id,
            status,
            fine_tuned_model: job.fine_tuned_model.filter(|m| !m.is_empty()),
            error,
        }
    }
}

/// Remote training-job provider.
pub trait FineTuneProvider: Send + Sync {
    /// Upload a JSONL training file; returns the provider file id.
    fn upload_training_file(
        &self,
        path: &Path,
    ) -> impl Future<Output = Result<String, LlmError>> + Send;

    /// Start a fine-tuning job on `base_model` with an uploaded file.
    fn create_job(
        &self,
        training_file_id: &str,
        base_model: &str,
    ) -> impl Future<Output = Result<FineTuneJob, LlmError>> + Send;

    /// Current state of a job.
    fn retrieve_job(
        &self,
        job_id: &str,
    ) -> impl Future<Output = Result<FineTuneJob, LlmError>> + Send;
}
