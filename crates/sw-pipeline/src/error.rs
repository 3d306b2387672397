//! Pipeline error types.

use sw_core::enums::JobStatus;
use sw_llm::LlmError;
use thiserror::Error;

/// Errors writing or reading the training dataset file.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("dataset I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no training examples were collected")]
    Empty,
}

/// Terminal failure of the fine-tuning workflow. The one fatal error in the system.
#[derive(Debug, Error)]
pub enum JobFailure {
    /// The provider reported the job as failed.
    #[error("fine-tuning job {job_id} failed: {message}")]
    Failed { job_id: String, message: String },

    /// The provider cancelled the job.
    #[error("fine-tuning job {job_id} was cancelled by the provider")]
    Cancelled { job_id: String },

    /// The job succeeded but reported no model id.
    #[error("fine-tuning job {job_id} succeeded without a model id")]
    MissingModelId { job_id: String },

    /// The poll budget ran out before a terminal status.
    #[error("fine-tuning job {job_id} still {last_status} after {attempts} polls")]
    PollLimitExceeded {
        job_id: String,
        attempts: u32,
        last_status: JobStatus,
    },

    /// The caller cancelled the wait. The remote job keeps running.
    #[error("stopped waiting for fine-tuning job {job_id}")]
    Aborted { job_id: String },

    /// Upload or job creation failed.
    #[error("model provider error: {0}")]
    Provider(#[from] LlmError),

    /// The model id file could not be written.
    #[error("failed to persist model id: {0}")]
    Io(#[from] std::io::Error),
}

/// Name translation did not produce usable names.
#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("translation request failed: {0}")]
    Provider(#[from] LlmError),

    #[error("translation reply contained no names: {0:?}")]
    Empty(String),
}
