//! Fine-tuning job supervision.
//!
//! ```text
//! upload ─► create ─► poll ─┬─► succeeded ─► write model id
//!                           ├─► failed / cancelled
//!                           └─► (sleep | cancel token) ─► poll …
//! ```
//!
//! Polling stops at the first terminal status, after `max_polls` attempts, or
//! when the cancellation token fires. Cancelling only stops the local wait; the
//! remote job is left running.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use sw_config::SwConfig;
use sw_core::entities::FineTuneJob;
use sw_core::enums::JobStatus;
use sw_llm::FineTuneProvider;
use tokio_util::sync::CancellationToken;

use crate::error::JobFailure;
use crate::fs::write_atomically;

/// How often and how many times a job is polled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    pub interval: Duration,
    pub max_polls: u32,
}

impl PollPolicy {
    #[must_use]
    pub const fn from_config(config: &SwConfig) -> Self {
        Self {
            interval: Duration::from_secs(config.training.poll_interval_secs),
            max_polls: config.training.max_polls,
        }
    }
}

pub struct FineTuneSupervisor<P> {
    provider: P,
    base_model: String,
    policy: PollPolicy,
    model_id_path: PathBuf,
}

impl<P: FineTuneProvider> FineTuneSupervisor<P> {
    pub fn new(
        provider: P,
        base_model: impl Into<String>,
        policy: PollPolicy,
        model_id_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            provider,
            base_model: base_model.into(),
            policy,
            model_id_path: model_id_path.into(),
        }
    }

    /// Upload `dataset`, start a job, and wait for it to finish. On success the
    /// tuned model id is written to the model-id file and returned.
    ///
    /// # Errors
    ///
    /// Every [`JobFailure`] variant; see its docs.
    pub async fn submit_and_wait(
        &self,
        dataset: &Path,
        cancel: &CancellationToken,
    ) -> Result<String, JobFailure> {
        let file_id = self.provider.upload_training_file(dataset).await?;
        tracing::info!(file_id, dataset = %dataset.display(), "training file uploaded");

        let job = self.provider.create_job(&file_id, &self.base_model).await?;
        tracing::info!(job_id = %job.id, base_model = %self.base_model, "fine-tuning job created");

        let job = self.wait_for_terminal(job, cancel).await?;
        let model_id = finished_model(job)?;

        write_model_id(&self.model_id_path, &model_id)?;
        tracing::info!(model_id, path = %self.model_id_path.display(), "fine-tuned model id saved");
        Ok(model_id)
    }

    async fn wait_for_terminal(
        &self,
        created: FineTuneJob,
        cancel: &CancellationToken,
    ) -> Result<FineTuneJob, JobFailure> {
        let job_id = created.id.clone();
        let mut last_status = created.status;

        for attempt in 1..=self.policy.max_polls {
            match self.provider.retrieve_job(&job_id).await {
                Ok(job) => {
                    tracing::info!(job_id, status = %job.status, attempt, "fine-tuning job status");
                    if job.status.is_terminal() {
                        return Ok(job);
                    }
                    last_status = job.status;
                }
                Err(error) => {
                    tracing::warn!(job_id, attempt, %error, "job status poll failed");
                }
            }

            if attempt == self.policy.max_polls {
                break;
            }
            tokio::select! {
                () = cancel.cancelled() => {
                    tracing::warn!(job_id, "stopped waiting for fine-tuning job");
                    return Err(JobFailure::Aborted { job_id });
                }
                () = tokio::time::sleep(self.policy.interval) => {}
            }
        }

        Err(JobFailure::PollLimitExceeded {
            job_id,
            attempts: self.policy.max_polls,
            last_status,
        })
    }
}

/// Model id of a job in a terminal state.
fn finished_model(job: FineTuneJob) -> Result<String, JobFailure> {
    match job.status {
        JobStatus::Succeeded => job
            .fine_tuned_model
            .ok_or(JobFailure::MissingModelId { job_id: job.id }),
        JobStatus::Cancelled => Err(JobFailure::Cancelled { job_id: job.id }),
        _ => Err(JobFailure::Failed {
            message: job
                .error
                .unwrap_or_else(|| "provider reported no error message".into()),
            job_id: job.id,
        }),
    }
}

/// Replace the model-id file with a single line holding `model_id`.
///
/// # Errors
///
/// Returns the I/O error if the file cannot be written.
pub fn write_model_id(path: &Path, model_id: &str) -> std::io::Result<()> {
    write_atomically(path, |out| out.write_all(model_id.as_bytes()))
}

/// Load a model id saved by [`write_model_id`].
///
/// # Errors
///
/// Fails if the file cannot be read or holds only whitespace.
pub fn read_model_id(path: &Path) -> std::io::Result<String> {
    let id = std::fs::read_to_string(path)?.trim().to_string();
    if id.is_empty() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("{} is empty", path.display()),
        ));
    }
    Ok(id)
}
