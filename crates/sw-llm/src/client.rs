//! HTTP implementation of [`ChatModel`] and [`FineTuneProvider`].

use std::path::Path;
use std::time::Duration;

use reqwest::multipart::{Form, Part};
use sw_config::OpenAiConfig;
use sw_core::entities::FineTuneJob;

use crate::chat::{ChatCompletion, ChatModel, ChatRequest};
use crate::error::LlmError;
use crate::fine_tuning::{FileObject, FineTuneProvider, JobObject};

/// Client for an OpenAI-compatible REST API.
pub struct OpenAiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OpenAiClient {
    /// # Errors
    ///
    /// Returns [`LlmError::NotConfigured`] when no API key is set, or
    /// [`LlmError::Http`] if the underlying `reqwest::Client` fails to build.
    pub fn new(config: &OpenAiConfig) -> Result<Self, LlmError> {
        if !config.is_configured() {
            return Err(LlmError::NotConfigured);
        }
        let http = reqwest::Client::builder()
            .user_agent(concat!("suppwise/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }
}

impl ChatModel for OpenAiClient {
    async fn complete(&self, request: ChatRequest) -> Result<String, LlmError> {
        tracing::debug!(model = %request.model, "chat completion request");
        let resp = self
            .http
            .post(self.url("chat/completions"))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;
        let completion: ChatCompletion = parse_json(check_response(resp).await?).await?;
        completion.into_text()
    }
}

impl FineTuneProvider for OpenAiClient {
    async fn upload_training_file(&self, path: &Path) -> Result<String, LlmError> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map_or_else(|| "training.jsonl".to_string(), |n| n.to_string_lossy().into_owned());
        tracing::info!(file = %path.display(), bytes = bytes.len(), "uploading training file");

        let part = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str("application/jsonl")?;
        let form = Form::new().text("purpose", "fine-tune").part("file", part);

        let resp = self
            .http
            .post(self.url("files"))
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await?;
        let file: FileObject = parse_json(check_response(resp).await?).await?;
        Ok(file.id)
    }

    async fn create_job(
        &self,
        training_file_id: &str,
        base_model: &str,
    ) -> Result<FineTuneJob, LlmError> {
        let body = serde_json::json!({
            "training_file": training_file_id,
            "model": base_model,
        });
        let resp = self
            .http
            .post(self.url("fine_tuning/jobs"))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;
        let job: JobObject = parse_json(check_response(resp).await?).await?;
        Ok(job.into())
    }

    async fn retrieve_job(&self, job_id: &str) -> Result<FineTuneJob, LlmError> {
        let resp = self
            .http
            .get(self.url(&format!("fine_tuning/jobs/{job_id}")))
            .bearer_auth(&self.api_key)
            .send()
            .await?;
        let job: JobObject = parse_json(check_response(resp).await?).await?;
        Ok(job.into())
    }
}

/// Map non-success statuses to [`LlmError::Api`], keeping the response body.
async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, LlmError> {
    if resp.status().is_success() {
        return Ok(resp);
    }
    Err(LlmError::Api {
        status: resp.status().as_u16(),
        message: resp.text().await.unwrap_or_default(),
    })
}

async fn parse_json<T: serde::de::DeserializeOwned>(
    resp: reqwest::Response,
) -> Result<T, LlmError> {
    let body = resp.text().await?;
    serde_json::from_str(&body).map_err(|e| LlmError::Parse(e.to_string()))
}
