//! Chat completion request types and the [`ChatModel`] seam.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::error::LlmError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".into(),
            content: content.into(),
        }
    }
}

/// Body of a `/chat/completions` request.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl ChatRequest {
    /// Single user-turn request.
    #[must_use]
    pub fn user(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: vec![ChatMessage::user(prompt)],
            temperature: None,
            max_tokens: None,
        }
    }

    #[must_use]
    pub const fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    #[must_use]
    pub const fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

#[derive(Deserialize)]
pub(crate) struct ChatCompletion {
    pub choices: Vec<Choice>,
}

#[derive(Deserialize)]
pub(crate) struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Deserialize)]
pub(crate) struct ChoiceMessage {
    pub content: Option<String>,
}

impl ChatCompletion {
    /// Trimmed text of the first choice.
    pub(crate) fn into_text(self) -> Result<String, LlmError> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .ok_or_else(|| LlmError::Parse("completion has no message content".into()))
    }
}

/// A model that answers chat requests with text.
pub trait ChatModel: Send + Sync {
    fn complete(
        &self,
        request: ChatRequest,
    ) -> impl Future<Output = Result<String, LlmError>> + Send;
}
