//! OpenAI-compatible model provider configuration.

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    String::from("https://api.openai.com/v1")
}

fn default_translation_model() -> String {
    String::from("gpt-4o")
}

fn default_base_model() -> String {
    String::from("gpt-4o-mini-2024-07-18")
}

const fn default_timeout_secs() -> u64 {
    120
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OpenAiConfig {
    /// Bearer token for the provider API.
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Chat model used to translate supplement names to English.
    #[serde(default = "default_translation_model")]
    pub translation_model: String,

    /// Model the fine-tuning job starts from.
    #[serde(default = "default_base_model")]
    pub base_model: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            translation_model: default_translation_model(),
            base_model: default_base_model(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl OpenAiConfig {
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}
