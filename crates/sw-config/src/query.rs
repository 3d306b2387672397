//! Interaction query settings.

use serde::{Deserialize, Serialize};
use sw_core::enums::FactMatchPolicy;

const fn default_temperature() -> f32 {
    0.1
}

const fn default_max_tokens() -> u32 {
    300
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QueryConfig {
    /// Tuned model id. When empty the id is read from `training.model_id_path`.
    #[serde(default)]
    pub model_id: String,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Entities a reference fact must mention to count as direct evidence.
    #[serde(default)]
    pub fact_match: FactMatchPolicy,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            model_id: String::new(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            fact_match: FactMatchPolicy::default(),
        }
    }
}
