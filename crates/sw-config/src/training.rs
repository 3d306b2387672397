//! Dataset construction and fine-tuning job supervision settings.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_supplements() -> Vec<String> {
    ["Iron", "Calcium", "Magnesium", "Zinc"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from("nih_pubmed_supplement_interactions_expanded.jsonl")
}

fn default_model_id_path() -> PathBuf {
    PathBuf::from("fine_tuned_model_id.txt")
}

const fn default_poll_interval_secs() -> u64 {
    30
}

/// Two hours at the default interval.
const fn default_max_polls() -> u32 {
    240
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrainingConfig {
    /// Supplements the dataset builder iterates, in order.
    #[serde(default = "default_supplements")]
    pub supplements: Vec<String>,

    #[serde(default = "default_dataset_path")]
    pub dataset_path: PathBuf,

    /// Where the resulting model id is written, and read back by `analyze`.
    #[serde(default = "default_model_id_path")]
    pub model_id_path: PathBuf,

    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,

    /// Upper bound on status polls before the wait is abandoned.
    #[serde(default = "default_max_polls")]
    pub max_polls: u32,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            supplements: default_supplements(),
            dataset_path: default_dataset_path(),
            model_id_path: default_model_id_path(),
            poll_interval_secs: default_poll_interval_secs(),
            max_polls: default_max_polls(),
        }
    }
}
