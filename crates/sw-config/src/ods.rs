//! NIH Office of Dietary Supplements fact-sheet API configuration.

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    String::from("https://ods.od.nih.gov/api/")
}

fn default_reading_level() -> String {
    String::from("Health Professional")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OdsConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Fact-sheet audience (`Consumer`, `Health Professional`, ...).
    #[serde(default = "default_reading_level")]
    pub reading_level: String,
}

impl Default for OdsConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            reading_level: default_reading_level(),
        }
    }
}
