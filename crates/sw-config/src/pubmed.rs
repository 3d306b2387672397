//! PubMed E-utilities configuration.

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    String::from("https://eutils.ncbi.nlm.nih.gov/entrez/eutils")
}

/// Ids requested per keyword search.
const fn default_retmax() -> u32 {
    10
}

/// Publication-date window, five years of 365 days.
const fn default_lookback_days() -> u64 {
    5 * 365
}

/// Pause after every request to stay under the E-utilities rate limit.
const fn default_request_delay_ms() -> u64 {
    500
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PubMedConfig {
    /// NCBI API key. Optional; requests without one get a lower rate limit.
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_retmax")]
    pub retmax: u32,

    #[serde(default = "default_lookback_days")]
    pub lookback_days: u64,

    #[serde(default = "default_request_delay_ms")]
    pub request_delay_ms: u64,
}

impl Default for PubMedConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            retmax: default_retmax(),
            lookback_days: default_lookback_days(),
            request_delay_ms: default_request_delay_ms(),
        }
    }
}

impl PubMedConfig {
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}
