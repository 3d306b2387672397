//! # sw-config
//!
//! Layered configuration loading for suppwise using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SWISE_*` prefix, `__` as separator)
//! 2. Project-level `.suppwise/config.toml`
//! 3. User-level `~/.config/suppwise/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SWISE_PUBMED__API_KEY` -> `pubmed.api_key`,
//! `SWISE_OPENAI__API_KEY` -> `openai.api_key`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use sw_config::SwConfig;
//!
//! let config = SwConfig::load_with_dotenv().expect("config");
//!
//! if config.openai.is_configured() {
//!     println!("provider: {}", config.openai.base_url);
//! }
//! ```

mod error;
mod ods;
mod openai;
mod pubmed;
mod query;
mod training;

pub use error::ConfigError;
pub use ods::OdsConfig;
pub use openai::OpenAiConfig;
pub use pubmed::PubMedConfig;
pub use query::QueryConfig;
pub use training::TrainingConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable prefix for every setting.
pub const ENV_PREFIX: &str = "SWISE_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SwConfig {
    #[serde(default)]
    pub pubmed: PubMedConfig,
    #[serde(default)]
    pub ods: OdsConfig,
    #[serde(default)]
    pub openai: OpenAiConfig,
    #[serde(default)]
    pub training: TrainingConfig,
    #[serde(default)]
    pub query: QueryConfig,
}

impl SwConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source fails to parse or a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can extract from it directly or layer providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".suppwise/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Reject values the clients cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pubmed.retmax == 0 {
            return Err(invalid("pubmed.retmax", "must be at least 1"));
        }
        if self.pubmed.lookback_days == 0 {
            return Err(invalid("pubmed.lookback_days", "must be at least 1"));
        }
        if self.training.poll_interval_secs == 0 {
            return Err(invalid("training.poll_interval_secs", "must be at least 1"));
        }
        if self.training.max_polls == 0 {
            return Err(invalid("training.max_polls", "must be at least 1"));
        }
        if !(0.0..=2.0).contains(&self.query.temperature) {
            return Err(invalid("query.temperature", "must be between 0 and 2"));
        }
        Ok(())
    }

    /// The provider section, or an error when no API key is set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] if `openai.api_key` is empty.
    pub fn require_openai(&self) -> Result<&OpenAiConfig, ConfigError> {
        if self.openai.is_configured() {
            Ok(&self.openai)
        } else {
            Err(ConfigError::NotConfigured {
                section: "openai".into(),
            })
        }
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("suppwise").join("config.toml"))
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.into(),
        reason: reason.into(),
    }
}
