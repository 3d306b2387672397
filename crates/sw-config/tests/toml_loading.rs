//! Integration tests for TOML configuration loading.
//!
//! Uses `figment::Jail` for sandboxed files and env vars.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use sw_config::SwConfig;
use sw_core::enums::FactMatchPolicy;

#[test]
fn loads_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[pubmed]
api_key = "ncbi-key"
retmax = 20
request_delay_ms = 250

[openai]
api_key = "sk-toml"
base_model = "gpt-4o-2024-08-06"

[training]
supplements = ["Vitamin D", "Vitamin K"]
poll_interval_secs = 10

[query]
fact_match = "all_entities"
max_tokens = 500
"#,
        )?;

        let config: SwConfig = Figment::from(Serialized::defaults(SwConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.pubmed.api_key, "ncbi-key");
        assert_eq!(config.pubmed.retmax, 20);
        assert_eq!(config.pubmed.request_delay_ms, 250);
        assert_eq!(config.openai.api_key, "sk-toml");
        assert_eq!(config.openai.base_model, "gpt-4o-2024-08-06");
        assert_eq!(config.openai.translation_model, "gpt-4o");
        assert_eq!(config.training.supplements, vec!["Vitamin D", "Vitamin K"]);
        assert_eq!(config.training.poll_interval_secs, 10);
        assert_eq!(config.training.max_polls, 240);
        assert_eq!(config.query.fact_match, FactMatchPolicy::AllEntities);
        assert_eq!(config.query.max_tokens, 500);
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[openai]
api_key = "sk-toml"
"#,
        )?;
        jail.set_env("SWISE_OPENAI__API_KEY", "sk-env");

        let config: SwConfig = Figment::from(Serialized::defaults(SwConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("SWISE_").split("__"))
            .extract()?;

        assert_eq!(config.openai.api_key, "sk-env");
        Ok(())
    });
}

#[test]
fn project_config_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".suppwise")?;
        jail.create_file(
            ".suppwise/config.toml",
            r#"
[ods]
reading_level = "Consumer"
"#,
        )?;

        let config = SwConfig::load().expect("config loads");
        assert_eq!(config.ods.reading_level, "Consumer");
        Ok(())
    });
}
