use sw_config::SwConfig;

pub fn warn_unconfigured(config: &SwConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &SwConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.openai.is_configured() && has_env_prefix(&env_keys, "SWISE_OPENAI") {
        warnings.push(
            "OpenAI config appears default while SWISE_OPENAI* env vars exist. Use double underscores (example: SWISE_OPENAI__API_KEY)."
                .to_string(),
        );
    }

    if !config.pubmed.is_configured() && has_env_prefix(&env_keys, "SWISE_PUBMED") {
        warnings.push(
            "PubMed config appears default while SWISE_PUBMED* env vars exist. Use double underscores (example: SWISE_PUBMED__API_KEY)."
                .to_string(),
        );
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use sw_config::{OpenAiConfig, PubMedConfig, SwConfig};

    use super::collect_unconfigured_warnings;

    #[test]
    fn warns_for_single_underscore_keys() {
        let config = SwConfig::default();
        let warnings = collect_unconfigured_warnings(
            &config,
            vec![
                ("SWISE_OPENAI_API_KEY".to_string(), "sk-test".to_string()),
                ("SWISE_PUBMED_API_KEY".to_string(), "abc".to_string()),
            ],
        );

        assert_eq!(warnings.len(), 2);
    }

    #[test]
    fn does_not_warn_when_sections_are_configured() {
        let config = SwConfig {
            openai: OpenAiConfig {
                api_key: "sk-test".to_string(),
                ..Default::default()
            },
            pubmed: PubMedConfig {
                api_key: "abc".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };

        let warnings = collect_unconfigured_warnings(
            &config,
            vec![
                ("SWISE_OPENAI__API_KEY".to_string(), "sk-test".to_string()),
                ("SWISE_PUBMED__API_KEY".to_string(), "abc".to_string()),
            ],
        );

        assert!(warnings.is_empty());
    }

    #[test]
    fn unrelated_env_is_ignored() {
        let warnings = collect_unconfigured_warnings(
            &SwConfig::default(),
            vec![("SWISE_LOG".to_string(), "debug".to_string())],
        );
        assert!(warnings.is_empty());
    }
}
