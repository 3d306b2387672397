use anyhow::Context;
use sw_config::SwConfig;
use sw_llm::OpenAiClient;
use sw_sources::{OdsClient, PubMedClient};

/// Configuration loaded once at startup; provider clients are built from it on demand.
pub struct AppContext {
    pub config: SwConfig,
}

impl AppContext {
    pub const fn new(config: SwConfig) -> Self {
        Self { config }
    }

    pub fn pubmed(&self) -> anyhow::Result<PubMedClient> {
        PubMedClient::new(self.config.pubmed.clone()).context("failed to build PubMed client")
    }

    pub fn ods(&self) -> anyhow::Result<OdsClient> {
        OdsClient::new(self.config.ods.clone()).context("failed to build ODS client")
    }

    /// Requires `openai.api_key`.
    pub fn openai(&self) -> anyhow::Result<OpenAiClient> {
        let openai = self
            .config
            .require_openai()
            .context("set SWISE_OPENAI__API_KEY or openai.api_key in .suppwise/config.toml")?;
        OpenAiClient::new(openai).context("failed to build model provider client")
    }
}
