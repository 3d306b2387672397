use sw_config::SwConfig;

/// Load `.env` from the working directory, then every configuration layer.
pub fn load_config() -> anyhow::Result<SwConfig> {
    SwConfig::load_with_dotenv().map_err(anyhow::Error::from)
}
