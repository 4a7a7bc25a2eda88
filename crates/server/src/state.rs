use docsumm_common::{AppConfig, Result};
use docsumm_llm::OllamaClient;

/// Shared application state
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,

    /// Ollama client, shared across requests
    pub client: OllamaClient,
}

impl AppState {
    /// Create new application state
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = OllamaClient::from_config(&config)?;

        Ok(Self { config, client })
    }
}
