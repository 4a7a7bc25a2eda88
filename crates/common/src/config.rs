use crate::error::DocsummError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Docsumm application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Ollama API base URL
    pub ollama_base_url: String,

    /// Default summarization model name
    pub default_model: String,

    /// Maximum number of source characters embedded into a prompt.
    /// Text beyond this budget is dropped before prompt construction.
    pub input_char_budget: usize,

    /// Timeout for liveness/listing/introspection calls (seconds)
    pub connect_timeout_secs: u64,

    /// Timeout for generation calls (seconds). Local inference can be
    /// slow, so this is deliberately long.
    pub generate_timeout_secs: u64,

    /// Server bind address
    pub server_host: String,

    /// Server port
    pub server_port: u16,

    /// Log directory
    pub log_dir: PathBuf,

    /// Log level
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ollama_base_url: "http://localhost:11434".to_string(),
            default_model: "llama3.2:latest".to_string(),
            input_char_budget: 8000,
            connect_timeout_secs: 5,
            generate_timeout_secs: 300,
            server_host: "0.0.0.0".to_string(),
            server_port: 8080,
            log_dir: PathBuf::from("./log"),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and .env file
    pub fn from_env() -> Result<Self, DocsummError> {
        // Load .env file (ignore if not exists)
        let _ = dotenv::dotenv();

        let defaults = Self::default();

        let config = Self {
            ollama_base_url: std::env::var("OLLAMA_BASE_URL")
                .unwrap_or(defaults.ollama_base_url),
            default_model: std::env::var("LLM_MODEL")
                .unwrap_or(defaults.default_model),
            input_char_budget: std::env::var("INPUT_CHAR_BUDGET")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.input_char_budget),
            connect_timeout_secs: std::env::var("CONNECT_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.connect_timeout_secs),
            generate_timeout_secs: std::env::var("GENERATE_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.generate_timeout_secs),
            server_host: std::env::var("SERVER_HOST")
                .unwrap_or(defaults.server_host),
            server_port: std::env::var("SERVER_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.server_port),
            log_dir: std::env::var("LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            log_level: std::env::var("LOG_LEVEL")
                .unwrap_or(defaults.log_level),
        };

        config.validate()?;

        Ok(config)
    }

    /// Ensure the log directory exists, create if not
    pub fn ensure_directories(&self) -> Result<(), DocsummError> {
        if !self.log_dir.exists() {
            std::fs::create_dir_all(&self.log_dir).map_err(|e| {
                DocsummError::config(format!(
                    "Failed to create directory {}: {}",
                    self.log_dir.display(),
                    e
                ))
            })?;
        }

        Ok(())
    }

    /// Get server bind address (host:port)
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), DocsummError> {
        if !self.ollama_base_url.starts_with("http://")
            && !self.ollama_base_url.starts_with("https://") {
            return Err(DocsummError::config(
                "Ollama base URL must start with http:// or https://"
            ));
        }

        if self.default_model.is_empty() {
            return Err(DocsummError::config("Default model name cannot be empty"));
        }

        if self.input_char_budget == 0 {
            return Err(DocsummError::config("Input character budget cannot be 0"));
        }

        if self.server_port == 0 {
            return Err(DocsummError::config("Server port cannot be 0"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.ollama_base_url, "http://localhost:11434");
        assert_eq!(config.input_char_budget, 8000);
        assert_eq!(config.generate_timeout_secs, 300);
    }

    #[test]
    fn test_server_bind_address() {
        let config = AppConfig::default();
        assert_eq!(config.server_bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_validate() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());

        let mut invalid_config = AppConfig::default();
        invalid_config.ollama_base_url = "localhost:11434".to_string();
        assert!(invalid_config.validate().is_err());

        let mut invalid_config = AppConfig::default();
        invalid_config.input_char_budget = 0;
        assert!(invalid_config.validate().is_err());
    }
}
