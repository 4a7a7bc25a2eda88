use std::time::Duration;

use docsumm_common::{AppConfig, Result};
use reqwest::Client;
use tracing::{debug, error, info};

use crate::types::{
    ChatMessage, ChatRequest, ChatResponse, GenerateRequest, GenerateResponse, ShowRequest,
    TagsResponse,
};

/// Ollama API client
///
/// Sole point of contact with the model server. Every public method
/// degrades to a sentinel (false / empty vec / None) instead of
/// returning an error: callers treat any failure as "no result", and
/// the remediation hints are emitted through tracing.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    base_url: String,
    client: Client,
    /// Timeout for liveness, listing and introspection calls
    connect_timeout: Duration,
    /// Timeout for generation calls (local inference can be slow)
    generate_timeout: Duration,
}

impl OllamaClient {
    /// Create new Ollama client
    pub fn new(
        base_url: impl Into<String>,
        connect_timeout: Duration,
        generate_timeout: Duration,
    ) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = Client::builder()
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        info!("Ollama client initialized: {}", base_url);
        Ok(Self {
            base_url,
            client,
            connect_timeout,
            generate_timeout,
        })
    }

    /// Create a client from application configuration
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Self::new(
            &config.ollama_base_url,
            Duration::from_secs(config.connect_timeout_secs),
            Duration::from_secs(config.generate_timeout_secs),
        )
    }

    /// Base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check if the Ollama server is reachable
    pub async fn check_connection(&self) -> bool {
        let url = format!("{}/api/tags", self.base_url);

        match self
            .client
            .get(&url)
            .timeout(self.connect_timeout)
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                debug!("Ollama liveness check failed: {}", e);
                false
            }
        }
    }

    /// Get list of available model names, in server order
    pub async fn list_models(&self) -> Vec<String> {
        let url = format!("{}/api/tags", self.base_url);

        let response = match self
            .client
            .get(&url)
            .timeout(self.connect_timeout)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                debug!("Failed to list models: {}", e);
                return Vec::new();
            }
        };

        if !response.status().is_success() {
            debug!(
                "Model listing returned status code {}",
                response.status().as_u16()
            );
            return Vec::new();
        }

        match response.json::<TagsResponse>().await {
            Ok(tags) => tags.models.into_iter().map(|m| m.name).collect(),
            Err(e) => {
                debug!("Malformed model listing body: {}", e);
                Vec::new()
            }
        }
    }

    /// Generate text with Ollama
    ///
    /// Returns the generated text, or None on any failure.
    pub async fn generate(&self, request: GenerateRequest) -> Option<String> {
        let url = format!("{}/api/generate", self.base_url);

        debug!(
            "Sending generate request to Ollama - Model: {}, Prompt length: {}",
            request.model,
            request.prompt.len()
        );

        let response = match self
            .client
            .post(&url)
            .json(&request)
            .timeout(self.generate_timeout)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                self.report_transport_error("generate", &e);
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            error!("Ollama API returned status code {}", status.as_u16());
            return None;
        }

        match response.json::<GenerateResponse>().await {
            Ok(body) => {
                debug!(
                    "Received response from Ollama - Length: {}, Done: {}",
                    body.response.len(),
                    body.done
                );
                Some(body.response)
            }
            Err(e) => {
                error!("Failed to parse generate response: {}", e);
                None
            }
        }
    }

    /// Chat completion with Ollama
    ///
    /// Same sentinel contract as generate; extracts the assistant reply
    /// from the nested message.
    pub async fn chat(
        &self,
        model: impl Into<String>,
        messages: Vec<ChatMessage>,
    ) -> Option<String> {
        let url = format!("{}/api/chat", self.base_url);
        let request = ChatRequest {
            model: model.into(),
            messages,
            stream: Some(false),
        };

        let response = match self
            .client
            .post(&url)
            .json(&request)
            .timeout(self.generate_timeout)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                self.report_transport_error("chat", &e);
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            error!("Ollama chat API returned status code {}", status.as_u16());
            return None;
        }

        match response.json::<ChatResponse>().await {
            Ok(body) => Some(body.message.content),
            Err(e) => {
                error!("Failed to parse chat response: {}", e);
                None
            }
        }
    }

    /// Get information about a specific model
    pub async fn model_info(&self, model_name: &str) -> Option<serde_json::Value> {
        let url = format!("{}/api/show", self.base_url);
        let request = ShowRequest {
            name: model_name.to_string(),
        };

        let response = match self
            .client
            .post(&url)
            .json(&request)
            .timeout(self.connect_timeout)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                debug!("Model introspection failed: {}", e);
                return None;
            }
        };

        if !response.status().is_success() {
            return None;
        }

        response.json::<serde_json::Value>().await.ok()
    }

    /// Log a user-facing remediation hint for a transport-level failure
    fn report_transport_error(&self, what: &str, e: &reqwest::Error) {
        if e.is_timeout() {
            error!(
                "Ollama {} request timed out. Try a shorter document or a different model.",
                what
            );
        } else if e.is_connect() {
            error!(
                "Cannot connect to Ollama at {}. Ensure it is running: ollama serve",
                self.base_url
            );
        } else {
            error!("Ollama {} request failed: {}", what, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{closed_port_url, spawn_stub, StubResponse};

    fn test_client(base_url: &str) -> OllamaClient {
        OllamaClient::new(
            base_url,
            Duration::from_millis(500),
            Duration::from_millis(500),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_check_connection_closed_port() {
        let client = test_client(&closed_port_url());
        assert!(!client.check_connection().await);
    }

    #[tokio::test]
    async fn test_list_models_closed_port() {
        let client = test_client(&closed_port_url());
        assert!(client.list_models().await.is_empty());
    }

    #[tokio::test]
    async fn test_list_models_malformed_body() {
        let base_url = spawn_stub(StubResponse::ok("not json at all"));
        let client = test_client(&base_url);
        assert!(client.list_models().await.is_empty());
    }

    #[tokio::test]
    async fn test_list_models_server_order() {
        let base_url = spawn_stub(StubResponse::ok(
            r#"{"models": [{"name": "zephyr"}, {"name": "llama3.2"}]}"#,
        ));
        let client = test_client(&base_url);
        assert_eq!(client.list_models().await, vec!["zephyr", "llama3.2"]);
    }

    #[tokio::test]
    async fn test_generate_connection_error() {
        let client = test_client(&closed_port_url());
        let result = client
            .generate(GenerateRequest::new("llama3.2", "hello"))
            .await;
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_generate_non_200_status() {
        let base_url = spawn_stub(StubResponse::status(
            "500 Internal Server Error",
            r#"{"error": "boom"}"#,
        ));
        let client = test_client(&base_url);
        let result = client
            .generate(GenerateRequest::new("llama3.2", "hello"))
            .await;
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_generate_timeout() {
        let base_url = spawn_stub(StubResponse::stall());
        let client = test_client(&base_url);
        let result = client
            .generate(GenerateRequest::new("llama3.2", "hello"))
            .await;
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_generate_success() {
        let base_url = spawn_stub(StubResponse::ok(
            r#"{"response": "a summary", "done": true}"#,
        ));
        let client = test_client(&base_url);
        let result = client
            .generate(GenerateRequest::new("llama3.2", "hello"))
            .await;
        assert_eq!(result.as_deref(), Some("a summary"));
    }

    #[tokio::test]
    async fn test_chat_success() {
        let base_url = spawn_stub(StubResponse::ok(
            r#"{"message": {"role": "assistant", "content": "hi there"}}"#,
        ));
        let client = test_client(&base_url);
        let result = client
            .chat("llama3.2", vec![ChatMessage::user("hi")])
            .await;
        assert_eq!(result.as_deref(), Some("hi there"));
    }

    #[tokio::test]
    async fn test_model_info_closed_port() {
        let client = test_client(&closed_port_url());
        assert!(client.model_info("llama3.2").await.is_none());
    }
}
