use serde::{Deserialize, Serialize};

/// Ollama generate request
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    /// Model name (e.g., "llama3.2", "gemma2")
    pub model: String,

    /// Prompt text
    pub prompt: String,

    /// Disable streaming
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<bool>,

    /// Generation options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<GenerateOptions>,
}

impl GenerateRequest {
    /// Create a non-streaming request with server-default options
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            stream: Some(false),
            options: None,
        }
    }

    /// Attach generation options, overriding the server defaults
    pub fn with_options(mut self, options: GenerateOptions) -> Self {
        self.options = Some(options);
        self
    }
}

/// Generation options
#[derive(Debug, Clone, Serialize, Default)]
pub struct GenerateOptions {
    /// Temperature (0.0 - 1.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Top-p sampling
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,

    /// Maximum tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_predict: Option<i32>,
}

/// Ollama generate response
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    /// Generated text
    pub response: String,

    /// Whether generation is complete
    #[serde(default)]
    pub done: bool,
}

/// A single chat message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message role ("system", "user", "assistant")
    pub role: String,

    /// Message content
    pub content: String,
}

impl ChatMessage {
    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Ollama chat request
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// Model name
    pub model: String,

    /// Conversation so far
    pub messages: Vec<ChatMessage>,

    /// Disable streaming
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<bool>,
}

/// Ollama chat response
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    /// Assistant reply
    pub message: ChatMessage,
}

/// One entry of the /api/tags model listing
#[derive(Debug, Clone, Deserialize)]
pub struct ModelTag {
    /// Model name
    pub name: String,
}

/// Response of the /api/tags model listing
#[derive(Debug, Clone, Deserialize)]
pub struct TagsResponse {
    /// Available models, in server order
    #[serde(default)]
    pub models: Vec<ModelTag>,
}

/// Request body for /api/show model introspection
#[derive(Debug, Clone, Serialize)]
pub struct ShowRequest {
    /// Model name to introspect
    pub name: String,
}

/// Summarization result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    /// Full summary text, exactly as the model returned it
    pub text: String,

    /// Model used
    pub model: String,

    /// Strategy label (e.g., "Extractive", "Bullet Points")
    pub strategy: String,

    /// Whether the source text was cut to the input budget before
    /// prompt construction
    pub truncated: bool,
}

impl Summary {
    /// Create new summary
    pub fn new(text: String, model: String, strategy: String, truncated: bool) -> Self {
        Self {
            text,
            model,
            strategy,
            truncated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_request_default_options_stay_off_the_wire() {
        let request = GenerateRequest::new("llama3.2", "summarize this");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["model"], "llama3.2");
        assert_eq!(json["stream"], false);
        assert!(json.get("options").is_none());
    }

    #[test]
    fn test_generate_request_with_options() {
        let request = GenerateRequest::new("llama3.2", "summarize this").with_options(
            GenerateOptions {
                temperature: Some(0.25),
                top_p: Some(0.5),
                num_predict: None,
            },
        );
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["options"]["temperature"], 0.25);
        assert_eq!(json["options"]["top_p"], 0.5);
        assert!(json["options"].get("num_predict").is_none());
    }
}
