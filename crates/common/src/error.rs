/// Docsumm error types
#[derive(Debug, thiserror::Error)]
pub enum DocsummError {
    /// PDF extraction related error
    #[error("PDF error: {0}")]
    Pdf(String),

    /// LLM related error
    #[error("LLM error: {0}")]
    Llm(String),

    /// Export related error
    #[error("Export error: {0}")]
    Export(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network/HTTP error
    #[error("Network error: {0}")]
    Network(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General error (anyhow integration)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DocsummError {
    /// Create PDF error
    pub fn pdf<S: Into<String>>(msg: S) -> Self {
        Self::Pdf(msg.into())
    }

    /// Create LLM error
    pub fn llm<S: Into<String>>(msg: S) -> Self {
        Self::Llm(msg.into())
    }

    /// Create export error
    pub fn export<S: Into<String>>(msg: S) -> Self {
        Self::Export(msg.into())
    }

    /// Create config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create network error
    pub fn network<S: Into<String>>(msg: S) -> Self {
        Self::Network(msg.into())
    }

    /// Create invalid input error
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create not found error
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        Self::NotFound(msg.into())
    }
}

// HTTP response conversion (for actix-web)
impl DocsummError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidInput(_) => 400,
            Self::NotFound(_) => 404,
            Self::Pdf(_) => 422,
            Self::Llm(_) => 502,
            Self::Network(_) => 503,
            Self::Export(_) => 500,
            Self::Config(_) => 500,
            Self::Io(_) => 500,
            Self::Json(_) => 400,
            Self::Other(_) => 500,
        }
    }
}
