use docsumm_llm::{SummaryLength, SummaryStatistics, SummaryStrategy};
use docsumm_pdf::ExportFormat;
use serde::{Deserialize, Serialize};

/// Strategy selector as it arrives on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    Extractive,
    Abstractive,
    BulletPoints,
    Questions,
    KeyInsights,
    Custom,
}

impl StrategyKind {
    /// Combine the selector with its parameters into a strategy.
    ///
    /// `length` applies only to the two length-sensitive strategies;
    /// `custom_prompt` is required for (and only for) Custom.
    pub fn into_strategy(
        self,
        length: SummaryLength,
        custom_prompt: Option<String>,
    ) -> Result<SummaryStrategy, String> {
        match self {
            Self::Extractive => Ok(SummaryStrategy::Extractive(length)),
            Self::Abstractive => Ok(SummaryStrategy::Abstractive(length)),
            Self::BulletPoints => Ok(SummaryStrategy::BulletPoints),
            Self::Questions => Ok(SummaryStrategy::Questions),
            Self::KeyInsights => Ok(SummaryStrategy::KeyInsights),
            Self::Custom => match custom_prompt {
                Some(prompt) if !prompt.trim().is_empty() => {
                    Ok(SummaryStrategy::Custom(prompt))
                }
                _ => Err("Custom strategy requires a non-empty custom_prompt".to_string()),
            },
        }
    }
}

impl std::str::FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "extractive" => Ok(Self::Extractive),
            "abstractive" => Ok(Self::Abstractive),
            "bullet_points" | "bullets" => Ok(Self::BulletPoints),
            "questions" => Ok(Self::Questions),
            "key_insights" | "insights" => Ok(Self::KeyInsights),
            "custom" => Ok(Self::Custom),
            other => Err(format!("Unknown strategy '{}'", other)),
        }
    }
}

/// Liveness check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Whether the Ollama server answered
    pub connected: bool,

    /// Base URL the server is configured against
    pub ollama_url: String,
}

/// Model listing response
#[derive(Debug, Serialize)]
pub struct ModelsResponse {
    /// Available models, in server order
    pub models: Vec<String>,

    /// Configured default model
    pub default: String,

    /// Remediation hint when the listing is empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

/// Successful summarization response
#[derive(Debug, Serialize)]
pub struct SummarizeResponse {
    /// Summary text, exactly as the model returned it
    pub summary: String,

    /// Model used
    pub model: String,

    /// Strategy label
    pub strategy: String,

    /// Whether the document was cut to the input budget
    pub truncated: bool,

    /// Page count of the uploaded PDF
    pub pages: usize,

    /// Word counts and compression ratio
    pub statistics: SummaryStatistics,

    /// Wall-clock processing time
    pub processing_secs: f64,
}

/// Export request
#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    /// Summary text to export
    pub summary: String,

    /// Document title (typically the uploaded filename)
    pub title: String,

    /// Strategy label for the header
    pub strategy: String,

    /// Output format
    pub format: ExportFormat,
}

/// Uniform error body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// What failed
    pub error: String,

    /// Remediation hint or underlying detail
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    /// Error with a remediation hint
    pub fn with_hint(error: impl Into<String>, hint: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(hint.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_kind_from_str() {
        assert_eq!("extractive".parse(), Ok(StrategyKind::Extractive));
        assert_eq!("bullet_points".parse(), Ok(StrategyKind::BulletPoints));
        assert_eq!("bullets".parse(), Ok(StrategyKind::BulletPoints));
        assert_eq!("Key_Insights".parse(), Ok(StrategyKind::KeyInsights));
        assert!("haiku".parse::<StrategyKind>().is_err());
    }

    #[test]
    fn test_custom_requires_prompt() {
        let err = StrategyKind::Custom.into_strategy(SummaryLength::Medium, None);
        assert!(err.is_err());

        let ok = StrategyKind::Custom
            .into_strategy(SummaryLength::Medium, Some("Focus on risks.".to_string()));
        assert_eq!(
            ok,
            Ok(SummaryStrategy::Custom("Focus on risks.".to_string()))
        );
    }

    #[test]
    fn test_length_applies_to_extractive() {
        let strategy = StrategyKind::Extractive
            .into_strategy(SummaryLength::Long, None)
            .unwrap();
        assert_eq!(strategy, SummaryStrategy::Extractive(SummaryLength::Long));
    }
}
