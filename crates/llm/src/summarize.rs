use tracing::{debug, info};

use crate::client::OllamaClient;
use crate::prompts::{build_prompt, SummaryLength, SummaryStrategy};
use crate::types::{GenerateRequest, Summary};

/// Prompt-strategy summarizer
///
/// Translates document text plus a strategy selector into one generate
/// call. Stateless between calls; each invocation is independent.
pub struct Summarizer {
    client: OllamaClient,
    model: String,
    input_budget: usize,
}

impl Summarizer {
    /// Create new summarizer
    pub fn new(client: OllamaClient, model: impl Into<String>, input_budget: usize) -> Self {
        Self {
            client,
            model: model.into(),
            input_budget,
        }
    }

    /// Model this summarizer generates with
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Run the given strategy over the text.
    ///
    /// Returns None when the model produced nothing; the summary text
    /// is passed through unmodified otherwise.
    pub async fn summarize(&self, text: &str, strategy: &SummaryStrategy) -> Option<Summary> {
        let built = build_prompt(strategy, text, self.input_budget);

        info!(
            "Summarizing - Strategy: {}, Text length: {} chars, Truncated: {}",
            strategy.label(),
            text.len(),
            built.truncated
        );
        if built.truncated {
            debug!(
                "Source text cut to the first {} characters before prompting",
                self.input_budget
            );
        }

        let request = GenerateRequest::new(&self.model, built.prompt);
        let response = self.client.generate(request).await?;

        Some(Summary::new(
            response,
            self.model.clone(),
            strategy.label().to_string(),
            built.truncated,
        ))
    }

    /// Extractive summarization - the model selects key sentences
    pub async fn summarize_extractive(
        &self,
        text: &str,
        length: SummaryLength,
    ) -> Option<String> {
        self.summarize(text, &SummaryStrategy::Extractive(length))
            .await
            .map(|s| s.text)
    }

    /// Abstractive summarization - the model writes a new summary
    pub async fn summarize_abstractive(
        &self,
        text: &str,
        length: SummaryLength,
    ) -> Option<String> {
        self.summarize(text, &SummaryStrategy::Abstractive(length))
            .await
            .map(|s| s.text)
    }

    /// Bullet-point summary
    pub async fn summarize_bullet_points(&self, text: &str) -> Option<String> {
        self.summarize(text, &SummaryStrategy::BulletPoints)
            .await
            .map(|s| s.text)
    }

    /// Question-based analytical summary
    pub async fn summarize_with_questions(&self, text: &str) -> Option<String> {
        self.summarize(text, &SummaryStrategy::Questions)
            .await
            .map(|s| s.text)
    }

    /// Key insights and takeaways
    pub async fn key_insights(&self, text: &str) -> Option<String> {
        self.summarize(text, &SummaryStrategy::KeyInsights)
            .await
            .map(|s| s.text)
    }

    /// Custom summarization with caller-supplied instructions
    pub async fn custom_summarize(&self, text: &str, custom_prompt: &str) -> Option<String> {
        self.summarize(text, &SummaryStrategy::Custom(custom_prompt.to_string()))
            .await
            .map(|s| s.text)
    }
}
