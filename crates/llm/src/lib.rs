//! Docsumm LLM integration
//!
//! Ollama API client and prompt-strategy summarization

mod client;
mod prompts;
mod stats;
mod summarize;
mod types;

#[cfg(test)]
pub(crate) mod testutil;

pub use client::OllamaClient;
pub use prompts::{build_prompt, truncate_to_budget, BuiltPrompt, SummaryLength, SummaryStrategy};
pub use stats::{calculate_statistics, count_words, SummaryStatistics};
pub use summarize::Summarizer;
pub use types::{
    ChatMessage, ChatRequest, ChatResponse, GenerateOptions, GenerateRequest, GenerateResponse,
    ModelTag, ShowRequest, Summary, TagsResponse,
};
