//! Prompt templates for the summarization strategies

use serde::{Deserialize, Serialize};

/// Target summary length for the length-sensitive strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryLength {
    Short,
    Medium,
    Long,
}

impl SummaryLength {
    /// Sentence-count phrase for extractive prompts
    pub fn key_sentence_phrase(&self) -> &'static str {
        match self {
            Self::Short => "3-4 key sentences",
            Self::Medium => "5-7 key sentences",
            Self::Long => "8-12 key sentences",
        }
    }

    /// Sentence-count phrase for abstractive prompts
    pub fn sentence_phrase(&self) -> &'static str {
        match self {
            Self::Short => "3-4 sentences",
            Self::Medium => "5-7 sentences",
            Self::Long => "8-12 sentences",
        }
    }
}

impl std::str::FromStr for SummaryLength {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "short" => Ok(Self::Short),
            "medium" => Ok(Self::Medium),
            "long" => Ok(Self::Long),
            other => Err(format!(
                "Unknown summary length '{}' (expected short, medium or long)",
                other
            )),
        }
    }
}

/// Summarization strategy selector
///
/// Each variant maps to one prompt template; the two length-sensitive
/// variants carry their target length.
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryStrategy {
    /// Select existing sentences, never paraphrase
    Extractive(SummaryLength),

    /// Rewrite the content in new words
    Abstractive(SummaryLength),

    /// 5-10 parallel-structured bullet points
    BulletPoints,

    /// Answers to five analytical questions
    Questions,

    /// Numbered insights, takeaways and implications
    KeyInsights,

    /// Caller-supplied instructions wrapped around the text
    Custom(String),
}

impl SummaryStrategy {
    /// Human-readable strategy label for display and export
    pub fn label(&self) -> &'static str {
        match self {
            Self::Extractive(_) => "Extractive",
            Self::Abstractive(_) => "Abstractive",
            Self::BulletPoints => "Bullet Points",
            Self::Questions => "Question-Based",
            Self::KeyInsights => "Key Insights",
            Self::Custom(_) => "Custom",
        }
    }
}

/// A built prompt plus whether the source text was cut to the budget
#[derive(Debug, Clone)]
pub struct BuiltPrompt {
    /// Full prompt, ready for the generate endpoint
    pub prompt: String,

    /// True when the source text exceeded the input budget
    pub truncated: bool,
}

/// Take at most `budget` characters from the front of `text`.
///
/// Counts characters, not bytes, so the cut is always on a char
/// boundary. Returns the excerpt and whether anything was dropped.
pub fn truncate_to_budget(text: &str, budget: usize) -> (&str, bool) {
    match text.char_indices().nth(budget) {
        Some((idx, _)) => (&text[..idx], true),
        None => (text, false),
    }
}

/// Build the prompt for a strategy, applying the input budget first.
///
/// The tail of over-budget documents is dropped here; callers surface
/// the returned `truncated` flag to the user.
pub fn build_prompt(strategy: &SummaryStrategy, text: &str, budget: usize) -> BuiltPrompt {
    let (excerpt, truncated) = truncate_to_budget(text, budget);

    let prompt = match strategy {
        SummaryStrategy::Extractive(length) => extractive_prompt(excerpt, *length),
        SummaryStrategy::Abstractive(length) => abstractive_prompt(excerpt, *length),
        SummaryStrategy::BulletPoints => bullet_points_prompt(excerpt),
        SummaryStrategy::Questions => questions_prompt(excerpt),
        SummaryStrategy::KeyInsights => key_insights_prompt(excerpt),
        SummaryStrategy::Custom(instructions) => custom_prompt(excerpt, instructions),
    };

    BuiltPrompt { prompt, truncated }
}

fn extractive_prompt(text: &str, length: SummaryLength) -> String {
    format!(
        r#"You are an expert at extractive text summarization. Your task is to create a summary by selecting and combining the most important sentences from the original text.

TEXT TO SUMMARIZE:
{text}

INSTRUCTIONS:
Select {count} from the original text that capture the main ideas and essential information.

RULES:
1. Use ONLY sentences or phrases from the original text
2. Do NOT create new sentences or paraphrase
3. Select sentences that contain the most important information
4. Maintain the original order when possible
5. Ensure the summary flows naturally
6. Focus on key facts, findings, and conclusions

EXTRACTIVE SUMMARY:"#,
        text = text,
        count = length.key_sentence_phrase()
    )
}

fn abstractive_prompt(text: &str, length: SummaryLength) -> String {
    format!(
        r#"You are an expert at abstractive text summarization. Your task is to read and understand the text, then create a new summary in your own words.

TEXT TO SUMMARIZE:
{text}

INSTRUCTIONS:
Write a {count} summary in your own words.

RULES:
1. Read and understand the entire text
2. Identify the main ideas, key points, and important details
3. Write a NEW summary in your own words (do not copy sentences)
4. Ensure the summary is coherent and flows naturally
5. Preserve the meaning and critical information
6. Use clear, concise language
7. Focus on what matters most

ABSTRACTIVE SUMMARY:"#,
        text = text,
        count = length.sentence_phrase()
    )
}

fn bullet_points_prompt(text: &str) -> String {
    format!(
        r#"You are an expert at creating concise bullet-point summaries. Extract the key points from the following text.

TEXT TO SUMMARIZE:
{text}

INSTRUCTIONS:
1. Create 5-10 bullet points
2. Each point should be one clear, complete sentence
3. Focus on the most important information
4. Use parallel structure
5. Start each bullet with an action verb or key concept

BULLET-POINT SUMMARY:"#,
        text = text
    )
}

fn questions_prompt(text: &str) -> String {
    format!(
        r#"Analyze the following text and create a summary by answering these key questions:

TEXT:
{text}

Create a summary that answers:
1. What is the main topic or thesis?
2. What are the key arguments or findings?
3. What evidence or examples are provided?
4. What are the conclusions or implications?
5. What are the limitations or future directions (if mentioned)?

Provide a cohesive summary addressing these questions:"#,
        text = text
    )
}

fn key_insights_prompt(text: &str) -> String {
    format!(
        r#"You are an expert analyst. Read the following text and extract the most important insights and takeaways.

TEXT:
{text}

Provide:
1. TOP 3-5 KEY INSIGHTS (numbered)
2. MAIN TAKEAWAYS (what should readers remember?)
3. PRACTICAL IMPLICATIONS (if applicable)

Format your response clearly with headers:"#,
        text = text
    )
}

fn custom_prompt(text: &str, instructions: &str) -> String {
    format!(
        r#"TEXT TO SUMMARIZE:
{text}

INSTRUCTIONS:
{instructions}

SUMMARY:"#,
        text = text,
        instructions = instructions
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extractive_length_mapping() {
        let cases = [
            (SummaryLength::Short, "3-4 key sentences"),
            (SummaryLength::Medium, "5-7 key sentences"),
            (SummaryLength::Long, "8-12 key sentences"),
        ];

        for (length, phrase) in cases {
            let built = build_prompt(&SummaryStrategy::Extractive(length), "Some text.", 8000);
            assert!(built.prompt.contains(phrase), "missing '{}'", phrase);
        }
    }

    #[test]
    fn test_abstractive_length_mapping() {
        let cases = [
            (SummaryLength::Short, "3-4 sentences"),
            (SummaryLength::Medium, "5-7 sentences"),
            (SummaryLength::Long, "8-12 sentences"),
        ];

        for (length, phrase) in cases {
            let built = build_prompt(&SummaryStrategy::Abstractive(length), "Some text.", 8000);
            assert!(built.prompt.contains(phrase), "missing '{}'", phrase);
        }
    }

    #[test]
    fn test_truncate_short_text_untouched() {
        let (excerpt, truncated) = truncate_to_budget("short text", 8000);
        assert_eq!(excerpt, "short text");
        assert!(!truncated);
    }

    #[test]
    fn test_truncate_exact_budget_untouched() {
        let (excerpt, truncated) = truncate_to_budget("abcd", 4);
        assert_eq!(excerpt, "abcd");
        assert!(!truncated);
    }

    #[test]
    fn test_truncate_long_text() {
        let text = "a".repeat(10_000);
        let (excerpt, truncated) = truncate_to_budget(&text, 8000);
        assert_eq!(excerpt.chars().count(), 8000);
        assert!(truncated);
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        // Four 3-byte characters; a byte-indexed cut at 2 would panic
        let text = "가나다라";
        let (excerpt, truncated) = truncate_to_budget(text, 2);
        assert_eq!(excerpt, "가나");
        assert!(truncated);
    }

    #[test]
    fn test_prompt_embeds_only_budgeted_prefix() {
        let text = format!("{}{}", "x".repeat(100), "TAIL_MARKER");
        let built = build_prompt(&SummaryStrategy::BulletPoints, &text, 100);
        assert!(built.truncated);
        assert!(built.prompt.contains(&"x".repeat(100)));
        assert!(!built.prompt.contains("TAIL_MARKER"));
    }

    #[test]
    fn test_custom_prompt_wraps_instructions() {
        let built = build_prompt(
            &SummaryStrategy::Custom("Summarize for a lawyer.".to_string()),
            "The contract says things.",
            8000,
        );
        assert!(built.prompt.contains("TEXT TO SUMMARIZE:"));
        assert!(built.prompt.contains("Summarize for a lawyer."));
        assert!(built.prompt.ends_with("SUMMARY:"));
    }

    #[test]
    fn test_strategy_labels() {
        assert_eq!(
            SummaryStrategy::Extractive(SummaryLength::Short).label(),
            "Extractive"
        );
        assert_eq!(SummaryStrategy::BulletPoints.label(), "Bullet Points");
        assert_eq!(
            SummaryStrategy::Custom(String::new()).label(),
            "Custom"
        );
    }

    #[test]
    fn test_length_from_str() {
        assert_eq!("short".parse::<SummaryLength>(), Ok(SummaryLength::Short));
        assert_eq!("MEDIUM".parse::<SummaryLength>(), Ok(SummaryLength::Medium));
        assert!("huge".parse::<SummaryLength>().is_err());
    }
}
