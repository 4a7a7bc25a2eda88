//! Word-count statistics for source text and produced summaries

use serde::{Deserialize, Serialize};

/// Derived summary statistics, recomputed per call and never cached
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    /// Word count of the source text
    pub original_word_count: usize,

    /// Word count of the produced summary
    pub summary_word_count: usize,

    /// Percentage reduction from source to summary; 0.0 when the
    /// source is empty
    pub compression_ratio: f64,
}

/// Count words in a text.
///
/// Splits on whitespace; a token counts as a word only if it contains
/// at least one alphanumeric character, so bullet markers and bare
/// punctuation are not counted.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace()
        .filter(|token| token.chars().any(|c| c.is_alphanumeric()))
        .count()
}

/// Compute statistics for a source text and its summary.
///
/// Pure and infallible; the zero-length source case yields a ratio of
/// 0.0 instead of dividing by zero.
pub fn calculate_statistics(original: &str, summary: &str) -> SummaryStatistics {
    let original_word_count = count_words(original);
    let summary_word_count = count_words(summary);

    let compression_ratio = if original_word_count > 0 {
        (original_word_count as f64 - summary_word_count as f64)
            / original_word_count as f64
            * 100.0
    } else {
        0.0
    };

    SummaryStatistics {
        original_word_count,
        summary_word_count,
        compression_ratio,
    }
}
