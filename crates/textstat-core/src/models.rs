//! Core data types for textstat.
//!
//! This module defines the single result type produced by the analyzer:
//! - [`TextStatistics`] - Immutable statistics record for one analyzed text

use serde::Serialize;

/// Statistics record summarizing counts and derived metrics for one text.
///
/// A record is produced fresh per [`analyze`](crate::analyze::analyze) call
/// and owned outright by the caller; nothing is shared or mutated after
/// construction. [`Default`] yields the all-zero/empty record that analysis
/// of empty or whitespace-only input returns.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TextStatistics {
    /// Total character count, whitespace included.
    pub characters_with_spaces: usize,
    /// Character count excluding whitespace.
    pub characters_without_spaces: usize,
    /// Characters in the Unicode letter categories (`L*`).
    pub letters: usize,
    /// Characters in the Unicode decimal digit category (`Nd`).
    pub digits: usize,
    /// Characters in the Unicode punctuation categories (`P*`).
    pub punctuation: usize,
    /// Number of word tokens.
    pub word_count: usize,
    /// Number of distinct word tokens (case-insensitive).
    pub unique_word_count: usize,
    /// Highest-frequency token; ties go to the lexicographically smallest.
    /// Empty when the text has no tokens.
    pub most_common_word: String,
    /// Arithmetic mean of token character lengths; 0.0 when no tokens.
    pub average_word_length: f64,
    /// First token in scan order with the maximum character length.
    pub longest_word: String,
    /// First token in scan order with the minimum character length.
    pub shortest_word: String,
    /// Number of sentences.
    pub sentence_count: usize,
    /// Mean word-token count per sentence; 0.0 when no sentences.
    pub average_words_per_sentence: f64,
    /// Sentence with the most word tokens, first in text order on ties.
    /// Empty when the text has no sentences.
    pub longest_sentence: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_all_zero() {
        let stats = TextStatistics::default();
        assert_eq!(stats.characters_with_spaces, 0);
        assert_eq!(stats.word_count, 0);
        assert_eq!(stats.sentence_count, 0);
        assert_eq!(stats.average_word_length, 0.0);
        assert_eq!(stats.most_common_word, "");
        assert_eq!(stats.longest_sentence, "");
    }

    #[test]
    fn serializes_with_snake_case_field_names() {
        let value = serde_json::to_value(TextStatistics::default()).unwrap();
        let object = value.as_object().unwrap();
        assert!(object.contains_key("characters_with_spaces"));
        assert!(object.contains_key("most_common_word"));
        assert!(object.contains_key("average_words_per_sentence"));
        assert_eq!(object.len(), 14);
    }
}
