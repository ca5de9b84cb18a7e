//! The analysis routine.
//!
//! [`analyze`] turns raw text into a [`TextStatistics`] record in a single
//! pass over characters plus token- and sentence-level aggregation. The
//! operation is total: every string input, including empty and
//! whitespace-only text, yields a well-formed record.

use crate::chars::{count_digits, count_letters, count_punctuation};
use crate::models::TextStatistics;
use crate::sentence::split_sentences;
use crate::token::{
    average_length, count_tokens, frequencies, longest, most_common, shortest, tokenize,
};

/// Compute descriptive statistics for a block of text.
///
/// Word-level metrics work on the lower-cased text, so token identity is
/// case-insensitive. Sentence segmentation works on the text as given.
///
/// Empty or whitespace-only input returns the all-zero record; there is no
/// error path.
///
/// # Examples
///
/// ```
/// use textstat_core::analyze;
///
/// let stats = analyze("kot kot pies");
/// assert_eq!(stats.word_count, 3);
/// assert_eq!(stats.unique_word_count, 2);
/// assert_eq!(stats.most_common_word, "kot");
/// ```
pub fn analyze(text: &str) -> TextStatistics {
    if text.trim().is_empty() {
        return TextStatistics::default();
    }

    let characters_with_spaces = text.chars().count();
    let characters_without_spaces = count_characters(text, false);
    let letters = count_letters(text);
    let digits = count_digits(text);
    let punctuation = count_punctuation(text);

    let lowered = text.to_lowercase();
    let words = tokenize(&lowered);
    let freq = frequencies(&words);

    let word_count = words.len();
    let unique_word_count = freq.len();
    let most_common_word = most_common(&freq).unwrap_or_default().to_string();
    let average_word_length = average_length(&words);
    let longest_word = longest(&words).unwrap_or_default().to_string();
    let shortest_word = shortest(&words).unwrap_or_default().to_string();

    let sentences = split_sentences(text);
    let sentence_count = sentences.len();
    let average_words_per_sentence = if sentences.is_empty() {
        0.0
    } else {
        let total: usize = sentences.iter().map(|s| count_tokens(s)).sum();
        total as f64 / sentence_count as f64
    };
    let longest_sentence = sentence_with_most_words(&sentences).to_string();

    TextStatistics {
        characters_with_spaces,
        characters_without_spaces,
        letters,
        digits,
        punctuation,
        word_count,
        unique_word_count,
        most_common_word,
        average_word_length,
        longest_word,
        shortest_word,
        sentence_count,
        average_words_per_sentence,
        longest_sentence,
    }
}

/// First sentence in text order with the most word tokens, or `""` when
/// there are no sentences.
fn sentence_with_most_words<'a>(sentences: &[&'a str]) -> &'a str {
    let mut best = "";
    let mut best_count = 0;
    for (index, sentence) in sentences.iter().copied().enumerate() {
        let count = count_tokens(sentence);
        if index == 0 || count > best_count {
            best = sentence;
            best_count = count;
        }
    }
    best
}

/// Count characters, optionally excluding whitespace.
///
/// # Examples
///
/// ```
/// use textstat_core::count_characters;
///
/// assert_eq!(count_characters("ab cd", true), 5);
/// assert_eq!(count_characters("ab cd", false), 4);
/// ```
pub fn count_characters(text: &str, include_spaces: bool) -> usize {
    if include_spaces {
        text.chars().count()
    } else {
        text.chars().filter(|c| !c.is_whitespace()).count()
    }
}

/// Count word tokens in the text as given.
///
/// Uses the same token pattern as [`analyze`]; no lower-casing is applied
/// because the pattern matches letters of either case.
///
/// # Examples
///
/// ```
/// use textstat_core::count_words;
///
/// assert_eq!(count_words("Hello world!"), 2);
/// ```
pub fn count_words(text: &str) -> usize {
    count_tokens(text)
}
