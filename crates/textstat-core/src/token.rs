//! Word tokenization and word-level aggregation.
//!
//! A token is a maximal word-bounded run of Unicode letters, digits, or
//! apostrophes. Word boundaries keep leading and trailing apostrophes out of
//! tokens (`'ello'` scans as `ello`) while interior ones survive (`don't`).

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[\p{L}\p{N}']+\b").expect("word pattern is valid"));

/// Extract word tokens in left-to-right scan order.
///
/// The input is tokenized as given; callers wanting case-insensitive tokens
/// lower-case the text first.
///
/// # Examples
///
/// ```
/// use textstat_core::token::tokenize;
///
/// assert_eq!(tokenize("Hello world!"), vec!["Hello", "world"]);
/// assert_eq!(tokenize("don't panic"), vec!["don't", "panic"]);
/// ```
pub fn tokenize(text: &str) -> Vec<&str> {
    WORD_RE.find_iter(text).map(|m| m.as_str()).collect()
}

/// Count word tokens without collecting them.
pub fn count_tokens(text: &str) -> usize {
    WORD_RE.find_iter(text).count()
}

/// Occurrence counts per distinct token value.
pub fn frequencies<'a>(words: &[&'a str]) -> HashMap<&'a str, usize> {
    let mut freq = HashMap::new();
    for word in words {
        *freq.entry(*word).or_insert(0) += 1;
    }
    freq
}

/// The highest-frequency token; ties go to the lexicographically smallest.
///
/// Deterministic regardless of map iteration order: the comparator is total
/// over distinct tokens.
pub fn most_common<'a>(freq: &HashMap<&'a str, usize>) -> Option<&'a str> {
    freq.iter()
        .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
        .map(|(word, _)| *word)
}

/// Arithmetic mean of token character lengths; 0.0 for an empty slice.
pub fn average_length(words: &[&str]) -> f64 {
    if words.is_empty() {
        return 0.0;
    }
    let total: usize = words.iter().map(|w| w.chars().count()).sum();
    total as f64 / words.len() as f64
}

/// First token in scan order with the maximum character length.
pub fn longest<'a>(words: &[&'a str]) -> Option<&'a str> {
    let mut best: Option<(&str, usize)> = None;
    for word in words {
        let len = word.chars().count();
        if best.is_none_or(|(_, max)| len > max) {
            best = Some((word, len));
        }
    }
    best.map(|(word, _)| word)
}

/// First token in scan order with the minimum character length.
pub fn shortest<'a>(words: &[&'a str]) -> Option<&'a str> {
    let mut best: Option<(&str, usize)> = None;
    for word in words {
        let len = word.chars().count();
        if best.is_none_or(|(_, min)| len < min) {
            best = Some((word, len));
        }
    }
    best.map(|(word, _)| word)
}
