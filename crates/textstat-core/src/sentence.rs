//! Sentence segmentation.
//!
//! A sentence break sits immediately after a `.`, `!`, or `?` that is
//! followed by whitespace. The whitespace run is the separator and is
//! discarded; the terminator stays with its sentence. Fragments that are
//! empty or whitespace-only are dropped.

use std::sync::LazyLock;

use regex::Regex;

static BREAK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+").expect("sentence break pattern is valid"));

/// Split text into sentences, preserving text order.
///
/// Trailing text without a terminator still counts as a sentence, matching
/// how people leave the final period off a note.
///
/// # Examples
///
/// ```
/// use textstat_core::sentence::split_sentences;
///
/// let sentences = split_sentences("Ala ma kota. Kot śpi! To koniec?");
/// assert_eq!(sentences, vec!["Ala ma kota.", "Kot śpi!", "To koniec?"]);
/// ```
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for sep in BREAK_RE.find_iter(text) {
        // The terminator is a single ASCII character; keep it, drop the
        // whitespace that follows.
        let end = sep.start() + 1;
        push_fragment(&mut sentences, &text[start..end]);
        start = sep.end();
    }

    if start < text.len() {
        push_fragment(&mut sentences, &text[start..]);
    }

    sentences
}

fn push_fragment<'a>(sentences: &mut Vec<&'a str>, fragment: &'a str) {
    if !fragment.trim().is_empty() {
        sentences.push(fragment);
    }
}
