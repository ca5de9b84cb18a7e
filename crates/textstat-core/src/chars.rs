//! Unicode character-class counting.
//!
//! Category membership comes from the regex crate's Unicode tables so the
//! counts line up with the general categories: letters are `L*`, digits are
//! `Nd`, punctuation is `P*`.

use std::sync::LazyLock;

use regex::Regex;

static LETTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{L}").expect("letter class is valid"));
static DIGIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{Nd}").expect("digit class is valid"));
static PUNCT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{P}").expect("punctuation class is valid"));

/// Count characters in the Unicode letter categories.
pub fn count_letters(text: &str) -> usize {
    LETTER_RE.find_iter(text).count()
}

/// Count characters in the Unicode decimal digit category.
pub fn count_digits(text: &str) -> usize {
    DIGIT_RE.find_iter(text).count()
}

/// Count characters in the Unicode punctuation categories.
pub fn count_punctuation(text: &str) -> usize {
    PUNCT_RE.find_iter(text).count()
}
