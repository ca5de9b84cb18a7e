//! # textstat-core
//!
//! Descriptive statistics over natural-language text.
//!
//! This library turns a block of text into a [`TextStatistics`] record:
//! character counts per Unicode class, word frequency, sentence
//! segmentation, and derived averages.
//!
//! ## Features
//!
//! - **Total**: every string input, including empty and whitespace-only
//!   text, yields a well-formed record; there is no error path.
//! - **Unicode-aware**: tokens are maximal word-bounded runs of letters,
//!   digits, and apostrophes; character classes follow the Unicode general
//!   categories.
//! - **Deterministic ties**: equal-frequency words resolve to the
//!   lexicographically smallest; equal-length and equal-count extremes
//!   resolve to the first in scan order.
//! - **Stateless**: each call is independent and reentrant; concurrent
//!   calls from different threads need no coordination.
//!
//! ## Example
//!
//! ```rust
//! use textstat_core::prelude::*;
//!
//! let stats = analyze("Ala ma kota. Kot śpi!");
//!
//! assert_eq!(stats.word_count, 5);
//! assert_eq!(stats.sentence_count, 2);
//! assert_eq!(stats.longest_word, "kota");
//! ```

pub mod analyze;
pub mod chars;
pub mod models;
pub mod sentence;
pub mod token;

// Re-export commonly used items at the crate root
pub use analyze::{analyze, count_characters, count_words};
pub use models::TextStatistics;

/// Prelude module for convenient imports.
///
/// ```
/// use textstat_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::analyze::{analyze, count_characters, count_words};
    pub use crate::models::TextStatistics;
    pub use crate::sentence::split_sentences;
    pub use crate::token::tokenize;
}
