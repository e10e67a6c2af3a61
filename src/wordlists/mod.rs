//! Word lists and the dictionary service
//!
//! Embedded lists are compiled into the binary; custom lists can be loaded from files.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::{Dictionary, WordList};
pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};

use crate::core::WordError;
use thiserror::Error;

/// Configuration errors for word lists, surfaced once at startup
#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("Answer pool is empty")]
    EmptyAnswers,
    #[error("Word '{word}' does not have the expected length {expected}")]
    MixedLengths { expected: usize, word: String },
    #[error("Invalid word list entry '{entry}' on line {line}: {source}")]
    InvalidEntry {
        line: usize,
        entry: String,
        source: WordError,
    },
    #[error("Failed to read word list {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
    }

    #[test]
    fn allowed_count_matches_const() {
        assert_eq!(ALLOWED.len(), ALLOWED_COUNT);
    }

    #[test]
    fn embedded_words_are_five_lowercase_letters() {
        for &word in ANSWERS.iter().chain(ALLOWED) {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn answers_and_extras_do_not_overlap() {
        let answers: std::collections::HashSet<_> = ANSWERS.iter().collect();
        for word in ALLOWED {
            assert!(!answers.contains(word), "'{word}' is listed twice");
        }
    }

    #[test]
    fn answer_pool_is_not_empty() {
        assert!(ANSWERS_COUNT > 0);
        assert!(ALLOWED_COUNT > 0);
    }
}
