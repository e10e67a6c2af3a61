//! Word list loading utilities
//!
//! Provides functions to load word lists from files or convert embedded constants.

use super::DictionaryError;
use crate::core::Word;
use std::fs;
use std::path::Path;

/// Load words from a file
///
/// One word per line. Blank lines and lines starting with `#` are skipped.
///
/// # Errors
///
/// Returns `DictionaryError::Io` if the file cannot be read, or
/// `DictionaryError::InvalidEntry` with the 1-based line number of the first malformed word.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, DictionaryError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let words = parse_lines(&content)?;
    log::debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse word list text, one word per line
///
/// # Errors
///
/// Returns `DictionaryError::InvalidEntry` for the first malformed line.
pub fn parse_lines(content: &str) -> Result<Vec<Word>, DictionaryError> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line_number, line)| {
            Word::new(line).map_err(|source| DictionaryError::InvalidEntry {
                line: line_number,
                entry: line.to_string(),
                source,
            })
        })
        .collect()
}

/// Convert an embedded string slice to a Word vector
///
/// # Errors
///
/// Returns `DictionaryError::InvalidEntry` if any entry is not a valid word.
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::words_from_slice;
/// use wordle_game::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS).unwrap();
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
pub fn words_from_slice(slice: &[&str]) -> Result<Vec<Word>, DictionaryError> {
    slice
        .iter()
        .enumerate()
        .map(|(i, &s)| {
            Word::new(s).map_err(|source| DictionaryError::InvalidEntry {
                line: i + 1,
                entry: s.to_string(),
                source,
            })
        })
        .collect()
}
