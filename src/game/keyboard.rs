//! Cumulative keyboard hints
//!
//! Tracks the strongest mark ever seen for each letter A–Z.

use crate::core::{Feedback, Mark, Word};

const ALPHABET_LEN: usize = 26;

/// Letter → best mark observed so far
///
/// Hints only move up `Miss → Present → Hit`; a later, weaker mark for the same
/// letter never replaces a stronger one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardHints {
    hints: [Option<Mark>; ALPHABET_LEN],
}

impl KeyboardHints {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hint for a letter; `None` if never guessed or not in A–Z
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, Mark, Word};
    /// use wordle_game::game::KeyboardHints;
    ///
    /// let guess = Word::new("trace").unwrap();
    /// let answer = Word::new("crane").unwrap();
    /// let mut hints = KeyboardHints::new();
    /// hints.record(&guess, &Feedback::calculate(&guess, &answer));
    ///
    /// assert_eq!(hints.get('r'), Some(Mark::Hit));
    /// assert_eq!(hints.get('T'), Some(Mark::Miss));
    /// assert_eq!(hints.get('z'), None);
    /// ```
    #[must_use]
    pub fn get(&self, letter: char) -> Option<Mark> {
        Self::index(letter).and_then(|i| self.hints[i])
    }

    /// Merge one scored guess into the hints
    pub fn record(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, &mark) in guess.letters().iter().zip(feedback.marks()) {
            if let Some(i) = Self::index(char::from(letter)) {
                self.hints[i] = Some(self.hints[i].map_or(mark, |current| current.max(mark)));
            }
        }
    }

    /// Letters that have a hint, in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (char, Mark)> + '_ {
        self.hints.iter().enumerate().filter_map(|(i, hint)| {
            hint.map(|mark| (char::from(b'A' + i as u8), mark))
        })
    }

    fn index(letter: char) -> Option<usize> {
        let upper = letter.to_ascii_uppercase();
        upper
            .is_ascii_uppercase()
            .then(|| (upper as u8 - b'A') as usize)
    }
}
