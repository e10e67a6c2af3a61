//! Dictionary service consumed by the game engine

use super::{ALLOWED, ANSWERS, DictionaryError, loader::words_from_slice};
use crate::core::Word;
use rand::{Rng, RngCore};
use rustc_hash::FxHashSet;

/// Source of answers and judge of valid guesses
///
/// Implementations are immutable once built; the engine only reads from them.
pub trait Dictionary {
    /// Length shared by every word in this dictionary
    fn word_length(&self) -> usize;

    /// Draw a word from the answer pool
    fn pick_answer(&self, rng: &mut dyn RngCore) -> Word;

    /// Check if `word` (case-insensitive) is an acceptable guess
    fn is_valid_guess(&self, word: &str) -> bool;
}

/// Dictionary backed by an answer pool and a guess vocabulary
///
/// The vocabulary always contains the answer pool.
#[derive(Debug, Clone)]
pub struct WordList {
    answers: Vec<Word>,
    allowed: FxHashSet<String>,
    word_length: usize,
}

impl WordList {
    /// Build a word list from an answer pool and extra guessable words
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::EmptyAnswers` if there are no answers, or
    /// `DictionaryError::MixedLengths` if any word differs in length from the first answer.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    /// use wordle_game::wordlists::{Dictionary, WordList};
    ///
    /// let answers = vec![Word::new("crane").unwrap()];
    /// let extra = vec![Word::new("trace").unwrap()];
    /// let list = WordList::new(answers, extra).unwrap();
    ///
    /// assert!(list.is_valid_guess("crane"));
    /// assert!(list.is_valid_guess("TRACE"));
    /// assert!(!list.is_valid_guess("slate"));
    /// ```
    pub fn new(answers: Vec<Word>, allowed: Vec<Word>) -> Result<Self, DictionaryError> {
        let word_length = answers
            .first()
            .map(Word::len)
            .ok_or(DictionaryError::EmptyAnswers)?;

        if let Some(word) = answers
            .iter()
            .chain(&allowed)
            .find(|w| w.len() != word_length)
        {
            return Err(DictionaryError::MixedLengths {
                expected: word_length,
                word: word.text().to_string(),
            });
        }

        let allowed: FxHashSet<String> = answers
            .iter()
            .chain(&allowed)
            .map(|w| w.text().to_string())
            .collect();

        log::debug!(
            "word list ready: {} answers, {} guessable words of length {word_length}",
            answers.len(),
            allowed.len()
        );

        Ok(Self {
            answers,
            allowed,
            word_length,
        })
    }

    /// Word list built from the lists compiled into the binary
    ///
    /// # Errors
    ///
    /// Only fails if the embedded data is malformed.
    pub fn embedded() -> Result<Self, DictionaryError> {
        Self::new(words_from_slice(ANSWERS)?, words_from_slice(ALLOWED)?)
    }

    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    /// Number of acceptable guesses, answers included
    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.allowed.len()
    }
}

impl Dictionary for WordList {
    fn word_length(&self) -> usize {
        self.word_length
    }

    fn pick_answer(&self, rng: &mut dyn RngCore) -> Word {
        // Non-empty by construction
        let index = rng.random_range(0..self.answers.len());
        self.answers[index].clone()
    }

    fn is_valid_guess(&self, word: &str) -> bool {
        self.allowed.contains(&word.to_ascii_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn vocabulary_includes_answers() {
        let list = WordList::new(words(&["crane", "slate"]), words(&["trace"])).unwrap();

        assert!(list.is_valid_guess("crane"));
        assert!(list.is_valid_guess("Slate"));
        assert!(list.is_valid_guess("trace"));
        assert!(!list.is_valid_guess("zzzzz"));
        assert_eq!(list.vocabulary_size(), 3);
        assert_eq!(list.word_length(), 5);
    }

    #[test]
    fn empty_answers_rejected() {
        let result = WordList::new(Vec::new(), words(&["trace"]));
        assert!(matches!(result, Err(DictionaryError::EmptyAnswers)));
    }

    #[test]
    fn mixed_lengths_rejected() {
        let result = WordList::new(words(&["crane"]), words(&["traces"]));
        assert!(matches!(
            result,
            Err(DictionaryError::MixedLengths { expected: 5, ref word }) if word == "TRACES"
        ));
    }

    #[test]
    fn pick_answer_draws_from_answer_pool() {
        let list = WordList::new(words(&["crane", "slate", "pride"]), words(&["trace"])).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let answer = list.pick_answer(&mut rng);
            assert!(list.answers().contains(&answer));
            assert_ne!(answer.text(), "TRACE");
        }
    }

    #[test]
    fn pick_answer_is_deterministic_for_a_seed() {
        let list = WordList::embedded().unwrap();
        let first = list.pick_answer(&mut StdRng::seed_from_u64(42));
        let second = list.pick_answer(&mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn embedded_list_is_consistent() {
        let list = WordList::embedded().unwrap();
        assert_eq!(list.answers().len(), ANSWERS.len());
        assert_eq!(list.vocabulary_size(), ANSWERS.len() + ALLOWED.len());
        assert!(list.is_valid_guess("crane"));
        assert!(list.is_valid_guess("kayak"));
        assert!(list.is_valid_guess("adieu"));
        assert!(list.vocabulary_size() > 2000);
    }
}
