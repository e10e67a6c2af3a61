//! Game state machine
//!
//! Owns the board, keyboard hints and outcome for one puzzle at a time and
//! exposes the transitions that drive it to completion.

use super::{Board, ConfigError, Event, GameConfig, GameError, Input, KeyboardHints, Result};
use crate::core::{Feedback, Word};
use crate::wordlists::Dictionary;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Game outcome; `Won` and `Lost` are terminal until reset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Outcome {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Result of a scored guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessReport {
    pub word: Word,
    pub feedback: Feedback,
    pub outcome: Outcome,
    /// 1-based attempt number of this guess
    pub attempt: usize,
}

/// Read-only copy of the game state for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub board: Board,
    pub hints: KeyboardHints,
    pub outcome: Outcome,
    pub attempts_used: usize,
    /// The answer, once the game is finished
    pub revealed_answer: Option<Word>,
}

/// A single-player word guessing game
///
/// # Examples
/// ```
/// use wordle_game::core::Word;
/// use wordle_game::game::{Game, GameConfig, Outcome};
/// use wordle_game::wordlists::WordList;
///
/// let words = WordList::new(vec![Word::new("crane").unwrap()], Vec::new()).unwrap();
/// let mut game = Game::with_seed(&words, GameConfig::default(), 1).unwrap();
///
/// for ch in "crane".chars() {
///     game.type_letter(ch).unwrap();
/// }
/// let report = game.submit_guess().unwrap();
///
/// assert!(report.feedback.is_perfect());
/// assert_eq!(report.outcome, Outcome::Won);
/// ```
pub struct Game<'a> {
    dictionary: &'a dyn Dictionary,
    config: GameConfig,
    rng: StdRng,
    answer: Word,
    board: Board,
    hints: KeyboardHints,
    outcome: Outcome,
}

impl<'a> Game<'a> {
    /// Start a game with an OS-seeded random answer
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the configuration does not fit the dictionary.
    pub fn new(
        dictionary: &'a dyn Dictionary,
        config: GameConfig,
    ) -> std::result::Result<Self, ConfigError> {
        Self::from_rng(dictionary, config, StdRng::from_os_rng())
    }

    /// Start a game whose answers are drawn from a seeded generator
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the configuration does not fit the dictionary.
    pub fn with_seed(
        dictionary: &'a dyn Dictionary,
        config: GameConfig,
        seed: u64,
    ) -> std::result::Result<Self, ConfigError> {
        Self::from_rng(dictionary, config, StdRng::seed_from_u64(seed))
    }

    fn from_rng(
        dictionary: &'a dyn Dictionary,
        config: GameConfig,
        mut rng: StdRng,
    ) -> std::result::Result<Self, ConfigError> {
        config.validate(dictionary)?;

        let answer = dictionary.pick_answer(&mut rng);
        let game = Self {
            dictionary,
            config,
            rng,
            answer,
            board: Board::new(config.rows, config.cols),
            hints: KeyboardHints::new(),
            outcome: Outcome::InProgress,
        };
        game.log_start();
        Ok(game)
    }

    /// Restart with a fixed answer; later resets draw from the dictionary again
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidAnswer` unless `answer` is an acceptable guess
    /// of the configured length.
    pub fn with_answer(mut self, answer: &str) -> std::result::Result<Self, ConfigError> {
        let answer = Word::with_length(answer, self.config.cols)
            .ok()
            .filter(|w| self.dictionary.is_valid_guess(w.text()))
            .ok_or_else(|| ConfigError::InvalidAnswer(answer.to_string()))?;

        self.restart(answer);
        log::trace!("answer fixed to {}", self.answer);
        Ok(self)
    }

    #[must_use]
    pub const fn config(&self) -> GameConfig {
        self.config
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn hints(&self) -> &KeyboardHints {
        &self.hints
    }

    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.outcome.is_finished()
    }

    /// Number of rows that have been submitted
    #[must_use]
    pub const fn attempts_used(&self) -> usize {
        if self.outcome.is_finished() {
            self.board.cursor().row + 1
        } else {
            self.board.cursor().row
        }
    }

    /// The answer, only once the game is over
    #[must_use]
    pub fn revealed_answer(&self) -> Option<&Word> {
        self.outcome.is_finished().then_some(&self.answer)
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            hints: self.hints.clone(),
            outcome: self.outcome,
            attempts_used: self.attempts_used(),
            revealed_answer: self.revealed_answer().cloned(),
        }
    }

    /// Type a letter into the active row
    ///
    /// # Errors
    ///
    /// `AlreadyEnded`, `NotALetter` or `RowFull`; the game is left unchanged.
    pub fn type_letter(&mut self, letter: char) -> Result<()> {
        self.check_active()?;
        if !letter.is_ascii_alphabetic() {
            return Err(GameError::NotALetter(letter));
        }
        self.board.push_letter(letter)?;
        log::trace!("typed {letter}, cursor at {:?}", self.board.cursor());
        Ok(())
    }

    /// Remove a letter from the active row
    ///
    /// # Errors
    ///
    /// `AlreadyEnded` or `RowEmpty`; the game is left unchanged.
    pub fn delete_letter(&mut self) -> Result<()> {
        self.check_active()?;
        self.board.delete_letter()?;
        log::trace!("deleted, cursor at {:?}", self.board.cursor());
        Ok(())
    }

    /// Score the active row against the answer
    ///
    /// # Errors
    ///
    /// `InvalidWord` if the row is not in the dictionary, otherwise `AlreadyEnded`
    /// or `RowIncomplete`. In every error case the game is left unchanged.
    pub fn submit_guess(&mut self) -> Result<GuessReport> {
        self.check_active()?;

        let cursor = self.board.cursor();
        let text = self
            .board
            .completed_word()
            .ok_or(GameError::RowIncomplete {
                filled: cursor.col,
                cols: self.config.cols,
            })?;

        let guess = match Word::new(text.as_str()) {
            Ok(word) if self.dictionary.is_valid_guess(word.text()) => word,
            _ => {
                log::debug!("rejected {text}: not in word list");
                return Err(GameError::InvalidWord(text));
            }
        };

        let feedback = Feedback::calculate(&guess, &self.answer);
        self.board.mark_active_row(&feedback);
        self.hints.record(&guess, &feedback);

        if guess == self.answer {
            self.outcome = Outcome::Won;
        } else if self.board.on_last_row() {
            self.outcome = Outcome::Lost;
        } else {
            self.board.advance_row();
        }

        let attempt = cursor.row + 1;
        log::debug!("guess {attempt}: {guess} -> {feedback} ({:?})", self.outcome);

        Ok(GuessReport {
            word: guess,
            feedback,
            outcome: self.outcome,
            attempt,
        })
    }

    /// Throw away all state and start over with a fresh answer
    pub fn reset(&mut self) {
        let answer = self.dictionary.pick_answer(&mut self.rng);
        self.restart(answer);
        self.log_start();
    }

    /// Dispatch a player input to the matching transition
    ///
    /// # Errors
    ///
    /// Propagates the error of the underlying transition.
    pub fn apply(&mut self, input: Input) -> Result<Event> {
        match input {
            Input::Letter(letter) => self
                .type_letter(letter)
                .map(|()| Event::Typed(letter.to_ascii_uppercase())),
            Input::Delete => self.delete_letter().map(|()| Event::Deleted),
            Input::Submit => self.submit_guess().map(Event::Scored),
            Input::NewGame => {
                self.reset();
                Ok(Event::Restarted)
            }
        }
    }

    fn restart(&mut self, answer: Word) {
        self.answer = answer;
        self.board = Board::new(self.config.rows, self.config.cols);
        self.hints = KeyboardHints::new();
        self.outcome = Outcome::InProgress;
    }

    fn log_start(&self) {
        log::info!(
            "new game: {} attempts, {} letters",
            self.config.rows,
            self.config.cols
        );
        log::trace!("answer is {}", self.answer);
    }

    const fn check_active(&self) -> Result<()> {
        if self.outcome.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
