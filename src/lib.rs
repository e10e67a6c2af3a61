//! Wordle Game
//!
//! A single-player word guessing game: guess the hidden word in a fixed number of
//! tries, with per-letter feedback that handles duplicate letters correctly.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::game::{Game, GameConfig, Input, Outcome};
//! use wordle_game::wordlists::WordList;
//!
//! let words = WordList::embedded().unwrap();
//! let mut game = Game::with_seed(&words, GameConfig::default(), 7)
//!     .unwrap()
//!     .with_answer("crane")
//!     .unwrap();
//!
//! for ch in "trace".chars() {
//!     game.apply(Input::Letter(ch)).unwrap();
//! }
//! let report = game.submit_guess().unwrap();
//!
//! assert_eq!(report.feedback.to_emoji(), "⬜🟩🟩🟨🟩");
//! assert_eq!(report.outcome, Outcome::InProgress);
//! ```

// Core domain types
pub mod core;

// Game engine and state machine
pub mod game;

// Word lists and the dictionary service
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
