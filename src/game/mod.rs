//! Game engine
//!
//! All puzzle rules live here: typing, deleting, scoring guesses, keyboard hints
//! and the win/loss state machine. Presentation layers drive a [`Game`] through
//! its transitions (or [`Input`]s) and render from [`Snapshot`]s.

mod board;
mod config;
mod engine;
mod error;
mod input;
mod keyboard;

pub use board::{Board, Cell, Cursor};
pub use config::GameConfig;
pub use engine::{Game, GuessReport, Outcome, Snapshot};
pub use error::{ConfigError, GameError, Result};
pub use input::{Event, Input};
pub use keyboard::KeyboardHints;
