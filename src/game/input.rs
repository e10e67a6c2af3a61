//! Closed set of player inputs

use super::GuessReport;

/// Everything a presentation layer can ask the engine to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Type a letter into the active row
    Letter(char),
    /// Backspace
    Delete,
    /// Enter
    Submit,
    /// Abandon the current game and draw a new answer
    NewGame,
}

/// What an applied input did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Typed(char),
    Deleted,
    Scored(GuessReport),
    Restarted,
}
