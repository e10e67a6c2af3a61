use thiserror::Error;

/// Signals returned by game transitions
///
/// No variant changes game state: the snapshot after an error equals the one before.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("'{0}' is not in the word list")]
    InvalidWord(String),
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
    #[error("'{0}' is not a letter")]
    NotALetter(char),
    #[error("Row is already full")]
    RowFull,
    #[error("Nothing to delete")]
    RowEmpty,
    #[error("Not enough letters: {filled} of {cols}")]
    RowIncomplete { filled: usize, cols: usize },
}

impl GameError {
    /// True for transitions that were simply ignored, false for a rejected guess
    pub const fn is_ignored(&self) -> bool {
        !matches!(self, Self::InvalidWord(_))
    }
}

pub type Result<T> = std::result::Result<T, GameError>;

/// Startup errors: the game cannot be created with this configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Board needs at least one row")]
    ZeroRows,
    #[error("Board can have at most {max} rows, got {rows}")]
    TooManyRows { rows: usize, max: usize },
    #[error("Board needs at least one column")]
    ZeroCols,
    #[error("Board has {cols} columns but dictionary words have {word_length} letters")]
    WordLengthMismatch { cols: usize, word_length: usize },
    #[error("Answer '{0}' is not an acceptable word for this game")]
    InvalidAnswer(String),
}
