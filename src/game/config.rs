use super::ConfigError;
use crate::wordlists::Dictionary;

/// Board dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Number of attempts
    pub rows: usize,
    /// Letters per word
    pub cols: usize,
}

impl GameConfig {
    pub const DEFAULT_ROWS: usize = 6;
    pub const DEFAULT_COLS: usize = 5;
    pub const MAX_ROWS: usize = 32;

    #[must_use]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Check the dimensions against the dictionary that will supply words
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` for an empty or oversized board, or a word length
    /// mismatch.
    pub fn validate(&self, dictionary: &dyn Dictionary) -> Result<(), ConfigError> {
        if self.rows == 0 {
            return Err(ConfigError::ZeroRows);
        }
        if self.rows > Self::MAX_ROWS {
            return Err(ConfigError::TooManyRows {
                rows: self.rows,
                max: Self::MAX_ROWS,
            });
        }
        if self.cols == 0 {
            return Err(ConfigError::ZeroCols);
        }
        if self.cols != dictionary.word_length() {
            return Err(ConfigError::WordLengthMismatch {
                cols: self.cols,
                word_length: dictionary.word_length(),
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ROWS, Self::DEFAULT_COLS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::wordlists::WordList;

    fn five_letter_list() -> WordList {
        WordList::new(vec![Word::new("crane").unwrap()], Vec::new()).unwrap()
    }

    #[test]
    fn default_is_six_by_five() {
        assert_eq!(GameConfig::default(), GameConfig::new(6, 5));
    }

    #[test]
    fn validate_accepts_matching_length() {
        assert_eq!(GameConfig::default().validate(&five_letter_list()), Ok(()));
    }

    #[test]
    fn validate_rejects_bad_dimensions() {
        let list = five_letter_list();
        assert_eq!(
            GameConfig::new(0, 5).validate(&list),
            Err(ConfigError::ZeroRows)
        );
        assert_eq!(
            GameConfig::new(6, 0).validate(&list),
            Err(ConfigError::ZeroCols)
        );
        assert_eq!(
            GameConfig::new(6, 4).validate(&list),
            Err(ConfigError::WordLengthMismatch {
                cols: 4,
                word_length: 5
            })
        );
    }

    #[test]
    fn validate_caps_rows() {
        let list = five_letter_list();
        assert_eq!(
            GameConfig::new(GameConfig::MAX_ROWS, 5).validate(&list),
            Ok(())
        );
        assert_eq!(
            GameConfig::new(GameConfig::MAX_ROWS + 1, 5).validate(&list),
            Err(ConfigError::TooManyRows {
                rows: GameConfig::MAX_ROWS + 1,
                max: GameConfig::MAX_ROWS
            })
        );
        assert!(matches!(
            GameConfig::new(usize::MAX / 2, 5).validate(&list),
            Err(ConfigError::TooManyRows { .. })
        ));
    }
}
