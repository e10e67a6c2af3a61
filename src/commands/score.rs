//! Score command
//!
//! Shows the feedback a guess would receive against a given answer.

use crate::core::{Feedback, Word};
use crate::wordlists::Dictionary;

/// Result of scoring one guess against one answer
pub struct ScoreResult {
    pub guess: Word,
    pub answer: Word,
    pub feedback: Feedback,
    /// Whether the guess would be accepted by the dictionary
    pub guess_allowed: bool,
}

/// Score `guess` against `answer`
///
/// # Errors
///
/// Returns an error if either word is malformed or the lengths differ.
pub fn score_words(
    guess: &str,
    answer: &str,
    dictionary: &dyn Dictionary,
) -> Result<ScoreResult, String> {
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;
    let answer =
        Word::with_length(answer, guess.len()).map_err(|e| format!("Invalid answer: {e}"))?;

    let feedback = Feedback::calculate(&guess, &answer);
    let guess_allowed = dictionary.is_valid_guess(guess.text());

    Ok(ScoreResult {
        guess,
        answer,
        feedback,
        guess_allowed,
    })
}
