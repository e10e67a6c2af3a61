//! Per-letter feedback for a guess
//!
//! Each position of a guess receives one [`Mark`]:
//! - `Hit`: correct letter in the correct position (green)
//! - `Present`: letter occurs elsewhere in the answer (yellow)
//! - `Miss`: letter absent, or all of its occurrences already accounted for (gray)
//!
//! Marks are ordered `Miss < Present < Hit`, which is the upgrade order used by
//! keyboard hints.

use super::Word;
use std::fmt;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Mark {
    Miss,
    Present,
    Hit,
}

impl Mark {
    /// Emoji square used when sharing results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Hit => '🟩',
            Self::Present => '🟨',
            Self::Miss => '⬜',
        }
    }

    /// Single-character code: `G`, `Y` or `-`
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Hit => 'G',
            Self::Present => 'Y',
            Self::Miss => '-',
        }
    }

    fn from_code(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Hit),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' => Some(Self::Miss),
            _ => None,
        }
    }
}

/// Feedback for a whole guess, one mark per position
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<Mark>);

impl Feedback {
    /// Calculate the feedback when `guess` is played against `answer`
    ///
    /// Handles duplicate letters: the number of `Hit` + `Present` marks for a letter
    /// never exceeds its number of occurrences in the answer, and exact-position
    /// matches claim occurrences before misplaced ones.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove them from the available pool
    /// 2. Second pass: mark misplaced letters while the pool still has that letter
    ///
    /// # Panics
    /// Panics in debug mode if the words differ in length.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, Mark, Word};
    ///
    /// let guess = Word::new("trace").unwrap();
    /// let answer = Word::new("crane").unwrap();
    /// let feedback = Feedback::calculate(&guess, &answer);
    ///
    /// assert_eq!(
    ///     feedback.marks(),
    ///     &[Mark::Miss, Mark::Hit, Mark::Hit, Mark::Present, Mark::Hit]
    /// );
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        debug_assert_eq!(guess.len(), answer.len(), "guess and answer lengths differ");

        let mut marks = vec![Mark::Miss; guess.len()];
        let mut answer_available = answer.letter_counts();

        for (i, (&g, &a)) in guess.letters().iter().zip(answer.letters()).enumerate() {
            if g == a {
                marks[i] = Mark::Hit;
                if let Some(count) = answer_available.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        for (i, &g) in guess.letters().iter().enumerate() {
            if marks[i] == Mark::Hit {
                continue;
            }
            if let Some(count) = answer_available.get_mut(&g)
                && *count > 0
            {
                marks[i] = Mark::Present;
                *count -= 1;
            }
        }

        Self(marks)
    }

    /// Feedback where every position is a hit
    #[must_use]
    pub fn perfect(length: usize) -> Self {
        Self(vec![Mark::Hit; length])
    }

    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every position is a hit
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.0.iter().all(|&m| m == Mark::Hit)
    }

    #[must_use]
    pub fn count_hits(&self) -> usize {
        self.0.iter().filter(|&&m| m == Mark::Hit).count()
    }

    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0.iter().filter(|&&m| m == Mark::Present).count()
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|m| m.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            write!(f, "{}", mark.code())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let marks: Option<Vec<Mark>> = s.chars().map(Mark::from_code).collect();
        match marks {
            Some(marks) if !marks.is_empty() => Ok(Self(marks)),
            _ => Err(format!("Invalid feedback string: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Mark::{Hit, Miss, Present};

    fn feedback(guess: &str, answer: &str) -> Feedback {
        Feedback::calculate(&Word::new(guess).unwrap(), &Word::new(answer).unwrap())
    }

    #[test]
    fn mark_order_is_upgrade_order() {
        assert!(Miss < Present);
        assert!(Present < Hit);
        assert_eq!(Present.max(Miss), Present);
    }

    #[test]
    fn feedback_all_miss() {
        let fb = feedback("abcde", "fghij");
        assert_eq!(fb.marks(), &[Miss; 5]);
        assert_eq!(fb.count_hits(), 0);
        assert_eq!(fb.count_present(), 0);
    }

    #[test]
    fn feedback_all_hit() {
        let fb = feedback("crane", "crane");
        assert!(fb.is_perfect());
        assert_eq!(fb, Feedback::perfect(5));
    }

    #[test]
    fn feedback_trace_against_crane() {
        let fb = feedback("trace", "crane");
        assert_eq!(fb.marks(), &[Miss, Hit, Hit, Present, Hit]);
    }

    #[test]
    fn feedback_duplicate_letters_both_present() {
        // SPEED has two Es, so both Es in ERASE are accounted for
        let fb = feedback("erase", "speed");
        assert_eq!(fb.marks(), &[Present, Miss, Miss, Present, Present]);
    }

    #[test]
    fn feedback_excess_duplicates_are_misses() {
        // EERIE has three Es against two in SPEED: the third is a miss
        let fb = feedback("eerie", "speed");
        assert_eq!(fb.marks(), &[Present, Present, Miss, Miss, Miss]);
    }

    #[test]
    fn feedback_hit_takes_priority_over_present() {
        // Second O of ROBOT is exact; first O is misplaced
        let fb = feedback("robot", "floor");
        assert_eq!(fb.marks(), &[Present, Present, Miss, Hit, Miss]);

        // Only one L in the answer and it is claimed by the exact match
        let fb = feedback("llama", "alarm");
        assert_eq!(fb.marks(), &[Miss, Hit, Hit, Present, Present]);
    }

    #[test]
    fn feedback_exact_match_consumes_before_earlier_misplaced() {
        // Answer has a single E at the end; the guess's leading E must be a miss
        let fb = feedback("eagle", "spare");
        assert_eq!(fb.marks(), &[Miss, Present, Miss, Miss, Hit]);
    }

    #[test]
    fn feedback_display_and_emoji() {
        let fb = feedback("trace", "crane");
        assert_eq!(fb.to_string(), "-GGYG");
        assert_eq!(fb.to_emoji(), "⬜🟩🟩🟨🟩");
    }

    #[test]
    fn feedback_from_str() {
        let a: Feedback = "GY-gy".parse().unwrap();
        let b: Feedback = "🟩🟨⬜🟩🟨".parse().unwrap();
        assert_eq!(a, b);
        assert!("GXG".parse::<Feedback>().is_err());
        assert!("".parse::<Feedback>().is_err());
    }
}
