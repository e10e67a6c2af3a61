//! Formatting utilities for terminal output

use crate::core::{Feedback, Mark, Word};
use crate::game::{Board, KeyboardHints};
use colored::{ColoredString, Colorize};

/// Keyboard layout used for hint rows
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Color a letter tile according to its mark
#[must_use]
pub fn colored_tile(letter: char, mark: Option<Mark>) -> ColoredString {
    let tile = format!(" {letter} ");
    match mark {
        Some(Mark::Hit) => tile.black().on_green().bold(),
        Some(Mark::Present) => tile.black().on_yellow().bold(),
        Some(Mark::Miss) => tile.white().on_bright_black(),
        None => tile.normal(),
    }
}

/// Render a scored guess as colored tiles
#[must_use]
pub fn colored_guess(word: &Word, feedback: &Feedback) -> String {
    word.letters()
        .iter()
        .zip(feedback.marks())
        .map(|(&letter, &mark)| colored_tile(char::from(letter), Some(mark)).to_string())
        .collect()
}

/// Render the keyboard with hint colors, one line per layout row
#[must_use]
pub fn colored_keyboard(hints: &KeyboardHints) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .map(|row| {
            row.chars()
                .map(|key| colored_tile(key, hints.get(key)).to_string())
                .collect::<String>()
        })
        .collect()
}

/// Emoji grid of every submitted row, for sharing a result
#[must_use]
pub fn share_grid(board: &Board) -> String {
    board
        .iter_rows()
        .filter_map(|row| {
            row.iter()
                .map(|cell| cell.mark().map(Mark::emoji))
                .collect::<Option<String>>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
