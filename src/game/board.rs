//! Letter grid and cursor

use super::{GameError, Result};
use crate::core::{Feedback, Mark};

/// One square of the board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    letter: Option<char>,
    mark: Option<Mark>,
}

impl Cell {
    /// Uppercase letter typed into this cell, if any
    #[must_use]
    pub const fn letter(self) -> Option<char> {
        self.letter
    }

    /// Feedback for this cell; set only once its row has been submitted
    #[must_use]
    pub const fn mark(self) -> Option<Mark> {
        self.mark
    }
}

/// Position receiving the next typed letter
///
/// `col == cols` means the row is full and waiting for submit or delete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

/// A `rows × cols` grid of cells plus the cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    cursor: Cursor,
}

impl Board {
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::default(); rows * cols],
            cursor: Cursor::default(),
        }
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// # Panics
    /// Panics if the position is outside the board
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        assert!(row < self.rows && col < self.cols, "cell out of bounds");
        self.cells[row * self.cols + col]
    }

    /// Cells of one row, left to right
    ///
    /// # Panics
    /// Panics if `row >= self.rows()`
    #[must_use]
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// All rows, top to bottom
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.cols)
    }

    /// Letters typed so far in the active row
    #[must_use]
    pub fn active_row_text(&self) -> String {
        self.row(self.cursor.row)
            .iter()
            .filter_map(|c| c.letter)
            .collect()
    }

    /// The active row as a word, once every column is filled
    #[must_use]
    pub fn completed_word(&self) -> Option<String> {
        if self.cursor.col < self.cols {
            return None;
        }
        self.row(self.cursor.row).iter().map(|c| c.letter).collect()
    }

    fn active_cell_mut(&mut self, col: usize) -> &mut Cell {
        let index = self.cursor.row * self.cols + col;
        &mut self.cells[index]
    }

    /// Write a letter at the cursor and advance it, stopping at `cols`
    pub(crate) fn push_letter(&mut self, letter: char) -> Result<()> {
        if self.cursor.col >= self.cols {
            return Err(GameError::RowFull);
        }
        let col = self.cursor.col;
        self.active_cell_mut(col).letter = Some(letter.to_ascii_uppercase());
        self.cursor.col += 1;
        Ok(())
    }

    /// Clear the cell under the cursor, or step back and clear the previous one
    pub(crate) fn delete_letter(&mut self) -> Result<()> {
        let col = self.cursor.col;
        if col < self.cols && self.active_cell_mut(col).letter.is_some() {
            self.active_cell_mut(col).letter = None;
            return Ok(());
        }
        if col == 0 {
            return Err(GameError::RowEmpty);
        }
        self.cursor.col -= 1;
        self.active_cell_mut(col - 1).letter = None;
        Ok(())
    }

    /// Record feedback on the active row; each cell's mark is written once
    pub(crate) fn mark_active_row(&mut self, feedback: &Feedback) {
        debug_assert_eq!(feedback.len(), self.cols);
        for (col, &mark) in feedback.marks().iter().enumerate() {
            let cell = self.active_cell_mut(col);
            debug_assert!(cell.mark.is_none(), "row already marked");
            cell.mark = Some(mark);
        }
    }

    /// Move the cursor to the start of the next row
    pub(crate) fn advance_row(&mut self) {
        debug_assert!(self.cursor.row + 1 < self.rows);
        self.cursor = Cursor {
            row: self.cursor.row + 1,
            col: 0,
        };
    }

    /// True when the active row is the last one
    #[must_use]
    pub const fn on_last_row(&self) -> bool {
        self.cursor.row + 1 == self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(letters: &str) -> Board {
        let mut board = Board::new(6, 5);
        for ch in letters.chars() {
            board.push_letter(ch).unwrap();
        }
        board
    }

    #[test]
    fn new_board_is_empty() {
        let board = Board::new(6, 5);
        assert_eq!(board.cursor(), Cursor { row: 0, col: 0 });
        assert_eq!(board.iter_rows().count(), 6);
        assert!(
            board
                .iter_rows()
                .flatten()
                .all(|c| c.letter().is_none() && c.mark().is_none())
        );
    }

    #[test]
    fn push_letter_uppercases_and_stops_at_cols() {
        let mut board = board_with("crane");
        assert_eq!(board.cell(0, 0).letter(), Some('C'));
        assert_eq!(board.cursor(), Cursor { row: 0, col: 5 });
        assert_eq!(board.push_letter('x'), Err(GameError::RowFull));
        assert_eq!(board.active_row_text(), "CRANE");
    }

    #[test]
    fn completed_word_requires_full_row() {
        assert_eq!(board_with("cran").completed_word(), None);
        assert_eq!(board_with("crane").completed_word().as_deref(), Some("CRANE"));
    }

    #[test]
    fn delete_steps_back_and_clears() {
        let mut board = board_with("cr");
        board.delete_letter().unwrap();
        assert_eq!(board.cursor().col, 1);
        assert_eq!(board.cell(0, 1).letter(), None);
        assert_eq!(board.cell(0, 0).letter(), Some('C'));

        board.delete_letter().unwrap();
        assert_eq!(board.cursor().col, 0);
        assert_eq!(board.delete_letter(), Err(GameError::RowEmpty));
    }

    #[test]
    fn delete_clears_letter_under_cursor_in_place() {
        let mut board = board_with("cra");
        board.cursor.col = 1;

        board.delete_letter().unwrap();
        assert_eq!(board.cursor().col, 1);
        assert_eq!(board.cell(0, 1).letter(), None);
        assert_eq!(board.cell(0, 0).letter(), Some('C'));
        assert_eq!(board.cell(0, 2).letter(), Some('A'));

        // Nothing under the cursor now, so the next delete steps back
        board.delete_letter().unwrap();
        assert_eq!(board.cursor().col, 0);
        assert_eq!(board.cell(0, 0).letter(), None);
    }

    #[test]
    fn delete_from_full_row_clears_last_letter() {
        let mut board = board_with("crane");
        board.delete_letter().unwrap();
        assert_eq!(board.cursor().col, 4);
        assert_eq!(board.active_row_text(), "CRAN");
    }

    #[test]
    fn mark_and_advance() {
        let mut board = board_with("crane");
        board.mark_active_row(&Feedback::perfect(5));
        board.advance_row();

        assert!(board.row(0).iter().all(|c| c.mark() == Some(Mark::Hit)));
        assert!(board.row(1).iter().all(|c| c.mark().is_none()));
        assert_eq!(board.cursor(), Cursor { row: 1, col: 0 });
    }

    #[test]
    fn last_row_detection() {
        let mut board = Board::new(2, 5);
        assert!(!board.on_last_row());
        board.advance_row();
        assert!(board.on_last_row());
    }
}
