//! Board square representation.

use std::fmt;
use thiserror::Error;

/// Errors raised when a square coordinate falls outside the board.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SquareError {
    #[error("row {0} out of bounds (expected 0-7)")]
    RowOutOfBounds(u8),

    #[error("column {0} out of bounds (expected 0-7)")]
    ColOutOfBounds(u8),
}

/// A square on the 8x8 board, identified by zero-based row and column.
///
/// Both coordinates are validated on construction and on every setter,
/// so a `Square` value is always on the board. Row 0 is the top of the
/// rendered board; the White army starts on rows 6 and 7.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Board dimension along each axis.
    pub const BOARD_SIZE: u8 = 8;

    /// Creates a square, validating both coordinates.
    pub fn new(row: u8, col: u8) -> Result<Self, SquareError> {
        if row >= Self::BOARD_SIZE {
            return Err(SquareError::RowOutOfBounds(row));
        }
        if col >= Self::BOARD_SIZE {
            return Err(SquareError::ColOutOfBounds(col));
        }
        Ok(Square { row, col })
    }

    /// Returns the row index (0-7).
    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column index (0-7).
    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Sets the row, rejecting out-of-bounds values.
    pub fn set_row(&mut self, row: u8) -> Result<(), SquareError> {
        if row >= Self::BOARD_SIZE {
            return Err(SquareError::RowOutOfBounds(row));
        }
        self.row = row;
        Ok(())
    }

    /// Sets the column, rejecting out-of-bounds values.
    pub fn set_col(&mut self, col: u8) -> Result<(), SquareError> {
        if col >= Self::BOARD_SIZE {
            return Err(SquareError::ColOutOfBounds(col));
        }
        self.col = col;
        Ok(())
    }

    /// Returns the square offset by `(dr, dc)`, or `None` if the result
    /// would leave the board.
    ///
    /// Candidate squares in move generation are built through this, so
    /// out-of-bounds candidates are skipped rather than surfacing as
    /// [`SquareError`].
    #[inline]
    pub fn try_offset(self, dr: i8, dc: i8) -> Option<Square> {
        let row = (self.row as i8).checked_add(dr)?;
        let col = (self.col as i8).checked_add(dc)?;
        if (0..Self::BOARD_SIZE as i8).contains(&row) && (0..Self::BOARD_SIZE as i8).contains(&col)
        {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }
}

impl Default for Square {
    /// The top-left corner, `(0, 0)`.
    fn default() -> Self {
        Square { row: 0, col: 0 }
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({}, {})", self.row, self.col)
    }
}
