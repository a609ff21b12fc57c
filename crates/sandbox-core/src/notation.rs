//! Coordinate notation parsing and formatting.
//!
//! Maps strings like `"e4"` to board coordinates and back: file letters
//! `a`-`h` are columns 0-7, rank digits `1`-`8` are rows 0-7 (row is the
//! digit minus one). The board and move generator never consume notation;
//! only the console front end does.

use crate::Square;
use thiserror::Error;

/// Errors raised when parsing coordinate notation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum NotationError {
    #[error("expected 2 characters, got {0}")]
    BadLength(usize),

    #[error("invalid file '{0}' (expected 'a'-'h')")]
    BadFile(char),

    #[error("invalid rank '{0}' (expected '1'-'8')")]
    BadRank(char),
}

/// Parses a square from coordinate notation (e.g. `"e4"`).
pub fn parse_square(s: &str) -> Result<Square, NotationError> {
    let mut chars = s.chars();
    let (file, rank) = match (chars.next(), chars.next(), chars.next()) {
        (Some(f), Some(r), None) => (f, r),
        _ => return Err(NotationError::BadLength(s.chars().count())),
    };

    let col = match file.to_ascii_lowercase() {
        c @ 'a'..='h' => c as u8 - b'a',
        _ => return Err(NotationError::BadFile(file)),
    };
    let row = match rank {
        r @ '1'..='8' => r as u8 - b'1',
        _ => return Err(NotationError::BadRank(rank)),
    };

    // Both coordinates are in range by the matches above.
    match Square::new(row, col) {
        Ok(sq) => Ok(sq),
        Err(_) => unreachable!(),
    }
}

/// Formats a square as coordinate notation (e.g. `"e4"`).
pub fn format_square(square: Square) -> String {
    let file = (b'a' + square.col()) as char;
    let rank = (b'1' + square.row()) as char;
    format!("{}{}", file, rank)
}
