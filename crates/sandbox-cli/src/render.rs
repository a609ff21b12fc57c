//! Board rendering.
//!
//! Pieces render as their symbols, empty slots as `.`, and any square in
//! the highlight list as `x`. Row 0 prints at the top with label 1, so
//! labels follow the coordinate-notation convention (row index + 1).

use sandbox_board::Board;
use sandbox_core::Square;

const SIZE: u8 = Square::BOARD_SIZE;

/// Renders the board as a text grid, marking `highlights` with `x`.
pub fn render_board(board: &Board, highlights: &[Square]) -> String {
    let mut out = String::new();

    out.push_str("   ");
    for col in 0..SIZE {
        out.push_str(&format!("{:>3}", (b'A' + col) as char));
    }
    out.push('\n');

    for row in 0..SIZE {
        out.push_str(&format!("{:>2} ", row + 1));
        for col in 0..SIZE {
            let here = highlights.iter().any(|h| h.row() == row && h.col() == col);
            let cell = if here {
                'x'
            } else {
                match board.piece_at(row, col) {
                    Some(piece) => piece.symbol(),
                    None => '.',
                }
            };
            out.push_str(&format!("{:>3}", cell));
        }
        out.push('\n');
    }

    out
}
