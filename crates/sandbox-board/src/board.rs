//! The 8x8 board: owned piece slots, occupancy queries, relocation.

use sandbox_core::{Color, Piece, PieceKind, Square};

const SIZE: usize = Square::BOARD_SIZE as usize;

/// Back-rank piece order, columns 0 through 7.
const BACK_RANK: [PieceKind; SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8x8 grid of slots, each exclusively owning at most one piece.
///
/// Invariant: a piece's stored [`Square`] always names the slot holding
/// it, except inside the single relocation step of [`Board::move_piece`].
#[derive(Debug, Clone)]
pub struct Board {
    slots: [[Option<Piece>; SIZE]; SIZE],
}

impl Board {
    /// Creates a board with every slot empty.
    pub fn new() -> Self {
        Board {
            slots: [[None; SIZE]; SIZE],
        }
    }

    /// Clears every slot, then places the White opening setup: the back
    /// rank on row 7 and the pawn rank on row 6.
    ///
    /// The Black army is intentionally not placed.
    pub fn initialize(&mut self) {
        self.slots = [[None; SIZE]; SIZE];

        for (col, &kind) in BACK_RANK.iter().enumerate() {
            let square = Square::new(Color::White.back_row(), col as u8)
                .unwrap_or_else(|_| unreachable!());
            self.place(kind, Color::White, square);
        }
        for col in 0..SIZE as u8 {
            let square = Square::new(Color::White.pawn_start_row(), col)
                .unwrap_or_else(|_| unreachable!());
            self.place(PieceKind::Pawn, Color::White, square);
        }
    }

    /// Puts a fresh piece on `square`, overwriting any prior occupant.
    pub fn place(&mut self, kind: PieceKind, color: Color, square: Square) {
        self.slots[square.row() as usize][square.col() as usize] =
            Some(Piece::new(kind, color, square));
    }

    /// Returns the piece at `(row, col)`, or `None` if the coordinates
    /// are off the board or the slot is empty. Never errors.
    pub fn piece_at(&self, row: u8, col: u8) -> Option<&Piece> {
        if row >= SIZE as u8 || col >= SIZE as u8 {
            return None;
        }
        self.slots[row as usize][col as usize].as_ref()
    }

    /// Returns the piece on `square`, or `None` if the slot is empty.
    #[inline]
    pub fn piece_on(&self, square: Square) -> Option<&Piece> {
        self.slots[square.row() as usize][square.col() as usize].as_ref()
    }

    /// Returns true if every square strictly between `start` and `end`
    /// is empty.
    ///
    /// The step along each axis is the sign of that axis's delta, so the
    /// walk follows straight and diagonal lines; callers only invoke it
    /// along such lines, and the result for any other pair is
    /// unspecified. Adjacent endpoints have no intermediate squares and
    /// are vacuously clear.
    pub fn is_path_clear(&self, start: Square, end: Square) -> bool {
        let row_step = (end.row() as i8 - start.row() as i8).signum();
        let col_step = (end.col() as i8 - start.col() as i8).signum();

        let mut row = start.row() as i8 + row_step;
        let mut col = start.col() as i8 + col_step;
        while (row, col) != (end.row() as i8, end.col() as i8) {
            if self.slots[row as usize][col as usize].is_some() {
                return false;
            }
            row += row_step;
            col += col_step;
        }
        true
    }

    /// Unconditionally relocates whatever occupies `from` to `to`.
    ///
    /// Any prior occupant of `to` is dropped - this is how captures
    /// happen. The moved piece's stored square is rewritten to `to` and
    /// `from` is emptied. No legality check is performed: callers must
    /// have confirmed `to` against the piece's legal-move set, and must
    /// not call this with an empty `from` (doing so merely clears `to`).
    pub fn move_piece(&mut self, from: Square, to: Square) {
        let mut piece = self.slots[from.row() as usize][from.col() as usize].take();
        if let Some(p) = piece.as_mut() {
            p.set_square(to);
        }
        self.slots[to.row() as usize][to.col() as usize] = piece;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
