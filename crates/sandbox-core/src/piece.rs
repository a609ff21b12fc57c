//! Piece representation.

use crate::{Color, Square};

/// The six kinds of chess pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Rook = 1,
    Knight = 2,
    Bishop = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    /// All piece kinds in order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Returns the one-character tag for this kind.
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Rook => 'R',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Rook => "Rook",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        };
        write!(f, "{}", name)
    }
}

/// A piece on the board: its kind, its color, and the square it stands on.
///
/// The stored square is kept in sync by the board during relocation; a
/// piece never references the board itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
    square: Square,
}

impl Piece {
    /// Creates a piece of the given kind and color standing on `square`.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color, square: Square) -> Self {
        Piece {
            kind,
            color,
            square,
        }
    }

    /// Returns the kind of this piece.
    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    /// Returns the color of this piece.
    #[inline]
    pub const fn color(self) -> Color {
        self.color
    }

    /// Returns the square this piece currently stands on.
    #[inline]
    pub const fn square(self) -> Square {
        self.square
    }

    /// Updates the stored square. Called by the board when relocating.
    #[inline]
    pub fn set_square(&mut self, square: Square) {
        self.square = square;
    }

    /// Returns the display symbol: uppercase for White, lowercase for Black.
    #[inline]
    pub fn symbol(self) -> char {
        match self.color {
            Color::White => self.kind.symbol(),
            Color::Black => self.kind.symbol().to_ascii_lowercase(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_symbols() {
        assert_eq!(PieceKind::Pawn.symbol(), 'P');
        assert_eq!(PieceKind::Rook.symbol(), 'R');
        assert_eq!(PieceKind::Knight.symbol(), 'N');
        assert_eq!(PieceKind::Bishop.symbol(), 'B');
        assert_eq!(PieceKind::Queen.symbol(), 'Q');
        assert_eq!(PieceKind::King.symbol(), 'K');
    }

    #[test]
    fn piece_symbol_cased_by_color() {
        let sq = Square::default();
        assert_eq!(Piece::new(PieceKind::Knight, Color::White, sq).symbol(), 'N');
        assert_eq!(Piece::new(PieceKind::Knight, Color::Black, sq).symbol(), 'n');
    }

    #[test]
    fn set_square_updates() {
        let from = Square::new(6, 0).unwrap();
        let to = Square::new(4, 0).unwrap();
        let mut pawn = Piece::new(PieceKind::Pawn, Color::White, from);
        assert_eq!(pawn.square(), from);
        pawn.set_square(to);
        assert_eq!(pawn.square(), to);
    }

    #[test]
    fn display_names() {
        assert_eq!(format!("{}", PieceKind::Queen), "Queen");
        assert_eq!(format!("{}", PieceKind::Pawn), "Pawn");
    }
}
