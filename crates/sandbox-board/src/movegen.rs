//! Pseudo-legal move generation.
//!
//! Each piece kind's destinations are a pure function of the piece's own
//! square and color plus the board's occupancy. Sliding pieces share one
//! ray-walking primitive parameterized by a direction set; the queen is
//! that primitive called with the rook directions and then the bishop
//! directions. No algorithm filters for own-king safety.

use crate::Board;
use sandbox_core::{Color, Piece, PieceKind, Square};

/// The four axis-aligned unit directions: up, down, left, right.
const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// The four diagonal unit directions.
const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// The eight knight jump offsets.
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, 1),
    (-1, 2),
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
];

/// The eight unit-distance king offsets.
const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Returns every pseudo-legal destination for `piece` on `board`.
///
/// The order is deterministic but carries no meaning. Out-of-bounds
/// candidates are silently skipped; a piece with no destinations yields
/// an empty vector, which is not an error.
pub fn legal_moves(piece: &Piece, board: &Board) -> Vec<Square> {
    let origin = piece.square();
    let color = piece.color();
    match piece.kind() {
        PieceKind::Rook => sliding_moves(board, origin, color, &ROOK_DIRECTIONS),
        PieceKind::Bishop => sliding_moves(board, origin, color, &BISHOP_DIRECTIONS),
        PieceKind::Queen => {
            let mut moves = sliding_moves(board, origin, color, &ROOK_DIRECTIONS);
            moves.extend(sliding_moves(board, origin, color, &BISHOP_DIRECTIONS));
            moves
        }
        PieceKind::Knight => stepping_moves(board, origin, color, &KNIGHT_OFFSETS),
        PieceKind::King => stepping_moves(board, origin, color, &KING_OFFSETS),
        PieceKind::Pawn => pawn_moves(board, origin, color),
    }
}

/// Walks each direction in `directions` outward from `origin` one square
/// at a time.
///
/// A step is admitted while the path from `origin` is clear and the
/// candidate is empty; an enemy occupant is admitted and ends the ray; a
/// friendly occupant ends the ray unadmitted.
fn sliding_moves(
    board: &Board,
    origin: Square,
    color: Color,
    directions: &[(i8, i8)],
) -> Vec<Square> {
    let mut moves = Vec::new();
    for &(dr, dc) in directions {
        let mut square = origin;
        while let Some(candidate) = square.try_offset(dr, dc) {
            square = candidate;
            if !board.is_path_clear(origin, candidate) {
                break;
            }
            match board.piece_on(candidate) {
                None => moves.push(candidate),
                Some(target) if target.color() != color => {
                    moves.push(candidate);
                    break;
                }
                Some(_) => break,
            }
        }
    }
    moves
}

/// Admits each in-bounds offset of `origin` that is not occupied by a
/// friendly piece. Intervening pieces never block; this covers both the
/// knight's jumps and the king's single steps.
fn stepping_moves(
    board: &Board,
    origin: Square,
    color: Color,
    offsets: &[(i8, i8)],
) -> Vec<Square> {
    let mut moves = Vec::new();
    for &(dr, dc) in offsets {
        let Some(candidate) = origin.try_offset(dr, dc) else {
            continue;
        };
        match board.piece_on(candidate) {
            Some(target) if target.color() == color => {}
            _ => moves.push(candidate),
        }
    }
    moves
}

/// Pawn movement: a single empty-square step forward, a double step from
/// the start row over an empty intermediate, and forward-diagonal
/// captures of enemy pieces only. No en passant, no promotion.
fn pawn_moves(board: &Board, origin: Square, color: Color) -> Vec<Square> {
    let mut moves = Vec::new();
    let forward = color.forward();

    if let Some(single) = origin.try_offset(forward, 0) {
        if board.piece_on(single).is_none() {
            moves.push(single);

            if origin.row() == color.pawn_start_row() {
                if let Some(double) = origin.try_offset(2 * forward, 0) {
                    if board.piece_on(double).is_none() {
                        moves.push(double);
                    }
                }
            }
        }
    }

    for dc in [-1, 1] {
        let Some(diagonal) = origin.try_offset(forward, dc) else {
            continue;
        };
        if let Some(target) = board.piece_on(diagonal) {
            if target.color() != color {
                moves.push(diagonal);
            }
        }
    }

    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    fn moves_for(board: &Board, square: Square) -> Vec<Square> {
        let piece = *board.piece_on(square).expect("piece on square");
        legal_moves(&piece, board)
    }

    fn as_set(moves: Vec<Square>) -> HashSet<Square> {
        moves.into_iter().collect()
    }

    #[test]
    fn rook_on_empty_board() {
        let mut board = Board::new();
        board.place(PieceKind::Rook, Color::White, sq(4, 4));
        let moves = moves_for(&board, sq(4, 4));
        assert_eq!(moves.len(), 14);
        assert!(moves.contains(&sq(0, 4)));
        assert!(moves.contains(&sq(7, 4)));
        assert!(moves.contains(&sq(4, 0)));
        assert!(moves.contains(&sq(4, 7)));
        assert!(!moves.contains(&sq(4, 4)));
    }

    #[test]
    fn rook_stops_at_friend_and_captures_enemy() {
        let mut board = Board::new();
        board.place(PieceKind::Rook, Color::White, sq(4, 4));
        board.place(PieceKind::Pawn, Color::White, sq(4, 6));
        board.place(PieceKind::Pawn, Color::Black, sq(1, 4));
        let moves = as_set(moves_for(&board, sq(4, 4)));

        // Rightward ray ends before the friendly pawn.
        assert!(moves.contains(&sq(4, 5)));
        assert!(!moves.contains(&sq(4, 6)));
        assert!(!moves.contains(&sq(4, 7)));
        // Upward ray ends on the enemy pawn, not beyond it.
        assert!(moves.contains(&sq(1, 4)));
        assert!(!moves.contains(&sq(0, 4)));
    }

    #[test]
    fn bishop_on_empty_board() {
        let mut board = Board::new();
        board.place(PieceKind::Bishop, Color::White, sq(4, 4));
        let moves = moves_for(&board, sq(4, 4));
        assert_eq!(moves.len(), 13);
        assert!(moves.contains(&sq(0, 0)));
        assert!(moves.contains(&sq(7, 7)));
        assert!(moves.contains(&sq(1, 7)));
        assert!(moves.contains(&sq(7, 1)));
    }

    #[test]
    fn bishop_blocked_diagonal() {
        let mut board = Board::new();
        board.place(PieceKind::Bishop, Color::White, sq(4, 4));
        board.place(PieceKind::Knight, Color::Black, sq(2, 2));
        let moves = as_set(moves_for(&board, sq(4, 4)));
        assert!(moves.contains(&sq(3, 3)));
        assert!(moves.contains(&sq(2, 2)));
        assert!(!moves.contains(&sq(1, 1)));
        assert!(!moves.contains(&sq(0, 0)));
    }

    #[test]
    fn queen_is_rook_union_bishop() {
        let mut board = Board::new();
        board.place(PieceKind::Queen, Color::White, sq(3, 3));
        board.place(PieceKind::Pawn, Color::White, sq(3, 6));
        board.place(PieceKind::Pawn, Color::Black, sq(6, 6));
        board.place(PieceKind::Knight, Color::Black, sq(1, 3));
        let queen_moves = as_set(moves_for(&board, sq(3, 3)));

        let mut rook_board = board.clone();
        rook_board.place(PieceKind::Rook, Color::White, sq(3, 3));
        let rook_moves = as_set(moves_for(&rook_board, sq(3, 3)));

        let mut bishop_board = board.clone();
        bishop_board.place(PieceKind::Bishop, Color::White, sq(3, 3));
        let bishop_moves = as_set(moves_for(&bishop_board, sq(3, 3)));

        let union: HashSet<_> = rook_moves.union(&bishop_moves).copied().collect();
        assert_eq!(queen_moves, union);
    }

    #[test]
    fn queen_lists_rook_moves_first() {
        let mut board = Board::new();
        board.place(PieceKind::Queen, Color::White, sq(7, 7));
        let moves = moves_for(&board, sq(7, 7));
        // First ray is straight up the column, starting adjacent.
        assert_eq!(moves[0], sq(6, 7));
        // Diagonal destinations all come after the 14 straight ones.
        let first_diagonal = moves
            .iter()
            .position(|m| m.row() != 7 && m.col() != 7)
            .unwrap();
        assert_eq!(first_diagonal, 14);
    }

    #[test]
    fn knight_jumps_over_pieces() {
        let mut board = Board::new();
        board.place(PieceKind::Knight, Color::White, sq(4, 4));
        // Surround the knight completely; jumps are unaffected.
        for dr in -1i8..=1 {
            for dc in -1i8..=1 {
                if (dr, dc) != (0, 0) {
                    let s = sq((4 + dr) as u8, (4 + dc) as u8);
                    board.place(PieceKind::Pawn, Color::White, s);
                }
            }
        }
        let moves = moves_for(&board, sq(4, 4));
        assert_eq!(moves.len(), 8);
    }

    #[test]
    fn knight_excludes_friendly_targets() {
        let mut board = Board::new();
        board.place(PieceKind::Knight, Color::White, sq(4, 4));
        board.place(PieceKind::Pawn, Color::White, sq(2, 5));
        board.place(PieceKind::Pawn, Color::Black, sq(2, 3));
        let moves = as_set(moves_for(&board, sq(4, 4)));
        assert!(!moves.contains(&sq(2, 5)));
        assert!(moves.contains(&sq(2, 3)));
        assert_eq!(moves.len(), 7);
    }

    #[test]
    fn king_single_steps() {
        let mut board = Board::new();
        board.place(PieceKind::King, Color::White, sq(4, 4));
        let moves = moves_for(&board, sq(4, 4));
        assert_eq!(moves.len(), 8);

        let mut corner_board = Board::new();
        corner_board.place(PieceKind::King, Color::White, sq(0, 0));
        let corner_moves = as_set(moves_for(&corner_board, sq(0, 0)));
        assert_eq!(
            corner_moves,
            as_set(vec![sq(0, 1), sq(1, 0), sq(1, 1)])
        );
    }

    #[test]
    fn king_excludes_friendly_but_takes_enemy() {
        let mut board = Board::new();
        board.place(PieceKind::King, Color::White, sq(4, 4));
        board.place(PieceKind::Pawn, Color::White, sq(3, 4));
        board.place(PieceKind::Pawn, Color::Black, sq(5, 4));
        let moves = as_set(moves_for(&board, sq(4, 4)));
        assert!(!moves.contains(&sq(3, 4)));
        assert!(moves.contains(&sq(5, 4)));
        assert_eq!(moves.len(), 7);
    }

    #[test]
    fn white_pawn_single_and_double() {
        let mut board = Board::new();
        board.place(PieceKind::Pawn, Color::White, sq(6, 4));
        let moves = as_set(moves_for(&board, sq(6, 4)));
        assert_eq!(moves, as_set(vec![sq(5, 4), sq(4, 4)]));
    }

    #[test]
    fn black_pawn_marches_the_other_way() {
        let mut board = Board::new();
        board.place(PieceKind::Pawn, Color::Black, sq(1, 4));
        let moves = as_set(moves_for(&board, sq(1, 4)));
        assert_eq!(moves, as_set(vec![sq(2, 4), sq(3, 4)]));
    }

    #[test]
    fn pawn_double_requires_start_row() {
        let mut board = Board::new();
        board.place(PieceKind::Pawn, Color::White, sq(5, 4));
        let moves = as_set(moves_for(&board, sq(5, 4)));
        assert_eq!(moves, as_set(vec![sq(4, 4)]));
    }

    #[test]
    fn pawn_blocked_forward() {
        let mut board = Board::new();
        board.place(PieceKind::Pawn, Color::White, sq(6, 4));
        board.place(PieceKind::Knight, Color::Black, sq(5, 4));
        // A blocked single step also forbids the double step.
        assert!(moves_for(&board, sq(6, 4)).is_empty());

        let mut board = Board::new();
        board.place(PieceKind::Pawn, Color::White, sq(6, 4));
        board.place(PieceKind::Knight, Color::Black, sq(4, 4));
        // Blocked destination forbids only the double step.
        let moves = as_set(moves_for(&board, sq(6, 4)));
        assert_eq!(moves, as_set(vec![sq(5, 4)]));
    }

    #[test]
    fn pawn_diagonal_captures() {
        let mut board = Board::new();
        board.place(PieceKind::Pawn, Color::White, sq(6, 4));
        board.place(PieceKind::Rook, Color::Black, sq(5, 3));
        board.place(PieceKind::Rook, Color::White, sq(5, 5));
        let moves = as_set(moves_for(&board, sq(6, 4)));
        // Enemy diagonal admitted, friendly diagonal not, empty diagonals never.
        assert!(moves.contains(&sq(5, 3)));
        assert!(!moves.contains(&sq(5, 5)));
        assert_eq!(moves, as_set(vec![sq(5, 4), sq(4, 4), sq(5, 3)]));
    }

    #[test]
    fn pawn_on_last_row_has_no_forward() {
        let mut board = Board::new();
        board.place(PieceKind::Pawn, Color::White, sq(0, 4));
        assert!(moves_for(&board, sq(0, 4)).is_empty());
    }

    proptest! {
        /// No piece kind ever lists a friendly-occupied destination.
        #[test]
        fn never_targets_friendly_pieces(
            kind_idx in 0usize..6,
            row in 0u8..8,
            col in 0u8..8,
            others in proptest::collection::vec((0u8..8, 0u8..8, proptest::bool::ANY), 0..12),
        ) {
            let mut board = Board::new();
            for &(r, c, white) in &others {
                let color = if white { Color::White } else { Color::Black };
                board.place(PieceKind::Pawn, color, Square::new(r, c).unwrap());
            }
            let origin = Square::new(row, col).unwrap();
            board.place(PieceKind::ALL[kind_idx], Color::White, origin);

            for dest in moves_for(&board, origin) {
                let friendly = board
                    .piece_on(dest)
                    .is_some_and(|p| p.color() == Color::White);
                prop_assert!(!friendly, "destination {:?} holds a friendly piece", dest);
            }
        }

        /// Sliders never reach past the first occupied square on a ray.
        #[test]
        fn sliders_stop_at_first_blocker(
            row in 0u8..8,
            col in 0u8..8,
            blockers in proptest::collection::vec((0u8..8, 0u8..8, proptest::bool::ANY), 0..10),
        ) {
            let mut board = Board::new();
            for &(r, c, white) in &blockers {
                let color = if white { Color::White } else { Color::Black };
                board.place(PieceKind::Pawn, color, Square::new(r, c).unwrap());
            }
            let origin = Square::new(row, col).unwrap();
            board.place(PieceKind::Queen, Color::White, origin);

            for dest in moves_for(&board, origin) {
                prop_assert!(board.is_path_clear(origin, dest));
            }
        }
    }
}
