//! The chess sandbox board and its move-generation engine.
//!
//! This crate provides:
//! - [`Board`] - an 8x8 grid of owned piece slots with occupancy queries,
//!   a straight/diagonal path-clearness check, and unchecked relocation
//! - [`legal_moves`] - pseudo-legal destination generation for every
//!   piece kind
//!
//! The engine is *pseudo-legal* by contract: it honors each piece's
//! movement pattern and board occupancy but never checks whether a move
//! leaves the mover's own king attacked. Legality of a requested move is
//! the caller's responsibility - [`Board::move_piece`] relocates
//! unconditionally, so callers must first confirm the destination against
//! [`legal_moves`].
//!
//! # Example
//!
//! ```
//! use sandbox_board::{legal_moves, Board};
//! use sandbox_core::Square;
//!
//! let mut board = Board::new();
//! board.initialize();
//!
//! let from = Square::new(6, 4).unwrap();
//! let pawn = *board.piece_on(from).unwrap();
//! let moves = legal_moves(&pawn, &board);
//! let to = Square::new(4, 4).unwrap();
//! assert!(moves.contains(&to));
//! board.move_piece(from, to);
//! ```

mod board;
mod movegen;

pub use board::Board;
pub use movegen::legal_moves;
