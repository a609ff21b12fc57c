//! Core types for the chess sandbox.
//!
//! This crate provides the fundamental value types used across the sandbox:
//! - [`Square`] for board coordinates with bounds validation
//! - [`Color`] and [`PieceKind`] for piece identity
//! - [`Piece`] for a piece together with its current square
//! - Coordinate notation parsing and formatting (e.g. "e4")

mod color;
mod notation;
mod piece;
mod square;

pub use color::Color;
pub use notation::{format_square, parse_square, NotationError};
pub use piece::{Piece, PieceKind};
pub use square::{Square, SquareError};
