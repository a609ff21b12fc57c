//! Interactive console front end for the chess sandbox.
//!
//! All game logic lives in `sandbox-board`; this binary only renders,
//! parses notation, and guards moves against the legal-move sets the
//! engine hands back.

mod menu;
mod render;

use sandbox_board::Board;
use std::io;

fn main() -> io::Result<()> {
    println!("Welcome to the chess sandbox!");

    let mut board = Board::new();
    board.initialize();

    menu::main_menu(&mut board)
}
