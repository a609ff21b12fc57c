//! Menu navigation and the free-play loop.

use crate::render::render_board;
use sandbox_board::{legal_moves, Board};
use sandbox_core::{format_square, parse_square};
use std::io::{self, BufRead, Write};

/// Prints a boxed menu title.
pub fn menu_title(name: &str) {
    let width = (name.len() + 8).max(30);
    let pad = (width - name.len()) / 2;
    println!("\n{}", "=".repeat(width));
    println!("{}{}", " ".repeat(pad), name);
    println!("{}\n", "=".repeat(width));
}

/// Reads one trimmed line from stdin, `None` at end of input.
fn read_line() -> io::Result<Option<String>> {
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt(msg: &str) -> io::Result<Option<String>> {
    print!("{}", msg);
    io::stdout().flush()?;
    read_line()
}

/// Runs the main menu loop until the user quits or input ends.
pub fn main_menu(board: &mut Board) -> io::Result<()> {
    loop {
        menu_title("Main Menu");
        println!("1. Start a game");
        println!("2. About");
        println!("0. Quit");

        match prompt("Enter your choice: ")? {
            None => return Ok(()),
            Some(choice) => match choice.as_str() {
                "1" => game_menu(board)?,
                "2" => about_menu(),
                "0" => {
                    println!("\nThanks for playing. Good bye!");
                    return Ok(());
                }
                _ => println!("Invalid input. Please enter a number from 0 to 2."),
            },
        }
    }
}

fn game_menu(board: &mut Board) -> io::Result<()> {
    loop {
        menu_title("Game Menu");
        println!("1. Free play");
        println!("0. Back to main menu");

        match prompt("Enter your choice: ")? {
            None => return Ok(()),
            Some(choice) => match choice.as_str() {
                "1" => free_play(board)?,
                "0" => return Ok(()),
                _ => println!("Invalid input. Please enter 0 or 1."),
            },
        }
    }
}

fn about_menu() {
    menu_title("About This Program");
    println!("A rule-partial chess sandbox.");
    println!();
    println!("Pieces move by their movement patterns against the current");
    println!("occupancy only: no check detection, no castling, no en");
    println!("passant, no promotion, and no turn enforcement. Only the");
    println!("White army is placed by the opening setup.");
}

/// Free-play mode: inspect legal moves and push pieces around freely.
///
/// Moves are applied only when the destination is in the piece's
/// legal-move set; the board itself never validates, so the guard lives
/// here.
fn free_play(board: &mut Board) -> io::Result<()> {
    println!("\nInstructions:");
    println!(". Enter a square (e.g. 'e7') to see that piece's legal moves.");
    println!(". Enter a move (e.g. 'e7e5') to play it.");
    println!(". Enter 'q' to leave free play.");
    println!("{}", "=".repeat(50));

    loop {
        println!("\n{}", render_board(board, &[]));

        let input = match prompt("Your move ('e7' to inspect, 'e7e5' to move, 'q' to quit): ")? {
            None => return Ok(()),
            Some(input) => input,
        };

        if input == "q" {
            println!("\nExiting free play.");
            board.initialize();
            return Ok(());
        }

        // Byte lengths are character counts: notation is ASCII only.
        match input.len() {
            2 if input.is_ascii() => show_moves(board, &input),
            4 if input.is_ascii() => play_move(board, &input),
            _ => println!("\nInvalid input. Try again."),
        }
    }
}

fn show_moves(board: &Board, input: &str) {
    let square = match parse_square(input) {
        Ok(square) => square,
        Err(e) => {
            println!("\n{}. Try again.", e);
            return;
        }
    };
    let Some(piece) = board.piece_on(square) else {
        println!("\nNo piece at {}. Try again.", input);
        return;
    };

    let moves = legal_moves(piece, board);
    println!("\n{}", render_board(board, &moves));
    let formatted: Vec<String> = moves.iter().map(|&m| format_square(m)).collect();
    println!(
        "Legal moves for {} at {}: {}",
        piece.kind(),
        input,
        if formatted.is_empty() {
            "(none)".to_string()
        } else {
            formatted.join(" ")
        }
    );
}

fn play_move(board: &mut Board, input: &str) {
    let (from_str, to_str) = input.split_at(2);
    let (from, to) = match (parse_square(from_str), parse_square(to_str)) {
        (Ok(from), Ok(to)) => (from, to),
        (Err(e), _) | (_, Err(e)) => {
            println!("\n{}. Try again.", e);
            return;
        }
    };

    let Some(piece) = board.piece_on(from).copied() else {
        println!("\nNo piece at {}. Try again.", from_str);
        return;
    };

    if legal_moves(&piece, board).contains(&to) {
        board.move_piece(from, to);
        println!("\nMoved {} to {}.", piece.kind(), to_str);
    } else {
        println!("\nIllegal move for {}. Try again.", piece.kind());
    }
}
