//! Simple interactive CLI mode
//!
//! Text-based game loop without the TUI.

use crate::output::display::print_possibilities;
use crate::output::formatters::{format_board, format_rack};
use crate::session::{GameSession, Snapshot};
use crate::wordlists::Dictionary;
use colored::Colorize;
use std::io::{self, Write};

/// Run the plain-text interactive game loop
///
/// # Errors
///
/// Returns an error if reading user input fails.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple(dictionary: &Dictionary) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Tilescore - Interactive Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Place letters on the 15x15 board and submit words for points.");
    println!("Bonus squares: TW/DW multiply the word, TL/DL multiply a letter.\n");
    print_help();

    let mut session = GameSession::new(dictionary);
    println!("{}", format_rack(session.rack()));

    loop {
        let input = get_user_input("\n> ")?;
        let mut parts = input.split_whitespace();
        let Some(command) = parts.next() else {
            continue;
        };
        let args: Vec<&str> = parts.collect();

        match (command.to_ascii_lowercase().as_str(), args.as_slice()) {
            ("quit" | "q" | "exit", _) => {
                println!("\nFinal score: {}", session.score().to_string().bold());
                println!("Thanks for playing!\n");
                return Ok(());
            }
            ("help" | "h", _) => print_help(),
            ("board" | "b", _) => println!("{}", format_board(session.board())),
            ("rack" | "r", _) => println!("{}", format_rack(session.rack())),
            ("score", _) => {
                println!("Total score: {}", session.score().to_string().bold());
            }
            ("words" | "w", rest) => {
                let limit = rest.first().and_then(|n| n.parse().ok()).unwrap_or(15);
                print_possibilities(session.possible_words(), limit);
            }
            ("place" | "p", [letter, row, col]) => {
                match (row.parse::<usize>(), col.parse::<usize>()) {
                    (Ok(r), Ok(c)) if r < 15 && c < 15 => {
                        if session.place_letter(letter, r, c) {
                            show_word_in_progress(&session);
                        } else {
                            println!("{}", format!("'{letter}' is not a letter").red());
                        }
                    }
                    _ => println!("{}", "row and col must be 0-14".red()),
                }
            }
            ("pick", [slot]) => match slot.parse::<usize>() {
                Ok(n) if n >= 1 => {
                    if let Some((r, c)) = session.place_from_rack(n - 1) {
                        println!("Placed at ({r},{c})");
                        show_word_in_progress(&session);
                    } else {
                        println!("{}", format!("no letter in rack slot {n}").red());
                    }
                }
                _ => println!("{}", "pick takes a rack slot number 1-7".red()),
            },
            ("clear", []) => {
                session.clear_board();
                println!("Board cleared.");
            }
            ("clear", [row, col]) => match (row.parse::<usize>(), col.parse::<usize>()) {
                (Ok(r), Ok(c)) if r < 15 && c < 15 => {
                    session.clear_cell(r, c);
                    show_word_in_progress(&session);
                }
                _ => println!("{}", "row and col must be 0-14".red()),
            },
            ("submit" | "s", _) => {
                if let Some(gained) = session.submit() {
                    println!(
                        "{} Scored {} points! Total: {}",
                        "✓".green().bold(),
                        gained.to_string().green().bold(),
                        session.score().to_string().bold()
                    );
                    println!("{}", format_rack(session.rack()));
                } else {
                    println!(
                        "{}",
                        "Need at least 2 letters on the board to submit.".yellow()
                    );
                }
            }
            ("save", [path]) => match session.snapshot().save_to_file(path) {
                Ok(()) => println!("{} Saved to {path}", "✓".green()),
                Err(e) => println!("{}", format!("Save failed: {e}").red()),
            },
            ("load", [path]) => match Snapshot::load_from_file(path)
                .and_then(|snapshot| session.restore(&snapshot))
            {
                Ok(()) => {
                    println!("{} Loaded {path}", "✓".green());
                    println!("Total score: {}", session.score().to_string().bold());
                    println!("{}", format_rack(session.rack()));
                }
                Err(e) => println!("{}", format!("Load failed: {e}").red()),
            },
            ("new" | "n", _) => {
                session.reset();
                println!("New game started.");
                println!("{}", format_rack(session.rack()));
            }
            _ => println!("{}", "Unknown command; type 'help'".red()),
        }
    }
}

fn show_word_in_progress(session: &GameSession<'_>) {
    if session.current_word().is_empty() {
        return;
    }
    let bonus_note = if session.bonus_in_play() {
        " (includes bonus squares)"
    } else {
        ""
    };
    println!(
        "Word: {}  Score: {}{bonus_note}",
        session.current_word().bold(),
        session.current_word_score().to_string().cyan()
    );
}

fn print_help() {
    println!("Commands:");
    println!("  place <letter> <row> <col>   put a letter on a cell (0-14)");
    println!("  pick <slot>                  place rack letter 1-7 on the first empty cell");
    println!("  clear [<row> <col>]          clear a cell, or the whole board");
    println!("  submit                       score the placed letters (needs 2+)");
    println!("  words [n]                    show formable words for the rack");
    println!("  board / rack / score         show state");
    println!("  save <path> / load <path>    snapshot the game as JSON");
    println!("  new                          reset score, board, and rack");
    println!("  quit                         leave the game");
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
