//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: one guess per line.

use crate::game::{Game, GameError, GuessReport};
use crate::output::{print_guess_report, print_keyboard, print_outcome};
use colored::Colorize;
use std::io::{self, Write};

/// Enter a whole word into the active row and submit it
///
/// Any letters left over from a previous line are cleared first.
///
/// # Errors
///
/// Returns the first `GameError` raised while typing or submitting.
pub fn play_line(game: &mut Game, line: &str) -> Result<GuessReport, GameError> {
    if game.is_finished() {
        return Err(GameError::AlreadyEnded);
    }
    while game.delete_letter().is_ok() {}

    for letter in line.chars() {
        game.type_letter(letter)?;
    }
    game.submit_guess()
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(game: &mut Game) -> Result<(), String> {
    let rows = game.config().rows;
    let cols = game.config().cols;

    println!("\n╔══════════════════════════════════════╗");
    println!("║        Wordle - Simple Mode          ║");
    println!("╚══════════════════════════════════════╝\n");
    println!("Guess the {cols}-letter word in {rows} tries.");
    println!("Commands: 'keys' to show hints, 'new' for new game, 'quit' to exit\n");

    loop {
        let prompt = format!("Guess {}/{rows}", game.attempts_used() + 1);
        let Some(input) = get_user_input(&prompt)? else {
            return Ok(());
        };

        match input.to_lowercase().as_str() {
            "quit" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" => {
                game.reset();
                println!("\n🔄 New game started!\n");
                continue;
            }
            "keys" => {
                print_keyboard(&game.snapshot());
                continue;
            }
            _ => {}
        }

        match play_line(game, &input) {
            Ok(report) => print_guess_report(&report, rows),
            Err(GameError::InvalidWord(word)) => {
                println!("{}", format!("❌ '{word}' is not in the word list").red());
            }
            Err(GameError::RowFull | GameError::RowIncomplete { .. }) => {
                println!("{}", format!("❌ Word must be exactly {cols} letters").red());
            }
            Err(e) => println!("{}", format!("❌ {e}").red()),
        }

        if game.is_finished() {
            print_outcome(&game.snapshot());

            match get_user_input("Play again? (yes/no)")?
                .unwrap_or_default()
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => {
                    game.reset();
                    println!("\n🔄 New game started!\n");
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }
    }
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok((read > 0).then(|| input.trim().to_string()))
}
