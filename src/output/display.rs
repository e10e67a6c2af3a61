//! Display functions for game events

use super::formatters::{colored_guess, colored_keyboard, share_grid};
use crate::game::{GuessReport, Outcome, Snapshot};
use colored::Colorize;

/// Print a scored guess
pub fn print_guess_report(report: &GuessReport, rows: usize) {
    println!(
        "  {}/{}  {}",
        report.attempt,
        rows,
        colored_guess(&report.word, &report.feedback)
    );
}

/// Print the keyboard hints
pub fn print_keyboard(snapshot: &Snapshot) {
    println!();
    for (indent, line) in colored_keyboard(&snapshot.hints).iter().enumerate() {
        println!("  {}{line}", " ".repeat(indent * 2));
    }
    println!();
}

/// Print the end-of-game banner
pub fn print_outcome(snapshot: &Snapshot) {
    let answer = snapshot
        .revealed_answer
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_default();

    println!("\n{}", "═".repeat(40).bright_cyan());
    match snapshot.outcome {
        Outcome::Won => println!(
            "{}",
            format!(
                "  🎉 Solved in {} {}!",
                snapshot.attempts_used,
                if snapshot.attempts_used == 1 { "guess" } else { "guesses" }
            )
            .bright_green()
            .bold()
        ),
        Outcome::Lost => println!(
            "{} {}",
            "  Out of guesses! The word was".red().bold(),
            answer.bright_yellow().bold()
        ),
        Outcome::InProgress => {}
    }
    println!("{}", "═".repeat(40).bright_cyan());
    println!("{}\n", share_grid(&snapshot.board));
}
