//! Wordle - CLI
//!
//! Word guessing game with TUI and simple line modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clap_verbosity_flag::Verbosity;
use colored::Colorize;
use std::path::PathBuf;
use wordle_game::{
    commands::{run_simple, score_words},
    game::{Game, GameConfig},
    output::formatters::colored_guess,
    wordlists::{
        ALLOWED, ANSWERS, Dictionary, WordList,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Guess the hidden word with green/yellow/gray letter feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of guesses allowed (at most 32)
    #[arg(short, long, global = true, default_value_t = GameConfig::DEFAULT_ROWS)]
    rows: usize,

    /// Answer pool file (one word per line); defaults to the embedded list
    #[arg(long, global = true)]
    answers: Option<PathBuf>,

    /// Extra guessable words file; defaults to the embedded list with embedded answers
    #[arg(long, global = true)]
    allowed: Option<PathBuf>,

    /// Seed for answer selection (reproducible games)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Fix the answer of the first game
    #[arg(long, global = true)]
    answer: Option<String>,

    #[command(flatten)]
    verbosity: Verbosity,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,

    /// Show the feedback a guess gets against an answer
    Score {
        /// The guessed word
        guess: String,

        /// The answer to score against
        answer: String,
    },
}

/// Build the dictionary from the --answers / --allowed flags
///
/// Custom answers without --allowed accept only the answers as guesses.
fn load_dictionary(cli: &Cli) -> Result<WordList> {
    let answers = match &cli.answers {
        Some(path) => load_from_file(path)?,
        None => words_from_slice(ANSWERS)?,
    };

    let allowed = match (&cli.allowed, &cli.answers) {
        (Some(path), _) => load_from_file(path)?,
        (None, None) => words_from_slice(ALLOWED)?,
        (None, Some(_)) => Vec::new(),
    };

    WordList::new(answers, allowed).context("invalid word list configuration")
}

fn new_game<'a>(cli: &Cli, dictionary: &'a WordList) -> Result<Game<'a>> {
    let config = GameConfig::new(cli.rows, dictionary.word_length());

    let mut game = match cli.seed {
        Some(seed) => Game::with_seed(dictionary, config, seed)?,
        None => Game::new(dictionary, config)?,
    };

    if let Some(answer) = &cli.answer {
        game = game.with_answer(answer)?;
    }

    Ok(game)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.verbosity.log_level_filter())
        .init();

    let dictionary = load_dictionary(&cli)?;

    // Default to Play mode if no command given
    match &cli.command {
        None | Some(Commands::Play) => run_play_command(&cli, &dictionary),
        Some(Commands::Simple) => run_simple_command(&cli, &dictionary),
        Some(Commands::Score { guess, answer }) => run_score_command(guess, answer, &dictionary),
    }
}

fn run_play_command(cli: &Cli, dictionary: &WordList) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let app = App::new(new_game(cli, dictionary)?);
    run_tui(app)
}

fn run_simple_command(cli: &Cli, dictionary: &WordList) -> Result<()> {
    let mut game = new_game(cli, dictionary)?;
    run_simple(&mut game).map_err(|e| anyhow::anyhow!(e))
}

fn run_score_command(guess: &str, answer: &str, dictionary: &WordList) -> Result<()> {
    let result = score_words(guess, answer, dictionary).map_err(|e| anyhow::anyhow!(e))?;

    println!(
        "\n  {}  {}  (answer {})",
        colored_guess(&result.guess, &result.feedback),
        result.feedback.to_emoji(),
        result.answer.text().bright_yellow()
    );
    if !result.guess_allowed {
        println!(
            "  {}",
            format!("note: {} is not in the word list", result.guess).yellow()
        );
    }
    println!();
    Ok(())
}
