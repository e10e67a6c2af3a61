//! Terminal output formatting
//!
//! Display utilities for the line-oriented modes.

pub mod display;
pub mod formatters;

pub use display::{print_guess_report, print_keyboard, print_outcome};
