//! Interactive terminal UI
//!
//! A thin presentation layer: maps key presses to game inputs and renders snapshots.

mod app;
mod rendering;

pub use app::{Action, App, Message, MessageStyle, run_tui};
