//! Core domain types
//!
//! Words and per-letter feedback. Pure, side-effect free, no game state.

mod feedback;
mod word;

pub use feedback::{Feedback, Mark};
pub use word::{Word, WordError};
