//! Core domain types for Wordle
//!
//! Words, per-letter outcomes and the feedback matcher. Everything here is
//! pure: no I/O and no mutable state.

mod feedback;
mod word;

pub use feedback::{Feedback, LetterOutcome, match_word};
pub(crate) use feedback::outcomes_for;
pub use word::{Word, WordError};
