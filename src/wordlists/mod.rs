//! Word lists for Wordle solving
//!
//! Embedded lists, file loading, and the [`Dictionary`] the solver plays against.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::Dictionary;
pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT, WORD_LENGTH};
