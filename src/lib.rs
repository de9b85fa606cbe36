//! Wordle Minimax
//!
//! A Wordle solver that keeps every answer consistent with the feedback so
//! far, ranks them by positional letter frequency, and breaks ties by the
//! smallest worst-case feedback group.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_minimax::core::{Word, match_word};
//! use wordle_minimax::solver::{MinimaxStrategy, Strategy};
//! use wordle_minimax::wordlists::Dictionary;
//!
//! let dict = Dictionary::embedded().unwrap();
//! let mut strategy = MinimaxStrategy::new(&dict);
//! let answer = Word::new("crate").unwrap();
//!
//! let mut guess = strategy.make_guess(None).unwrap();
//! while guess != answer {
//!     let feedback = match_word(&guess, &answer).unwrap();
//!     guess = strategy.make_guess(Some(&feedback)).unwrap();
//! }
//! ```

// Core domain types
pub mod core;

// Library error type
pub mod error;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::{Error, Result};
