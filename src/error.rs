//! Error taxonomy for the solver
//!
//! Every error here is a contract violation by the caller or a logic defect;
//! nothing is transient and nothing is retried.

use crate::core::WordError;
use thiserror::Error;

/// Errors raised by the matcher, the candidate filter and the strategies
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Guess, answer or feedback does not have the game's word length
    #[error("length mismatch: expected {expected} letters, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Feedback handed to a strategy does not fit the game's word length
    #[error("illegal feedback: expected {expected} letters, got {actual}")]
    IllegalFeedback { expected: usize, actual: usize },

    /// Guess is not in the dictionary's guessable list
    #[error("the word '{0}' is not a legal guess")]
    IllegalGuess(String),

    /// The candidate set became empty; the current game must be aborted
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    #[error(transparent)]
    InvalidWord(#[from] WordError),

    /// Word lists that cannot form a dictionary
    #[error("invalid dictionary: {0}")]
    Dictionary(String),
}

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, Error>;
