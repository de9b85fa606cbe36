//! Wordle solving algorithms
//!
//! Candidate tracking, the guess-selection strategies built on it, and a
//! driver that plays a strategy against a hidden answer.

pub mod candidates;
pub mod frequency;
pub mod game;
pub mod minimax;
pub mod strategy;

pub use candidates::CandidateSet;
pub use frequency::{FrequencyStrategy, FrequencyTable, best_by_frequency};
pub use game::{GameRecord, HiddenAnswer, Round, play_game};
pub use minimax::MinimaxStrategy;
pub use strategy::{GameState, GameTracker, Strategy, StrategyType};
