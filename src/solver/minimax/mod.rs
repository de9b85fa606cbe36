//! Minimax-based Wordle solver
//!
//! Implements worst-case minimization over a frequency-ranked shortlist.

mod calculator;
mod selector;
mod strategy;

pub use calculator::{group_by_feedback, worst_case_partition};
pub use selector::{
    DEFAULT_SHORTLIST_CAP, GuessDecision, MinimaxConfig, SearchThreshold, Shortlist,
    adjusted_score, build_shortlist, select_guess,
};
pub use strategy::MinimaxStrategy;
