//! Word solving command
//!
//! Plays one game against a chosen answer and reports every round.

use crate::core::{Feedback, Word};
use crate::solver::minimax::worst_case_partition;
use crate::solver::{CandidateSet, HiddenAnswer, Strategy, play_game};
use crate::wordlists::Dictionary;
use anyhow::{Context, Result};

/// Default guess budget, as in the real game
pub const DEFAULT_MAX_ROUNDS: usize = 6;

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_rounds: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }

    #[must_use]
    pub const fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = max_rounds;
        self
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub target: Word,
    pub success: bool,
    pub steps: Vec<GuessStep>,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub guess: Word,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Largest feedback group the guess could have produced; `None` when only
    /// one candidate was left
    pub worst_case: Option<usize>,
}

/// Solve a specific word with the given strategy
///
/// # Errors
///
/// Returns an error if:
/// - The target is not a valid word or not in the answer list
/// - The strategy fails mid-game
pub fn solve_word<S: Strategy>(
    config: &SolveConfig,
    dictionary: &Dictionary,
    strategy: &mut S,
) -> Result<SolveResult> {
    let target = Word::new(&config.target)
        .with_context(|| format!("invalid target word '{}'", config.target))?;
    let answer = HiddenAnswer::new(target.clone(), dictionary)
        .with_context(|| format!("'{target}' cannot be used as an answer"))?;

    let record = play_game(strategy, &answer, config.max_rounds)
        .with_context(|| format!("solving '{target}'"))?;

    // Replay the candidate set to report how risky each guess was
    let mut candidates = CandidateSet::from_dictionary(dictionary);
    let mut steps = Vec::with_capacity(record.rounds.len());
    for round in record.rounds {
        let worst_case = if candidates.len() > 1 {
            Some(worst_case_partition(&round.guess, candidates.words())?)
        } else {
            None
        };
        candidates.eliminate(&round.feedback)?;

        steps.push(GuessStep {
            guess: round.guess,
            feedback: round.feedback,
            candidates_before: round.candidates_before,
            candidates_after: round.candidates_after,
            worst_case,
        });
    }

    Ok(SolveResult {
        target,
        success: record.solved,
        steps,
    })
}
