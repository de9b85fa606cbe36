//! Minimax worst-case calculation for Wordle feedback
//!
//! Given a guess and set of candidates, computes the maximum remaining candidates
//! for any possible feedback.

use crate::core::{LetterOutcome, Word, outcomes_for};
use crate::error::{Error, Result};
use rustc_hash::FxHashMap;

/// Calculate the maximum remaining candidates for a guess
///
/// Returns the worst-case number of remaining candidates after this guess:
/// the size of the largest group of candidates that would all produce the
/// same feedback.
///
/// # Errors
/// Returns `Error::LengthMismatch` if the guess and candidates differ in length.
///
/// # Examples
/// ```
/// use wordle_minimax::core::Word;
/// use wordle_minimax::solver::minimax::worst_case_partition;
///
/// let guess = Word::new("crane").unwrap();
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
/// ];
///
/// let max_remaining = worst_case_partition(&guess, &candidates).unwrap();
/// assert!(max_remaining <= 2); // Can't be more than total candidates
/// ```
pub fn worst_case_partition(guess: &Word, candidates: &[Word]) -> Result<usize> {
    let groups = group_by_feedback(guess, candidates)?;
    Ok(groups.values().max().copied().unwrap_or(0))
}

/// Group candidates by the feedback they produce against the guess
///
/// The guess is the same for every candidate, so the outcome vector alone
/// identifies the feedback.
///
/// # Errors
/// Returns `Error::LengthMismatch` if the guess and candidates differ in length.
pub fn group_by_feedback(
    guess: &Word,
    candidates: &[Word],
) -> Result<FxHashMap<Vec<LetterOutcome>, usize>> {
    if let Some(odd) = candidates.iter().find(|c| c.len() != guess.len()) {
        return Err(Error::LengthMismatch {
            expected: odd.len(),
            actual: guess.len(),
        });
    }

    let mut counts = FxHashMap::default();
    for candidate in candidates {
        *counts.entry(outcomes_for(guess, candidate)).or_insert(0) += 1;
    }

    Ok(counts)
}
