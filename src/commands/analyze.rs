//! Word analysis command
//!
//! Scores a single guess against the full answer list the way the minimax
//! strategy would see it on the first turn.

use crate::core::Word;
use crate::error::Error;
use crate::solver::FrequencyTable;
use crate::solver::minimax::{adjusted_score, group_by_feedback};
use crate::wordlists::Dictionary;
use anyhow::{Context, Result};

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: Word,
    /// Raw positional frequency score
    pub score: usize,
    /// Score after the distinct-letter adjustment
    pub adjusted_score: usize,
    /// Size of the largest feedback group
    pub worst_case: usize,
    /// Number of distinct feedbacks the guess can produce
    pub groups: usize,
    /// Average size of the group the answer lands in
    pub expected_remaining: f64,
    pub total_candidates: usize,
    pub is_candidate: bool,
}

/// Analyze a guess against every possible answer
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid
/// - The word is not a legal guess in the dictionary
pub fn analyze_word(word: &str, dictionary: &Dictionary) -> Result<AnalysisResult> {
    let word = Word::new(word).with_context(|| format!("invalid word '{word}'"))?;
    if !dictionary.is_legal_guess(&word) {
        return Err(Error::IllegalGuess(word.to_string())).context("word not in word list");
    }

    let answers = dictionary.answer_words();
    let table = FrequencyTable::from_words(answers);
    let groups = group_by_feedback(&word, answers)?;

    let total_candidates = answers.len();
    let worst_case = groups.values().max().copied().unwrap_or(0);
    let squares: usize = groups.values().map(|&size| size * size).sum();
    let expected_remaining = if total_candidates == 0 {
        0.0
    } else {
        squares as f64 / total_candidates as f64
    };

    Ok(AnalysisResult {
        score: table.score(&word),
        adjusted_score: adjusted_score(&word, &table),
        worst_case,
        groups: groups.len(),
        expected_remaining,
        total_candidates,
        is_candidate: dictionary.is_answer(&word),
        word,
    })
}
