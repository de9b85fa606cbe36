//! Positional letter frequency scoring
//!
//! Counts, for every position, how many candidates carry each letter there.
//! A word's score is the sum of the counts of its own letters, so words made
//! of typical letters in typical places score high and tend to draw green
//! feedback.

use super::candidates::CandidateSet;
use super::strategy::{GameState, GameTracker, Strategy};
use crate::core::{Feedback, Word};
use crate::error::{Error, Result};
use crate::wordlists::Dictionary;
use log::debug;
use rustc_hash::FxHashMap;

/// Letter counts per position over a set of words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    positions: Vec<FxHashMap<u8, usize>>,
}

impl FrequencyTable {
    /// Build the table for `words`
    ///
    /// # Examples
    /// ```
    /// use wordle_minimax::core::Word;
    /// use wordle_minimax::solver::FrequencyTable;
    ///
    /// let words: Vec<Word> = ["crane", "crate", "grape"]
    ///     .iter()
    ///     .map(|w| Word::new(*w).unwrap())
    ///     .collect();
    /// let table = FrequencyTable::from_words(&words);
    ///
    /// assert_eq!(table.count(0, b'c'), 2);
    /// assert_eq!(table.score(&words[0]), 2 + 3 + 3 + 1 + 3);
    /// ```
    #[must_use]
    pub fn from_words(words: &[Word]) -> Self {
        let mut positions: Vec<FxHashMap<u8, usize>> = Vec::new();

        for word in words {
            for (i, &letter) in word.chars().iter().enumerate() {
                if i == positions.len() {
                    positions.push(FxHashMap::default());
                }
                *positions[i].entry(letter).or_insert(0) += 1;
            }
        }

        Self { positions }
    }

    /// How many words had `letter` at `position`
    #[must_use]
    pub fn count(&self, position: usize, letter: u8) -> usize {
        self.positions
            .get(position)
            .and_then(|counts| counts.get(&letter))
            .copied()
            .unwrap_or(0)
    }

    /// Sum of the positional counts of the word's letters
    #[must_use]
    pub fn score(&self, word: &Word) -> usize {
        word.chars()
            .iter()
            .enumerate()
            .map(|(i, &letter)| self.count(i, letter))
            .sum()
    }

    /// Number of positions covered by the table
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.positions.len()
    }
}

/// First word with the strictly highest frequency score
#[must_use]
pub fn best_by_frequency(words: &[Word]) -> Option<&Word> {
    let table = FrequencyTable::from_words(words);

    let mut best: Option<(&Word, usize)> = None;
    for word in words {
        let score = table.score(word);
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((word, score));
        }
    }

    best.map(|(word, _)| word)
}

/// Frequency-only strategy
///
/// Guesses the candidate with the highest positional frequency score. No
/// uniqueness adjustment and no partition search; mostly useful as a baseline
/// for the minimax strategy.
#[derive(Debug, Clone)]
pub struct FrequencyStrategy<'a> {
    tracker: GameTracker<'a>,
}

impl<'a> FrequencyStrategy<'a> {
    #[must_use]
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self {
            tracker: GameTracker::new(dictionary),
        }
    }
}

impl Strategy for FrequencyStrategy<'_> {
    fn make_guess(&mut self, feedback: Option<&Feedback>) -> Result<Word> {
        self.tracker.advance(feedback, |candidates| {
            let guess = best_by_frequency(candidates.words())
                .cloned()
                .ok_or_else(|| Error::InvariantViolation("empty candidate set".to_string()))?;
            debug!("frequency guess {guess} from {} candidates", candidates.len());
            Ok(guess)
        })
    }

    fn reset(&mut self) {
        self.tracker.reset();
    }

    fn candidates(&self) -> &CandidateSet {
        self.tracker.candidates()
    }

    fn state(&self) -> GameState {
        self.tracker.state()
    }
}
