//! Wordle feedback calculation and representation
//!
//! Feedback pairs every letter of a guess with its outcome against the answer:
//! - Correct = letter at this exact position in the answer
//! - Misplaced = letter elsewhere in the answer, with an occurrence still unaccounted for
//! - Wrong = letter absent, or all of its occurrences already accounted for
//!
//! Two feedback values are equal only when both the letters and the outcomes
//! match position by position, so `Feedback` can be used as a grouping key.

use super::Word;
use crate::error::{Error, Result};
use std::fmt;

/// Outcome for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterOutcome {
    /// Green
    Correct,
    /// Yellow
    Misplaced,
    /// Gray
    Wrong,
}

impl LetterOutcome {
    /// Parse a single outcome symbol
    ///
    /// Accepts 'G'/'g'/🟩 for correct, 'Y'/'y'/🟨 for misplaced and
    /// '-'/'_'/'x'/⬜/⬛ for wrong.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Misplaced),
            '-' | '_' | 'x' | 'X' | '⬜' | '⬛' => Some(Self::Wrong),
            _ => None,
        }
    }

    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Misplaced => '🟨',
            Self::Wrong => '⬜',
        }
    }
}

/// Per-letter feedback for one guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback {
    guess: Word,
    outcomes: Vec<LetterOutcome>,
}

/// Compare `guess` against `answer`
///
/// # Errors
/// Returns `Error::LengthMismatch` if the words have different lengths.
///
/// # Examples
/// ```
/// use wordle_minimax::core::{LetterOutcome::*, Word, match_word};
///
/// let guess = Word::new("crane").unwrap();
/// let answer = Word::new("crate").unwrap();
/// let feedback = match_word(&guess, &answer).unwrap();
///
/// assert_eq!(feedback.outcomes(), &[Correct, Correct, Correct, Wrong, Correct]);
/// ```
pub fn match_word(guess: &Word, answer: &Word) -> Result<Feedback> {
    Feedback::calculate(guess, answer)
}

/// Outcome vector for two equal-length byte strings
///
/// 1. First pass: mark exact matches and remove them from the available pool
/// 2. Second pass, left to right: mark misplaced letters while the pool still
///    holds an occurrence, otherwise wrong
pub(crate) fn outcomes_for(guess: &Word, answer: &Word) -> Vec<LetterOutcome> {
    debug_assert_eq!(guess.len(), answer.len());

    let mut result = vec![LetterOutcome::Wrong; guess.len()];
    let mut answer_available = answer.char_counts();

    for (i, (&g, &a)) in guess.chars().iter().zip(answer.chars()).enumerate() {
        if g == a {
            result[i] = LetterOutcome::Correct;
            if let Some(count) = answer_available.get_mut(&g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    for (i, &g) in guess.chars().iter().enumerate() {
        if result[i] == LetterOutcome::Correct {
            continue;
        }
        if let Some(count) = answer_available.get_mut(&g)
            && *count > 0
        {
            result[i] = LetterOutcome::Misplaced;
            *count -= 1;
        }
    }

    result
}

impl Feedback {
    /// Build feedback from a guess and its outcomes
    ///
    /// # Errors
    /// Returns `Error::LengthMismatch` if there is not exactly one outcome per letter.
    pub fn new(guess: Word, outcomes: Vec<LetterOutcome>) -> Result<Self> {
        if outcomes.len() != guess.len() {
            return Err(Error::LengthMismatch {
                expected: guess.len(),
                actual: outcomes.len(),
            });
        }
        Ok(Self { guess, outcomes })
    }

    /// Calculate the feedback when `guess` is played against `answer`
    ///
    /// # Errors
    /// Returns `Error::LengthMismatch` if the words have different lengths.
    pub fn calculate(guess: &Word, answer: &Word) -> Result<Self> {
        if guess.len() != answer.len() {
            return Err(Error::LengthMismatch {
                expected: answer.len(),
                actual: guess.len(),
            });
        }

        Ok(Self {
            guess: guess.clone(),
            outcomes: outcomes_for(guess, answer),
        })
    }

    /// Parse feedback typed by a player, such as `"GY-GY"` or `"🟩🟨⬜🟩🟨"`
    ///
    /// Returns `None` if the pattern length differs from the guess or contains
    /// an unknown symbol.
    ///
    /// # Examples
    /// ```
    /// use wordle_minimax::core::{Feedback, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let typed = Feedback::from_pattern(guess.clone(), "GG-Y_").unwrap();
    /// let emoji = Feedback::from_pattern(guess, "🟩🟩⬜🟨⬜").unwrap();
    /// assert_eq!(typed, emoji);
    /// ```
    #[must_use]
    pub fn from_pattern(guess: Word, pattern: &str) -> Option<Self> {
        let outcomes = pattern
            .chars()
            .map(LetterOutcome::from_char)
            .collect::<Option<Vec<_>>>()?;
        Self::new(guess, outcomes).ok()
    }

    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    #[inline]
    #[must_use]
    pub fn outcomes(&self) -> &[LetterOutcome] {
        &self.outcomes
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Iterate over `(letter, outcome)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (u8, LetterOutcome)> + '_ {
        self.guess
            .chars()
            .iter()
            .copied()
            .zip(self.outcomes.iter().copied())
    }

    /// All letters correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.outcomes.iter().all(|&o| o == LetterOutcome::Correct)
    }

    /// Number of positions with the given outcome
    #[must_use]
    pub fn count(&self, outcome: LetterOutcome) -> usize {
        self.outcomes.iter().filter(|&&o| o == outcome).count()
    }

    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.outcomes.iter().map(|o| o.to_emoji()).collect()
    }

    /// Whether `candidate` could be the answer that produced this feedback
    ///
    /// Reference definition: replay the guess against the candidate and
    /// compare. [`Feedback::admits`] must always agree with it.
    #[must_use]
    pub fn admits_by_rematch(&self, candidate: &Word) -> bool {
        Self::calculate(&self.guess, candidate).is_ok_and(|replayed| replayed == *self)
    }

    /// Whether `candidate` could be the answer that produced this feedback
    ///
    /// Streams over the feedback once, consuming the candidate's letter counts
    /// the same way the matcher consumes the answer's:
    /// - correct positions must match and use up one occurrence
    /// - every other position must not match
    /// - left to right, a misplaced letter needs an unused occurrence and takes
    ///   it; a wrong letter must have none left
    #[must_use]
    pub fn admits(&self, candidate: &Word) -> bool {
        let guess = self.guess.chars();
        let word = candidate.chars();
        if word.len() != guess.len() {
            return false;
        }

        let mut available = candidate.char_counts();

        for ((&g, &w), &outcome) in guess.iter().zip(word).zip(&self.outcomes) {
            let exact = g == w;
            if exact != (outcome == LetterOutcome::Correct) {
                return false;
            }
            if exact && let Some(count) = available.get_mut(&g) {
                *count = count.saturating_sub(1);
            }
        }

        for (&g, &outcome) in guess.iter().zip(&self.outcomes) {
            match outcome {
                LetterOutcome::Correct => {}
                LetterOutcome::Misplaced => match available.get_mut(&g) {
                    Some(count) if *count > 0 => *count -= 1,
                    _ => return false,
                },
                LetterOutcome::Wrong => {
                    if available.get(&g).is_some_and(|&count| count > 0) {
                        return false;
                    }
                }
            }
        }

        true
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.guess, self.to_emoji())
    }
}
