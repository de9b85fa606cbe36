//! Playing a strategy against a hidden answer
//!
//! The hidden answer is the only place that knows the solution; strategies
//! only ever see the feedback it hands back.

use super::strategy::Strategy;
use crate::core::{Feedback, Word, match_word};
use crate::error::{Error, Result};
use crate::wordlists::Dictionary;
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

/// The solution of one game
#[derive(Debug, Clone)]
pub struct HiddenAnswer<'a> {
    word: Word,
    dictionary: &'a Dictionary,
}

impl<'a> HiddenAnswer<'a> {
    /// Use a specific answer
    ///
    /// # Errors
    /// Returns `Error::Dictionary` if `word` is not in the dictionary's answer list.
    pub fn new(word: Word, dictionary: &'a Dictionary) -> Result<Self> {
        if !dictionary.is_answer(&word) {
            return Err(Error::Dictionary(format!("'{word}' is not in the answer list")));
        }
        Ok(Self { word, dictionary })
    }

    /// Pick an answer at random; the same seed always picks the same word
    ///
    /// # Errors
    /// Returns `Error::Dictionary` if the answer list is empty.
    ///
    /// # Examples
    /// ```
    /// use wordle_minimax::solver::HiddenAnswer;
    /// use wordle_minimax::wordlists::Dictionary;
    ///
    /// let dict = Dictionary::embedded().unwrap();
    /// let a = HiddenAnswer::random(&dict, 42).unwrap();
    /// let b = HiddenAnswer::random(&dict, 42).unwrap();
    /// assert_eq!(a.word(), b.word());
    /// ```
    pub fn random(dictionary: &'a Dictionary, seed: u64) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        let word = dictionary
            .answer_words()
            .choose(&mut rng)
            .cloned()
            .ok_or_else(|| Error::Dictionary("answer list is empty".to_string()))?;
        Ok(Self { word, dictionary })
    }

    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    /// Feedback for a guess against this answer
    ///
    /// # Errors
    /// Returns `Error::IllegalGuess` if the guess is not in the dictionary's
    /// guessable list.
    pub fn make_guess(&self, guess: &Word) -> Result<Feedback> {
        if !self.dictionary.is_legal_guess(guess) {
            return Err(Error::IllegalGuess(guess.to_string()));
        }
        match_word(guess, &self.word)
    }
}

/// One guess and what it revealed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub guess: Word,
    pub feedback: Feedback,
    /// Candidates when the guess was made
    pub candidates_before: usize,
    /// Candidates consistent with the feedback
    pub candidates_after: usize,
}

/// Full history of one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub answer: Word,
    pub rounds: Vec<Round>,
    pub solved: bool,
}

impl GameRecord {
    #[must_use]
    pub fn guesses(&self) -> usize {
        self.rounds.len()
    }
}

/// Play one game from a fresh start
///
/// Stops as soon as a guess is fully correct or after `max_rounds` guesses.
///
/// # Errors
/// Propagates strategy errors (such as `Error::InvariantViolation`) and
/// `Error::IllegalGuess` if the strategy proposes a word the dictionary rejects.
pub fn play_game<S: Strategy>(
    strategy: &mut S,
    answer: &HiddenAnswer<'_>,
    max_rounds: usize,
) -> Result<GameRecord> {
    strategy.reset();

    let mut rounds = Vec::new();
    let mut solved = false;
    let mut feedback: Option<Feedback> = None;

    for number in 1..=max_rounds {
        let guess = strategy.make_guess(feedback.as_ref())?;
        let candidates_before = strategy.candidates().len();

        let result = answer.make_guess(&guess)?;
        let candidates_after = strategy.candidates().retained_by(&result)?;
        debug!("round {number}: {result} ({candidates_before} -> {candidates_after})");

        solved = result.is_solved();
        rounds.push(Round {
            guess,
            feedback: result.clone(),
            candidates_before,
            candidates_after,
        });

        if solved {
            break;
        }
        feedback = Some(result);
    }

    Ok(GameRecord {
        answer: answer.word().clone(),
        rounds,
        solved,
    })
}
