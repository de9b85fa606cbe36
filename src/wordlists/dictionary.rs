//! The dictionary a game is played against
//!
//! Holds the fixed word length, the guessable list and the answer list, and
//! answers legality queries. Immutable once built.

use super::{ALLOWED, ANSWERS, loader::words_from_slice};
use crate::core::Word;
use crate::error::{Error, Result};
use rustc_hash::FxHashSet;

/// Word lists for one kind of game
#[derive(Debug, Clone)]
pub struct Dictionary {
    word_length: usize,
    guessable: Vec<Word>,
    answers: Vec<Word>,
    legal: FxHashSet<Word>,
}

impl Dictionary {
    /// Build a dictionary from a guessable list and an answer list
    ///
    /// Duplicates are dropped (first occurrence wins) and any answer missing
    /// from the guessable list is appended to it, so every answer is a legal
    /// guess.
    ///
    /// # Errors
    /// Returns `Error::Dictionary` if there are no answers or the words do not
    /// all share the answer list's length.
    ///
    /// # Examples
    /// ```
    /// use wordle_minimax::core::Word;
    /// use wordle_minimax::wordlists::Dictionary;
    ///
    /// let dict = Dictionary::from_strs(&["crane", "slate"], &["crate"]).unwrap();
    /// assert_eq!(dict.word_length(), 5);
    /// assert!(dict.is_legal_guess(&Word::new("crate").unwrap()));
    /// assert!(!dict.is_legal_guess(&Word::new("zzzzz").unwrap()));
    /// ```
    pub fn new(guessable: Vec<Word>, answers: Vec<Word>) -> Result<Self> {
        let word_length = answers
            .first()
            .map(Word::len)
            .ok_or_else(|| Error::Dictionary("answer list is empty".to_string()))?;

        if let Some(odd) = guessable
            .iter()
            .chain(&answers)
            .find(|w| w.len() != word_length)
        {
            return Err(Error::Dictionary(format!(
                "'{odd}' has {} letters, expected {word_length}",
                odd.len()
            )));
        }

        let answers = dedup(answers);
        let mut guessable = dedup(guessable);
        let mut legal: FxHashSet<Word> = guessable.iter().cloned().collect();
        for answer in &answers {
            if legal.insert(answer.clone()) {
                guessable.push(answer.clone());
            }
        }

        Ok(Self {
            word_length,
            guessable,
            answers,
            legal,
        })
    }

    /// Build from string slices; invalid words are an error
    ///
    /// # Errors
    /// Returns `Error::InvalidWord` for a malformed word, otherwise as [`Dictionary::new`].
    pub fn from_strs(guessable: &[&str], answers: &[&str]) -> Result<Self> {
        let parse = |words: &[&str]| {
            words
                .iter()
                .map(|&w| Word::new(w).map_err(Error::from))
                .collect::<Result<Vec<_>>>()
        };
        Self::new(parse(guessable)?, parse(answers)?)
    }

    /// Dictionary where the answers are the only legal guesses
    ///
    /// # Errors
    /// As [`Dictionary::new`].
    pub fn answers_only(answers: Vec<Word>) -> Result<Self> {
        Self::new(answers.clone(), answers)
    }

    /// The word lists compiled into the binary
    ///
    /// # Errors
    /// Only if the embedded data is inconsistent, which the build guards against.
    pub fn embedded() -> Result<Self> {
        Self::new(words_from_slice(ALLOWED), words_from_slice(ANSWERS))
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// All legal guesses, in load order
    #[inline]
    #[must_use]
    pub fn guessable_words(&self) -> &[Word] {
        &self.guessable
    }

    /// Possible hidden answers, in load order
    #[inline]
    #[must_use]
    pub fn answer_words(&self) -> &[Word] {
        &self.answers
    }

    #[must_use]
    pub fn is_legal_guess(&self, candidate: &Word) -> bool {
        self.legal.contains(candidate)
    }

    #[must_use]
    pub fn is_answer(&self, candidate: &Word) -> bool {
        self.answers.contains(candidate)
    }
}

fn dedup(words: Vec<Word>) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    words
        .into_iter()
        .filter(|w| seen.insert(w.clone()))
        .collect()
}
