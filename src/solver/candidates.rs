//! The set of answers still consistent with all feedback so far

use crate::core::{Feedback, Word};
use crate::error::{Error, Result};
use crate::wordlists::Dictionary;
use log::debug;

/// Candidate answers for one game
///
/// Starts as a copy of the dictionary's answer list and only ever shrinks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet {
    word_length: usize,
    words: Vec<Word>,
}

impl CandidateSet {
    /// Fresh candidate set holding every possible answer
    #[must_use]
    pub fn from_dictionary(dictionary: &Dictionary) -> Self {
        Self {
            word_length: dictionary.word_length(),
            words: dictionary.answer_words().to_vec(),
        }
    }

    /// Remove every word that could not have produced `feedback`
    ///
    /// # Errors
    /// Returns `Error::LengthMismatch` if the feedback does not have the
    /// game's word length; the set is left untouched.
    ///
    /// # Examples
    /// ```
    /// use wordle_minimax::core::{Word, match_word};
    /// use wordle_minimax::solver::CandidateSet;
    /// use wordle_minimax::wordlists::Dictionary;
    ///
    /// let dict = Dictionary::from_strs(&[], &["crane", "crate", "grape"]).unwrap();
    /// let mut candidates = CandidateSet::from_dictionary(&dict);
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("crate").unwrap();
    /// candidates.eliminate(&match_word(&guess, &answer).unwrap()).unwrap();
    ///
    /// assert_eq!(candidates.words(), &[answer]);
    /// ```
    pub fn eliminate(&mut self, feedback: &Feedback) -> Result<()> {
        self.check_length(feedback)?;

        let before = self.words.len();
        self.words.retain(|word| feedback.admits(word));
        debug!("{feedback}: {before} -> {} candidates", self.words.len());
        Ok(())
    }

    /// Number of current candidates that `feedback` would keep
    ///
    /// # Errors
    /// Returns `Error::LengthMismatch` as [`CandidateSet::eliminate`].
    pub fn retained_by(&self, feedback: &Feedback) -> Result<usize> {
        self.check_length(feedback)?;
        Ok(self.words.iter().filter(|w| feedback.admits(w)).count())
    }

    fn check_length(&self, feedback: &Feedback) -> Result<()> {
        if feedback.len() == self.word_length {
            Ok(())
        } else {
            Err(Error::LengthMismatch {
                expected: self.word_length,
                actual: feedback.len(),
            })
        }
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::match_word;
    use crate::wordlists::{ALLOWED, ANSWERS};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::seq::IndexedRandom;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn texts(set: &CandidateSet) -> Vec<&str> {
        set.words().iter().map(Word::text).collect()
    }

    fn small_set() -> CandidateSet {
        let dict = Dictionary::from_strs(&[], &["crane", "crate", "grape"]).unwrap();
        CandidateSet::from_dictionary(&dict)
    }

    #[test]
    fn starts_with_all_answers() {
        let set = small_set();
        assert_eq!(texts(&set), ["crane", "crate", "grape"]);
        assert_eq!(set.word_length(), 5);
    }

    #[test]
    fn crane_against_crate_leaves_only_crate() {
        let mut set = small_set();
        let fb = match_word(&word("crane"), &word("crate")).unwrap();

        set.eliminate(&fb).unwrap();
        assert_eq!(texts(&set), ["crate"]);
    }

    #[test]
    fn eliminating_twice_is_idempotent() {
        let mut set = small_set();
        let fb = match_word(&word("grape"), &word("crane")).unwrap();

        set.eliminate(&fb).unwrap();
        let once = set.clone();
        set.eliminate(&fb).unwrap();
        assert_eq!(set, once);
    }

    #[test]
    fn wrong_length_feedback_is_rejected() {
        let mut set = small_set();
        let fb = match_word(&word("cat"), &word("cot")).unwrap();

        assert_eq!(
            set.eliminate(&fb),
            Err(Error::LengthMismatch {
                expected: 5,
                actual: 3
            })
        );
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn wrong_letter_explained_elsewhere_does_not_reject() {
        // guess "speed" vs "those": the first e is yellow, the second gray.
        // The single e in "those" is explained by the yellow, so it survives.
        let dict = Dictionary::from_strs(&[], &["those", "these", "shoes"]).unwrap();
        let mut set = CandidateSet::from_dictionary(&dict);
        let fb = match_word(&word("speed"), &word("those")).unwrap();
        assert_eq!(fb.to_emoji(), "🟨⬜🟨⬜⬜");

        set.eliminate(&fb).unwrap();
        assert!(set.contains(&word("those")));
        // "these" would have shown the first e green
        assert!(!set.contains(&word("these")));
    }

    #[test]
    fn retained_by_does_not_mutate() {
        let set = small_set();
        let fb = match_word(&word("crane"), &word("grape")).unwrap();

        assert_eq!(set.retained_by(&fb).unwrap(), 1);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn sound_and_monotonic_over_embedded_words() {
        let dict = Dictionary::embedded().unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let answer = word(ANSWERS.choose(&mut rng).unwrap());
            let guess = word(ALLOWED.choose(&mut rng).unwrap());
            let fb = match_word(&guess, &answer).unwrap();

            let mut set = CandidateSet::from_dictionary(&dict);
            let before = set.len();
            set.eliminate(&fb).unwrap();

            assert!(set.len() <= before);
            assert!(set.contains(&answer), "{fb} dropped the answer {answer}");
            assert!(set.words().iter().all(|w| fb.admits_by_rematch(w)));
        }
    }
}
