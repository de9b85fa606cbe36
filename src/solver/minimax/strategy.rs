//! The minimax guess-selection policy as a playable strategy

use super::selector::{GuessDecision, MinimaxConfig, select_guess};
use crate::core::{Feedback, Word};
use crate::error::Result;
use crate::solver::candidates::CandidateSet;
use crate::solver::strategy::{GameState, GameTracker, Strategy};
use crate::wordlists::Dictionary;

/// Frequency shortlist refined by worst-case partition search
///
/// Always guesses a word that is still a candidate.
///
/// # Examples
/// ```
/// use wordle_minimax::core::{Word, match_word};
/// use wordle_minimax::solver::{GameState, MinimaxStrategy, Strategy};
/// use wordle_minimax::wordlists::Dictionary;
///
/// let dict = Dictionary::from_strs(&[], &["crane", "crate", "grape"]).unwrap();
/// let mut strategy = MinimaxStrategy::new(&dict);
/// let answer = Word::new("crate").unwrap();
///
/// let guess = strategy.make_guess(None).unwrap();
/// assert_eq!(guess.text(), "crane");
///
/// let feedback = match_word(&guess, &answer).unwrap();
/// assert_eq!(strategy.make_guess(Some(&feedback)).unwrap(), answer);
/// assert_eq!(strategy.state(), GameState::Solved);
/// ```
#[derive(Debug, Clone)]
pub struct MinimaxStrategy<'a> {
    tracker: GameTracker<'a>,
    config: MinimaxConfig,
    last_decision: Option<GuessDecision>,
}

impl<'a> MinimaxStrategy<'a> {
    #[must_use]
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self::with_config(dictionary, MinimaxConfig::default())
    }

    #[must_use]
    pub fn with_config(dictionary: &'a Dictionary, config: MinimaxConfig) -> Self {
        Self {
            tracker: GameTracker::new(dictionary),
            config,
            last_decision: None,
        }
    }

    /// How the most recent guess was chosen
    ///
    /// `None` before the first guess and whenever the guess was the single
    /// remaining candidate.
    #[must_use]
    pub const fn last_decision(&self) -> Option<&GuessDecision> {
        self.last_decision.as_ref()
    }
}

impl Strategy for MinimaxStrategy<'_> {
    fn make_guess(&mut self, feedback: Option<&Feedback>) -> Result<Word> {
        let config = self.config;
        let mut decision = None;
        self.last_decision = None;

        let guess = self.tracker.advance(feedback, |candidates| {
            let chosen = select_guess(candidates.words(), &config)?;
            let guess = chosen.guess.clone();
            decision = Some(chosen);
            Ok(guess)
        })?;

        self.last_decision = decision;
        Ok(guess)
    }

    fn reset(&mut self) {
        self.tracker.reset();
        self.last_decision = None;
    }

    fn candidates(&self) -> &CandidateSet {
        self.tracker.candidates()
    }

    fn state(&self) -> GameState {
        self.tracker.state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::match_word;
    use crate::error::Error;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn first_guess_on_embedded_answers() {
        let dict = Dictionary::embedded().unwrap();
        let mut strategy = MinimaxStrategy::new(&dict);

        let guess = strategy.make_guess(None).unwrap();
        assert_eq!(guess.text(), "crane");

        let decision = strategy.last_decision().unwrap();
        assert_eq!(decision.evaluated, 1);
        assert_eq!(decision.worst_case, Some(35));
    }

    #[test]
    fn guesses_are_always_candidates() {
        let dict = Dictionary::embedded().unwrap();
        let mut strategy = MinimaxStrategy::new(&dict);
        let answer = word("wound");

        let mut guess = strategy.make_guess(None).unwrap();
        while guess != answer {
            let fb = match_word(&guess, &answer).unwrap();
            guess = strategy.make_guess(Some(&fb)).unwrap();
            assert!(strategy.candidates().contains(&guess));
        }
    }

    #[test]
    fn single_candidate_is_solved_without_decision() {
        let dict = Dictionary::from_strs(&[], &["crane", "crate", "grape"]).unwrap();
        let mut strategy = MinimaxStrategy::new(&dict);

        let guess = strategy.make_guess(None).unwrap();
        assert!(strategy.last_decision().is_some());

        let fb = match_word(&guess, &word("grape")).unwrap();
        assert_eq!(strategy.make_guess(Some(&fb)).unwrap(), word("grape"));
        assert_eq!(strategy.state(), GameState::Solved);
        assert!(strategy.last_decision().is_none());
    }

    #[test]
    fn illegal_feedback_leaves_game_untouched() {
        let dict = Dictionary::from_strs(&[], &["crane", "crate", "grape"]).unwrap();
        let mut strategy = MinimaxStrategy::new(&dict);
        strategy.make_guess(None).unwrap();

        let short = match_word(&word("cat"), &word("cot")).unwrap();
        assert!(matches!(
            strategy.make_guess(Some(&short)),
            Err(Error::IllegalFeedback { .. })
        ));
        assert_eq!(strategy.candidates().len(), 3);
        assert_eq!(strategy.state(), GameState::AwaitingFeedback);
    }

    #[test]
    fn inconsistent_feedback_aborts_the_game() {
        let dict = Dictionary::from_strs(&[], &["crane", "crate", "grape"]).unwrap();
        let mut strategy = MinimaxStrategy::new(&dict);
        strategy.make_guess(None).unwrap();

        // crane then claims an answer that is not in the list
        let fb = match_word(&word("crane"), &word("zzzzz")).unwrap();
        assert!(matches!(
            strategy.make_guess(Some(&fb)),
            Err(Error::InvariantViolation(_))
        ));

        strategy.reset();
        assert_eq!(strategy.state(), GameState::Init);
        assert_eq!(strategy.candidates().len(), 3);
        assert_eq!(strategy.make_guess(None).unwrap(), word("crane"));
    }

    fn play(strategy: &mut MinimaxStrategy<'_>, answer: &Word) -> Vec<Word> {
        strategy.reset();
        let mut guesses = vec![strategy.make_guess(None).unwrap()];
        while guesses.last() != Some(answer) {
            let fb = match_word(guesses.last().unwrap(), answer).unwrap();
            guesses.push(strategy.make_guess(Some(&fb)).unwrap());
        }
        guesses
    }

    #[test]
    fn reset_replays_identically() {
        let dict = Dictionary::embedded().unwrap();
        let mut strategy = MinimaxStrategy::new(&dict);
        let answer = word("tight");

        let first = play(&mut strategy, &answer);
        let second = play(&mut strategy, &answer);
        assert_eq!(first, second);
        assert!(first.len() <= 6);
    }
}
