//! Guess selection strategies
//!
//! Defines the Strategy trait, the per-game state machine every strategy
//! shares, and a runtime-selectable enum over the concrete strategies.

use super::candidates::CandidateSet;
use super::frequency::FrequencyStrategy;
use super::minimax::{MinimaxConfig, MinimaxStrategy};
use crate::core::{Feedback, Word};
use crate::error::{Error, Result};
use crate::wordlists::Dictionary;

/// A guess-making policy for one game at a time
pub trait Strategy {
    /// Propose the next guess
    ///
    /// `feedback` is `None` on the first call of a game and otherwise the
    /// result of the previous guess against the hidden answer.
    ///
    /// # Errors
    /// - `Error::IllegalFeedback` if the feedback has the wrong length
    /// - `Error::InvariantViolation` if no candidate is consistent with the
    ///   feedback received; the game cannot continue until [`Strategy::reset`]
    fn make_guess(&mut self, feedback: Option<&Feedback>) -> Result<Word>;

    /// Start a new game with every answer back in play
    fn reset(&mut self);

    /// Answers still consistent with the feedback so far
    fn candidates(&self) -> &CandidateSet;

    fn state(&self) -> GameState;
}

/// Where a strategy is within one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// No guess made yet
    Init,
    /// A guess was made and more than one candidate remained
    AwaitingFeedback,
    /// Exactly one candidate remains and it has been proposed
    Solved,
}

/// Candidate bookkeeping and state transitions common to all strategies
///
/// Concrete strategies only decide which word to guess when more than one
/// candidate remains.
#[derive(Debug, Clone)]
pub struct GameTracker<'a> {
    dictionary: &'a Dictionary,
    candidates: CandidateSet,
    state: GameState,
}

impl<'a> GameTracker<'a> {
    #[must_use]
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self {
            dictionary,
            candidates: CandidateSet::from_dictionary(dictionary),
            state: GameState::Init,
        }
    }

    pub fn reset(&mut self) {
        self.candidates = CandidateSet::from_dictionary(self.dictionary);
        self.state = GameState::Init;
    }

    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Apply `feedback` (if any), then pick the next guess
    ///
    /// `choose` is only called when two or more candidates remain.
    ///
    /// # Errors
    /// See [`Strategy::make_guess`]; errors from `choose` are passed through.
    pub fn advance<F>(&mut self, feedback: Option<&Feedback>, choose: F) -> Result<Word>
    where
        F: FnOnce(&CandidateSet) -> Result<Word>,
    {
        if let Some(feedback) = feedback {
            let expected = self.dictionary.word_length();
            if feedback.len() != expected {
                return Err(Error::IllegalFeedback {
                    expected,
                    actual: feedback.len(),
                });
            }
            self.candidates.eliminate(feedback)?;
        }

        match self.candidates.words() {
            [] => Err(Error::InvariantViolation(
                "no candidate answer is consistent with the feedback received".to_string(),
            )),
            [only] => {
                self.state = GameState::Solved;
                Ok(only.clone())
            }
            _ => {
                let guess = choose(&self.candidates)?;
                self.state = GameState::AwaitingFeedback;
                Ok(guess)
            }
        }
    }
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType<'a> {
    /// Frequency shortlist refined by worst-case partition search (default)
    Minimax(MinimaxStrategy<'a>),
    /// Highest positional letter frequency only
    Frequency(FrequencyStrategy<'a>),
}

impl<'a> StrategyType<'a> {
    /// Create strategy from name string
    ///
    /// Supported names: "minimax", "frequency".
    /// Defaults to minimax if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str, dictionary: &'a Dictionary, config: MinimaxConfig) -> Self {
        match name {
            "frequency" | "freq" => Self::Frequency(FrequencyStrategy::new(dictionary)),
            _ => Self::Minimax(MinimaxStrategy::with_config(dictionary, config)),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Minimax(_) => "minimax",
            Self::Frequency(_) => "frequency",
        }
    }
}

impl Strategy for StrategyType<'_> {
    fn make_guess(&mut self, feedback: Option<&Feedback>) -> Result<Word> {
        match self {
            Self::Minimax(s) => s.make_guess(feedback),
            Self::Frequency(s) => s.make_guess(feedback),
        }
    }

    fn reset(&mut self) {
        match self {
            Self::Minimax(s) => s.reset(),
            Self::Frequency(s) => s.reset(),
        }
    }

    fn candidates(&self) -> &CandidateSet {
        match self {
            Self::Minimax(s) => s.candidates(),
            Self::Frequency(s) => s.candidates(),
        }
    }

    fn state(&self) -> GameState {
        match self {
            Self::Minimax(s) => s.state(),
            Self::Frequency(s) => s.state(),
        }
    }
}
