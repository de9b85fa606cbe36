//! Minimax-based guess selection
//!
//! Ranks candidates by positional letter frequency, keeps a bounded shortlist
//! of the top scorers, and when enough candidates remain picks the
//! shortlisted guess whose worst-case feedback group is smallest.

use super::calculator::worst_case_partition;
use crate::core::Word;
use crate::error::{Error, Result};
use crate::solver::frequency::FrequencyTable;
use log::{debug, trace};

/// Default bound on how many tied top scorers the partition search evaluates
pub const DEFAULT_SHORTLIST_CAP: usize = 10;

/// When the partition search runs
///
/// The search runs only while the candidate count is strictly greater than
/// the resolved threshold; below it the top-scoring word is guessed directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchThreshold {
    /// More candidates than letters in a word
    #[default]
    WordLength,
    /// More candidates than a fixed count
    Fixed(usize),
}

impl SearchThreshold {
    /// Threshold as a candidate count; never below 2
    #[must_use]
    pub fn resolve(self, word_length: usize) -> usize {
        match self {
            Self::WordLength => word_length,
            Self::Fixed(count) => count,
        }
        .max(2)
    }
}

/// Tuning for the minimax strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimaxConfig {
    /// Maximum number of guesses the partition search evaluates (at least 1)
    pub shortlist_cap: usize,
    pub search_threshold: SearchThreshold,
}

impl MinimaxConfig {
    #[must_use]
    pub fn new(shortlist_cap: usize, search_threshold: SearchThreshold) -> Self {
        Self {
            shortlist_cap: shortlist_cap.max(1),
            search_threshold,
        }
    }

    #[must_use]
    pub fn with_shortlist_cap(self, shortlist_cap: usize) -> Self {
        Self::new(shortlist_cap, self.search_threshold)
    }

    #[must_use]
    pub fn with_search_threshold(self, search_threshold: SearchThreshold) -> Self {
        Self::new(self.shortlist_cap, search_threshold)
    }
}

impl Default for MinimaxConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SHORTLIST_CAP, SearchThreshold::default())
    }
}

/// Frequency score with the letter-uniqueness adjustment
///
/// Adds one point per distinct letter, then halves the total (rounding down)
/// if any letter repeats.
#[must_use]
pub fn adjusted_score(word: &Word, table: &FrequencyTable) -> usize {
    let score = table.score(word) + word.distinct_letters();
    if word.has_repeated_letter() {
        score / 2
    } else {
        score
    }
}

/// The tied top scorers among a set of candidates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortlist {
    /// Adjusted score shared by every shortlisted word
    pub score: usize,
    /// In candidate order, at most the cap
    pub words: Vec<Word>,
}

/// Collect the words tied at the highest adjusted score
///
/// A strictly higher score restarts the shortlist; once it holds `cap` words
/// further ties are skipped. Returns `None` for no candidates.
#[must_use]
pub fn build_shortlist(candidates: &[Word], cap: usize) -> Option<Shortlist> {
    let cap = cap.max(1);
    let table = FrequencyTable::from_words(candidates);

    let mut shortlist: Option<Shortlist> = None;
    for word in candidates {
        let score = adjusted_score(word, &table);
        match &mut shortlist {
            Some(best) if score < best.score => {}
            Some(best) if score == best.score => {
                if best.words.len() < cap {
                    best.words.push(word.clone());
                }
            }
            _ => {
                shortlist = Some(Shortlist {
                    score,
                    words: vec![word.clone()],
                });
            }
        }
    }

    shortlist
}

/// Outcome of one guess selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessDecision {
    pub guess: Word,
    /// Adjusted frequency score of the guess
    pub score: usize,
    pub shortlist: Vec<Word>,
    /// Largest feedback group for the guess, when the search ran
    pub worst_case: Option<usize>,
    /// Number of shortlisted guesses the search evaluated
    pub evaluated: usize,
}

/// Choose the next guess from the current candidates
///
/// # Errors
/// Returns `Error::InvariantViolation` for an empty candidate set.
///
/// # Examples
/// ```
/// use wordle_minimax::core::Word;
/// use wordle_minimax::solver::minimax::{MinimaxConfig, select_guess};
///
/// let candidates: Vec<Word> = ["crane", "crate", "grape"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
///
/// let decision = select_guess(&candidates, &MinimaxConfig::default()).unwrap();
/// assert_eq!(decision.guess.text(), "crane");
/// // three candidates do not exceed the word length, so no search ran
/// assert_eq!(decision.worst_case, None);
/// ```
pub fn select_guess(candidates: &[Word], config: &MinimaxConfig) -> Result<GuessDecision> {
    let Shortlist { score, words } = build_shortlist(candidates, config.shortlist_cap)
        .ok_or_else(|| Error::InvariantViolation("empty candidate set".to_string()))?;

    let word_length = candidates.first().map_or(0, Word::len);
    let threshold = config.search_threshold.resolve(word_length);

    if candidates.len() <= threshold {
        debug!(
            "{} candidates <= {threshold}: top scorer {} without search",
            candidates.len(),
            words[0]
        );
        return Ok(GuessDecision {
            guess: words[0].clone(),
            score,
            shortlist: words,
            worst_case: None,
            evaluated: 0,
        });
    }

    let mut best: Option<(&Word, usize)> = None;
    for guess in &words {
        let worst = worst_case_partition(guess, candidates)?;
        trace!("{guess}: worst case {worst} of {}", candidates.len());
        if best.is_none_or(|(_, best_worst)| worst < best_worst) {
            best = Some((guess, worst));
        }
    }

    let (guess, worst) = best
        .map(|(guess, worst)| (guess.clone(), worst))
        .ok_or_else(|| Error::InvariantViolation("empty shortlist".to_string()))?;

    debug!(
        "{guess}: worst case {worst} of {} candidates, shortlist of {} at score {score}",
        candidates.len(),
        words.len()
    );

    Ok(GuessDecision {
        guess,
        score,
        evaluated: words.len(),
        shortlist: words,
        worst_case: Some(worst),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn texts(list: &[Word]) -> Vec<&str> {
        list.iter().map(Word::text).collect()
    }

    /// 15 words that each hold a different letter at every position, so all tie
    fn all_tied() -> Vec<Word> {
        let letters = b"abcdefghijklmno";
        (0..letters.len())
            .map(|j| {
                let text: String = (0..5)
                    .map(|i| letters[(j + i) % letters.len()] as char)
                    .collect();
                Word::new(text).unwrap()
            })
            .collect()
    }

    const MIXED: [&str; 8] = [
        "blame", "study", "chase", "music", "topic", "guide", "grand", "meant",
    ];

    #[test]
    fn threshold_resolution() {
        assert_eq!(SearchThreshold::WordLength.resolve(5), 5);
        assert_eq!(SearchThreshold::Fixed(2).resolve(5), 2);
        assert_eq!(SearchThreshold::Fixed(0).resolve(5), 2);
        assert_eq!(SearchThreshold::WordLength.resolve(1), 2);
    }

    #[test]
    fn config_defaults_and_clamping() {
        let config = MinimaxConfig::default();
        assert_eq!(config.shortlist_cap, DEFAULT_SHORTLIST_CAP);
        assert_eq!(config.search_threshold, SearchThreshold::WordLength);

        assert_eq!(config.with_shortlist_cap(0).shortlist_cap, 1);
        assert_eq!(
            config
                .with_search_threshold(SearchThreshold::Fixed(3))
                .search_threshold,
            SearchThreshold::Fixed(3)
        );
    }

    #[test]
    fn adjusted_score_rewards_distinct_letters() {
        let list = words(&["crane", "crate", "grape"]);
        let table = FrequencyTable::from_words(&list);

        // 12 positional + 5 distinct
        assert_eq!(adjusted_score(&list[0], &table), 17);
        assert_eq!(adjusted_score(&list[2], &table), 16);
    }

    #[test]
    fn adjusted_score_halves_repeated_letters() {
        let list = words(&["speed"]);
        let table = FrequencyTable::from_words(&list);

        // (5 positional + 4 distinct) / 2, rounded down
        assert_eq!(adjusted_score(&list[0], &table), 4);
    }

    #[test]
    fn shortlist_keeps_ties_in_order() {
        let shortlist = build_shortlist(&words(&MIXED), 10).unwrap();

        assert_eq!(shortlist.score, 15);
        assert_eq!(
            texts(&shortlist.words),
            ["blame", "chase", "guide", "grand", "meant"]
        );
    }

    #[test]
    fn shortlist_respects_cap() {
        let candidates = all_tied();

        let shortlist = build_shortlist(&candidates, 10).unwrap();
        assert_eq!(shortlist.words.len(), 10);
        assert_eq!(shortlist.words[..], candidates[..10]);

        assert_eq!(build_shortlist(&candidates, 3).unwrap().words.len(), 3);
        assert!(build_shortlist(&[], 10).is_none());
    }

    #[test]
    fn higher_score_restarts_shortlist() {
        // crane and crate tie above grape; grape first must not survive
        let shortlist = build_shortlist(&words(&["grape", "crane", "crate"]), 10).unwrap();
        assert_eq!(texts(&shortlist.words), ["crane", "crate"]);
    }

    #[test]
    fn search_picks_smallest_worst_case() {
        let decision = select_guess(&words(&MIXED), &MinimaxConfig::default()).unwrap();

        // blame scores as high but leaves a group of two in the worst case
        assert_eq!(decision.guess.text(), "chase");
        assert_eq!(decision.worst_case, Some(1));
        assert_eq!(decision.score, 15);
        assert_eq!(decision.evaluated, 5);
    }

    #[test]
    fn search_never_exceeds_shortlist_cap() {
        let candidates = all_tied();

        for cap in [1, 3, 10, 50] {
            let config = MinimaxConfig::default().with_shortlist_cap(cap);
            let decision = select_guess(&candidates, &config).unwrap();

            assert!(decision.evaluated <= cap);
            assert_eq!(decision.evaluated, decision.shortlist.len());
        }
    }

    #[test]
    fn small_sets_skip_the_search() {
        let config = MinimaxConfig::default().with_search_threshold(SearchThreshold::Fixed(8));
        let decision = select_guess(&words(&MIXED), &config).unwrap();

        assert_eq!(decision.guess.text(), "blame");
        assert_eq!(decision.worst_case, None);
        assert_eq!(decision.evaluated, 0);
    }

    #[test]
    fn search_result_matches_brute_force() {
        let candidates = words(&MIXED);
        let decision = select_guess(&candidates, &MinimaxConfig::default()).unwrap();

        let best = decision
            .shortlist
            .iter()
            .map(|g| worst_case_partition(g, &candidates).unwrap())
            .min();
        assert_eq!(decision.worst_case, best);
    }

    #[test]
    fn empty_candidates_is_an_invariant_violation() {
        assert!(matches!(
            select_guess(&[], &MinimaxConfig::default()),
            Err(Error::InvariantViolation(_))
        ));
    }
}
