//! Benchmark command
//!
//! Tests solver performance across multiple answers.

use crate::core::Word;
use crate::solver::{HiddenAnswer, Strategy, play_game};
use crate::wordlists::Dictionary;
use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Which answers a benchmark plays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BenchmarkSelection {
    /// The first `count` answers in list order
    First(usize),
    /// `count` distinct answers drawn with a seeded generator
    Random { count: usize, seed: u64 },
}

impl BenchmarkSelection {
    /// The answers to play
    #[must_use]
    pub fn pick(self, answers: &[Word]) -> Vec<Word> {
        match self {
            Self::First(count) => answers.iter().take(count).cloned().collect(),
            Self::Random { count, seed } => {
                let mut rng = StdRng::seed_from_u64(seed);
                answers.choose_multiple(&mut rng, count).cloned().collect()
            }
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Solved games by number of guesses
    pub distribution: BTreeMap<usize, usize>,
    pub failures: Vec<Word>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Play one game per selected answer and collect statistics
///
/// Guess counts only cover solved games.
///
/// # Errors
///
/// Returns an error if any game fails; a game that merely runs out of rounds
/// is recorded as a failure instead.
pub fn run_benchmark<S: Strategy>(
    strategy: &mut S,
    dictionary: &Dictionary,
    selection: BenchmarkSelection,
    max_rounds: usize,
) -> Result<BenchmarkResult> {
    let targets = selection.pick(dictionary.answer_words());

    let start = Instant::now();
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution = BTreeMap::new();
    let mut failures = Vec::new();

    for target in targets.iter().cloned() {
        let answer = HiddenAnswer::new(target, dictionary)?;
        let record = play_game(strategy, &answer, max_rounds)
            .with_context(|| format!("benchmark game for '{}'", answer.word()))?;

        if record.solved {
            let guesses = record.guesses();
            total_guesses += guesses;
            min_guesses = min_guesses.min(guesses);
            max_guesses = max_guesses.max(guesses);
            *distribution.entry(guesses).or_insert(0) += 1;
        } else {
            failures.push(record.answer);
        }
    }

    let duration = start.elapsed();
    let total_words = targets.len();
    let solved = total_words - failures.len();

    Ok(BenchmarkResult {
        total_words,
        solved,
        total_guesses,
        average_guesses: if solved == 0 {
            0.0
        } else {
            total_guesses as f64 / solved as f64
        },
        min_guesses: if solved == 0 { 0 } else { min_guesses },
        max_guesses,
        distribution,
        failures,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{FrequencyStrategy, MinimaxStrategy};

    #[test]
    fn benchmark_runs() {
        let dict = Dictionary::embedded().unwrap();
        let mut strategy = MinimaxStrategy::new(&dict);

        let result =
            run_benchmark(&mut strategy, &dict, BenchmarkSelection::First(10), 6).unwrap();

        assert_eq!(result.total_words, 10);
        assert_eq!(result.solved, 10);
        assert!(result.failures.is_empty());
        assert!(result.min_guesses >= 1);
        assert!(result.max_guesses <= 6);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let dict = Dictionary::embedded().unwrap();
        let mut strategy = FrequencyStrategy::new(&dict);

        let selection = BenchmarkSelection::Random { count: 20, seed: 11 };
        let result = run_benchmark(&mut strategy, &dict, selection, 6).unwrap();

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.solved);

        let guesses: usize = result.distribution.iter().map(|(g, n)| g * n).sum();
        assert_eq!(guesses, result.total_guesses);
    }

    #[test]
    fn random_selection_is_seeded_and_distinct() {
        let dict = Dictionary::embedded().unwrap();
        let selection = BenchmarkSelection::Random { count: 25, seed: 3 };

        let first = selection.pick(dict.answer_words());
        assert_eq!(first, selection.pick(dict.answer_words()));
        assert_eq!(first.len(), 25);

        let mut unique = first.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 25);
    }

    #[test]
    fn selection_larger_than_answer_list() {
        let dict = Dictionary::from_strs(&[], &["crane", "crate", "grape"]).unwrap();

        assert_eq!(BenchmarkSelection::First(10).pick(dict.answer_words()).len(), 3);
        let random = BenchmarkSelection::Random { count: 10, seed: 0 };
        assert_eq!(random.pick(dict.answer_words()).len(), 3);
    }

    #[test]
    fn running_out_of_rounds_counts_as_failure() {
        let dict = Dictionary::embedded().unwrap();
        let mut strategy = MinimaxStrategy::new(&dict);

        let result =
            run_benchmark(&mut strategy, &dict, BenchmarkSelection::First(5), 1).unwrap();

        assert_eq!(result.total_words, 5);
        assert_eq!(result.solved + result.failures.len(), 5);
        assert!(result.failures.len() >= 4);
    }

    #[test]
    fn benchmark_metrics_consistency() {
        let dict = Dictionary::embedded().unwrap();
        let mut strategy = MinimaxStrategy::new(&dict);

        let result =
            run_benchmark(&mut strategy, &dict, BenchmarkSelection::First(10), 6).unwrap();

        assert!(result.average_guesses >= result.min_guesses as f64);
        assert!(result.average_guesses <= result.max_guesses as f64);
        for &guess_count in result.distribution.keys() {
            assert!((1..=6).contains(&guess_count));
        }
    }
}
