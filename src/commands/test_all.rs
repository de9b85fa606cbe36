//! Test all answers - comprehensive solver evaluation
//!
//! Plays every answer word in parallel, one strategy instance per worker, and
//! aggregates the results.

use crate::core::Word;
use crate::solver::minimax::MinimaxConfig;
use crate::solver::{GameRecord, HiddenAnswer, StrategyType, play_game};
use crate::wordlists::Dictionary;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// How a test-all run is set up
#[derive(Debug, Clone)]
pub struct TestAllConfig {
    pub strategy: String,
    pub minimax: MinimaxConfig,
    /// Test only the first N answers
    pub limit: Option<usize>,
    pub max_rounds: usize,
    pub show_progress: bool,
}

/// Statistics from testing all words
#[derive(Debug)]
pub struct TestAllStatistics {
    pub strategy: &'static str,
    pub total_words: usize,
    pub solved: usize,
    /// Answers not found within the round budget
    pub failures: Vec<Word>,
    /// Solved games by number of guesses
    pub guess_distribution: BTreeMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    /// Solved answers needing the most guesses, hardest first
    pub hardest_words: Vec<(Word, usize)>,
    pub first_guesses: BTreeMap<Word, usize>,
}

/// Run a fresh game for every answer word (or a limited subset)
///
/// # Errors
///
/// Returns an error if the progress template is invalid or any game fails
/// with a solver error.
pub fn run_test_all(dictionary: &Dictionary, config: &TestAllConfig) -> Result<TestAllStatistics> {
    let answers = dictionary.answer_words();
    let test_words = &answers[..config.limit.unwrap_or(answers.len()).min(answers.len())];

    let pb = if config.show_progress {
        ProgressBar::new(test_words.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
            .progress_chars("█▓▒░"),
    );

    let strategy_name =
        StrategyType::from_name(&config.strategy, dictionary, config.minimax).name();
    let total_start = Instant::now();

    let records = test_words
        .par_iter()
        .map_init(
            || StrategyType::from_name(&config.strategy, dictionary, config.minimax),
            |strategy, target| -> Result<GameRecord> {
                let answer = HiddenAnswer::new(target.clone(), dictionary)?;
                let record = play_game(strategy, &answer, config.max_rounds)
                    .with_context(|| format!("game for '{target}'"))?;
                pb.inc(1);
                Ok(record)
            },
        )
        .collect::<Result<Vec<_>>>()?;

    pb.finish_with_message("Complete!");

    Ok(summarize(strategy_name, &records, total_start.elapsed()))
}

fn summarize(
    strategy: &'static str,
    records: &[GameRecord],
    total_time: Duration,
) -> TestAllStatistics {
    let mut guess_distribution = BTreeMap::new();
    let mut first_guesses = BTreeMap::new();
    let mut failures = Vec::new();
    let mut solved_counts = Vec::new();

    for record in records {
        if let Some(first) = record.rounds.first() {
            *first_guesses.entry(first.guess.clone()).or_insert(0) += 1;
        }
        if record.solved {
            *guess_distribution.entry(record.guesses()).or_insert(0) += 1;
            solved_counts.push((record.answer.clone(), record.guesses()));
        } else {
            failures.push(record.answer.clone());
        }
    }

    let solved = solved_counts.len();
    let total_guesses: usize = solved_counts.iter().map(|(_, n)| n).sum();

    let mut hardest_words = solved_counts.clone();
    hardest_words.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
    hardest_words.truncate(10);

    TestAllStatistics {
        strategy,
        total_words: records.len(),
        solved,
        failures,
        guess_distribution,
        total_time,
        average_guesses: if solved == 0 {
            0.0
        } else {
            total_guesses as f64 / solved as f64
        },
        max_guesses: solved_counts.iter().map(|(_, n)| *n).max().unwrap_or(0),
        min_guesses: solved_counts.iter().map(|(_, n)| *n).min().unwrap_or(0),
        hardest_words,
        first_guesses,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(strategy: &str, limit: Option<usize>, max_rounds: usize) -> TestAllConfig {
        TestAllConfig {
            strategy: strategy.to_string(),
            minimax: MinimaxConfig::default(),
            limit,
            max_rounds,
            show_progress: false,
        }
    }

    // Holds for the embedded answers only; see the rhyming family test in
    // tests/solver_tests.rs for a list where six is not enough
    #[test]
    fn every_embedded_answer_is_solved_within_six() {
        let dict = Dictionary::embedded().unwrap();

        let stats = run_test_all(&dict, &config("minimax", None, 6)).unwrap();

        assert_eq!(stats.strategy, "minimax");
        assert_eq!(stats.total_words, dict.answer_words().len());
        assert!(stats.failures.is_empty(), "failed: {:?}", stats.failures);
        assert_eq!(stats.solved, stats.total_words);
        assert!(stats.max_guesses <= 6);
        assert_eq!(stats.first_guesses.len(), 1);
        assert_eq!(
            stats.first_guesses.get(&Word::new("crane").unwrap()),
            Some(&stats.total_words)
        );
    }

    #[test]
    fn limit_restricts_the_run() {
        let dict = Dictionary::embedded().unwrap();

        let stats = run_test_all(&dict, &config("frequency", Some(25), 6)).unwrap();

        assert_eq!(stats.strategy, "frequency");
        assert_eq!(stats.total_words, 25);
        let distribution_sum: usize = stats.guess_distribution.values().sum();
        assert_eq!(distribution_sum + stats.failures.len(), 25);
    }

    #[test]
    fn tight_budget_reports_failures() {
        let dict = Dictionary::embedded().unwrap();

        let stats = run_test_all(&dict, &config("minimax", Some(30), 2)).unwrap();

        assert!(!stats.failures.is_empty());
        assert_eq!(stats.solved + stats.failures.len(), 30);
        assert!(stats.hardest_words.iter().all(|(_, n)| *n <= 2));
    }

    #[test]
    fn parallel_results_match_sequential_play() {
        let dict = Dictionary::embedded().unwrap();
        let stats = run_test_all(&dict, &config("minimax", Some(40), 6)).unwrap();

        let mut strategy = StrategyType::from_name("minimax", &dict, MinimaxConfig::default());
        let mut distribution = BTreeMap::new();
        for target in &dict.answer_words()[..40] {
            let answer = HiddenAnswer::new(target.clone(), &dict).unwrap();
            let record = play_game(&mut strategy, &answer, 6).unwrap();
            *distribution.entry(record.guesses()).or_insert(0) += 1;
        }

        assert_eq!(stats.guess_distribution, distribution);
    }
}
