//! Wordle Minimax - CLI
//!
//! Solve, analyze and benchmark with the minimax or frequency strategy.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use log::info;
use wordle_minimax::{
    commands::{
        BenchmarkSelection, DEFAULT_MAX_ROUNDS, SolveConfig, TestAllConfig, analyze_word,
        run_benchmark, run_test_all, solve_word,
    },
    output::{
        print_analysis_result, print_benchmark_result, print_solve_result,
        print_test_all_statistics,
    },
    solver::{
        StrategyType,
        minimax::{DEFAULT_SHORTLIST_CAP, MinimaxConfig, SearchThreshold},
    },
    wordlists::{ANSWERS, Dictionary, loader::load_from_file, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle_minimax",
    about = "Wordle solver using letter frequency and worst-case partition search",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: minimax (default) or frequency
    #[arg(short, long, global = true, default_value = "minimax")]
    strategy: String,

    /// Wordlist: 'all' (default), 'answers' (answers only), or path to a guess list
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// Most tied top-scoring words the partition search evaluates
    #[arg(long, global = true, default_value_t = DEFAULT_SHORTLIST_CAP)]
    shortlist_cap: usize,

    /// Search only above this many candidates (default: the word length)
    #[arg(long, global = true)]
    search_threshold: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts and worst cases per turn
        #[arg(short, long)]
        verbose: bool,

        /// Guess budget
        #[arg(short = 'r', long, default_value_t = DEFAULT_MAX_ROUNDS)]
        max_rounds: usize,
    },

    /// Analyze a guess against all possible answers
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Benchmark solver performance
    Benchmark {
        /// Number of answers to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Draw answers at random with this seed instead of taking the first N
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Test solver on ALL possible answers
    TestAll {
        /// Limit number of words to test
        #[arg(short, long)]
        limit: Option<usize>,

        /// Guess budget per game
        #[arg(short = 'r', long, default_value_t = DEFAULT_MAX_ROUNDS)]
        max_rounds: usize,
    },
}

impl Cli {
    fn minimax_config(&self) -> MinimaxConfig {
        let threshold = self
            .search_threshold
            .map_or(SearchThreshold::WordLength, SearchThreshold::Fixed);
        MinimaxConfig::new(self.shortlist_cap, threshold)
    }
}

/// Load wordlists based on the -w flag
///
/// - "all": embedded guessable list with the embedded answers
/// - "answers": only the answers, for both guessing and solving
/// - "<path>": guessable words from a file, embedded answers
fn load_dictionary(wordlist_mode: &str) -> Result<Dictionary> {
    let dictionary = match wordlist_mode {
        "all" => Dictionary::embedded()?,
        "answers" => Dictionary::answers_only(words_from_slice(ANSWERS))?,
        path => {
            let guessable = load_from_file(path)
                .with_context(|| format!("failed to read word list '{path}'"))?;
            Dictionary::new(guessable, words_from_slice(ANSWERS))
                .with_context(|| format!("word list '{path}' does not fit the answers"))?
        }
    };

    info!(
        "{} guessable words, {} answers",
        dictionary.guessable_words().len(),
        dictionary.answer_words().len()
    );
    Ok(dictionary)
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let Some(command) = &cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let dictionary = load_dictionary(&cli.wordlist)?;
    let config = cli.minimax_config();

    match command {
        Commands::Solve {
            word,
            verbose,
            max_rounds,
        } => {
            let mut strategy = StrategyType::from_name(&cli.strategy, &dictionary, config);
            let solve_config = SolveConfig::new(word.clone()).with_max_rounds(*max_rounds);
            let result = solve_word(&solve_config, &dictionary, &mut strategy)?;
            print_solve_result(&result, *verbose);
        }
        Commands::Analyze { word } => {
            let result = analyze_word(word, &dictionary)?;
            print_analysis_result(&result);
        }
        Commands::Benchmark { count, seed } => {
            let selection = match seed {
                Some(seed) => {
                    println!("Running benchmark on {count} random words (seed {seed})...");
                    BenchmarkSelection::Random {
                        count: *count,
                        seed: *seed,
                    }
                }
                None => {
                    println!("Running benchmark on the first {count} words...");
                    BenchmarkSelection::First(*count)
                }
            };
            let mut strategy = StrategyType::from_name(&cli.strategy, &dictionary, config);
            let result = run_benchmark(&mut strategy, &dictionary, selection, DEFAULT_MAX_ROUNDS)?;
            print_benchmark_result(&result);
        }
        Commands::TestAll { limit, max_rounds } => {
            println!("\n{}", "═".repeat(70));
            println!(" Comprehensive Wordle Solver Test ");
            println!("{}", "═".repeat(70));
            println!(
                "\nTesting against {} possible answers",
                dictionary.answer_words().len()
            );
            println!("Strategy: {}\n", cli.strategy);

            let test_config = TestAllConfig {
                strategy: cli.strategy.clone(),
                minimax: config,
                limit: *limit,
                max_rounds: *max_rounds,
                show_progress: true,
            };
            let stats = run_test_all(&dictionary, &test_config)?;
            print_test_all_statistics(&stats);
        }
    }

    Ok(())
}
