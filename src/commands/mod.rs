//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod solve;
pub mod test_all;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{BenchmarkResult, BenchmarkSelection, run_benchmark};
pub use solve::{DEFAULT_MAX_ROUNDS, GuessStep, SolveConfig, SolveResult, solve_word};
pub use test_all::{TestAllConfig, TestAllStatistics, run_test_all};
