//! Command implementations

pub mod benchmark;
pub mod play;
pub mod score;
pub mod solve;
pub mod test_all;

pub use benchmark::{BenchmarkResult, run_benchmark, run_benchmark_on};
pub use play::{PromptCodemaker, run_interactive};
pub use score::{ScoreResult, score_guess};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_code};
pub use test_all::{
    DEFAULT_WIN_THRESHOLD, TestAllStatistics, print_test_all_statistics, run_test_all,
};
