//! Mastermind Solver - CLI
//!
//! Scores guesses, solves codes, and measures the solver over the whole code space.

use anyhow::Result;
use clap::{Parser, Subcommand};
use mastermind_solver::{
    commands::{
        DEFAULT_WIN_THRESHOLD, SolveConfig, print_test_all_statistics, run_benchmark,
        run_interactive, run_test_all, score_guess, solve_code,
    },
    core::CODE_SPACE,
    output::{print_benchmark_result, print_score_result, print_solve_result},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Mastermind code breaker: color census, then positional placement",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a guess against a secret code
    Score {
        /// The secret code, e.g. ROYY
        secret: String,

        /// The guess to score
        guess: String,
    },

    /// Solve a specific secret code
    Solve {
        /// The secret code to solve
        secret: String,

        /// Show the solver phase and feedback for every turn
        #[arg(short, long)]
        verbose: bool,
    },

    /// Hold a secret yourself and score the solver's guesses
    Play,

    /// Benchmark the solver on randomly drawn secrets
    Benchmark {
        /// Number of random secrets to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Seed for drawing secrets
        #[arg(short, long, default_value = "1")]
        seed: u64,
    },

    /// Test the solver on ALL possible secrets (default)
    TestAll {
        /// Limit number of secrets to test
        #[arg(short, long)]
        limit: Option<usize>,

        /// Guess count a solve must finish within to count as a winner
        #[arg(short, long, default_value_t = DEFAULT_WIN_THRESHOLD)]
        threshold: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to the exhaustive run if no command given
    let command = cli.command.unwrap_or(Commands::TestAll {
        limit: None,
        threshold: DEFAULT_WIN_THRESHOLD,
    });

    match command {
        Commands::Score { secret, guess } => run_score_command(&secret, &guess),
        Commands::Solve { secret, verbose } => run_solve_command(secret, verbose),
        Commands::Play => run_play_command(),
        Commands::Benchmark { count, seed } => {
            run_benchmark_command(count, seed);
            Ok(())
        }
        Commands::TestAll { limit, threshold } => {
            run_test_all_command(limit, threshold);
            Ok(())
        }
    }
}

fn run_score_command(secret: &str, guess: &str) -> Result<()> {
    let result = score_guess(secret, guess).map_err(|e| anyhow::anyhow!(e))?;
    print_score_result(&result);
    Ok(())
}

fn run_solve_command(secret: String, verbose: bool) -> Result<()> {
    let config = SolveConfig::new(secret);
    let result = solve_code(config).map_err(|e| anyhow::anyhow!(e))?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn run_play_command() -> Result<()> {
    let stdin = io::stdin();
    run_interactive(stdin.lock(), io::stdout()).map_err(|e| anyhow::anyhow!(e))?;
    Ok(())
}

fn run_benchmark_command(count: usize, seed: u64) {
    println!("Running benchmark on {count} random codes (seed {seed})...");

    let mut rng = StdRng::seed_from_u64(seed);
    let result = run_benchmark(count, &mut rng);
    print_benchmark_result(&result);
}

fn run_test_all_command(limit: Option<usize>, threshold: usize) {
    println!("\n{}", "═".repeat(70));
    println!(" Comprehensive Mastermind Solver Test ");
    println!("{}", "═".repeat(70));
    println!(
        "\nTesting against {} possible codes",
        limit.map_or(CODE_SPACE, |limit| limit.min(CODE_SPACE))
    );
    println!("Winning threshold: {threshold} guesses");
    println!();

    let stats = run_test_all(limit, threshold);
    print_test_all_statistics(&stats);
}
