//! Test all secrets - exhaustive solver evaluation
//!
//! Runs the solver against every code in the game and generates statistics.

use crate::core::Sequence;
use crate::output::formatters::{create_progress_bar, sequence_to_pegs};
use crate::solver::solve;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Default number of guesses a solve must finish within to count as a winner
pub const DEFAULT_WIN_THRESHOLD: usize = 10;

/// Result from testing a single secret
#[derive(Debug, Clone, Copy)]
pub struct CodeTestResult {
    pub secret: Sequence,
    pub deduced: Sequence,
    pub num_guesses: usize,
}

impl CodeTestResult {
    #[must_use]
    pub fn success(&self) -> bool {
        self.secret == self.deduced
    }
}

/// Statistics from testing all secrets
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_codes: usize,
    pub solved: usize,
    pub failed: usize,
    pub win_threshold: usize,
    /// Solved within `win_threshold` guesses
    pub winners: usize,
    pub guess_distribution: FxHashMap<usize, usize>,
    /// Guess count of every secret, in code-space order
    pub guess_counts: Vec<usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    pub worst_codes: Vec<(Sequence, usize)>,
}

impl TestAllStatistics {
    /// Percentage of secrets solved within the threshold
    #[must_use]
    pub fn winner_percentage(&self) -> f64 {
        if self.total_codes == 0 {
            return 0.0;
        }
        self.winners as f64 / self.total_codes as f64 * 100.0
    }
}

/// Run the solver on every secret (or the first `limit` in code-space order)
///
/// Secrets are solved in parallel; each solve is independent.
///
/// # Panics
///
/// Will not panic - the progress template is a fixed, valid string.
pub fn run_test_all(limit: Option<usize>, win_threshold: usize) -> TestAllStatistics {
    let secrets: Vec<Sequence> = Sequence::all()
        .take(limit.unwrap_or(usize::MAX))
        .collect();

    println!("🎯 Testing {} codes...", secrets.len());

    let pb = ProgressBar::new(secrets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .expect("progress template is valid")
            .progress_chars("█▓▒░"),
    );

    let total_start = Instant::now();

    let results: Vec<CodeTestResult> = secrets
        .par_iter()
        .map(|secret| {
            let solution = solve(secret);
            pb.inc(1);
            CodeTestResult {
                secret: *secret,
                deduced: solution.sequence,
                num_guesses: solution.guesses,
            }
        })
        .collect();

    pb.finish_with_message("Complete!");

    summarize(&results, win_threshold, total_start.elapsed())
}

/// Build statistics from individual results
#[must_use]
pub fn summarize(
    results: &[CodeTestResult],
    win_threshold: usize,
    total_time: Duration,
) -> TestAllStatistics {
    let mut guess_distribution: FxHashMap<usize, usize> = FxHashMap::default();
    for result in results.iter().filter(|r| r.success()) {
        *guess_distribution.entry(result.num_guesses).or_insert(0) += 1;
    }

    let solved: Vec<&CodeTestResult> = results.iter().filter(|r| r.success()).collect();
    let solved_count = solved.len();

    let total_guesses: usize = solved.iter().map(|r| r.num_guesses).sum();
    let average_guesses = if solved_count > 0 {
        total_guesses as f64 / solved_count as f64
    } else {
        0.0
    };

    let winners = solved
        .iter()
        .filter(|r| r.num_guesses <= win_threshold)
        .count();

    let mut worst_codes: Vec<(Sequence, usize)> = solved
        .iter()
        .filter(|r| r.num_guesses > win_threshold)
        .map(|r| (r.secret, r.num_guesses))
        .collect();
    worst_codes.sort_by_key(|&(secret, n)| (std::cmp::Reverse(n), secret));
    worst_codes.truncate(10);

    TestAllStatistics {
        total_codes: results.len(),
        solved: solved_count,
        failed: results.len() - solved_count,
        win_threshold,
        winners,
        guess_distribution,
        guess_counts: results.iter().map(|r| r.num_guesses).collect(),
        total_time,
        average_guesses,
        max_guesses: solved.iter().map(|r| r.num_guesses).max().unwrap_or(0),
        min_guesses: solved.iter().map(|r| r.num_guesses).min().unwrap_or(0),
        worst_codes,
    }
}

/// Print test-all statistics with a guess-count histogram
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total codes tested:  {}", stats.total_codes);
    println!(
        "  Correctly deduced:   {} {}",
        stats.solved,
        format!(
            "({:.1}%)",
            stats.solved as f64 / stats.total_codes.max(1) as f64 * 100.0
        )
        .green()
    );
    if stats.failed > 0 {
        println!(
            "  Wrong deductions:    {} {}",
            stats.failed,
            format!(
                "({:.1}%)",
                stats.failed as f64 / stats.total_codes.max(1) as f64 * 100.0
            )
            .red()
        );
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Guess range:         {} - {}",
        stats.min_guesses, stats.max_guesses
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = *stats.guess_distribution.values().max().unwrap_or(&1);
    for guesses in stats.min_guesses..=stats.max_guesses {
        let count = *stats.guess_distribution.get(&guesses).unwrap_or(&0);
        if stats.solved > 0 {
            let percentage = count as f64 / stats.solved as f64 * 100.0;
            let bar = create_progress_bar(count as f64, max_count as f64, 40);
            let bar = if guesses <= stats.win_threshold {
                bar.green()
            } else {
                bar.yellow()
            };
            println!("  {guesses:2} guesses: {bar} {count:4} ({percentage:5.1}%)");
        }
    }

    let winners = format!(
        "{:.2}% winners (solved within {} guesses)",
        stats.winner_percentage(),
        stats.win_threshold
    );
    println!("\n🏆 {}", winners.bright_green().bold());

    if !stats.worst_codes.is_empty() {
        println!(
            "\n😰 {}",
            format!("Hardest Codes (> {} guesses)", stats.win_threshold)
                .yellow()
                .bold()
        );
        for (secret, guesses) in stats.worst_codes.iter().take(5) {
            println!("  {} ({guesses} guesses)", sequence_to_pegs(secret));
        }
    }
}
