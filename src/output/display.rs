//! Display functions for command results

use super::formatters::{feedback_pegs, sequence_to_pegs};
use crate::commands::{BenchmarkResult, ScoreResult, SolveResult};
use crate::solver::Phase;
use colored::Colorize;

/// Print the result of scoring a guess
pub fn print_score_result(result: &ScoreResult) {
    println!("\nSecret: {}", sequence_to_pegs(&result.secret));
    println!("Guess:  {}", sequence_to_pegs(&result.guess));
    println!(
        "\n{}  {}",
        feedback_pegs(result.result).bright_white().bold(),
        result.result
    );
    if result.result.is_win() {
        println!("{}", "✅ That's the code!".green().bold());
    }
}

/// Print the result of solving a code
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.secret.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {turn:2}: {} {}",
            sequence_to_pegs(&step.guess),
            feedback_pegs(step.result)
        );

        if verbose {
            let phase = match step.phase {
                Phase::CensusInProgress => "census",
                Phase::CensusComplete | Phase::PlacementInProgress => "placement",
                Phase::Solved(_) => "solved",
            };
            println!("  Phase:   {phase}");
            println!("  Result:  {}", step.result);
        }
    }

    if result.total_guesses > result.guesses.len() {
        println!(
            "\nTurn {:2}: {} (deduced)",
            result.total_guesses,
            sequence_to_pegs(&result.deduced)
        );
    }

    println!();
    if result.success() {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.total_guesses)
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!(
                "❌ Deduced {} after {} guesses, but the secret was {}",
                result.deduced, result.total_guesses, result.secret
            )
            .red()
            .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Codes tested:     {}", result.total_codes);
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.3}s", result.duration.as_secs_f64());
    println!("   Codes/second:     {:.1}", result.codes_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for guess_count in result.min_guesses..=result.max_guesses {
        if let Some(&count) = result.distribution.get(&guess_count) {
            let pct = (count as f64 / result.total_codes as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░"
                    .repeat(40_usize.saturating_sub(bar_width))
                    .bright_black()
            );
            println!("   {guess_count:2}: {bar} {count:4} ({pct:5.1}%)");
        }
    }
}
