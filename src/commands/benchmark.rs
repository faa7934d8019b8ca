//! Benchmark command
//!
//! Tests solver performance across randomly drawn secrets.

use crate::core::Sequence;
use crate::solver::solve;
use rand::Rng;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_codes: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub codes_per_second: f64,
}

/// Run benchmark on `count` secrets drawn from `rng`
///
/// The caller owns the random source, so a seeded generator gives a reproducible run.
pub fn run_benchmark<R: Rng + ?Sized>(count: usize, rng: &mut R) -> BenchmarkResult {
    let secrets: Vec<Sequence> = (0..count).map(|_| Sequence::random(&mut *rng)).collect();
    run_benchmark_on(&secrets)
}

/// Run benchmark on a fixed set of secrets
#[must_use]
pub fn run_benchmark_on(secrets: &[Sequence]) -> BenchmarkResult {
    let start = Instant::now();
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();

    for secret in secrets {
        let guesses = solve(secret).guesses;

        total_guesses += guesses;
        min_guesses = min_guesses.min(guesses);
        max_guesses = max_guesses.max(guesses);
        *distribution.entry(guesses).or_insert(0) += 1;
    }

    let duration = start.elapsed();
    let total_codes = secrets.len();

    BenchmarkResult {
        total_codes,
        total_guesses,
        average_guesses: if total_codes > 0 {
            total_guesses as f64 / total_codes as f64
        } else {
            0.0
        },
        min_guesses: if total_codes > 0 { min_guesses } else { 0 },
        max_guesses,
        distribution,
        duration,
        codes_per_second: total_codes as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
