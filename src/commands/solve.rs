//! Code solving command
//!
//! Solves a specific secret and returns the solution path.

use crate::core::{MatchResult, Sequence};
use crate::solver::{Phase, SecretCodemaker, Solver};

/// Configuration for solving a code
pub struct SolveConfig {
    pub secret: String,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(secret: String) -> Self {
        Self { secret }
    }
}

/// Result of solving a code
pub struct SolveResult {
    pub secret: Sequence,
    pub deduced: Sequence,
    /// Includes the final submission of the deduced code
    pub total_guesses: usize,
    pub guesses: Vec<GuessStep>,
}

impl SolveResult {
    /// Whether the deduced code matches the secret
    #[must_use]
    pub fn success(&self) -> bool {
        MatchResult::calculate(&self.secret, &self.deduced).is_win()
    }
}

/// A single scored guess in the solution
pub struct GuessStep {
    pub guess: Sequence,
    pub result: MatchResult,
    pub phase: Phase,
}

/// Solve a specific secret
///
/// The secret may be given in lowercase.
///
/// # Errors
///
/// Returns an error if:
/// - The secret is not a valid code (length other than 4 or a color outside `ROYGBP`)
/// - The solver rejects the feedback it receives
pub fn solve_code(config: SolveConfig) -> Result<SolveResult, String> {
    let secret = Sequence::new(&config.secret.to_ascii_uppercase())
        .map_err(|e| format!("Invalid secret code: {e}"))?;

    let mut solver = Solver::new();
    let mut codemaker = SecretCodemaker::new(secret);
    let solution = solver.run(&mut codemaker).map_err(|e| e.to_string())?;

    let guesses = solver
        .history()
        .iter()
        .map(|turn| GuessStep {
            guess: turn.guess,
            result: turn.result,
            phase: turn.phase,
        })
        .collect();

    Ok(SolveResult {
        secret,
        deduced: solution.sequence,
        total_guesses: solution.guesses,
        guesses,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solve_code_succeeds() {
        let result = solve_code(SolveConfig::new("ROYY".to_string())).unwrap();

        assert!(result.success());
        assert_eq!(result.deduced.to_string(), "ROYY");
        assert_eq!(result.total_guesses, 6);
    }

    #[test]
    fn solve_records_history() {
        let result = solve_code(SolveConfig::new("BPPG".to_string())).unwrap();

        // Every scored guess is listed; the final submission is not scored.
        assert_eq!(result.guesses.len() + 1, result.total_guesses);

        // Census guesses come first and are all single-color.
        let census: Vec<&GuessStep> = result
            .guesses
            .iter()
            .take_while(|step| step.phase == Phase::CensusInProgress)
            .collect();
        assert!(!census.is_empty());
        for step in census {
            let first = step.guess.peg_at(0);
            assert!(step.guess.pegs().iter().all(|&peg| peg == first));
            assert_eq!(step.result.fuzzy(), 0);
        }
    }

    #[test]
    fn solve_accepts_lowercase_secret() {
        let result = solve_code(SolveConfig::new("gobp".to_string())).unwrap();
        assert_eq!(result.secret.to_string(), "GOBP");
        assert!(result.success());
    }

    #[test]
    fn solve_invalid_secret_returns_error() {
        let err = solve_code(SolveConfig::new("ROYX".to_string())).err().unwrap();
        assert!(err.starts_with("Invalid secret code"));

        assert!(solve_code(SolveConfig::new("ROYGB".to_string())).is_err());
    }

    #[test]
    fn solve_monochrome_wins_on_census_guess() {
        let result = solve_code(SolveConfig::new("OOOO".to_string())).unwrap();

        assert_eq!(result.total_guesses, 2);
        assert_eq!(result.guesses.len(), 2);
        assert!(result.guesses[1].result.is_win());
    }
}
