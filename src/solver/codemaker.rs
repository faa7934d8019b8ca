//! The other side of the table
//!
//! The solver never sees the secret. It hands each guess to a `Codemaker` and works only
//! from the feedback that comes back.

use super::engine::SolveError;
use crate::core::{MatchResult, Sequence};

/// Whoever holds the secret and answers guesses
pub trait Codemaker {
    /// Score `guess` against the hidden secret
    ///
    /// # Errors
    /// Implementations may fail when feedback cannot be produced, e.g. a human quits.
    fn respond(&mut self, guess: &Sequence) -> Result<MatchResult, SolveError>;
}

/// Codemaker backed by a known secret
///
/// Counts how many guesses it has scored.
#[derive(Debug, Clone)]
pub struct SecretCodemaker {
    secret: Sequence,
    scored: usize,
}

impl SecretCodemaker {
    #[must_use]
    pub const fn new(secret: Sequence) -> Self {
        Self { secret, scored: 0 }
    }

    /// Number of guesses scored so far
    #[must_use]
    pub const fn scored(&self) -> usize {
        self.scored
    }
}

impl Codemaker for SecretCodemaker {
    fn respond(&mut self, guess: &Sequence) -> Result<MatchResult, SolveError> {
        self.scored += 1;
        Ok(MatchResult::calculate(&self.secret, guess))
    }
}
