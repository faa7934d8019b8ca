//! Guess scoring command
//!
//! Scores one guess against one secret.

use crate::core::{MatchResult, Sequence};

/// Result of scoring a guess
pub struct ScoreResult {
    pub secret: Sequence,
    pub guess: Sequence,
    pub result: MatchResult,
}

/// Score `guess` against `secret`
///
/// Codes typed on the command line may be lowercase.
///
/// # Errors
///
/// Returns an error if either code is invalid (not 4 pegs or a color outside `ROYGBP`).
pub fn score_guess(secret: &str, guess: &str) -> Result<ScoreResult, String> {
    let secret = Sequence::new(&secret.to_ascii_uppercase())
        .map_err(|e| format!("Invalid secret code: {e}"))?;
    let guess =
        Sequence::new(&guess.to_ascii_uppercase()).map_err(|e| format!("Invalid guess: {e}"))?;

    Ok(ScoreResult {
        secret,
        guess,
        result: MatchResult::calculate(&secret, &guess),
    })
}
