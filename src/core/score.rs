//! Guess scoring
//!
//! A guess is scored against the secret as a pair of peg counts:
//! - exact: right color in the right position
//! - fuzzy: right color in the wrong position
//!
//! Fuzzy is derived from the unordered color overlap of the two codes minus the
//! exact matches, so duplicate colors are never counted twice.

use super::sequence::{CODE_LENGTH, Sequence, SequenceError};
use std::fmt;

/// Feedback for a single guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchResult {
    exact: u8,
    fuzzy: u8,
}

/// Error type for unparsable feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    Malformed(String),
    TooManyPegs { exact: u8, fuzzy: u8 },
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(input) => write!(
                f,
                "Could not read feedback {input:?}, expected two numbers like \"2 1\""
            ),
            Self::TooManyPegs { exact, fuzzy } => write!(
                f,
                "Feedback {exact} exact + {fuzzy} fuzzy exceeds {CODE_LENGTH} pegs"
            ),
        }
    }
}

impl std::error::Error for FeedbackError {}

impl MatchResult {
    /// Four exact matches
    pub const WIN: Self = Self {
        exact: CODE_LENGTH as u8,
        fuzzy: 0,
    };

    /// Create a result from peg counts
    ///
    /// # Errors
    /// Returns `FeedbackError::TooManyPegs` if `exact + fuzzy > 4`.
    pub fn new(exact: u8, fuzzy: u8) -> Result<Self, FeedbackError> {
        if exact as usize + fuzzy as usize > CODE_LENGTH {
            return Err(FeedbackError::TooManyPegs { exact, fuzzy });
        }
        Ok(Self { exact, fuzzy })
    }

    /// Score `guess` against `secret`
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{MatchResult, Sequence};
    ///
    /// let secret = Sequence::new("ROYY").unwrap();
    /// let guess = Sequence::new("YOOR").unwrap();
    /// let result = MatchResult::calculate(&secret, &guess);
    ///
    /// // O is in place; Y and R are present elsewhere
    /// assert_eq!(result.exact(), 1);
    /// assert_eq!(result.fuzzy(), 2);
    /// ```
    #[must_use]
    pub fn calculate(secret: &Sequence, guess: &Sequence) -> Self {
        let exact = secret
            .pegs()
            .iter()
            .zip(guess.pegs().iter())
            .filter(|(s, g)| s == g)
            .count() as u8;

        let total_overlap = secret.color_counts().overlap(&guess.color_counts());

        Self {
            exact,
            fuzzy: total_overlap - exact,
        }
    }

    /// Pegs with the right color in the right position
    #[inline]
    #[must_use]
    pub const fn exact(self) -> u8 {
        self.exact
    }

    /// Pegs with the right color in the wrong position
    #[inline]
    #[must_use]
    pub const fn fuzzy(self) -> u8 {
        self.fuzzy
    }

    /// Check if the guess was the secret
    #[inline]
    #[must_use]
    pub const fn is_win(self) -> bool {
        self.exact as usize == CODE_LENGTH
    }
}

/// Validate both codes and score `guess` against `secret`
///
/// # Errors
/// Returns `SequenceError` if either code is malformed.
///
/// # Examples
/// ```
/// use mastermind_solver::core::score;
///
/// let result = score("ROYY", "ROOP").unwrap();
/// assert_eq!((result.exact(), result.fuzzy()), (2, 0));
///
/// assert!(score("ROYG", "ROYX").is_err());
/// ```
pub fn score(secret: &str, guess: &str) -> Result<MatchResult, SequenceError> {
    let secret = Sequence::new(secret)?;
    let guess = Sequence::new(guess)?;
    Ok(MatchResult::calculate(&secret, &guess))
}

/// Check if a result is a win
#[inline]
#[must_use]
pub const fn is_win(result: MatchResult) -> bool {
    result.is_win()
}

impl std::str::FromStr for MatchResult {
    type Err = FeedbackError;

    /// Parse feedback like `"2 1"`, `"2,1"` or `"2/1"` (exact first)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || FeedbackError::Malformed(s.to_string());

        let parts: Vec<&str> = s
            .split(|c: char| c.is_whitespace() || c == ',' || c == '/')
            .filter(|part| !part.is_empty())
            .collect();

        let [exact, fuzzy] = parts.as_slice() else {
            return Err(malformed());
        };

        let exact: u8 = exact.parse().map_err(|_| malformed())?;
        let fuzzy: u8 = fuzzy.parse().map_err(|_| malformed())?;

        Self::new(exact, fuzzy)
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} exact, {} fuzzy", self.exact, self.fuzzy)
    }
}
