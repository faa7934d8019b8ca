//! Mastermind code sequences
//!
//! A Sequence is four pegs drawn from the six-color alphabet. Construction validates
//! the input, so every `Sequence` value is well-formed.

use super::color::{Color, ColorCount};
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Number of pegs in a code
pub const CODE_LENGTH: usize = 4;

/// Number of distinct codes (6^4)
pub const CODE_SPACE: usize = 1296;

/// A 4-peg Mastermind code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Sequence([Color; CODE_LENGTH]);

/// Error type for malformed codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    InvalidLength(usize),
    InvalidColor { symbol: char, position: usize },
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Code must be exactly {CODE_LENGTH} pegs, got {len}")
            }
            Self::InvalidColor { symbol, position } => write!(
                f,
                "Invalid color {symbol:?} at position {}, expected one of R O Y G B P",
                position + 1
            ),
        }
    }
}

impl std::error::Error for SequenceError {}

/// Check that `text` is a well-formed code
///
/// # Errors
/// Returns `SequenceError` if:
/// - Length is not exactly 4
/// - Any symbol is outside `R O Y G B P`
pub fn validate(text: &str) -> Result<(), SequenceError> {
    Sequence::new(text).map(|_| ())
}

impl Sequence {
    /// Create a new Sequence from its letters
    ///
    /// # Errors
    /// Returns `SequenceError` if the length is not 4 or a letter is not a color.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Sequence;
    ///
    /// let code = Sequence::new("ROYY").unwrap();
    /// assert_eq!(code.to_string(), "ROYY");
    ///
    /// assert!(Sequence::new("royy").is_err());
    /// assert!(Sequence::new("ROY").is_err());
    /// assert!(Sequence::new("ROYX").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, SequenceError> {
        let len = text.chars().count();
        if len != CODE_LENGTH {
            return Err(SequenceError::InvalidLength(len));
        }

        let mut pegs = [Color::Red; CODE_LENGTH];
        for (position, symbol) in text.chars().enumerate() {
            pegs[position] =
                Color::from_char(symbol).ok_or(SequenceError::InvalidColor { symbol, position })?;
        }

        Ok(Self(pegs))
    }

    /// Build a sequence directly from pegs
    #[inline]
    #[must_use]
    pub const fn from_pegs(pegs: [Color; CODE_LENGTH]) -> Self {
        Self(pegs)
    }

    /// A pure guess: `color` in every position
    #[inline]
    #[must_use]
    pub const fn pure(color: Color) -> Self {
        Self([color; CODE_LENGTH])
    }

    /// The pegs in order
    #[inline]
    #[must_use]
    pub const fn pegs(&self) -> &[Color; CODE_LENGTH] {
        &self.0
    }

    /// The peg at a specific position (0-3)
    ///
    /// # Panics
    /// Panics if position >= 4
    #[inline]
    #[must_use]
    pub const fn peg_at(&self, position: usize) -> Color {
        self.0[position]
    }

    /// Count the occurrences of each color
    #[must_use]
    pub fn color_counts(&self) -> ColorCount {
        ColorCount::from_colors(&self.0)
    }

    /// The code at `index` in lexicographic alphabet order (`RRRR` = 0, `PPPP` = 1295)
    ///
    /// # Panics
    /// Panics if index >= 1296
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        assert!(index < CODE_SPACE, "code index must be < {CODE_SPACE}");
        let mut pegs = [Color::Red; CODE_LENGTH];
        let mut rest = index;
        for peg in pegs.iter_mut().rev() {
            *peg = Color::ALL[rest % Color::COUNT];
            rest /= Color::COUNT;
        }
        Self(pegs)
    }

    /// Every code in the game, in lexicographic alphabet order
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Sequence;
    ///
    /// let all: Vec<Sequence> = Sequence::all().collect();
    /// assert_eq!(all.len(), 1296);
    /// assert_eq!(all[0].to_string(), "RRRR");
    /// assert_eq!(all[1295].to_string(), "PPPP");
    /// ```
    pub fn all() -> impl ExactSizeIterator<Item = Self> + DoubleEndedIterator {
        (0..CODE_SPACE).map(Self::from_index)
    }

    /// Draw a uniformly random code from the supplied source
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_index(rng.random_range(0..CODE_SPACE))
    }
}

impl FromStr for Sequence {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for color in self.0 {
            write!(f, "{color}")?;
        }
        Ok(())
    }
}
