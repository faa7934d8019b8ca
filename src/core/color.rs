//! Peg colors and per-color tallies
//!
//! The alphabet is closed (six colors), so counts live in a fixed array indexed
//! by color rather than in a map.

use std::fmt;

/// One of the six peg colors, in alphabet order `R O Y G B P`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
}

impl Color {
    /// Number of colors in the alphabet
    pub const COUNT: usize = 6;

    /// All colors in alphabet order
    pub const ALL: [Self; Self::COUNT] = [
        Self::Red,
        Self::Orange,
        Self::Yellow,
        Self::Green,
        Self::Blue,
        Self::Purple,
    ];

    /// Parse a color from its uppercase letter
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Color;
    ///
    /// assert_eq!(Color::from_char('Y'), Some(Color::Yellow));
    /// assert_eq!(Color::from_char('y'), None);
    /// assert_eq!(Color::from_char('X'), None);
    /// ```
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'R' => Some(Self::Red),
            'O' => Some(Self::Orange),
            'Y' => Some(Self::Yellow),
            'G' => Some(Self::Green),
            'B' => Some(Self::Blue),
            'P' => Some(Self::Purple),
            _ => None,
        }
    }

    /// The color's letter
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Red => 'R',
            Self::Orange => 'O',
            Self::Yellow => 'Y',
            Self::Green => 'G',
            Self::Blue => 'B',
            Self::Purple => 'P',
        }
    }

    /// Position of the color in alphabet order (0-5)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Occurrence count of each color within a sequence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColorCount([u8; Color::COUNT]);

impl ColorCount {
    /// Count the colors in a slice
    #[must_use]
    pub fn from_colors(colors: &[Color]) -> Self {
        let mut counts = [0u8; Color::COUNT];
        for &color in colors {
            counts[color.index()] += 1;
        }
        Self(counts)
    }

    /// How many times `color` occurs
    #[inline]
    #[must_use]
    pub const fn get(&self, color: Color) -> u8 {
        self.0[color.index()]
    }

    /// Colors with a nonzero count, in alphabet order
    pub fn iter(&self) -> impl Iterator<Item = (Color, u8)> + '_ {
        Color::ALL
            .into_iter()
            .map(|color| (color, self.get(color)))
            .filter(|&(_, count)| count > 0)
    }

    /// Sum over colors of `min(self[color], other[color])`
    ///
    /// This is the total number of pegs two sequences share when position is ignored.
    #[must_use]
    pub fn overlap(&self, other: &Self) -> u8 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(&a, &b)| a.min(b))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_letters_round_trip() {
        for color in Color::ALL {
            assert_eq!(Color::from_char(color.as_char()), Some(color));
        }
    }

    #[test]
    fn color_parsing_rejects_lowercase() {
        assert_eq!(Color::from_char('P'), Some(Color::Purple));
        for ch in ['r', 'o', 'y', 'g', 'b', 'p'] {
            assert_eq!(Color::from_char(ch), None, "{ch:?} should be rejected");
        }
    }

    #[test]
    fn color_parsing_rejects_unknown_letters() {
        for ch in ['X', 'W', '1', ' ', 'S'] {
            assert_eq!(Color::from_char(ch), None, "{ch:?} should be rejected");
        }
    }

    #[test]
    fn alphabet_order_matches_index() {
        for (i, color) in Color::ALL.iter().enumerate() {
            assert_eq!(color.index(), i);
        }
    }

    #[test]
    fn color_count_tallies_duplicates() {
        let counts = ColorCount::from_colors(&[
            Color::Red,
            Color::Orange,
            Color::Yellow,
            Color::Yellow,
        ]);
        assert_eq!(counts.get(Color::Red), 1);
        assert_eq!(counts.get(Color::Orange), 1);
        assert_eq!(counts.get(Color::Yellow), 2);
        assert_eq!(counts.get(Color::Purple), 0);
    }

    #[test]
    fn color_count_iter_skips_absent_colors() {
        let counts = ColorCount::from_colors(&[Color::Blue, Color::Red, Color::Blue]);
        let present: Vec<(Color, u8)> = counts.iter().collect();
        assert_eq!(present, vec![(Color::Red, 1), (Color::Blue, 2)]);
    }

    #[test]
    fn overlap_takes_minimum_per_color() {
        let a = ColorCount::from_colors(&[Color::Red, Color::Red, Color::Green, Color::Blue]);
        let b = ColorCount::from_colors(&[Color::Red, Color::Green, Color::Green, Color::Purple]);
        // R: min(2,1)=1, G: min(1,2)=1
        assert_eq!(a.overlap(&b), 2);
        assert_eq!(b.overlap(&a), 2);
    }
}
