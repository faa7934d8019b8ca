//! Formatting utilities for terminal output

use crate::core::{CODE_LENGTH, Color, MatchResult, Sequence};
use colored::{ColoredString, Colorize};

/// Render one peg as its letter on a matching background
#[must_use]
pub fn peg_to_colored(color: Color) -> ColoredString {
    let label = format!(" {} ", color.as_char());
    match color {
        Color::Red => label.black().on_red(),
        Color::Orange => label.black().on_truecolor(255, 165, 0),
        Color::Yellow => label.black().on_yellow(),
        Color::Green => label.black().on_green(),
        Color::Blue => label.white().on_blue(),
        Color::Purple => label.white().on_magenta(),
    }
}

/// Render a code as colored pegs
#[must_use]
pub fn sequence_to_pegs(sequence: &Sequence) -> String {
    sequence
        .pegs()
        .iter()
        .map(|&color| peg_to_colored(color).to_string())
        .collect()
}

/// Format feedback as key pegs: `●` exact, `○` fuzzy, `·` empty
#[must_use]
pub fn feedback_pegs(result: MatchResult) -> String {
    let exact = usize::from(result.exact());
    let fuzzy = usize::from(result.fuzzy());
    format!(
        "{}{}{}",
        "●".repeat(exact),
        "○".repeat(fuzzy),
        "·".repeat(CODE_LENGTH.saturating_sub(exact + fuzzy))
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).round().max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_pegs_mixed() {
        let result = MatchResult::new(1, 2).unwrap();
        assert_eq!(feedback_pegs(result), "●○○·");
    }

    #[test]
    fn feedback_pegs_win() {
        assert_eq!(feedback_pegs(MatchResult::WIN), "●●●●");
    }

    #[test]
    fn feedback_pegs_nothing() {
        let result = MatchResult::new(0, 0).unwrap();
        assert_eq!(feedback_pegs(result), "····");
    }

    #[test]
    fn sequence_to_pegs_keeps_letters_in_order() {
        colored::control::set_override(false);
        let pegs = sequence_to_pegs(&Sequence::new("ROYP").unwrap());
        assert_eq!(pegs, " R  O  Y  P ");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        let bar = create_progress_bar(5.0, 0.0, 4);
        assert_eq!(bar, "░░░░");
    }
}
