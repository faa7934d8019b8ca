//! Core domain types for Mastermind
//!
//! This module contains the code representation and the scoring rules. Everything here is
//! pure: no I/O, no shared state.

mod color;
mod score;
mod sequence;

pub use color::{Color, ColorCount};
pub use score::{FeedbackError, MatchResult, is_win, score};
pub use sequence::{CODE_LENGTH, CODE_SPACE, Sequence, SequenceError, validate};
