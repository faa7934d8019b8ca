//! Mastermind solving
//!
//! A deterministic heuristic: a color census followed by positional placement.

mod codemaker;
mod engine;

pub use codemaker::{Codemaker, SecretCodemaker};
pub use engine::{Phase, Solution, SolveError, Solver, Turn, solve};
