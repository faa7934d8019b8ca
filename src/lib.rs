//! Mastermind Solver
//!
//! Breaks a 4-peg, 6-color Mastermind code with a deterministic two-phase heuristic: a color
//! census with single-color guesses, then placement of each known color position by position.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind_solver::core::{MatchResult, Sequence};
//! use mastermind_solver::solver::solve;
//!
//! // Score a guess
//! let secret = Sequence::new("ROYY").unwrap();
//! let guess = Sequence::new("OGGR").unwrap();
//! let result = MatchResult::calculate(&secret, &guess);
//! assert_eq!((result.exact(), result.fuzzy()), (0, 2));
//!
//! // Let the solver find the secret
//! let solution = solve(&secret);
//! assert_eq!(solution.sequence, secret);
//! println!("Solved in {} guesses", solution.guesses);
//! ```

// Core domain types
pub mod core;

// Solving algorithm
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
