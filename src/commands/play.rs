//! Interactive mode
//!
//! The player thinks of a secret code and scores each of the solver's guesses by hand.

use crate::core::{MatchResult, Sequence};
use crate::output::formatters::sequence_to_pegs;
use crate::solver::{Codemaker, Solution, SolveError, Solver};
use std::io::{BufRead, Write};

/// Codemaker that asks a person for feedback
pub struct PromptCodemaker<R, W> {
    input: R,
    output: W,
    turn: usize,
}

impl<R: BufRead, W: Write> PromptCodemaker<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            turn: 0,
        }
    }

    fn read_feedback(&mut self) -> Result<Option<MatchResult>, SolveError> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| SolveError::Aborted(format!("could not read input: {e}")))?;
        if read == 0 {
            return Err(SolveError::Aborted("input closed".to_string()));
        }

        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case("quit") || trimmed.eq_ignore_ascii_case("q") {
            return Err(SolveError::Aborted("player quit".to_string()));
        }

        match trimmed.parse::<MatchResult>() {
            Ok(result) => Ok(Some(result)),
            Err(e) => {
                writeln!(self.output, "{e}. Try again.").map_err(write_failed)?;
                Ok(None)
            }
        }
    }
}

fn write_failed(e: std::io::Error) -> SolveError {
    SolveError::Aborted(format!("could not write output: {e}"))
}

impl<R: BufRead, W: Write> Codemaker for PromptCodemaker<R, W> {
    fn respond(&mut self, guess: &Sequence) -> Result<MatchResult, SolveError> {
        self.turn += 1;
        loop {
            write!(
                self.output,
                "Turn {}: {}  ({guess})  exact fuzzy> ",
                self.turn,
                sequence_to_pegs(guess)
            )
            .map_err(write_failed)?;
            self.output.flush().map_err(write_failed)?;

            if let Some(result) = self.read_feedback()? {
                return Ok(result);
            }
        }
    }
}

/// Run an interactive game: the player holds the secret, the solver guesses
///
/// # Errors
///
/// Returns an error if the player quits, input or output fails, or the feedback entered
/// contradicts earlier feedback.
pub fn run_interactive<R: BufRead, W: Write>(input: R, mut output: W) -> Result<Solution, String> {
    let io_error = |e: std::io::Error| format!("I/O error: {e}");

    writeln!(output, "\nThink of a code of 4 pegs from R O Y G B P (repeats allowed).")
        .map_err(io_error)?;
    writeln!(output, "For each guess, enter the number of pegs that are:").map_err(io_error)?;
    writeln!(output, "  - exact: right color, right position").map_err(io_error)?;
    writeln!(output, "  - fuzzy: right color, wrong position").map_err(io_error)?;
    writeln!(output, "as two numbers, e.g. \"2 1\". Type 'quit' to stop.\n").map_err(io_error)?;

    let solution = {
        let mut codemaker = PromptCodemaker::new(input, &mut output);
        Solver::new()
            .run(&mut codemaker)
            .map_err(|e| e.to_string())?
    };

    writeln!(
        output,
        "\n✅ Your code is {} ({}), found in {} guesses.",
        sequence_to_pegs(&solution.sequence),
        solution.sequence,
        solution.guesses
    )
    .map_err(io_error)?;

    Ok(solution)
}
