//! Census-then-placement solver
//!
//! Solving runs in two phases:
//! 1. **Census**: guess `RRRR`, `OOOO`, ... in alphabet order. A pure guess can only score
//!    exact pegs, and their count is how often that color appears in the secret. Stops once
//!    four pegs are accounted for; after five colors the sixth is inferred.
//! 2. **Placement**: fill a working code with a placeholder color absent from the secret,
//!    then try each known color in each free position of the first three. A guess that
//!    raises the exact count confirms the position. A color that is still short after
//!    three positions must sit in the last one. The final color fills whatever is left.
//!
//! The state machine is `CensusInProgress -> CensusComplete -> PlacementInProgress -> Solved`
//! with no backtracking.

use super::codemaker::{Codemaker, SecretCodemaker};
use crate::core::{CODE_LENGTH, Color, MatchResult, Sequence};
use std::fmt;

/// Index of the position that absorbs a color the scan could not place
const LAST_POSITION: usize = CODE_LENGTH - 1;

/// The deduced secret and how many guesses it took
///
/// The count includes the final guess that submits the deduced code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solution {
    pub guesses: usize,
    pub sequence: Sequence,
}

/// Where the solver is in its deduction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    CensusInProgress,
    /// Color counts are known, positions are not
    CensusComplete,
    PlacementInProgress,
    Solved(Solution),
}

/// One scored guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub guess: Sequence,
    pub result: MatchResult,
    /// Phase the guess was made in
    pub phase: Phase,
}

/// Error type for a solve that cannot finish
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The feedback contradicts what earlier feedback established
    InconsistentFeedback {
        guess: Sequence,
        result: MatchResult,
        reason: &'static str,
    },
    /// The codemaker stopped answering
    Aborted(String),
    /// Feedback was recorded after the secret was already deduced
    AlreadySolved,
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentFeedback {
                guess,
                result,
                reason,
            } => write!(f, "Feedback {result} for {guess} is inconsistent: {reason}"),
            Self::Aborted(reason) => write!(f, "Game aborted: {reason}"),
            Self::AlreadySolved => write!(f, "The secret has already been deduced"),
        }
    }
}

impl std::error::Error for SolveError {}

/// Working state of the placement phase
#[derive(Debug, Clone)]
struct Placement {
    working: [Color; CODE_LENGTH],
    placeholder: Color,
    /// Census entries to place by scanning, in discovery order
    colors: Vec<(Color, u8)>,
    /// Census color that fills the remaining positions
    last: Color,
    /// Exact matches the working code is known to score
    confirmed: u8,
    color_index: usize,
    found: u8,
    position: usize,
}

impl Placement {
    /// Set up placement for a finished census
    ///
    /// Returns `None` if the census is empty or uses every color.
    fn prepare(census: &[(Color, u8)]) -> Option<Self> {
        // Lowest letter, not alphabet position, picks the placeholder.
        let placeholder = Color::ALL
            .into_iter()
            .filter(|color| census.iter().all(|&(present, _)| present != *color))
            .min_by_key(|color| color.as_char())?;
        let (&(last, _), colors) = census.split_last()?;

        Some(Self {
            working: [placeholder; CODE_LENGTH],
            placeholder,
            colors: colors.to_vec(),
            last,
            confirmed: 0,
            color_index: 0,
            found: 0,
            position: 0,
        })
    }

    /// The guess that tries the current color at the current position
    fn tentative(&self) -> Sequence {
        let mut pegs = self.working;
        pegs[self.position] = self.colors[self.color_index].0;
        Sequence::from_pegs(pegs)
    }

    fn next_color(&mut self) {
        self.color_index += 1;
        self.found = 0;
        self.position = 0;
    }

    /// Every scanned color has been placed
    fn is_done(&self) -> bool {
        self.color_index >= self.colors.len()
    }

    /// Advance to the next position worth scoring
    ///
    /// Returns the deduced code once every color has been placed.
    fn settle(&mut self) -> Result<Option<Sequence>, &'static str> {
        loop {
            let Some(&(color, needed)) = self.colors.get(self.color_index) else {
                return Ok(Some(self.finish()));
            };

            if self.found >= needed {
                self.next_color();
                continue;
            }

            while self.position < LAST_POSITION && self.working[self.position] != self.placeholder
            {
                self.position += 1;
            }
            if self.position < LAST_POSITION {
                return Ok(None);
            }

            // Scan exhausted without reaching the count: the remainder goes last.
            if self.working[LAST_POSITION] != self.placeholder {
                return Err("last position already forced");
            }
            self.working[LAST_POSITION] = color;
            self.confirmed += 1;
            self.next_color();
        }
    }

    fn finish(&self) -> Sequence {
        let mut pegs = self.working;
        for peg in &mut pegs {
            if *peg == self.placeholder {
                *peg = self.last;
            }
        }
        Sequence::from_pegs(pegs)
    }

    /// Apply feedback for `tentative()`; returns the deduced code when done
    fn record(&mut self, result: MatchResult) -> Result<Option<Sequence>, &'static str> {
        if result.exact() > self.confirmed + 1 {
            return Err("one peg changed but exact matches rose by more than one");
        }
        if result.exact() < self.confirmed {
            return Err("exact matches fell below the confirmed placements");
        }

        if result.exact() > self.confirmed {
            self.working[self.position] = self.colors[self.color_index].0;
            self.confirmed += 1;
            self.found += 1;
        }
        self.position += 1;

        self.settle()
    }
}

#[derive(Debug, Clone)]
enum State {
    Census,
    /// Placement prepared and settled on its first guess, not yet started
    CensusComplete(Placement),
    Placement(Placement),
    Solved(Solution),
}

/// Deduces a secret from guess feedback alone
///
/// Drive it with `next_guess` / `record`, or hand it a `Codemaker` via `run`.
///
/// # Examples
/// ```
/// use mastermind_solver::core::Sequence;
/// use mastermind_solver::solver::{Phase, Solver};
///
/// let mut solver = Solver::new();
/// assert_eq!(solver.phase(), Phase::CensusInProgress);
///
/// let first = solver.next_guess().unwrap();
/// assert_eq!(first.to_string(), "RRRR");
/// ```
#[derive(Debug, Clone)]
pub struct Solver {
    state: State,
    guesses: usize,
    census: Vec<(Color, u8)>,
    census_total: u8,
    next_census_color: usize,
    history: Vec<Turn>,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: State::Census,
            guesses: 0,
            census: Vec::new(),
            census_total: 0,
            next_census_color: 0,
            history: Vec::new(),
        }
    }

    /// Current phase
    #[must_use]
    pub fn phase(&self) -> Phase {
        match &self.state {
            State::Census => Phase::CensusInProgress,
            State::CensusComplete(_) => Phase::CensusComplete,
            State::Placement(_) => Phase::PlacementInProgress,
            State::Solved(solution) => Phase::Solved(*solution),
        }
    }

    /// Colors found so far with their counts, in discovery order
    #[must_use]
    pub fn census(&self) -> &[(Color, u8)] {
        &self.census
    }

    /// Every scored guess so far
    #[must_use]
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// Guesses scored so far
    #[must_use]
    pub const fn guesses(&self) -> usize {
        self.guesses
    }

    /// The solution, once deduced
    #[must_use]
    pub fn solution(&self) -> Option<Solution> {
        match &self.state {
            State::Solved(solution) => Some(*solution),
            _ => None,
        }
    }

    /// The guess to score next, or `None` once the secret is deduced
    pub fn next_guess(&mut self) -> Option<Sequence> {
        self.begin_placement();
        self.current_guess()
    }

    /// Record the feedback for the guess returned by `next_guess`
    ///
    /// Rejected feedback leaves the solver unchanged.
    ///
    /// # Errors
    /// Returns `SolveError::InconsistentFeedback` if the result contradicts earlier
    /// feedback, or `SolveError::AlreadySolved` if there is no guess outstanding.
    pub fn record(&mut self, result: MatchResult) -> Result<(), SolveError> {
        self.begin_placement();
        let guess = self.current_guess().ok_or(SolveError::AlreadySolved)?;
        let phase = self.phase();
        let inconsistent = |reason| SolveError::InconsistentFeedback {
            guess,
            result,
            reason,
        };

        let next_state = match &self.state {
            State::Census => {
                if result.fuzzy() != 0 {
                    return Err(inconsistent("a single-color guess cannot score fuzzy pegs"));
                }
                let mut total = self.census_total + result.exact();
                if total as usize > CODE_LENGTH {
                    return Err(inconsistent("more than four pegs counted in the census"));
                }

                let mut census = self.census.clone();
                if result.exact() > 0 {
                    census.push((Color::ALL[self.next_census_color], result.exact()));
                }
                let tested = self.next_census_color + 1;
                if (total as usize) < CODE_LENGTH && tested == Color::COUNT - 1 {
                    // Whatever is unaccounted for must be the untested color.
                    census.push((Color::ALL[Color::COUNT - 1], CODE_LENGTH as u8 - total));
                    total = CODE_LENGTH as u8;
                }

                let next_state = if result.is_win() {
                    State::Solved(Solution {
                        guesses: self.guesses + 1,
                        sequence: guess,
                    })
                } else if total as usize == CODE_LENGTH {
                    let mut placement = Placement::prepare(&census).ok_or_else(|| {
                        inconsistent("the census leaves no color free for a placeholder")
                    })?;
                    placement.settle().map_err(inconsistent)?;
                    State::CensusComplete(placement)
                } else {
                    State::Census
                };

                self.census = census;
                self.census_total = total;
                self.next_census_color = tested;
                next_state
            }
            State::Placement(placement) => {
                let mut attempt = placement.clone();
                match attempt.record(result).map_err(inconsistent)? {
                    Some(sequence) => State::Solved(Solution {
                        guesses: self.guesses + 2,
                        sequence,
                    }),
                    None => State::Placement(attempt),
                }
            }
            State::CensusComplete(_) | State::Solved(_) => return Err(SolveError::AlreadySolved),
        };

        self.guesses += 1;
        self.history.push(Turn {
            guess,
            result,
            phase,
        });
        self.state = next_state;
        Ok(())
    }

    /// Play against `codemaker` until the secret is deduced
    ///
    /// # Errors
    /// Propagates codemaker failures and inconsistent feedback.
    pub fn run<C: Codemaker + ?Sized>(&mut self, codemaker: &mut C) -> Result<Solution, SolveError> {
        while let Some(guess) = self.next_guess() {
            let result = codemaker.respond(&guess)?;
            self.record(result)?;
        }
        self.solution().ok_or(SolveError::AlreadySolved)
    }

    fn current_guess(&self) -> Option<Sequence> {
        match &self.state {
            State::Census => Some(Sequence::pure(Color::ALL[self.next_census_color])),
            State::Placement(placement) => Some(placement.tentative()),
            State::CensusComplete(_) | State::Solved(_) => None,
        }
    }

    /// Leave `CensusComplete` by starting the placement scan
    fn begin_placement(&mut self) {
        let State::CensusComplete(placement) = &self.state else {
            return;
        };

        self.state = if placement.is_done() {
            // Nothing to scan: the single remaining color is the whole code.
            State::Solved(Solution {
                guesses: self.guesses + 1,
                sequence: placement.finish(),
            })
        } else {
            State::Placement(placement.clone())
        };
    }
}

/// Solve `secret`, scoring guesses against it directly
///
/// # Panics
/// Will not panic - feedback computed from a real secret is always consistent.
///
/// # Examples
/// ```
/// use mastermind_solver::core::Sequence;
/// use mastermind_solver::solver::solve;
///
/// let secret = Sequence::new("ROYY").unwrap();
/// let solution = solve(&secret);
///
/// assert_eq!(solution.sequence, secret);
/// assert_eq!(solution.guesses, 6);
/// ```
#[must_use]
pub fn solve(secret: &Sequence) -> Solution {
    let mut codemaker = SecretCodemaker::new(*secret);
    Solver::new()
        .run(&mut codemaker)
        .expect("feedback from a known secret is consistent")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CODE_SPACE;
    use std::collections::BTreeMap;

    fn code(text: &str) -> Sequence {
        Sequence::new(text).unwrap()
    }

    fn feedback(exact: u8, fuzzy: u8) -> MatchResult {
        MatchResult::new(exact, fuzzy).unwrap()
    }

    fn guesses_for(secret: &str) -> Vec<String> {
        let mut solver = Solver::new();
        let mut codemaker = SecretCodemaker::new(code(secret));
        solver.run(&mut codemaker).unwrap();
        solver
            .history()
            .iter()
            .map(|turn| turn.guess.to_string())
            .collect()
    }

    #[test]
    fn solve_royy_trace() {
        // Census stops after Y brings the total to four; B is the placeholder.
        assert_eq!(guesses_for("ROYY"), vec!["RRRR", "OOOO", "YYYY", "RBBB", "ROBB"]);
        assert_eq!(solve(&code("ROYY")).guesses, 6);
    }

    #[test]
    fn solve_monochrome_on_census_guess() {
        let solution = solve(&code("RRRR"));
        assert_eq!(solution.guesses, 1);
        assert_eq!(solution.sequence, code("RRRR"));

        let solution = solve(&code("BBBB"));
        assert_eq!(solution.guesses, 5);
    }

    #[test]
    fn solve_purple_inferred_without_guessing() {
        // Five empty census guesses, then PPPP is submitted as the answer.
        let mut solver = Solver::new();
        let solution = solver.run(&mut SecretCodemaker::new(code("PPPP"))).unwrap();
        assert_eq!(solution.guesses, 6);
        assert_eq!(solution.sequence, code("PPPP"));
        assert_eq!(solver.history().len(), 5);
        assert_eq!(solver.census(), &[(Color::Purple, 4)]);
    }

    #[test]
    fn solve_yroy() {
        let solution = solve(&code("YROY"));
        assert_eq!(solution.sequence, code("YROY"));
        assert_eq!(solution.guesses, 8);
    }

    #[test]
    fn solve_uses_forced_last_position() {
        // R's single peg sits last, so the scan of the first three positions fails.
        let mut solver = Solver::new();
        let mut codemaker = SecretCodemaker::new(code("OOOR"));
        let solution = solver.run(&mut codemaker).unwrap();

        assert_eq!(solution.sequence, code("OOOR"));
        assert_eq!(codemaker.scored(), solver.guesses());
        assert_eq!(solution.guesses, solver.guesses() + 1);
    }

    #[test]
    fn solve_known_guess_counts() {
        for (secret, expected) in [("RRRP", 9), ("BPPG", 10), ("OGGR", 9)] {
            assert_eq!(solve(&code(secret)).guesses, expected, "secret {secret}");
        }
    }

    #[test]
    fn solve_every_secret() {
        for secret in Sequence::all() {
            let solution = solve(&secret);
            assert!(
                MatchResult::calculate(&secret, &solution.sequence).is_win(),
                "deduced {} for secret {secret}",
                solution.sequence
            );
            assert!((1..=14).contains(&solution.guesses));
        }
    }

    #[test]
    fn guess_distribution_over_code_space() {
        let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
        for secret in Sequence::all() {
            *distribution.entry(solve(&secret).guesses).or_insert(0) += 1;
        }

        let expected: BTreeMap<usize, usize> = [
            (1, 1),
            (2, 1),
            (3, 1),
            (4, 2),
            (5, 5),
            (6, 20),
            (7, 48),
            (8, 107),
            (9, 312),
            (10, 334),
            (11, 273),
            (12, 135),
            (13, 43),
            (14, 14),
        ]
        .into_iter()
        .collect();
        assert_eq!(distribution, expected);

        let within_ten: usize = distribution.range(..=10).map(|(_, count)| count).sum();
        assert!(within_ten * 100 >= CODE_SPACE * 60);
    }

    #[test]
    fn phases_progress_in_order() {
        let mut solver = Solver::new();
        assert_eq!(solver.phase(), Phase::CensusInProgress);

        // Secret ROYY
        for result in [feedback(1, 0), feedback(1, 0)] {
            assert!(solver.next_guess().is_some());
            solver.record(result).unwrap();
            assert_eq!(solver.phase(), Phase::CensusInProgress);
        }
        assert!(solver.next_guess().is_some());
        solver.record(feedback(2, 0)).unwrap();
        assert_eq!(solver.phase(), Phase::CensusComplete);
        assert_eq!(
            solver.census(),
            &[(Color::Red, 1), (Color::Orange, 1), (Color::Yellow, 2)]
        );

        assert_eq!(solver.next_guess(), Some(code("RBBB")));
        assert_eq!(solver.phase(), Phase::PlacementInProgress);
        solver.record(feedback(1, 0)).unwrap();

        assert_eq!(solver.next_guess(), Some(code("ROBB")));
        solver.record(feedback(2, 0)).unwrap();

        let expected = Solution {
            guesses: 6,
            sequence: code("ROYY"),
        };
        assert_eq!(solver.phase(), Phase::Solved(expected));
        assert_eq!(solver.next_guess(), None);
        assert_eq!(solver.solution(), Some(expected));
    }

    #[test]
    fn history_records_phase_of_each_guess() {
        let mut solver = Solver::new();
        solver.run(&mut SecretCodemaker::new(code("ROYY"))).unwrap();

        let phases: Vec<Phase> = solver.history().iter().map(|turn| turn.phase).collect();
        assert_eq!(
            phases,
            vec![
                Phase::CensusInProgress,
                Phase::CensusInProgress,
                Phase::CensusInProgress,
                Phase::PlacementInProgress,
                Phase::PlacementInProgress,
            ]
        );
    }

    #[test]
    fn record_after_solution_is_rejected() {
        let mut solver = Solver::new();
        solver.run(&mut SecretCodemaker::new(code("RRRR"))).unwrap();
        assert_eq!(
            solver.record(feedback(0, 0)),
            Err(SolveError::AlreadySolved)
        );
    }

    #[test]
    fn fuzzy_pegs_on_pure_guess_are_inconsistent() {
        let mut solver = Solver::new();
        assert!(solver.next_guess().is_some());
        assert!(matches!(
            solver.record(feedback(1, 1)),
            Err(SolveError::InconsistentFeedback { .. })
        ));
        // Rejected feedback leaves the solver where it was.
        assert_eq!(solver.guesses(), 0);
        assert_eq!(solver.next_guess(), Some(code("RRRR")));
    }

    #[test]
    fn census_over_four_pegs_is_inconsistent() {
        let mut solver = Solver::new();
        solver.record(feedback(3, 0)).unwrap();
        assert!(matches!(
            solver.record(feedback(2, 0)),
            Err(SolveError::InconsistentFeedback { .. })
        ));
    }

    #[test]
    fn placement_jump_of_two_is_inconsistent() {
        let mut solver = Solver::new();
        for result in [feedback(1, 0), feedback(1, 0), feedback(2, 0)] {
            solver.record(result).unwrap();
        }
        assert!(matches!(
            solver.record(feedback(3, 0)),
            Err(SolveError::InconsistentFeedback { .. })
        ));
    }

    #[test]
    fn second_forced_color_is_inconsistent() {
        // Census R1 O1 Y2, then feedback that never places R or O in the first three
        let mut solver = Solver::new();
        for result in [feedback(1, 0), feedback(1, 0), feedback(2, 0)] {
            solver.record(result).unwrap();
        }
        for result in [feedback(0, 0), feedback(0, 0), feedback(0, 0)] {
            solver.record(result).unwrap();
        }
        // R was forced into the last position
        assert_eq!(solver.next_guess(), Some(code("OBBR")));
        solver.record(feedback(1, 0)).unwrap();
        solver.record(feedback(1, 0)).unwrap();
        assert_eq!(solver.next_guess(), Some(code("BBOR")));

        assert_eq!(
            solver.record(feedback(1, 0)),
            Err(SolveError::InconsistentFeedback {
                guess: code("BBOR"),
                result: feedback(1, 0),
                reason: "last position already forced",
            })
        );
        assert_eq!(solver.guesses(), 8);
        assert_eq!(solver.next_guess(), Some(code("BBOR")));
    }

    struct Quitter;

    impl Codemaker for Quitter {
        fn respond(&mut self, _guess: &Sequence) -> Result<MatchResult, SolveError> {
            Err(SolveError::Aborted("bored".to_string()))
        }
    }

    #[test]
    fn run_propagates_codemaker_errors() {
        let mut solver = Solver::new();
        assert_eq!(
            solver.run(&mut Quitter),
            Err(SolveError::Aborted("bored".to_string()))
        );
    }
}
