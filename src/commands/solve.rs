//! Code solving command
//!
//! Plays one full game against a known hidden code and returns the solution path.

use crate::core::{Code, Feedback};
use crate::game::Session;
use crate::solver::Solver;

/// Configuration for solving a code
pub struct SolveConfig {
    pub hidden: String,
    pub max_turns: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(hidden: String) -> Self {
        Self {
            hidden,
            max_turns: 10,
        }
    }
}

/// Result of solving a code
pub struct SolveResult {
    pub success: bool,
    pub steps: Vec<GuessStep>,
    pub hidden: Code,
    pub solution: Option<Code>,
}

impl SolveResult {
    /// Guesses needed to narrow the candidates to one
    #[must_use]
    pub fn turns(&self) -> usize {
        self.steps.len()
    }

    /// Guesses needed to win on the board, counting the final confirming guess
    #[must_use]
    pub fn guesses_to_win(&self) -> usize {
        let confirmed = self.steps.last().is_some_and(|step| step.guess == self.hidden);
        self.steps.len() + usize::from(self.success && !confirmed)
    }
}

/// A single guess step in the solution
pub struct GuessStep {
    pub guess: Code,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Largest candidate set the selector allowed for
    pub worst_case: usize,
}

/// Solve a specific code using the given solver
///
/// # Errors
///
/// Returns an error if:
/// - The hidden code cannot be parsed or doesn't fit the rules
/// - The solver cannot provide a guess
pub fn solve_code(config: SolveConfig, solver: &Solver) -> Result<SolveResult, String> {
    let hidden = Code::parse(&config.hidden, solver.rules())
        .map_err(|e| format!("Invalid hidden code: {e}"))?;

    play_game(hidden, solver, config.max_turns)
}

/// Run select-then-submit until one candidate remains or `max_turns` is reached
///
/// Hitting the turn limit is not an error: the result has `success == false`.
///
/// # Errors
///
/// Returns an error if the hidden code doesn't fit the rules or the solver
/// has no guess to offer.
pub fn play_game(hidden: Code, solver: &Solver, max_turns: usize) -> Result<SolveResult, String> {
    let mut session =
        Session::new(solver.universe(), hidden).map_err(|e| format!("Invalid hidden code: {e}"))?;
    let mut steps = Vec::new();

    while !session.is_solved() && session.turns() < max_turns {
        let candidates_before = session.remaining_candidates();

        let selection = solver
            .next_guess(session.candidates(), session.turns())
            .ok_or_else(|| "No candidates remaining".to_string())?;

        let feedback = session
            .submit_guess(selection.guess)
            .map_err(|e| e.to_string())?;

        steps.push(GuessStep {
            guess: selection.guess,
            feedback,
            candidates_before,
            candidates_after: session.remaining_candidates(),
            worst_case: selection.worst_case,
        });
    }

    Ok(SolveResult {
        success: session.is_solved(),
        steps,
        hidden,
        solution: session.solution(),
    })
}
