//! Code analysis command
//!
//! Shows how a guess partitions a candidate set and how it compares to the
//! minimax optimum.

use crate::core::{Code, Feedback};
use crate::solver::Solver;
use crate::solver::minimax::{partition_counts, select_best_guess_parallel};

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub guess: Code,
    /// Candidate count per feedback, largest group first
    pub partitions: Vec<(Feedback, usize)>,
    pub worst_case: usize,
    /// Mean size of the group the hidden code falls into
    pub expected_remaining: f64,
    pub total_candidates: usize,
    /// Worst case achieved by the best guess in the universe
    pub best_worst_case: usize,
    pub best_guess: Code,
}

impl AnalysisResult {
    /// `true` if no guess in the universe has a smaller worst case
    #[must_use]
    pub const fn is_optimal(&self) -> bool {
        self.worst_case == self.best_worst_case
    }
}

/// Analyze a guess against a set of candidates
///
/// # Errors
///
/// Returns an error if:
/// - The guess cannot be parsed or doesn't fit the rules
/// - The candidate set is empty
pub fn analyze_code(
    guess: &str,
    solver: &Solver,
    candidates: &[Code],
) -> Result<AnalysisResult, String> {
    let guess = Code::parse(guess, solver.rules()).map_err(|e| format!("Invalid code: {e}"))?;

    let best = select_best_guess_parallel(solver.universe().codes(), candidates)
        .ok_or_else(|| "No candidates to analyze".to_string())?;

    let mut partitions: Vec<(Feedback, usize)> =
        partition_counts(&guess, candidates).into_iter().collect();
    partitions.sort_by_key(|&(feedback, count)| (std::cmp::Reverse(count), feedback));

    let total_candidates = candidates.len();
    let worst_case = partitions.first().map_or(0, |&(_, count)| count);
    let sum_of_squares: usize = partitions.iter().map(|&(_, count)| count * count).sum();

    Ok(AnalysisResult {
        guess,
        partitions,
        worst_case,
        expected_remaining: sum_of_squares as f64 / total_candidates as f64,
        total_candidates,
        best_worst_case: best.worst_case,
        best_guess: best.guess,
    })
}
