//! Minimax worst-case calculation for Mastermind feedback
//!
//! Given a guess and set of candidates, computes the largest group of
//! candidates that would share a single feedback outcome.

use crate::core::{Code, Feedback, OUTCOME_SLOTS};
use rustc_hash::FxHashMap;

/// Calculate the maximum remaining candidates for a guess
///
/// Returns the worst-case number of candidates left after this guess.
///
/// # Examples
/// ```
/// use mastermind_minimax::core::{Code, Rules};
/// use mastermind_minimax::solver::Universe;
/// use mastermind_minimax::solver::minimax::calculate_max_remaining;
///
/// let rules = Rules::classic();
/// let universe = Universe::new(rules);
/// let guess = Code::new(&[0, 0, 1, 1], rules).unwrap();
///
/// // Knuth's opening leaves at most 256 codes
/// assert_eq!(calculate_max_remaining(&guess, universe.codes()), 256);
/// ```
#[must_use]
pub fn calculate_max_remaining(guess: &Code, candidates: &[Code]) -> usize {
    let mut counts = [0u32; OUTCOME_SLOTS];
    let mut worst = 0;

    for candidate in candidates {
        let slot = &mut counts[Feedback::score(candidate, guess).index()];
        *slot += 1;
        worst = worst.max(*slot);
    }

    worst as usize
}

/// Worst case for `guess`, abandoned as soon as it reaches `bound`
///
/// Returns `None` once any outcome group holds `bound` candidates: group
/// counts only grow as more candidates are tallied, so the guess can no
/// longer beat a previous guess whose worst case was `bound`.
#[must_use]
pub fn bounded_max_remaining(guess: &Code, candidates: &[Code], bound: usize) -> Option<usize> {
    let mut counts = [0u32; OUTCOME_SLOTS];
    let mut worst = 0usize;

    for candidate in candidates {
        let slot = &mut counts[Feedback::score(candidate, guess).index()];
        *slot += 1;
        worst = worst.max(*slot as usize);
        if worst >= bound {
            return None;
        }
    }

    Some(worst)
}

/// Group candidates by the feedback they produce against the guess
#[must_use]
pub fn partition_counts(guess: &Code, candidates: &[Code]) -> FxHashMap<Feedback, usize> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        let feedback = Feedback::score(candidate, guess);
        *counts.entry(feedback).or_insert(0) += 1;
    }

    counts
}
