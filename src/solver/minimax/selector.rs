//! Minimax-based guess selection strategy
//!
//! Selects the guess that minimizes the worst-case remaining candidates.
//! Ties go to the guess that comes first in the pool's iteration order.

use super::calculator::bounded_max_remaining;
use crate::core::Code;
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A chosen guess and the largest candidate set it can leave behind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub guess: Code,
    pub worst_case: usize,
}

/// Returns the answer when no search is needed
///
/// `Some(None)` for an empty candidate set, `Some(Some(_))` for a single
/// remaining candidate, `None` when the pool has to be searched.
fn trivial_selection(candidates: &[Code]) -> Option<Option<Selection>> {
    match candidates {
        [] => Some(None),
        [only] => Some(Some(Selection {
            guess: *only,
            worst_case: 1,
        })),
        _ => None,
    }
}

/// Select best guess by minimizing worst-case remaining candidates
///
/// Evaluates guesses in pool order. A guess is abandoned as soon as one of
/// its outcome groups reaches the best worst case seen so far, so only a
/// strictly better guess ever replaces the current best.
///
/// Returns `None` if the pool or the candidate set is empty.
///
/// # Examples
/// ```
/// use mastermind_minimax::core::{Code, Rules};
/// use mastermind_minimax::solver::Universe;
/// use mastermind_minimax::solver::minimax::select_best_guess;
///
/// let universe = Universe::new(Rules::classic());
/// let selection = select_best_guess(universe.codes(), universe.codes()).unwrap();
///
/// // Lexicographically first optimal opening is 0011
/// assert_eq!(selection.guess.pegs(), &[0, 0, 1, 1]);
/// assert_eq!(selection.worst_case, 256);
/// ```
#[must_use]
pub fn select_best_guess(guess_pool: &[Code], candidates: &[Code]) -> Option<Selection> {
    if let Some(trivial) = trivial_selection(candidates) {
        return trivial;
    }

    let mut best: Option<Selection> = None;
    let mut bound = usize::MAX;

    for guess in guess_pool {
        if let Some(worst_case) = bounded_max_remaining(guess, candidates, bound) {
            bound = worst_case;
            best = Some(Selection {
                guess: *guess,
                worst_case,
            });

            // Nothing beats a guess that isolates every candidate
            if worst_case == 1 {
                break;
            }
        }
    }

    best
}

/// Parallel version of [`select_best_guess`] with identical results
///
/// The pool is split into chunks; each worker keeps a local best and prunes
/// at `>=` its own bound. Workers also share the global best worst case and
/// prune at strictly `>` it, so an earlier tie in another chunk is never
/// discarded. The reduce step takes the minimum `(worst_case, pool index)`.
#[must_use]
pub fn select_best_guess_parallel(guess_pool: &[Code], candidates: &[Code]) -> Option<Selection> {
    if let Some(trivial) = trivial_selection(candidates) {
        return trivial;
    }

    let shared_bound = AtomicUsize::new(usize::MAX);
    let chunk_len = (guess_pool.len() / (rayon::current_num_threads() * 8)).max(1);

    guess_pool
        .par_chunks(chunk_len)
        .enumerate()
        .filter_map(|(chunk_index, chunk)| {
            let mut local: Option<(usize, usize)> = None;
            let mut local_bound = usize::MAX;

            for (offset, guess) in chunk.iter().enumerate() {
                let global = shared_bound.load(Ordering::Relaxed).saturating_add(1);
                let bound = local_bound.min(global);

                if let Some(worst_case) = bounded_max_remaining(guess, candidates, bound) {
                    local_bound = worst_case;
                    local = Some((worst_case, chunk_index * chunk_len + offset));
                    shared_bound.fetch_min(worst_case, Ordering::Relaxed);

                    if worst_case == 1 {
                        break;
                    }
                }
            }

            local
        })
        .min()
        .map(|(worst_case, index)| Selection {
            guess: guess_pool[index],
            worst_case,
        })
}
