//! Candidate filtering
//!
//! Keeps only the codes that would have produced the observed feedback.

use crate::core::{Code, Feedback};

/// Return the candidates consistent with `observed` for `guess`
///
/// Relative order of `candidates` is preserved. The input is not modified.
///
/// # Examples
/// ```
/// use mastermind_minimax::core::{Code, Feedback, Rules};
/// use mastermind_minimax::solver::{Universe, filter_candidates};
///
/// let rules = Rules::classic();
/// let universe = Universe::new(rules);
/// let guess = Code::new(&[1, 2, 3, 4], rules).unwrap();
///
/// let remaining = filter_candidates(universe.codes(), &guess, Feedback::new(4, 0));
/// assert_eq!(remaining, vec![guess]);
/// ```
#[must_use]
pub fn filter_candidates(candidates: &[Code], guess: &Code, observed: Feedback) -> Vec<Code> {
    candidates
        .iter()
        .filter(|candidate| Feedback::score(candidate, guess) == observed)
        .copied()
        .collect()
}

/// Count the candidates consistent with `observed` without materializing them
#[must_use]
pub fn count_consistent(candidates: &[Code], guess: &Code, observed: Feedback) -> usize {
    candidates
        .iter()
        .filter(|candidate| Feedback::score(candidate, guess) == observed)
        .count()
}

/// `true` if `code` agrees with every `(guess, feedback)` pair in `history`
#[must_use]
pub fn is_consistent(code: &Code, history: &[(Code, Feedback)]) -> bool {
    history
        .iter()
        .all(|(guess, feedback)| Feedback::score(code, guess) == *feedback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rules;
    use crate::solver::Universe;

    fn code(pegs: &[u8]) -> Code {
        Code::new(pegs, Rules::classic()).unwrap()
    }

    #[test]
    fn filter_keeps_only_matching() {
        let universe = Universe::new(Rules::classic());
        let guess = code(&[0, 0, 1, 1]);
        let observed = Feedback::new(1, 1);

        let remaining = filter_candidates(universe.codes(), &guess, observed);
        assert!(!remaining.is_empty());
        assert!(remaining.len() < universe.len());
        assert!(
            remaining
                .iter()
                .all(|c| Feedback::score(c, &guess) == observed)
        );
        assert_eq!(
            remaining.len(),
            count_consistent(universe.codes(), &guess, observed)
        );
    }

    #[test]
    fn filter_preserves_order() {
        let universe = Universe::new(Rules::classic());
        let remaining =
            filter_candidates(universe.codes(), &code(&[5, 5, 5, 5]), Feedback::new(0, 0));
        assert!(remaining.windows(2).all(|w| w[0] < w[1]));
        // No 5 anywhere: 5^4 codes
        assert_eq!(remaining.len(), 625);
    }

    #[test]
    fn filter_is_idempotent() {
        let universe = Universe::new(Rules::classic());
        let guess = code(&[1, 2, 3, 4]);
        let observed = Feedback::new(1, 2);

        let once = filter_candidates(universe.codes(), &guess, observed);
        let twice = filter_candidates(&once, &guess, observed);
        assert_eq!(once, twice);
    }

    #[test]
    fn filter_order_of_turns_commutes() {
        let universe = Universe::new(Rules::classic());
        let hidden = code(&[2, 2, 4, 0]);
        let g1 = code(&[0, 0, 1, 1]);
        let g2 = code(&[2, 3, 4, 5]);
        let f1 = Feedback::score(&hidden, &g1);
        let f2 = Feedback::score(&hidden, &g2);

        let a = filter_candidates(&filter_candidates(universe.codes(), &g1, f1), &g2, f2);
        let b = filter_candidates(&filter_candidates(universe.codes(), &g2, f2), &g1, f1);
        assert_eq!(a, b);
        assert!(a.contains(&hidden));
    }

    #[test]
    fn filter_impossible_feedback_is_empty() {
        let universe = Universe::new(Rules::classic());
        // Three exact and one partial can never happen
        let remaining =
            filter_candidates(universe.codes(), &code(&[1, 2, 3, 4]), Feedback::new(3, 1));
        assert!(remaining.is_empty());
    }

    #[test]
    fn consistency_against_history() {
        let hidden = code(&[3, 1, 4, 1]);
        let history: Vec<(Code, Feedback)> = [code(&[0, 0, 1, 1]), code(&[3, 4, 5, 0])]
            .into_iter()
            .map(|g| (g, Feedback::score(&hidden, &g)))
            .collect();

        assert!(is_consistent(&hidden, &history));
        assert!(!is_consistent(&code(&[5, 5, 5, 5]), &history));
        assert!(is_consistent(&code(&[5, 5, 5, 5]), &[]));
    }
}
