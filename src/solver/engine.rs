//! Main Mastermind solver interface

use super::minimax::{
    Selection, calculate_max_remaining, select_best_guess, select_best_guess_parallel,
};
use super::strategy::{GuessPool, Opening, SolverConfig};
use super::universe::Universe;
use crate::core::{Code, Rules};

/// Main Mastermind solver
///
/// Borrows the guess universe and chooses guesses for a live candidate set.
/// Holds no per-game state, so one solver can serve many sessions.
pub struct Solver<'a> {
    universe: &'a Universe,
    config: SolverConfig,
}

impl<'a> Solver<'a> {
    /// Create a new solver over the given universe
    ///
    /// The universe's iteration order decides ties between equally good guesses.
    #[must_use]
    pub const fn new(universe: &'a Universe, config: SolverConfig) -> Self {
        Self { universe, config }
    }

    #[must_use]
    pub const fn universe(&self) -> &'a Universe {
        self.universe
    }

    #[must_use]
    pub const fn config(&self) -> SolverConfig {
        self.config
    }

    #[must_use]
    pub const fn rules(&self) -> Rules {
        self.universe.rules()
    }

    /// Get the opening guess for a new game
    ///
    /// With `Opening::Random` this is the first code in universe order with
    /// no repeated colour (any code if the alphabet is smaller than the code).
    #[must_use]
    pub fn first_guess(&self) -> Option<Selection> {
        let codes = self.universe.codes();
        match self.config.opening {
            Opening::Minimax => self.select(codes, codes),
            Opening::Random => codes
                .iter()
                .find(|code| code.has_distinct_colours())
                .or_else(|| codes.first())
                .map(|&guess| Selection {
                    guess,
                    worst_case: calculate_max_remaining(&guess, codes),
                }),
        }
    }

    /// Get the next guess for the current candidate set
    ///
    /// # Parameters
    /// - `candidates`: codes still consistent with all feedback
    /// - `guesses_made`: how many guesses have been played this game
    ///
    /// Returns `None` if no candidates remain.
    #[must_use]
    pub fn next_guess(&self, candidates: &[Code], guesses_made: usize) -> Option<Selection> {
        if candidates.len() <= 1 {
            return candidates.first().map(|&guess| Selection {
                guess,
                worst_case: 1,
            });
        }

        if guesses_made == 0 && candidates.len() == self.universe.len() {
            return self.first_guess();
        }

        let pool = match self.config.pool {
            GuessPool::Full => self.universe.codes(),
            GuessPool::Consistent => candidates,
        };
        self.select(pool, candidates)
    }

    fn select(&self, pool: &[Code], candidates: &[Code]) -> Option<Selection> {
        if self.config.parallel {
            select_best_guess_parallel(pool, candidates)
        } else {
            select_best_guess(pool, candidates)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback;
    use crate::solver::filter::filter_candidates;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn code(pegs: &[u8]) -> Code {
        Code::new(pegs, Rules::classic()).unwrap()
    }

    #[test]
    fn first_guess_minimax_is_optimal() {
        let universe = Universe::new(Rules::classic());
        let solver = Solver::new(&universe, SolverConfig::default());

        let opening = solver.first_guess().unwrap();
        assert_eq!(opening.worst_case, 256);
    }

    #[test]
    fn first_guess_random_has_distinct_colours() {
        let universe = Universe::shuffled(Rules::classic(), &mut StdRng::seed_from_u64(3));
        let config = SolverConfig {
            opening: Opening::Random,
            ..SolverConfig::default()
        };
        let solver = Solver::new(&universe, config);

        let opening = solver.first_guess().unwrap();
        assert!(opening.guess.has_distinct_colours());
        assert_eq!(
            opening.worst_case,
            calculate_max_remaining(&opening.guess, universe.codes())
        );
    }

    #[test]
    fn random_opening_falls_back_when_colours_repeat() {
        // Two colours, three pegs: every code repeats a colour
        let universe = Universe::new(Rules::new(2, 3).unwrap());
        let config = SolverConfig {
            opening: Opening::Random,
            ..SolverConfig::default()
        };
        let solver = Solver::new(&universe, config);

        assert_eq!(solver.first_guess().unwrap().guess, universe.codes()[0]);
    }

    #[test]
    fn next_guess_on_single_candidate() {
        let universe = Universe::new(Rules::classic());
        let solver = Solver::new(&universe, SolverConfig::default());
        let only = code(&[4, 4, 2, 0]);

        let selection = solver.next_guess(&[only], 3).unwrap();
        assert_eq!(selection.guess, only);
        assert_eq!(selection.worst_case, 1);
        assert!(solver.next_guess(&[], 3).is_none());
    }

    #[test]
    fn consistent_pool_only_guesses_candidates() {
        let universe = Universe::new(Rules::classic());
        let config = SolverConfig {
            pool: GuessPool::Consistent,
            ..SolverConfig::default()
        };
        let solver = Solver::new(&universe, config);

        let hidden = code(&[1, 3, 3, 5]);
        let guess = code(&[0, 0, 1, 1]);
        let candidates =
            filter_candidates(universe.codes(), &guess, Feedback::score(&hidden, &guess));

        let selection = solver.next_guess(&candidates, 1).unwrap();
        assert!(candidates.contains(&selection.guess));
    }

    #[test]
    fn full_pool_never_worse_than_consistent() {
        let universe = Universe::new(Rules::classic());
        let full = Solver::new(&universe, SolverConfig::default());
        let consistent = Solver::new(
            &universe,
            SolverConfig {
                pool: GuessPool::Consistent,
                ..SolverConfig::default()
            },
        );

        let hidden = code(&[5, 2, 2, 1]);
        let guess = code(&[0, 0, 1, 1]);
        let candidates =
            filter_candidates(universe.codes(), &guess, Feedback::score(&hidden, &guess));

        let a = full.next_guess(&candidates, 1).unwrap();
        let b = consistent.next_guess(&candidates, 1).unwrap();
        assert!(a.worst_case <= b.worst_case);
    }

    #[test]
    fn sequential_and_parallel_agree() {
        let universe = Universe::shuffled(Rules::classic(), &mut StdRng::seed_from_u64(99));
        let parallel = Solver::new(&universe, SolverConfig::default());
        let sequential = Solver::new(
            &universe,
            SolverConfig {
                parallel: false,
                ..SolverConfig::default()
            },
        );

        assert_eq!(parallel.first_guess(), sequential.first_guess());
    }
}
