//! A game against a known hidden code
//!
//! The session owns the hidden code, scores guesses with the feedback oracle
//! and narrows its candidate set. Because the hidden code is always one of
//! the candidates, an empty candidate set can only mean a scoring bug.

use super::tracker::{Tracker, Turn};
use crate::core::{Code, CodeError, Feedback, Rules};
use crate::solver::Universe;

/// Whether the hidden code has been pinned down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// More than one candidate remains
    Active,
    /// Exactly one candidate remains and it equals the hidden code
    Solved,
}

/// Mastermind game with a fixed hidden code
#[derive(Debug, Clone)]
pub struct Session<'a> {
    hidden: Code,
    tracker: Tracker<'a>,
}

impl<'a> Session<'a> {
    /// Start a game with every code in `universe` as a candidate
    ///
    /// # Errors
    /// Returns `CodeError` if `hidden` doesn't fit the universe's rules.
    ///
    /// # Examples
    /// ```
    /// use mastermind_minimax::core::{Code, Feedback, Rules};
    /// use mastermind_minimax::game::Session;
    /// use mastermind_minimax::solver::Universe;
    ///
    /// let rules = Rules::classic();
    /// let universe = Universe::new(rules);
    /// let hidden = Code::new(&[1, 2, 3, 4], rules).unwrap();
    ///
    /// let mut session = Session::new(&universe, hidden).unwrap();
    /// let feedback = session.submit_guess(hidden).unwrap();
    ///
    /// assert_eq!(feedback, Feedback::new(4, 0));
    /// assert!(session.is_solved());
    /// ```
    pub fn new(universe: &'a Universe, hidden: Code) -> Result<Self, CodeError> {
        let hidden = Code::new(hidden.pegs(), universe.rules())?;
        Ok(Self {
            hidden,
            tracker: Tracker::new(universe),
        })
    }

    /// Score a guess, record it, and narrow the candidate set
    ///
    /// # Errors
    /// Returns `CodeError` if `guess` doesn't fit the rules.
    ///
    /// # Panics
    /// Panics if the candidate set empties or narrows to a code other than
    /// the hidden one. Either means the oracle and the filter disagree.
    pub fn submit_guess(&mut self, guess: Code) -> Result<Feedback, CodeError> {
        let guess = Code::new(guess.pegs(), self.rules())?;
        let feedback = Feedback::score(&self.hidden, &guess);

        if let Err(err) = self.tracker.apply(guess, feedback) {
            panic!("candidate set lost the hidden code {}: {err}", self.hidden);
        }

        if let Some(solution) = self.tracker.solution() {
            assert_eq!(
                solution, self.hidden,
                "sole remaining candidate differs from the hidden code"
            );
        }

        Ok(feedback)
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.tracker.is_solved()
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        if self.is_solved() {
            SessionState::Solved
        } else {
            SessionState::Active
        }
    }

    #[must_use]
    pub fn remaining_candidates(&self) -> usize {
        self.tracker.remaining()
    }

    #[must_use]
    pub fn candidates(&self) -> &[Code] {
        self.tracker.candidates()
    }

    #[must_use]
    pub fn history(&self) -> &[Turn] {
        self.tracker.history()
    }

    #[must_use]
    pub fn turns(&self) -> usize {
        self.tracker.turns()
    }

    /// The hidden code, once the session is solved
    #[must_use]
    pub fn solution(&self) -> Option<Code> {
        self.tracker.solution()
    }

    #[must_use]
    pub const fn hidden(&self) -> Code {
        self.hidden
    }

    #[must_use]
    pub const fn rules(&self) -> Rules {
        self.tracker.rules()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn code(pegs: &[u8]) -> Code {
        Code::new(pegs, Rules::classic()).unwrap()
    }

    #[test]
    fn guess_all_right_solves_in_one() {
        let universe = Universe::new(Rules::classic());
        let mut session = Session::new(&universe, code(&[1, 2, 3, 4])).unwrap();

        let feedback = session.submit_guess(code(&[1, 2, 3, 4])).unwrap();
        assert_eq!(feedback, Feedback::new(4, 0));
        assert_eq!(session.remaining_candidates(), 1);
        assert_eq!(session.candidates(), &[code(&[1, 2, 3, 4])]);
        assert_eq!(session.state(), SessionState::Solved);
        assert_eq!(session.solution(), Some(code(&[1, 2, 3, 4])));
    }

    #[test]
    fn guess_absent_colour_scores_zero() {
        let universe = Universe::new(Rules::classic());
        let mut session = Session::new(&universe, code(&[1, 2, 3, 4])).unwrap();

        let feedback = session.submit_guess(code(&[5, 5, 5, 5])).unwrap();
        assert_eq!(feedback, Feedback::new(0, 0));
        assert_eq!(session.state(), SessionState::Active);
        assert_eq!(session.remaining_candidates(), 625);
    }

    #[test]
    fn guess_all_right_wrong_order() {
        let universe = Universe::new(Rules::classic());
        let mut session = Session::new(&universe, code(&[1, 2, 3, 4])).unwrap();

        assert_eq!(
            session.submit_guess(code(&[4, 3, 2, 1])).unwrap(),
            Feedback::new(0, 4)
        );
        assert!(session.candidates().contains(&code(&[1, 2, 3, 4])));
    }

    #[test]
    fn rejects_invalid_codes() {
        let universe = Universe::new(Rules::classic());
        let placeholder = Code::from_pegs(&[6, 6, 6, 6]).unwrap();

        assert!(Session::new(&universe, placeholder).is_err());

        let mut session = Session::new(&universe, code(&[1, 2, 3, 4])).unwrap();
        assert!(session.submit_guess(placeholder).is_err());
        assert!(
            session
                .submit_guess(Code::from_pegs(&[1, 2, 3]).unwrap())
                .is_err()
        );
        assert_eq!(session.turns(), 0);
    }

    #[test]
    fn candidates_never_grow_and_keep_hidden() {
        let universe = Universe::new(Rules::classic());
        let mut rng = StdRng::seed_from_u64(5);

        for _ in 0..10 {
            let hidden = universe.random_code(&mut rng);
            let mut session = Session::new(&universe, hidden).unwrap();
            let mut previous = session.remaining_candidates();

            for _ in 0..6 {
                let guess = universe.random_code(&mut rng);
                session.submit_guess(guess).unwrap();

                assert!(session.remaining_candidates() <= previous);
                assert!(session.remaining_candidates() >= 1);
                assert!(session.candidates().contains(&hidden));
                previous = session.remaining_candidates();
            }

            assert_eq!(session.history().len(), 6);
        }
    }

    #[test]
    fn history_records_each_turn() {
        let universe = Universe::new(Rules::classic());
        let mut session = Session::new(&universe, code(&[0, 1, 2, 3])).unwrap();

        session.submit_guess(code(&[0, 0, 1, 1])).unwrap();
        session.submit_guess(code(&[2, 2, 3, 3])).unwrap();

        let history = session.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].guess, code(&[0, 0, 1, 1]));
        assert_eq!(history[0].feedback, Feedback::new(1, 1));
        assert_eq!(history[1].feedback, Feedback::new(1, 1));
        assert_eq!(history[1].candidates_before, history[0].candidates_after);
    }
}
