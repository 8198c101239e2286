//! Candidate tracking for a codebreaker
//!
//! Holds the live candidate set and the guess history. Feedback comes from
//! outside (a human codemaker or a [`Session`](super::Session)), so a turn
//! that would empty the candidate set is rejected and rolled back.

use crate::core::{Code, CodeError, Feedback, FeedbackError, Rules};
use crate::solver::{Universe, filter_candidates};
use std::fmt;

/// One recorded guess and its effect on the candidate set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub guess: Code,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Error type for rejected turns
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackerError {
    InvalidGuess(CodeError),
    InvalidFeedback(FeedbackError),
    /// No code is consistent with the history plus this turn
    Inconsistent { guess: Code, feedback: Feedback },
}

impl fmt::Display for TrackerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGuess(err) => write!(f, "Invalid guess: {err}"),
            Self::InvalidFeedback(err) => write!(f, "Invalid feedback: {err}"),
            Self::Inconsistent { guess, feedback } => write!(
                f,
                "No code is consistent with {feedback} for {guess}; the feedback may be wrong"
            ),
        }
    }
}

impl std::error::Error for TrackerError {}

impl From<CodeError> for TrackerError {
    fn from(err: CodeError) -> Self {
        Self::InvalidGuess(err)
    }
}

impl From<FeedbackError> for TrackerError {
    fn from(err: FeedbackError) -> Self {
        Self::InvalidFeedback(err)
    }
}

/// Live candidate set plus append-only guess history
#[derive(Debug, Clone)]
pub struct Tracker<'a> {
    universe: &'a Universe,
    candidates: Vec<Code>,
    history: Vec<Turn>,
}

impl<'a> Tracker<'a> {
    /// Start with every code in the universe as a candidate
    #[must_use]
    pub fn new(universe: &'a Universe) -> Self {
        Self {
            universe,
            candidates: universe.codes().to_vec(),
            history: Vec::new(),
        }
    }

    #[must_use]
    pub const fn rules(&self) -> Rules {
        self.universe.rules()
    }

    #[must_use]
    pub const fn universe(&self) -> &'a Universe {
        self.universe
    }

    /// Record a guess and its feedback, narrowing the candidate set
    ///
    /// Returns the number of remaining candidates.
    ///
    /// # Errors
    /// Returns `TrackerError` if the guess doesn't fit the rules, the feedback
    /// has too many pegs, or no candidate survives. The tracker is unchanged
    /// on error.
    pub fn apply(&mut self, guess: Code, feedback: Feedback) -> Result<usize, TrackerError> {
        let rules = self.rules();
        let guess = Code::new(guess.pegs(), rules)?;

        let total = usize::from(feedback.exact) + usize::from(feedback.partial);
        if total > rules.cells() {
            return Err(FeedbackError::TooManyPegs {
                total,
                cells: rules.cells(),
            }
            .into());
        }

        let remaining = filter_candidates(&self.candidates, &guess, feedback);
        if remaining.is_empty() {
            return Err(TrackerError::Inconsistent { guess, feedback });
        }

        self.history.push(Turn {
            guess,
            feedback,
            candidates_before: self.candidates.len(),
            candidates_after: remaining.len(),
        });
        self.candidates = remaining;

        Ok(self.candidates.len())
    }

    /// Remove the last turn and rebuild the candidate set from the universe
    pub fn undo(&mut self) -> Option<Turn> {
        let undone = self.history.pop()?;

        let mut candidates = self.universe.codes().to_vec();
        for turn in &self.history {
            candidates = filter_candidates(&candidates, &turn.guess, turn.feedback);
        }
        self.candidates = candidates;

        Some(undone)
    }

    /// Forget all turns
    pub fn reset(&mut self) {
        self.history.clear();
        self.candidates = self.universe.codes().to_vec();
    }

    #[must_use]
    pub fn candidates(&self) -> &[Code] {
        &self.candidates
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.candidates.len()
    }

    #[must_use]
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// Number of guesses recorded
    #[must_use]
    pub fn turns(&self) -> usize {
        self.history.len()
    }

    /// `true` once a single candidate remains
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.candidates.len() == 1
    }

    /// The sole remaining candidate, if the set has narrowed to one
    #[must_use]
    pub fn solution(&self) -> Option<Code> {
        match self.candidates.as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(pegs: &[u8]) -> Code {
        Code::new(pegs, Rules::classic()).unwrap()
    }

    #[test]
    fn starts_with_full_universe() {
        let universe = Universe::new(Rules::classic());
        let tracker = Tracker::new(&universe);

        assert_eq!(tracker.remaining(), 1296);
        assert_eq!(tracker.turns(), 0);
        assert!(!tracker.is_solved());
        assert!(tracker.solution().is_none());
    }

    #[test]
    fn apply_narrows_and_records() {
        let universe = Universe::new(Rules::classic());
        let mut tracker = Tracker::new(&universe);

        let remaining = tracker
            .apply(code(&[0, 0, 1, 1]), Feedback::new(0, 0))
            .unwrap();

        assert_eq!(remaining, 256);
        assert_eq!(tracker.history().len(), 1);
        let turn = tracker.history()[0];
        assert_eq!(turn.candidates_before, 1296);
        assert_eq!(turn.candidates_after, 256);
    }

    #[test]
    fn inconsistent_feedback_rolls_back() {
        let universe = Universe::new(Rules::classic());
        let mut tracker = Tracker::new(&universe);
        tracker
            .apply(code(&[1, 2, 3, 4]), Feedback::new(4, 0))
            .unwrap();
        assert!(tracker.is_solved());

        let err = tracker
            .apply(code(&[1, 2, 3, 4]), Feedback::new(0, 0))
            .unwrap_err();
        assert!(matches!(err, TrackerError::Inconsistent { .. }));
        assert_eq!(tracker.turns(), 1);
        assert_eq!(tracker.solution(), Some(code(&[1, 2, 3, 4])));
    }

    #[test]
    fn rejects_bad_inputs() {
        let universe = Universe::new(Rules::classic());
        let mut tracker = Tracker::new(&universe);

        let placeholder = Code::from_pegs(&[6, 6, 6, 6]).unwrap();
        assert!(matches!(
            tracker.apply(placeholder, Feedback::new(0, 0)),
            Err(TrackerError::InvalidGuess(_))
        ));
        assert!(matches!(
            tracker.apply(code(&[0, 1, 2, 3]), Feedback::new(3, 2)),
            Err(TrackerError::InvalidFeedback(_))
        ));
        assert_eq!(tracker.turns(), 0);
    }

    #[test]
    fn undo_restores_previous_candidates() {
        let universe = Universe::new(Rules::classic());
        let mut tracker = Tracker::new(&universe);

        tracker
            .apply(code(&[0, 0, 1, 1]), Feedback::new(1, 1))
            .unwrap();
        let after_first = tracker.candidates().to_vec();
        tracker
            .apply(code(&[2, 3, 4, 5]), Feedback::new(0, 1))
            .unwrap();

        let undone = tracker.undo().unwrap();
        assert_eq!(undone.guess, code(&[2, 3, 4, 5]));
        assert_eq!(tracker.candidates(), after_first.as_slice());

        tracker.undo();
        assert_eq!(tracker.remaining(), 1296);
        assert!(tracker.undo().is_none());
    }

    #[test]
    fn reset_clears_everything() {
        let universe = Universe::new(Rules::classic());
        let mut tracker = Tracker::new(&universe);
        tracker
            .apply(code(&[0, 0, 1, 1]), Feedback::new(2, 0))
            .unwrap();

        tracker.reset();
        assert_eq!(tracker.turns(), 0);
        assert_eq!(tracker.remaining(), 1296);
    }

    #[test]
    fn error_messages_are_readable() {
        let err = TrackerError::Inconsistent {
            guess: code(&[1, 2, 3, 4]),
            feedback: Feedback::new(0, 0),
        };
        assert_eq!(
            err.to_string(),
            "No code is consistent with 0B 0W for 1234; the feedback may be wrong"
        );
    }
}
