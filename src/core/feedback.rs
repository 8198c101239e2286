//! Feedback oracle and feedback representation
//!
//! Feedback is the pair of peg counts returned for a guess:
//! - `exact`: right colour in the right position (black/red key peg)
//! - `partial`: right colour in the wrong position (white key peg)
//!
//! Duplicate colours are capped by the smaller multiplicity in either code,
//! so a colour is never counted twice.

use super::code::Code;
use super::rules::{MAX_CELLS, MAX_COLOURS, Rules};
use std::fmt;

/// Key-peg feedback for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Feedback {
    pub exact: u8,
    pub partial: u8,
}

/// Error type for unparseable or impossible feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    Malformed(String),
    TooManyPegs { total: usize, cells: usize },
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(input) => write!(
                f,
                "Invalid feedback '{input}': use 'exact,partial' (e.g. 2,1) or pegs (e.g. BBW)"
            ),
            Self::TooManyPegs { total, cells } => {
                write!(f, "Feedback has {total} pegs but codes only have {cells}")
            }
        }
    }
}

impl std::error::Error for FeedbackError {}

impl Feedback {
    /// Create feedback from raw counts
    #[inline]
    #[must_use]
    pub const fn new(exact: u8, partial: u8) -> Self {
        Self { exact, partial }
    }

    /// Feedback for a perfect guess under `rules`
    #[must_use]
    pub const fn win(rules: Rules) -> Self {
        Self::new(rules.cells() as u8, 0)
    }

    /// Score `guess` against `hidden`
    ///
    /// # Algorithm
    /// 1. `exact` counts positions holding equal colours
    /// 2. `value_matches` sums `min(count in hidden, count in guess)` over all colours
    /// 3. `partial = value_matches - exact`
    ///
    /// Colour counts live in fixed arrays, so scoring never allocates.
    ///
    /// # Panics
    /// Panics if the two codes have different lengths.
    ///
    /// # Examples
    /// ```
    /// use mastermind_minimax::core::{Code, Feedback, Rules};
    ///
    /// let rules = Rules::classic();
    /// let hidden = Code::new(&[1, 2, 3, 4], rules).unwrap();
    /// let guess = Code::new(&[4, 3, 2, 1], rules).unwrap();
    ///
    /// assert_eq!(Feedback::score(&hidden, &guess), Feedback::new(0, 4));
    /// ```
    #[must_use]
    pub fn score(hidden: &Code, guess: &Code) -> Self {
        assert_eq!(
            hidden.cells(),
            guess.cells(),
            "cannot score codes of different lengths"
        );

        let mut exact = 0u8;
        let mut hidden_counts = [0u8; MAX_COLOURS];
        let mut guess_counts = [0u8; MAX_COLOURS];

        for (&h, &g) in hidden.pegs().iter().zip(guess.pegs()) {
            exact += u8::from(h == g);
            hidden_counts[usize::from(h)] += 1;
            guess_counts[usize::from(g)] += 1;
        }

        let value_matches: u8 = hidden_counts
            .iter()
            .zip(&guess_counts)
            .map(|(&h, &g)| h.min(g))
            .sum();

        Self {
            exact,
            partial: value_matches - exact,
        }
    }

    /// `true` when every peg is an exact match
    #[inline]
    #[must_use]
    pub const fn is_win(self, rules: Rules) -> bool {
        self.exact as usize == rules.cells()
    }

    /// Dense slot for this feedback in a `[_; OUTCOME_SLOTS]` table
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.exact as usize * (MAX_CELLS + 1) + self.partial as usize
    }

    /// Every feedback pair with `exact + partial <= cells`, ordered by `(exact, partial)`
    #[must_use]
    pub fn outcomes(rules: Rules) -> Vec<Self> {
        let cells = rules.cells() as u8;
        (0..=cells)
            .flat_map(|exact| (0..=cells - exact).map(move |partial| Self::new(exact, partial)))
            .collect()
    }

    /// Parse feedback typed by a human codemaker
    ///
    /// Accepts:
    /// - `"2,1"`, `"2 1"` or `"21"` for two exact and one partial
    /// - peg strings: `B`/`R` for exact, `W` for partial, `-`/`.` for empty
    ///
    /// # Errors
    /// Returns `FeedbackError` if the input cannot be read or has more pegs
    /// than the code length.
    ///
    /// # Examples
    /// ```
    /// use mastermind_minimax::core::{Feedback, Rules};
    ///
    /// let rules = Rules::classic();
    /// assert_eq!(Feedback::parse("2,1", rules).unwrap(), Feedback::new(2, 1));
    /// assert_eq!(Feedback::parse("BBW-", rules).unwrap(), Feedback::new(2, 1));
    /// assert!(Feedback::parse("4,1", rules).is_err());
    /// ```
    pub fn parse(input: &str, rules: Rules) -> Result<Self, FeedbackError> {
        let trimmed = input.trim();
        let malformed = || FeedbackError::Malformed(trimmed.to_string());

        let feedback = if trimmed.contains([',', ' ']) {
            let numbers: Vec<u8> = trimmed
                .split([',', ' '])
                .filter(|t| !t.is_empty())
                .map(str::parse)
                .collect::<Result<_, _>>()
                .map_err(|_| malformed())?;
            match numbers.as_slice() {
                [exact, partial] => Self::new(*exact, *partial),
                _ => return Err(malformed()),
            }
        } else if trimmed.len() == 2 && trimmed.chars().all(|c| c.is_ascii_digit()) {
            let bytes = trimmed.as_bytes();
            Self::new(bytes[0] - b'0', bytes[1] - b'0')
        } else if !trimmed.is_empty()
            && trimmed
                .chars()
                .all(|c| matches!(c, 'B' | 'b' | 'R' | 'r' | 'W' | 'w' | '-' | '.'))
        {
            let exact = trimmed
                .chars()
                .filter(|c| matches!(c, 'B' | 'b' | 'R' | 'r'))
                .count();
            let partial = trimmed.chars().filter(|c| matches!(c, 'W' | 'w')).count();
            if exact + partial > rules.cells() {
                return Err(FeedbackError::TooManyPegs {
                    total: exact + partial,
                    cells: rules.cells(),
                });
            }
            Self::new(exact as u8, partial as u8)
        } else {
            return Err(malformed());
        };

        let total = usize::from(feedback.exact) + usize::from(feedback.partial);
        if total > rules.cells() {
            return Err(FeedbackError::TooManyPegs {
                total,
                cells: rules.cells(),
            });
        }

        Ok(feedback)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}B {}W", self.exact, self.partial)
    }
}
