//! Game rules: alphabet size and code length
//!
//! Both values are fixed for the lifetime of a game. Every other type in the
//! crate takes a `Rules` by reference instead of reading process-wide constants.

use std::fmt;

/// Largest supported alphabet (colours are stored as `u8` and counted in fixed arrays)
pub const MAX_COLOURS: usize = 16;

/// Largest supported code length
pub const MAX_CELLS: usize = 8;

/// Upper bound on `colours^cells`, so universe indices and partition counts fit in `u32`
pub const MAX_UNIVERSE_SIZE: usize = 1 << 22;

/// Number of dense feedback slots needed for any legal rules: `(MAX_CELLS + 1)^2`
pub const OUTCOME_SLOTS: usize = (MAX_CELLS + 1) * (MAX_CELLS + 1);

/// Alphabet size and code length for one game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rules {
    colours: u8,
    cells: u8,
}

/// Error type for invalid rule combinations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    TooFewColours(usize),
    TooManyColours(usize),
    InvalidCells(usize),
    UniverseTooLarge { colours: usize, cells: usize },
}

impl fmt::Display for RulesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewColours(n) => write!(f, "Need at least 2 colours, got {n}"),
            Self::TooManyColours(n) => {
                write!(f, "At most {MAX_COLOURS} colours are supported, got {n}")
            }
            Self::InvalidCells(n) => {
                write!(f, "Code length must be between 1 and {MAX_CELLS}, got {n}")
            }
            Self::UniverseTooLarge { colours, cells } => write!(
                f,
                "{colours}^{cells} codes exceeds the supported maximum of {MAX_UNIVERSE_SIZE}"
            ),
        }
    }
}

impl std::error::Error for RulesError {}

impl Rules {
    /// Create a validated rule set
    ///
    /// # Errors
    /// Returns `RulesError` if the alphabet or length is out of range, or if
    /// the resulting universe would be too large to enumerate.
    ///
    /// # Examples
    /// ```
    /// use mastermind_minimax::core::Rules;
    ///
    /// let rules = Rules::new(6, 4).unwrap();
    /// assert_eq!(rules.universe_size(), 1296);
    ///
    /// assert!(Rules::new(1, 4).is_err());
    /// assert!(Rules::new(6, 0).is_err());
    /// ```
    pub fn new(colours: usize, cells: usize) -> Result<Self, RulesError> {
        if colours < 2 {
            return Err(RulesError::TooFewColours(colours));
        }
        if colours > MAX_COLOURS {
            return Err(RulesError::TooManyColours(colours));
        }
        if cells == 0 || cells > MAX_CELLS {
            return Err(RulesError::InvalidCells(cells));
        }

        let size = (0..cells).try_fold(1usize, |acc, _| acc.checked_mul(colours));
        match size {
            Some(size) if size <= MAX_UNIVERSE_SIZE => Ok(Self {
                colours: colours as u8,
                cells: cells as u8,
            }),
            _ => Err(RulesError::UniverseTooLarge { colours, cells }),
        }
    }

    /// Classic Mastermind: 6 colours, 4 pegs
    #[must_use]
    pub const fn classic() -> Self {
        Self {
            colours: 6,
            cells: 4,
        }
    }

    /// Super Mastermind: 8 colours, 5 pegs
    #[must_use]
    pub const fn super_mastermind() -> Self {
        Self {
            colours: 8,
            cells: 5,
        }
    }

    #[inline]
    #[must_use]
    pub const fn colours(self) -> usize {
        self.colours as usize
    }

    #[inline]
    #[must_use]
    pub const fn cells(self) -> usize {
        self.cells as usize
    }

    /// Total number of codes, `colours^cells`
    #[must_use]
    pub fn universe_size(self) -> usize {
        self.colours().pow(self.cells as u32)
    }

    /// Number of distinct feedback pairs `(exact, partial)` with `exact + partial <= cells`
    ///
    /// Includes `(cells - 1, 1)`, which can never actually occur.
    #[must_use]
    pub const fn outcome_count(self) -> usize {
        let n = self.cells as usize + 1;
        n * (n + 1) / 2
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::classic()
    }
}

impl fmt::Display for Rules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} colours × {} pegs", self.colours, self.cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_rules() {
        let rules = Rules::classic();
        assert_eq!(rules.colours(), 6);
        assert_eq!(rules.cells(), 4);
        assert_eq!(rules.universe_size(), 1296);
        assert_eq!(rules, Rules::default());
    }

    #[test]
    fn super_mastermind_rules() {
        let rules = Rules::super_mastermind();
        assert_eq!(rules.universe_size(), 32768);
        assert_eq!(Rules::new(8, 5).unwrap(), rules);
    }

    #[test]
    fn rejects_bad_colours() {
        assert_eq!(Rules::new(0, 4), Err(RulesError::TooFewColours(0)));
        assert_eq!(Rules::new(1, 4), Err(RulesError::TooFewColours(1)));
        assert_eq!(Rules::new(17, 2), Err(RulesError::TooManyColours(17)));
    }

    #[test]
    fn rejects_bad_cells() {
        assert_eq!(Rules::new(6, 0), Err(RulesError::InvalidCells(0)));
        assert_eq!(Rules::new(2, 9), Err(RulesError::InvalidCells(9)));
    }

    #[test]
    fn rejects_huge_universe() {
        // 16^8 = 2^32
        assert!(matches!(
            Rules::new(16, 8),
            Err(RulesError::UniverseTooLarge { .. })
        ));
        // 2^8 is fine
        assert!(Rules::new(2, 8).is_ok());
    }

    #[test]
    fn outcome_count_matches_triangle() {
        assert_eq!(Rules::classic().outcome_count(), 15);
        assert_eq!(Rules::new(3, 1).unwrap().outcome_count(), 3);
    }

    #[test]
    fn display_is_readable() {
        assert_eq!(Rules::classic().to_string(), "6 colours × 4 pegs");
    }
}
