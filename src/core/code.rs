//! Mastermind code representation
//!
//! A Code is a fixed-length sequence of colour indices. It is `Copy` and
//! allocation-free so the oracle can be called millions of times per turn.

use super::rules::{MAX_CELLS, MAX_COLOURS, Rules};
use std::fmt;

/// Human-readable colour names, indexed by colour value
pub const COLOUR_NAMES: [&str; MAX_COLOURS] = [
    "blue", "green", "orange", "pink", "white", "yellow", "red", "purple", "brown", "black",
    "cyan", "grey", "lime", "navy", "teal", "gold",
];

/// A sequence of colour pegs (hidden code or guess)
///
/// Stores up to `MAX_CELLS` pegs inline. Unused trailing slots are always zero,
/// so the derived equality and ordering only depend on the visible pegs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code {
    pegs: [u8; MAX_CELLS],
    len: u8,
}

/// Error type for invalid codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    InvalidLength { expected: usize, got: usize },
    ColourOutOfRange { colour: usize, colours: usize },
    UnknownColour(String),
    Empty,
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { expected, got } => {
                write!(f, "Code must have exactly {expected} pegs, got {got}")
            }
            Self::ColourOutOfRange { colour, colours } => {
                write!(f, "Colour {colour} is out of range (0..{colours})")
            }
            Self::UnknownColour(token) => write!(f, "Unknown colour '{token}'"),
            Self::Empty => write!(f, "Code is empty"),
        }
    }
}

impl std::error::Error for CodeError {}

impl Code {
    /// Create a code checked against the game rules
    ///
    /// # Errors
    /// Returns `CodeError` if the length differs from `rules.cells()` or any
    /// peg is outside `0..rules.colours()`.
    ///
    /// # Examples
    /// ```
    /// use mastermind_minimax::core::{Code, Rules};
    ///
    /// let rules = Rules::classic();
    /// let code = Code::new(&[1, 2, 3, 4], rules).unwrap();
    /// assert_eq!(code.pegs(), &[1, 2, 3, 4]);
    ///
    /// assert!(Code::new(&[1, 2, 3], rules).is_err());
    /// assert!(Code::new(&[1, 2, 3, 6], rules).is_err());
    /// ```
    pub fn new(pegs: &[u8], rules: Rules) -> Result<Self, CodeError> {
        if pegs.len() != rules.cells() {
            return Err(CodeError::InvalidLength {
                expected: rules.cells(),
                got: pegs.len(),
            });
        }
        if let Some(&colour) = pegs.iter().find(|&&p| usize::from(p) >= rules.colours()) {
            return Err(CodeError::ColourOutOfRange {
                colour: usize::from(colour),
                colours: rules.colours(),
            });
        }
        Self::from_pegs(pegs)
    }

    /// Create a code checked only against the storage limits
    ///
    /// Useful for probing with placeholder colours that no hidden code can contain.
    ///
    /// # Errors
    /// Returns `CodeError` if `pegs` is empty, longer than `MAX_CELLS`, or holds
    /// a value `>= MAX_COLOURS`.
    pub fn from_pegs(pegs: &[u8]) -> Result<Self, CodeError> {
        if pegs.is_empty() {
            return Err(CodeError::Empty);
        }
        if pegs.len() > MAX_CELLS {
            return Err(CodeError::InvalidLength {
                expected: MAX_CELLS,
                got: pegs.len(),
            });
        }
        if let Some(&colour) = pegs.iter().find(|&&p| usize::from(p) >= MAX_COLOURS) {
            return Err(CodeError::ColourOutOfRange {
                colour: usize::from(colour),
                colours: MAX_COLOURS,
            });
        }

        let mut stored = [0u8; MAX_CELLS];
        stored[..pegs.len()].copy_from_slice(pegs);
        Ok(Self {
            pegs: stored,
            len: pegs.len() as u8,
        })
    }

    /// Build the code at position `index` of the lexicographic enumeration
    ///
    /// The first peg is the most significant digit in base `colours`.
    ///
    /// # Panics
    /// Panics if `index >= rules.universe_size()`.
    #[must_use]
    pub fn from_index(index: usize, rules: Rules) -> Self {
        assert!(
            index < rules.universe_size(),
            "code index {index} out of range for {rules}"
        );

        let colours = rules.colours();
        let cells = rules.cells();
        let mut pegs = [0u8; MAX_CELLS];
        let mut rest = index;
        for slot in pegs[..cells].iter_mut().rev() {
            *slot = (rest % colours) as u8;
            rest /= colours;
        }

        Self {
            pegs,
            len: cells as u8,
        }
    }

    /// Position of this code in the lexicographic enumeration
    #[must_use]
    pub fn index(&self, rules: Rules) -> usize {
        self.pegs()
            .iter()
            .fold(0, |acc, &p| acc * rules.colours() + usize::from(p))
    }

    /// Parse a code from user input
    ///
    /// Accepts either a compact digit string (`"1234"`, hex digits for colours
    /// 10 and up) or colour names / digits separated by commas or spaces
    /// (`"blue, green, orange, pink"`).
    ///
    /// # Errors
    /// Returns `CodeError` for unknown tokens or codes that don't fit `rules`.
    ///
    /// # Examples
    /// ```
    /// use mastermind_minimax::core::{Code, Rules};
    ///
    /// let rules = Rules::classic();
    /// let a = Code::parse("0123", rules).unwrap();
    /// let b = Code::parse("blue green orange pink", rules).unwrap();
    /// assert_eq!(a, b);
    /// ```
    pub fn parse(input: &str, rules: Rules) -> Result<Self, CodeError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(CodeError::Empty);
        }

        let pegs: Vec<u8> = if input.contains([',', ' ']) {
            input
                .split([',', ' '])
                .filter(|token| !token.is_empty())
                .map(parse_token)
                .collect::<Result<_, _>>()?
        } else {
            input
                .chars()
                .map(|c| {
                    c.to_digit(16)
                        .map(|d| d as u8)
                        .ok_or_else(|| CodeError::UnknownColour(c.to_string()))
                })
                .collect::<Result<_, _>>()?
        };

        Self::new(&pegs, rules)
    }

    /// The visible pegs
    #[inline]
    #[must_use]
    pub fn pegs(&self) -> &[u8] {
        &self.pegs[..usize::from(self.len)]
    }

    /// Number of pegs in this code
    #[inline]
    #[must_use]
    pub const fn cells(&self) -> usize {
        self.len as usize
    }

    /// Multiplicity of each colour
    #[inline]
    #[must_use]
    pub fn colour_counts(&self) -> [u8; MAX_COLOURS] {
        let mut counts = [0u8; MAX_COLOURS];
        for &peg in self.pegs() {
            counts[usize::from(peg)] += 1;
        }
        counts
    }

    /// `true` when no colour appears twice
    #[must_use]
    pub fn has_distinct_colours(&self) -> bool {
        self.colour_counts().iter().all(|&n| n <= 1)
    }

    /// Colour names for each peg
    #[must_use]
    pub fn colour_names(&self) -> Vec<&'static str> {
        self.pegs()
            .iter()
            .map(|&p| COLOUR_NAMES[usize::from(p)])
            .collect()
    }
}

fn parse_token(token: &str) -> Result<u8, CodeError> {
    let lower = token.to_ascii_lowercase();
    if let Some(pos) = COLOUR_NAMES.iter().position(|&name| name == lower) {
        return Ok(pos as u8);
    }
    lower
        .parse::<u8>()
        .map_err(|_| CodeError::UnknownColour(token.to_string()))
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &peg in self.pegs() {
            write!(f, "{peg:x}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_creation_valid() {
        let code = Code::new(&[1, 2, 3, 4], Rules::classic()).unwrap();
        assert_eq!(code.pegs(), &[1, 2, 3, 4]);
        assert_eq!(code.cells(), 4);
    }

    #[test]
    fn code_creation_invalid_length() {
        let rules = Rules::classic();
        assert_eq!(
            Code::new(&[1, 2, 3], rules),
            Err(CodeError::InvalidLength {
                expected: 4,
                got: 3
            })
        );
        assert!(Code::new(&[1, 2, 3, 4, 5], rules).is_err());
    }

    #[test]
    fn code_creation_out_of_range() {
        assert_eq!(
            Code::new(&[0, 6, 0, 0], Rules::classic()),
            Err(CodeError::ColourOutOfRange {
                colour: 6,
                colours: 6
            })
        );
    }

    #[test]
    fn from_pegs_allows_placeholder_colours() {
        let code = Code::from_pegs(&[6, 6, 6, 6]).unwrap();
        assert_eq!(code.pegs(), &[6, 6, 6, 6]);
        assert!(Code::from_pegs(&[]).is_err());
        assert!(Code::from_pegs(&[16]).is_err());
        assert!(Code::from_pegs(&[0; 9]).is_err());
    }

    #[test]
    fn index_round_trips_through_enumeration() {
        let rules = Rules::new(3, 3).unwrap();
        for index in 0..rules.universe_size() {
            assert_eq!(Code::from_index(index, rules).index(rules), index);
        }
    }

    #[test]
    fn from_index_is_lexicographic() {
        let rules = Rules::classic();
        assert_eq!(Code::from_index(0, rules).pegs(), &[0, 0, 0, 0]);
        assert_eq!(Code::from_index(1, rules).pegs(), &[0, 0, 0, 1]);
        assert_eq!(Code::from_index(6, rules).pegs(), &[0, 0, 1, 0]);
        assert_eq!(Code::from_index(1295, rules).pegs(), &[5, 5, 5, 5]);
        assert!(Code::from_index(6, rules) > Code::from_index(5, rules));
    }

    #[test]
    fn parse_compact_digits() {
        let code = Code::parse("1234", Rules::classic()).unwrap();
        assert_eq!(code.pegs(), &[1, 2, 3, 4]);
    }

    #[test]
    fn parse_hex_digits_for_large_alphabets() {
        let rules = Rules::new(12, 3).unwrap();
        let code = Code::parse("ab0", rules).unwrap();
        assert_eq!(code.pegs(), &[10, 11, 0]);
    }

    #[test]
    fn parse_names_and_separators() {
        let rules = Rules::classic();
        let by_name = Code::parse("Blue,green, ORANGE pink", rules).unwrap();
        assert_eq!(by_name.pegs(), &[0, 1, 2, 3]);

        let by_digit = Code::parse("5 4 3 2", rules).unwrap();
        assert_eq!(by_digit.pegs(), &[5, 4, 3, 2]);
    }

    #[test]
    fn parse_rejects_garbage() {
        let rules = Rules::classic();
        assert_eq!(Code::parse("   ", rules), Err(CodeError::Empty));
        assert!(matches!(
            Code::parse("12x4", rules),
            Err(CodeError::UnknownColour(_))
        ));
        assert!(matches!(
            Code::parse("blue mauve", rules),
            Err(CodeError::UnknownColour(_))
        ));
        assert!(Code::parse("123", rules).is_err());
        assert!(Code::parse("1239", rules).is_err());
    }

    #[test]
    fn colour_counts_and_distinct() {
        let code = Code::new(&[1, 1, 3, 5], Rules::classic()).unwrap();
        let counts = code.colour_counts();
        assert_eq!(counts[1], 2);
        assert_eq!(counts[3], 1);
        assert_eq!(counts[0], 0);
        assert!(!code.has_distinct_colours());

        let distinct = Code::new(&[0, 1, 2, 3], Rules::classic()).unwrap();
        assert!(distinct.has_distinct_colours());
    }

    #[test]
    fn display_and_names() {
        let code = Code::new(&[0, 1, 4, 5], Rules::classic()).unwrap();
        assert_eq!(code.to_string(), "0145");
        assert_eq!(code.colour_names(), vec!["blue", "green", "white", "yellow"]);
    }
}
