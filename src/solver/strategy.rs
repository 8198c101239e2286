//! Solver configuration
//!
//! Which codes may be probed, how the first guess is chosen, and whether the
//! search is spread across threads.

/// Which codes the selector may probe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuessPool {
    /// Every code in the universe, including ones already ruled out
    #[default]
    Full,
    /// Only codes still consistent with the feedback so far
    Consistent,
}

impl GuessPool {
    /// Parse a pool name: "full" or "consistent"
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "full" | "all" => Some(Self::Full),
            "consistent" | "candidates" | "hard" => Some(Self::Consistent),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Consistent => "consistent",
        }
    }
}

/// How the first guess of a game is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Opening {
    /// Run the minimax selector on the full universe
    #[default]
    Minimax,
    /// First code with distinct colours in the (shuffled) universe order
    Random,
}

impl Opening {
    /// Parse an opening name: "minimax" or "random"
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "minimax" => Some(Self::Minimax),
            "random" => Some(Self::Random),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Minimax => "minimax",
            Self::Random => "random",
        }
    }
}

/// Complete solver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    pub pool: GuessPool,
    pub opening: Opening,
    /// Spread guess evaluation across the rayon thread pool
    pub parallel: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            pool: GuessPool::Full,
            opening: Opening::Minimax,
            parallel: true,
        }
    }
}
