//! Core domain types for Mastermind
//!
//! Rules, codes and the feedback oracle. Everything here is pure and
//! allocation-free on the scoring path.

mod code;
mod feedback;
mod rules;

pub use code::{COLOUR_NAMES, Code, CodeError};
pub use feedback::{Feedback, FeedbackError};
pub use rules::{MAX_CELLS, MAX_COLOURS, MAX_UNIVERSE_SIZE, OUTCOME_SLOTS, Rules, RulesError};
