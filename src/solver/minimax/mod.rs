//! Minimax-based Mastermind solver
//!
//! Implements worst-case minimization with monotonic pruning.

mod calculator;
mod selector;

pub use calculator::{bounded_max_remaining, calculate_max_remaining, partition_counts};
pub use selector::{Selection, select_best_guess, select_best_guess_parallel};
