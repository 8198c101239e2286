//! Mastermind solving algorithms
//!
//! The guess universe, candidate filtering and the minimax selector.

mod engine;
pub mod filter;
pub mod minimax;
pub mod strategy;
mod universe;

pub use engine::Solver;
pub use filter::{count_consistent, filter_candidates, is_consistent};
pub use minimax::Selection;
pub use strategy::{GuessPool, Opening, SolverConfig};
pub use universe::Universe;
