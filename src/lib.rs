//! Mastermind Solver
//!
//! A Mastermind codebreaker that picks every guess by exact minimax: the guess
//! whose worst-case feedback leaves the fewest candidate codes.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mastermind_minimax::core::{Code, Rules};
//! use mastermind_minimax::game::Session;
//! use mastermind_minimax::solver::{Solver, SolverConfig, Universe};
//!
//! let rules = Rules::classic();
//! let universe = Universe::new(rules);
//! let solver = Solver::new(&universe, SolverConfig::default());
//!
//! let hidden = Code::parse("3141", rules).unwrap();
//! let mut session = Session::new(&universe, hidden).unwrap();
//!
//! while !session.is_solved() {
//!     let selection = solver
//!         .next_guess(session.candidates(), session.turns())
//!         .unwrap();
//!     let feedback = session.submit_guess(selection.guess).unwrap();
//!     println!("{} -> {feedback}", selection.guess);
//! }
//! ```

// Core domain types
pub mod core;

// Guess selection
pub mod solver;

// Game state
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
