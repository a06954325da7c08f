//! Bulls and Cows Solver
//!
//! Simulates an automated bulls and cows player: a solver keeps every secret
//! consistent with the feedback seen so far, guesses one of them, and repeats
//! until the secret is found. Running many games gives the average number of
//! guesses a strategy needs.
//!
//! # Quick Start
//!
//! ```rust
//! use bulls_cows::commands::solve;
//! use bulls_cows::commands::seeded_rng;
//! use bulls_cows::core::{CandidateSpace, Code};
//! use bulls_cows::solver::StrategyType;
//!
//! // Every ordered pair of distinct symbols from {0, 1, 2}
//! let space = CandidateSpace::new(3, 2).unwrap();
//! let strategy = StrategyType::from_name("middle").unwrap();
//!
//! let secret = Code::new(&[0, 1]).unwrap();
//! let moves = solve(&strategy, &space, &secret, &mut seeded_rng(Some(1), 0)).unwrap();
//! assert_eq!(moves, 3);
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Solving algorithms
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::{ConfigError, Error};
