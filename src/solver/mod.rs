//! Bulls and cows solving algorithms
//!
//! A `Solver` owns one game's candidate set; a `Strategy` picks guesses from it.

mod engine;
pub mod heuristic;
pub mod strategy;

pub use engine::{Solver, SolverError};
pub use heuristic::{LeastGuessedStrategy, MostRemainingStrategy};
pub use strategy::{
    FirstStrategy, LastStrategy, MiddleStrategy, RandomStrategy, STRATEGIES, Strategy,
    StrategyEntry, StrategyType,
};
