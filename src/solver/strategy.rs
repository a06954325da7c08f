//! Guess selection strategies
//!
//! Defines the Strategy trait, the positional and random strategies, and the
//! registry mapping solver names to constructors.

use super::heuristic::{LeastGuessedStrategy, MostRemainingStrategy};
use crate::core::Code;
use crate::error::ConfigError;
use rand::Rng;
use rand::seq::IndexedRandom;

/// A strategy for selecting the next guess from the remaining candidates
pub trait Strategy {
    /// Select a guess from `candidates`, which keeps generation order
    ///
    /// `guessed` holds every earlier guess of the game, oldest first.
    /// Returns `None` only if `candidates` is empty.
    fn select_guess<'a, R: Rng + ?Sized>(
        &self,
        candidates: &'a [Code],
        guessed: &[Code],
        rng: &mut R,
    ) -> Option<&'a Code>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    /// Uniform random candidate
    Random(RandomStrategy),
    /// Candidate in the middle of the remaining set
    Middle(MiddleStrategy),
    /// First remaining candidate
    First(FirstStrategy),
    /// Last remaining candidate
    Last(LastStrategy),
    /// Candidate built from the least guessed symbols
    LeastGuessed(LeastGuessedStrategy),
    /// Candidate built from the most common remaining symbols
    MostRemaining(MostRemainingStrategy),
}

impl Strategy for StrategyType {
    fn select_guess<'a, R: Rng + ?Sized>(
        &self,
        candidates: &'a [Code],
        guessed: &[Code],
        rng: &mut R,
    ) -> Option<&'a Code> {
        match self {
            Self::Random(s) => s.select_guess(candidates, guessed, rng),
            Self::Middle(s) => s.select_guess(candidates, guessed, rng),
            Self::First(s) => s.select_guess(candidates, guessed, rng),
            Self::Last(s) => s.select_guess(candidates, guessed, rng),
            Self::LeastGuessed(s) => s.select_guess(candidates, guessed, rng),
            Self::MostRemaining(s) => s.select_guess(candidates, guessed, rng),
        }
    }
}

/// One registered solver: its name, a one-line summary and its constructor
#[derive(Debug, Clone, Copy)]
pub struct StrategyEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub build: fn() -> StrategyType,
}

/// Every available solver, in listing order
pub const STRATEGIES: &[StrategyEntry] = &[
    StrategyEntry {
        name: "random",
        description: "uniformly random remaining candidate",
        build: || StrategyType::Random(RandomStrategy),
    },
    StrategyEntry {
        name: "middle",
        description: "candidate at the middle index of the remaining set",
        build: || StrategyType::Middle(MiddleStrategy),
    },
    StrategyEntry {
        name: "first",
        description: "first remaining candidate",
        build: || StrategyType::First(FirstStrategy),
    },
    StrategyEntry {
        name: "last",
        description: "last remaining candidate",
        build: || StrategyType::Last(LastStrategy),
    },
    StrategyEntry {
        name: "least-guessed",
        description: "candidate whose symbols were guessed least so far (random first guess)",
        build: || StrategyType::LeastGuessed(LeastGuessedStrategy),
    },
    StrategyEntry {
        name: "most-remaining",
        description: "candidate whose symbols are most common among the remaining candidates (random first guess)",
        build: || StrategyType::MostRemaining(MostRemainingStrategy),
    },
];

impl StrategyType {
    /// Create strategy from its registry name (case-insensitive)
    ///
    /// # Errors
    /// Returns `ConfigError::UnknownSolver` if no registry entry has that name.
    ///
    /// # Examples
    /// ```
    /// use bulls_cows::solver::StrategyType;
    ///
    /// let strategy = StrategyType::from_name("middle").unwrap();
    /// assert_eq!(strategy.name(), "middle");
    /// assert!(StrategyType::from_name("telepathy").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        STRATEGIES
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(name.trim()))
            .map(|entry| (entry.build)())
            .ok_or_else(|| ConfigError::UnknownSolver {
                name: name.to_string(),
                known: STRATEGIES
                    .iter()
                    .map(|entry| entry.name)
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }

    /// Registry name of this strategy
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Random(_) => "random",
            Self::Middle(_) => "middle",
            Self::First(_) => "first",
            Self::Last(_) => "last",
            Self::LeastGuessed(_) => "least-guessed",
            Self::MostRemaining(_) => "most-remaining",
        }
    }

    /// Check if the strategy draws from the random source
    ///
    /// Deterministic strategies play the same game for the same secret.
    #[must_use]
    pub const fn is_deterministic(&self) -> bool {
        matches!(self, Self::Middle(_) | Self::First(_) | Self::Last(_))
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::Random(RandomStrategy)
    }
}

/// Random strategy
///
/// Uniformly selects one of the remaining candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_guess<'a, R: Rng + ?Sized>(
        &self,
        candidates: &'a [Code],
        _guessed: &[Code],
        rng: &mut R,
    ) -> Option<&'a Code> {
        candidates.choose(rng)
    }
}

/// Middle strategy
///
/// Selects the candidate at index `len / 2`. Fully deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MiddleStrategy;

impl Strategy for MiddleStrategy {
    fn select_guess<'a, R: Rng + ?Sized>(
        &self,
        candidates: &'a [Code],
        _guessed: &[Code],
        _rng: &mut R,
    ) -> Option<&'a Code> {
        candidates.get(candidates.len() >> 1)
    }
}

/// First strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FirstStrategy;

impl Strategy for FirstStrategy {
    fn select_guess<'a, R: Rng + ?Sized>(
        &self,
        candidates: &'a [Code],
        _guessed: &[Code],
        _rng: &mut R,
    ) -> Option<&'a Code> {
        candidates.first()
    }
}

/// Last strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LastStrategy;

impl Strategy for LastStrategy {
    fn select_guess<'a, R: Rng + ?Sized>(
        &self,
        candidates: &'a [Code],
        _guessed: &[Code],
        _rng: &mut R,
    ) -> Option<&'a Code> {
        candidates.last()
    }
}
