//! Symbol frequency scoring strategies
//!
//! Both strategies count how often each symbol occurs in a set of codes and
//! score a candidate as `Σ symbol × count(symbol)` over its symbols. The
//! first guess of a game has nothing to count, so it is drawn uniformly at
//! random from the candidates.

use super::strategy::Strategy;
use crate::core::{Code, Symbol};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashMap;
use std::cmp::Reverse;

/// Count symbol occurrences across a set of codes
#[must_use]
pub fn symbol_counts<'c>(codes: impl IntoIterator<Item = &'c Code>) -> FxHashMap<Symbol, usize> {
    let mut counts = FxHashMap::default();
    for code in codes {
        for &symbol in code.symbols() {
            *counts.entry(symbol).or_insert(0) += 1;
        }
    }
    counts
}

/// Score a code against symbol counts: `Σ symbol × count(symbol)`
#[must_use]
pub fn score(code: &Code, counts: &FxHashMap<Symbol, usize>) -> usize {
    code.symbols()
        .iter()
        .map(|&symbol| symbol * counts.get(&symbol).copied().unwrap_or(0))
        .sum()
}

/// Least commonly guessed symbol strategy
///
/// Counts symbols over every earlier guess and picks the lowest scoring
/// candidate. Ties go to the earliest candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LeastGuessedStrategy;

impl Strategy for LeastGuessedStrategy {
    fn select_guess<'a, R: Rng + ?Sized>(
        &self,
        candidates: &'a [Code],
        guessed: &[Code],
        rng: &mut R,
    ) -> Option<&'a Code> {
        if guessed.is_empty() {
            return candidates.choose(rng);
        }

        let counts = symbol_counts(guessed);

        // min_by_key keeps the first of equal minimums
        candidates
            .iter()
            .min_by_key(|candidate| score(candidate, &counts))
    }
}

/// Most common remaining symbol strategy
///
/// Counts symbols over the remaining candidates and picks the highest scoring
/// candidate. Ties go to the earliest candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MostRemainingStrategy;

impl Strategy for MostRemainingStrategy {
    fn select_guess<'a, R: Rng + ?Sized>(
        &self,
        candidates: &'a [Code],
        guessed: &[Code],
        rng: &mut R,
    ) -> Option<&'a Code> {
        if guessed.is_empty() {
            return candidates.choose(rng);
        }

        let counts = symbol_counts(candidates);

        // max_by_key would keep the last of equal maximums
        candidates
            .iter()
            .min_by_key(|candidate| Reverse(score(candidate, &counts)))
    }
}
