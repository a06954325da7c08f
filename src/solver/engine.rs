//! Per-game solver state

use super::strategy::Strategy;
use crate::core::{CandidateSpace, Code, Response};
use rand::Rng;
use std::borrow::Cow;
use thiserror::Error;

/// Error raised when the solver cannot continue a game
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// Every candidate was eliminated, so feedback disagreed with the elimination rule
    #[error("no candidates remain after {guesses} guesses")]
    NoCandidates { guesses: usize },
}

/// Bulls and cows solver for a single game
///
/// Owns the set of candidates consistent with every response seen so far.
/// The set starts as a borrow of the shared candidate space and becomes an
/// owned copy on the first update, so the space itself is never modified.
pub struct Solver<'a, S: Strategy> {
    strategy: &'a S,
    candidates: Cow<'a, [Code]>,
    guesses: Vec<Code>,
}

impl<'a, S: Strategy> Solver<'a, S> {
    /// Create a solver for a new game over the full candidate space
    #[must_use]
    pub fn new(strategy: &'a S, space: &'a CandidateSpace) -> Self {
        Self {
            strategy,
            candidates: Cow::Borrowed(space.codes()),
            guesses: Vec::new(),
        }
    }

    /// Candidates still consistent with all feedback, in generation order
    #[must_use]
    pub fn candidates(&self) -> &[Code] {
        &self.candidates
    }

    /// Guesses played so far, oldest first
    #[must_use]
    pub fn guesses(&self) -> &[Code] {
        &self.guesses
    }

    /// Get the next guess from the strategy
    ///
    /// # Errors
    /// Returns `SolverError::NoCandidates` if every candidate has been eliminated.
    pub fn get_guess<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Code, SolverError> {
        self.strategy
            .select_guess(&self.candidates, &self.guesses, rng)
            .cloned()
            .ok_or(SolverError::NoCandidates {
                guesses: self.guesses.len(),
            })
    }

    /// Record a guess and drop every candidate that would not have produced `response`
    ///
    /// Remaining candidates keep their order.
    pub fn update_response(&mut self, guess: &Code, response: Response) {
        let consistent = |candidate: &Code| Response::calculate(guess, candidate) == response;

        match &mut self.candidates {
            Cow::Borrowed(space) => {
                let narrowed: Vec<Code> = space
                    .iter()
                    .filter(|&candidate| consistent(candidate))
                    .cloned()
                    .collect();
                self.candidates = Cow::Owned(narrowed);
            }
            Cow::Owned(candidates) => candidates.retain(consistent),
        }

        self.guesses.push(guess.clone());
    }
}
