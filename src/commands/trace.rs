//! Single game trace command
//!
//! Plays one game against a chosen secret and records every step.

use crate::core::{CandidateSpace, Code, Response};
use crate::error::{ConfigError, Error};
use crate::solver::{Solver, StrategyType};
use rand::Rng;

/// A single guess step of a traced game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceStep {
    pub guess: Code,
    pub response: Response,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Result of tracing a game
#[derive(Debug, Clone)]
pub struct TraceResult {
    pub strategy: &'static str,
    pub secret: Code,
    pub steps: Vec<TraceStep>,
}

impl TraceResult {
    /// Number of guesses, including the winning one
    #[must_use]
    pub fn moves(&self) -> usize {
        self.steps.len()
    }
}

/// Play one game against `secret`, recording guesses, responses and candidate counts
///
/// # Errors
///
/// Returns an error if:
/// - The secret does not belong to the candidate space
/// - The solver runs out of candidates
pub fn trace_game<R: Rng + ?Sized>(
    strategy: &StrategyType,
    space: &CandidateSpace,
    secret: &Code,
    rng: &mut R,
) -> Result<TraceResult, Error> {
    if !space.admits(secret) {
        return Err(ConfigError::SecretOutsideSpace {
            secret: secret.clone(),
            alphabet_len: space.alphabet_len(),
            secret_len: space.secret_len(),
        }
        .into());
    }

    let mut solver = Solver::new(strategy, space);
    let mut steps = Vec::new();

    loop {
        let candidates_before = solver.candidates().len();
        let guess = solver.get_guess(rng)?;
        let response = Response::calculate(&guess, secret);
        let solved = response.is_solved(secret.len());

        if !solved {
            solver.update_response(&guess, response);
        }

        steps.push(TraceStep {
            guess,
            response,
            candidates_before,
            candidates_after: if solved { 1 } else { solver.candidates().len() },
        });

        if solved {
            return Ok(TraceResult {
                strategy: strategy.name(),
                secret: secret.clone(),
                steps,
            });
        }
    }
}
