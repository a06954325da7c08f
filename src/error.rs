//! Error types shared across the crate

use crate::core::{Code, CodeError};
use crate::solver::SolverError;
use thiserror::Error;

/// Invalid run configuration, reported before any game is played
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("secret length must be at least 1")]
    SecretTooShort,
    #[error("secret length {secret_len} exceeds alphabet length {alphabet_len}")]
    SecretLongerThanAlphabet {
        secret_len: usize,
        alphabet_len: usize,
    },
    /// The number of possible secrets does not fit in `usize`
    #[error("{alphabet_len} symbols with secret length {secret_len} give too many possible secrets to count")]
    SpaceTooLarge {
        alphabet_len: usize,
        secret_len: usize,
    },
    #[error("unknown solver '{name}' (expected one of: {known})")]
    UnknownSolver { name: String, known: String },
    #[error("number of secrets must be positive")]
    NoSecrets,
    #[error("worker count must be positive")]
    NoWorkers,
    #[error("invalid secret: {0}")]
    InvalidSecret(#[from] CodeError),
    #[error("secret {secret} is not a code of length {secret_len} over {alphabet_len} symbols")]
    SecretOutsideSpace {
        secret: Code,
        alphabet_len: usize,
        secret_len: usize,
    },
}

/// Any failure of a simulation run
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Solver(#[from] SolverError),
}
