//! Core domain types for bulls and cows
//!
//! This module contains the codes, the feedback rule and the candidate space.
//! Everything here is pure and deterministic.

mod code;
mod response;
mod space;

pub use code::{Code, CodeError, Symbol};
pub use response::Response;
pub use space::CandidateSpace;
