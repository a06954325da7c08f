//! Command implementations

pub mod simulate;
pub mod statistics;
pub mod trace;

pub use simulate::{
    SimulationConfig, SimulationReport, batch_solve, partition, run_batches, run_simulation,
    seeded_rng, select_secrets, solve,
};
pub use statistics::Statistics;
pub use trace::{TraceResult, TraceStep, trace_game};
