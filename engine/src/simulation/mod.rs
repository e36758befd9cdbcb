//! Simulation engine - per-case procedure and run aggregation
//!
//! `engine` owns the case loop (trial decision, appellate review, vote
//! tally); `stats` owns the end-of-run statistical reduction.

pub mod engine;
pub mod stats;

pub use engine::{Simulation, SimulationConfig, SimulationError};
pub use stats::{pearson_correlation, RunStatistics, RunSummary, StatsError};
