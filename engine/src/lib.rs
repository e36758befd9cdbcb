//! Appellate Review Simulator - Core Engine
//!
//! Monte Carlo simulator of judicial decision-making under noisy
//! information. A pool of first-instance decisionmakers observes each
//! case's true quality through a Gaussian "obfuscation" channel, renders a
//! binary verdict, and may be reviewed by an appellate panel drawn from the
//! same pool. A run reports aggregate accuracy and the correlation between
//! a decisionmaker's personal bias magnitude and how often their verdicts
//! are overturned.
//!
//! # Architecture
//!
//! - **rng**: Deterministic random number generation (the run's only entropy)
//! - **noise**: The obfuscation calculus (inverse CDF, erf, posterior estimate)
//! - **models**: Domain types (Decisionmaker, DecisionmakerPool, CaseRecord)
//! - **simulation**: Per-case procedure, run aggregation, correlation
//!
//! # Critical Invariants
//!
//! 1. All randomness is deterministic (seeded, explicitly passed RandomSource)
//! 2. Uniform draws feeding the inverse CDF lie strictly inside (0, 1)
//! 3. A run is a single-pass batch computation; nothing is persisted

// Module declarations
pub mod models;
pub mod noise;
pub mod rng;
pub mod simulation;

// Re-exports for convenience
pub use models::{
    case::CaseRecord,
    decisionmaker::{Decisionmaker, DecisionmakerPool},
};
pub use noise::NoiseError;
pub use rng::RandomSource;
pub use simulation::{
    pearson_correlation, RunStatistics, RunSummary, Simulation, SimulationConfig, SimulationError,
    StatsError,
};
