//! Simulation engine
//!
//! Runs a full experiment: a fixed pool of decisionmakers processes a
//! sequence of independent cases, each case optionally reviewed by an
//! appellate panel sampled from the same pool.
//!
//! # Per-case procedure
//!
//! ```text
//! For each case:
//! 1. Draw actual quality uniformly from (0, 1)
//! 2. Pick a trial decisionmaker uniformly from the pool
//! 3. Trial decision = noise-corrected estimate + personal bias draw
//! 4. Tally initial accuracy (decision > 0.5 vs quality > 0.5)
//! 5. Coin flip against review_probability; no review => verdict stands
//! 6. Sample panel_size distinct panelists (excluding the trial judge),
//!    each votes affirm/reverse from their own decision on the case
//! 7. Reverse iff reverse votes strictly exceed affirm votes (ties affirm)
//! 8. Tally review counts and final accuracy
//! ```
//!
//! # Determinism
//!
//! All randomness flows through one seeded [`RandomSource`] owned by the
//! run. Same seed + same config = identical results. Cases are processed
//! sequentially; each is independent apart from the per-decisionmaker
//! counters folded into [`RunStatistics`].

use crate::models::case::CaseRecord;
use crate::models::decisionmaker::DecisionmakerPool;
use crate::rng::RandomSource;
use crate::simulation::stats::{RunStatistics, RunSummary, StatsError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Immutable parameters for one run.
///
/// Defaults mirror the reference experiment: a large pool, full review, a
/// three-judge panel, and moderate observation noise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of cases to process
    pub num_cases: u64,

    /// Size of the decisionmaker pool
    pub num_decisionmakers: usize,

    /// Number of appellate judges per review
    pub panel_size: usize,

    /// Standard deviation of the observation noise channel
    pub obfuscation_stddev: f64,

    /// Mean of the per-decisionmaker bias-magnitude draw
    pub bias_magnitude_mean: f64,

    /// Standard deviation of the per-decisionmaker bias-magnitude draw
    pub bias_magnitude_stddev: f64,

    /// Probability a trial verdict goes to appellate review
    pub review_probability: f64,

    /// Distance from 0.5 within which a panelist always votes affirm
    pub overturn_margin: f64,

    /// Seed for the run's random source
    pub rng_seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            num_cases: 3_000_000,
            num_decisionmakers: 100_000,
            panel_size: 3,
            obfuscation_stddev: 0.2,
            bias_magnitude_mean: 0.2,
            bias_magnitude_stddev: 0.1,
            review_probability: 1.0,
            overturn_margin: 0.1,
            rng_seed: 12345,
        }
    }
}

/// Simulation error types.
#[derive(Debug, Error, PartialEq)]
pub enum SimulationError {
    /// Configuration validation error
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Statistical reduction error (construction bug, unrecoverable)
    #[error(transparent)]
    Stats(#[from] StatsError),
}

/// One experiment run: pool, entropy source, and accumulating statistics.
///
/// # Example
/// ```
/// use appellate_sim_core::{Simulation, SimulationConfig};
///
/// let config = SimulationConfig {
///     num_cases: 100,
///     num_decisionmakers: 20,
///     ..Default::default()
/// };
/// let mut sim = Simulation::new(config).unwrap();
/// let summary = sim.run().unwrap();
/// assert!(summary.initial_accuracy <= 1.0);
/// ```
pub struct Simulation {
    config: SimulationConfig,
    pool: DecisionmakerPool,
    rng: RandomSource,
    stats: RunStatistics,
}

impl Simulation {
    /// Create a run from a validated configuration.
    ///
    /// Seeds the random source and draws the pool's bias magnitudes.
    ///
    /// # Errors
    /// [`SimulationError::InvalidConfig`] when a parameter is out of range.
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationError> {
        Self::validate_config(&config)?;

        let mut rng = RandomSource::new(config.rng_seed);
        let pool = DecisionmakerPool::initialize(
            config.num_decisionmakers,
            config.bias_magnitude_mean,
            config.bias_magnitude_stddev,
            &mut rng,
        );
        let stats = RunStatistics::new(config.num_decisionmakers);

        Ok(Self {
            config,
            pool,
            rng,
            stats,
        })
    }

    fn validate_config(config: &SimulationConfig) -> Result<(), SimulationError> {
        if config.num_cases == 0 {
            return Err(SimulationError::InvalidConfig(
                "num_cases must be > 0".to_string(),
            ));
        }
        if config.num_decisionmakers == 0 {
            return Err(SimulationError::InvalidConfig(
                "num_decisionmakers must be > 0".to_string(),
            ));
        }
        if config.panel_size == 0 {
            return Err(SimulationError::InvalidConfig(
                "panel_size must be > 0".to_string(),
            ));
        }
        // The panel is sampled without replacement from the pool minus the
        // trial judge; without this bound the rejection sampler never
        // terminates.
        if config.panel_size + 1 > config.num_decisionmakers {
            return Err(SimulationError::InvalidConfig(format!(
                "panel_size {} plus the trial decisionmaker exceeds pool size {}",
                config.panel_size, config.num_decisionmakers
            )));
        }
        if config.obfuscation_stddev < 0.0 {
            return Err(SimulationError::InvalidConfig(
                "obfuscation_stddev must be >= 0".to_string(),
            ));
        }
        if config.bias_magnitude_stddev < 0.0 {
            return Err(SimulationError::InvalidConfig(
                "bias_magnitude_stddev must be >= 0".to_string(),
            ));
        }
        if config.overturn_margin < 0.0 {
            return Err(SimulationError::InvalidConfig(
                "overturn_margin must be >= 0".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&config.review_probability) {
            return Err(SimulationError::InvalidConfig(
                "review_probability must lie in [0, 1]".to_string(),
            ));
        }
        Ok(())
    }

    /// Process one case end-to-end and fold it into the run statistics.
    ///
    /// Returns the transient record for inspection; it is not stored.
    pub fn simulate_case(&mut self) -> CaseRecord {
        let actual_quality = self.rng.uniform_open();
        let correct_outcome = actual_quality > 0.5;

        let trial_decisionmaker = self.rng.index(self.pool.len());
        let trial_decision = self.pool[trial_decisionmaker].decide(
            &mut self.rng,
            self.config.obfuscation_stddev,
            actual_quality,
        );
        let trial_outcome = trial_decision > 0.5;

        let mut record = CaseRecord {
            actual_quality,
            correct_outcome,
            trial_decisionmaker,
            trial_decision,
            trial_outcome,
            reviewed: false,
            votes_to_affirm: 0,
            votes_to_reverse: 0,
            reversed: false,
            final_outcome: trial_outcome,
        };

        if self.rng.next_f64() < self.config.review_probability {
            self.review(&mut record);
        }

        self.stats.record(&record);
        record
    }

    /// Appellate review: sample a panel, collect votes, apply the tally.
    fn review(&mut self, record: &mut CaseRecord) {
        record.reviewed = true;

        let panel = self.select_panel(record.trial_decisionmaker);
        for panelist in panel {
            let decision = self.pool[panelist].decide(
                &mut self.rng,
                self.config.obfuscation_stddev,
                record.actual_quality,
            );
            let outcome = decision > 0.5;
            // A near-toss-up is always an affirm vote, regardless of
            // directional agreement.
            if outcome == record.trial_outcome
                || (decision - 0.5).abs() < self.config.overturn_margin
            {
                record.votes_to_affirm += 1;
            } else {
                record.votes_to_reverse += 1;
            }
        }

        // Ties favor affirm.
        record.reversed = record.votes_to_reverse > record.votes_to_affirm;
        record.final_outcome = if record.reversed {
            !record.trial_outcome
        } else {
            record.trial_outcome
        };
    }

    /// Sample `panel_size` distinct panelists uniformly from the pool,
    /// excluding the trial decisionmaker, redrawing on collision.
    ///
    /// Termination is guaranteed by config validation
    /// (panel_size + 1 <= pool size).
    fn select_panel(&mut self, trial_decisionmaker: usize) -> Vec<usize> {
        let mut chosen = vec![trial_decisionmaker];
        while chosen.len() < self.config.panel_size + 1 {
            let candidate = self.rng.index(self.pool.len());
            if !chosen.contains(&candidate) {
                chosen.push(candidate);
            }
        }
        chosen.split_off(1)
    }

    /// Process the configured number of cases and reduce to a summary.
    ///
    /// # Errors
    /// [`SimulationError::Stats`] if the correlation inputs are misaligned
    /// (cannot happen with a pool built by [`Simulation::new`]).
    pub fn run(&mut self) -> Result<RunSummary, SimulationError> {
        for _ in 0..self.config.num_cases {
            self.simulate_case();
        }
        let summary = self.stats.summarize(
            &self.pool.bias_magnitudes(),
            self.config.obfuscation_stddev,
            self.config.panel_size,
            self.config.review_probability,
            self.config.overturn_margin,
        )?;
        Ok(summary)
    }

    /// The run's configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// The decisionmaker pool drawn for this run.
    pub fn pool(&self) -> &DecisionmakerPool {
        &self.pool
    }

    /// Statistics accumulated so far.
    pub fn statistics(&self) -> &RunStatistics {
        &self.stats
    }
}
