//! Decisionmaker model
//!
//! A decisionmaker is a simulated first-instance judge. Each one owns a
//! single immutable attribute, `bias_magnitude`: the standard deviation of
//! the personal bias draw added on top of their noise-corrected estimate for
//! every decision they render. Some decisionmakers weight their own
//! preferences more heavily than others.
//!
//! The pool is created once per run and never mutated afterward; nothing is
//! persisted between runs.

use crate::noise;
use crate::rng::RandomSource;
use serde::{Deserialize, Serialize};

/// A single simulated decisionmaker, identified by its pool index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Decisionmaker {
    /// Position in the pool, in [0, pool.len())
    index: usize,

    /// Standard deviation of this decisionmaker's personal bias draw.
    ///
    /// Stored exactly as drawn at pool initialization, which can be
    /// negative; the raw value is what the end-of-run correlation consumes.
    bias_magnitude: f64,
}

impl Decisionmaker {
    /// Pool index of this decisionmaker.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Raw bias magnitude as drawn at initialization (may be negative).
    pub fn bias_magnitude(&self) -> f64 {
        self.bias_magnitude
    }

    /// Render a decision on a case with the given true quality.
    ///
    /// The decision is the noise-corrected estimate of the quality, observed
    /// through the obfuscation channel, plus a personal bias draw. The bias
    /// spread uses |bias_magnitude|: initialization can produce a negative
    /// magnitude, and a negative value makes no sense as a standard
    /// deviation.
    pub fn decide(
        &self,
        rng: &mut RandomSource,
        obfuscation_stddev: f64,
        actual_quality: f64,
    ) -> f64 {
        let signal = noise::signal_from_true(rng, obfuscation_stddev, actual_quality);
        let estimate = noise::estimate_given_signal(obfuscation_stddev, signal);
        let bias = noise::normal_draw(rng, self.bias_magnitude.abs());
        estimate + bias
    }
}

/// Fixed-size pool of decisionmakers, persistent across all cases in a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionmakerPool {
    members: Vec<Decisionmaker>,
}

impl DecisionmakerPool {
    /// Initialize a pool of `count` decisionmakers, drawing each member's
    /// bias magnitude as `N(0, bias_stddev) + bias_mean`.
    pub fn initialize(
        count: usize,
        bias_mean: f64,
        bias_stddev: f64,
        rng: &mut RandomSource,
    ) -> Self {
        let members = (0..count)
            .map(|index| Decisionmaker {
                index,
                bias_magnitude: noise::normal_draw(rng, bias_stddev) + bias_mean,
            })
            .collect();
        Self { members }
    }

    /// Number of decisionmakers in the pool.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// True when the pool has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Look up a decisionmaker by pool index.
    pub fn get(&self, index: usize) -> Option<&Decisionmaker> {
        self.members.get(index)
    }

    /// The raw bias-magnitude vector, indexed by decisionmaker, as drawn at
    /// initialization. This is one side of the end-of-run correlation.
    pub fn bias_magnitudes(&self) -> Vec<f64> {
        self.members.iter().map(|m| m.bias_magnitude).collect()
    }
}

impl std::ops::Index<usize> for DecisionmakerPool {
    type Output = Decisionmaker;

    fn index(&self, index: usize) -> &Decisionmaker {
        &self.members[index]
    }
}
