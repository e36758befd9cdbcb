//! xorshift64* random number generator
//!
//! A fast, high-quality PRNG that is deterministic and suitable for
//! simulation purposes. xorshift64* passes TestU01's BigCrush statistical
//! tests using 64-bit state and 64-bit output.
//!
//! # Determinism
//!
//! Same seed → same sequence of draws. This is CRITICAL for:
//! - Debugging (reproduce an exact run)
//! - Testing (fixed-seed scenario assertions)
//! - Research (validate results against a published seed)

use serde::{Deserialize, Serialize};

/// Deterministic uniform random source, the single source of entropy for a run.
///
/// # Example
/// ```
/// use appellate_sim_core::RandomSource;
///
/// let mut rng = RandomSource::new(12345);
/// let u = rng.uniform_open(); // strictly inside (0, 1)
/// assert!(u > 0.0 && u < 1.0);
/// let judge = rng.index(100); // [0, 100)
/// assert!(judge < 100);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomSource {
    /// Internal state (64-bit)
    state: u64,
}

impl RandomSource {
    /// Create a new source from a seed.
    ///
    /// A zero seed is coerced to 1 (xorshift requirement: state must be
    /// nonzero).
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate the next random u64, advancing the internal state.
    pub fn next(&mut self) -> u64 {
        // xorshift64* algorithm
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Generate a random f64 in the half-open interval [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        let value = self.next();
        // 53 high bits give a uniform dyadic rational in [0, 1)
        (value >> 11) as f64 * (1.0 / ((1u64 << 53) as f64))
    }

    /// Generate a random f64 strictly inside the open interval (0.0, 1.0).
    ///
    /// Exact 0.0 is rejected and redrawn (1.0 is unreachable from
    /// `next_f64`, but the guard keeps the contract explicit). Downstream
    /// code feeds these draws to the inverse normal CDF, whose domain is the
    /// open interval.
    pub fn uniform_open(&mut self) -> f64 {
        loop {
            let r = self.next_f64();
            if r != 0.0 && r != 1.0 {
                return r;
            }
        }
    }

    /// Generate a random index in [0, n).
    ///
    /// # Panics
    /// Panics if `n` is zero.
    pub fn index(&mut self, n: usize) -> usize {
        assert!(n > 0, "index bound must be positive");
        (self.next() % n as u64) as usize
    }

    /// Current generator state (for deriving per-run seeds or replay).
    pub fn state(&self) -> u64 {
        self.state
    }
}
