//! Deterministic random number generation
//!
//! Uses the xorshift64* algorithm for fast, deterministic random draws.
//! CRITICAL: All randomness in the simulator MUST go through this module.
//! There is no global generator: every component that draws takes a
//! `&mut RandomSource` parameter, so a run is a pure function of its seed.

mod xorshift;

pub use xorshift::RandomSource;
