//! Noise model: the obfuscation calculus
//!
//! Pure functions translating between a "true" quantity, a noisy "signal"
//! observed through an additive Gaussian channel, and the corrected
//! "estimate" a rational observer would infer from that signal.
//!
//! The estimate is the Bayesian posterior mean of a quantity uniformly
//! distributed on [0, 1] given the signal and a known noise standard
//! deviation. Modeling the observer's belief as the corrected estimate,
//! rather than the raw signal, is the mathematical heart of the obfuscation
//! concept: more noise pulls every estimate toward 0.5, erasing information.
//!
//! All functions are deterministic given their random draws; the only
//! entropy enters through an explicit `&mut RandomSource` parameter.

use crate::rng::RandomSource;
use thiserror::Error;

/// Errors from the noise-model math.
#[derive(Debug, Error, PartialEq)]
pub enum NoiseError {
    /// The inverse normal CDF is only defined on the open interval (0, 1).
    #[error("invalid probability {p}: normal_inverse_cdf requires 0 < p < 1")]
    ProbabilityOutOfRange { p: f64 },
}

// Abramowitz & Stegun 26.2.23 numerator/denominator coefficients.
const INV_CDF_C: [f64; 3] = [2.515517, 0.802853, 0.010328];
const INV_CDF_D: [f64; 3] = [1.432788, 0.189269, 0.001308];

/// Rational approximation for the upper-tail inverse CDF.
///
/// Abramowitz and Stegun formula 26.2.23; the absolute error is less
/// than 4.5e-4.
fn rational_approximation(t: f64) -> f64 {
    t - ((INV_CDF_C[2] * t + INV_CDF_C[1]) * t + INV_CDF_C[0])
        / (((INV_CDF_D[2] * t + INV_CDF_D[1]) * t + INV_CDF_D[0]) * t + 1.0)
}

/// Inverse CDF for p already validated to lie strictly inside (0, 1).
fn inverse_cdf_unchecked(p: f64) -> f64 {
    if p < 0.5 {
        // F^-1(p) = -G^-1(p)
        -rational_approximation((-2.0 * p.ln()).sqrt())
    } else {
        // F^-1(p) = G^-1(1-p)
        rational_approximation((-2.0 * (1.0 - p).ln()).sqrt())
    }
}

/// Inverse of the standard normal CDF: returns z such that Φ(z) = p.
///
/// Rational-function approximation with absolute error below 4.5e-4.
///
/// # Errors
/// Returns [`NoiseError::ProbabilityOutOfRange`] when p ≤ 0 or p ≥ 1. Never
/// triggered by draws from [`RandomSource::uniform_open`], which guarantees
/// the open interval.
pub fn normal_inverse_cdf(p: f64) -> Result<f64, NoiseError> {
    // Written to also reject NaN, which fails every comparison.
    if !(p > 0.0 && p < 1.0) {
        return Err(NoiseError::ProbabilityOutOfRange { p });
    }
    Ok(inverse_cdf_unchecked(p))
}

/// Draw from a zero-mean normal distribution with the given standard
/// deviation, by inverse-CDF transform of one uniform draw.
///
/// A stddev of 0 yields exactly 0.0, but still consumes the uniform draw,
/// so the draw sequence is independent of parameter values.
pub fn normal_draw(rng: &mut RandomSource, stddev: f64) -> f64 {
    let u = rng.uniform_open();
    inverse_cdf_unchecked(u) * stddev
}

/// The Gauss error function.
///
/// Abramowitz & Stegun formula 7.1.26, absolute error ≲ 1.5e-7. Odd
/// symmetry is handled explicitly: the polynomial is evaluated on |x| and
/// the sign of x is reapplied.
pub fn erf(x: f64) -> f64 {
    const A1: f64 = 0.254829592;
    const A2: f64 = -0.284496736;
    const A3: f64 = 1.421413741;
    const A4: f64 = -1.453152027;
    const A5: f64 = 1.061405429;
    const P: f64 = 0.3275911;

    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();

    let t = 1.0 / (1.0 + P * x);
    let y = 1.0 - ((((A5 * t + A4) * t + A3) * t + A2) * t + A1) * t * (-x * x).exp();

    sign * y
}

/// Gaussian density kernel used by the posterior estimate.
///
/// NOTE: this is `exp(-x²/(2σ²)) / √(2π)`; the 1/σ normalization is
/// deliberately absent. [`estimate_given_signal`] multiplies by 2σ and
/// takes a difference of two of these, so the missing factor cancels into
/// the closed form; changing it would change every estimate.
pub fn normal_pdf(x: f64, stddev: f64) -> f64 {
    let two_sigma_sq = 2.0 * stddev * stddev;
    (-x * x / two_sigma_sq).exp() / (2.0 * std::f64::consts::PI).sqrt()
}

/// Bayesian posterior point estimate of a Uniform[0,1] quantity given a
/// noisy signal observed through additive Gaussian noise of the given
/// standard deviation.
///
/// Closed form:
///
/// ```text
/// estimate = signal + 2σ·(pdf(signal) − pdf(signal−1))
///                     ─────────────────────────────────────────
///                     erf(signal/(σ√2)) − erf((signal−1)/(σ√2))
/// ```
///
/// # Edge case
/// When `stddev == 0` there is no noise to invert: the signal is returned
/// unchanged if it lies inside (0, 1), otherwise the estimate is undefined
/// and NaN is returned. Callers must check for NaN rather than treat it as
/// a valid estimate.
pub fn estimate_given_signal(stddev: f64, signal: f64) -> f64 {
    if stddev == 0.0 {
        if signal > 0.0 && signal < 1.0 {
            return signal;
        }
        return f64::NAN;
    }
    let sigma_rt2 = std::f64::consts::SQRT_2 * stddev;
    let erf_term = erf(signal / sigma_rt2) - erf((signal - 1.0) / sigma_rt2);
    let phi_term = 2.0 * stddev * (normal_pdf(signal, stddev) - normal_pdf(signal - 1.0, stddev));
    signal + phi_term / erf_term
}

/// Produce a noisy observation of a true value: `true_value + N(0, stddev)`.
pub fn signal_from_true(rng: &mut RandomSource, stddev: f64, true_value: f64) -> f64 {
    true_value + normal_draw(rng, stddev)
}
