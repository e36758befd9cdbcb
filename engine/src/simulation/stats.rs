//! Run aggregation and correlation analysis
//!
//! `RunStatistics` accumulates per-decisionmaker review/overturn counts and
//! run-wide accuracy tallies as cases complete. At end of run the aggregate
//! reduces to a [`RunSummary`]: accuracy rates plus the Pearson correlation
//! between each decisionmaker's bias magnitude and the proportion of their
//! reviewed decisions that were overturned.

use crate::models::case::CaseRecord;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from the statistical reduction.
#[derive(Debug, Error, PartialEq)]
pub enum StatsError {
    /// The correlation inputs must be index-aligned vectors of equal length.
    /// Hitting this signals a construction bug, not a recoverable condition.
    #[error("correlation inputs differ in length: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
}

/// Pearson correlation coefficient between two index-aligned vectors.
///
/// `Σ(x-x̄)(y-ȳ) / sqrt(Σ(x-x̄)² · Σ(y-ȳ)²)`
///
/// Returns NaN when either vector has zero variance (or is empty); callers
/// report NaN rather than treat it as a valid statistic.
///
/// # Errors
/// [`StatsError::LengthMismatch`] when the vectors differ in size.
pub fn pearson_correlation(xs: &[f64], ys: &[f64]) -> Result<f64, StatsError> {
    if xs.len() != ys.len() {
        return Err(StatsError::LengthMismatch {
            left: xs.len(),
            right: ys.len(),
        });
    }

    let n = xs.len() as f64;
    let mean_x: f64 = xs.iter().sum::<f64>() / n;
    let mean_y: f64 = ys.iter().sum::<f64>() / n;

    let covariance: f64 = xs
        .iter()
        .zip(ys.iter())
        .map(|(x, y)| (x - mean_x) * (y - mean_y))
        .sum();
    let var_x: f64 = xs.iter().map(|x| (x - mean_x).powi(2)).sum();
    let var_y: f64 = ys.iter().map(|y| (y - mean_y).powi(2)).sum();

    Ok(covariance / (var_x * var_y).sqrt())
}

/// Mutable per-run accumulator, owned by exactly one run and discarded
/// after the summary is emitted.
#[derive(Debug, Clone)]
pub struct RunStatistics {
    /// Times each decisionmaker's trial verdict went through review
    reviewed_counts: Vec<u64>,

    /// Times each decisionmaker's trial verdict was reversed on review
    overturned_counts: Vec<u64>,

    /// Cases where the trial verdict was correct
    correct_initial: u64,

    /// Cases where the post-review (or unreviewed) verdict was correct
    correct_final: u64,

    /// Total cases recorded
    cases: u64,
}

impl RunStatistics {
    /// Create an empty accumulator for a pool of the given size.
    pub fn new(num_decisionmakers: usize) -> Self {
        Self {
            reviewed_counts: vec![0; num_decisionmakers],
            overturned_counts: vec![0; num_decisionmakers],
            correct_initial: 0,
            correct_final: 0,
            cases: 0,
        }
    }

    /// Fold one completed case into the run totals.
    pub fn record(&mut self, case: &CaseRecord) {
        self.cases += 1;
        if case.initial_correct() {
            self.correct_initial += 1;
        }
        if case.final_correct() {
            self.correct_final += 1;
        }
        if case.reviewed {
            self.reviewed_counts[case.trial_decisionmaker] += 1;
            if case.reversed {
                self.overturned_counts[case.trial_decisionmaker] += 1;
            }
        }
    }

    /// Per-decisionmaker proportion of reviewed decisions that were
    /// overturned; defined as 0 for a decisionmaker never reviewed.
    pub fn overturn_proportions(&self) -> Vec<f64> {
        self.reviewed_counts
            .iter()
            .zip(self.overturned_counts.iter())
            .map(|(&reviewed, &overturned)| {
                if reviewed == 0 {
                    0.0
                } else {
                    overturned as f64 / reviewed as f64
                }
            })
            .collect()
    }

    /// Per-decisionmaker count of reviewed trial verdicts.
    pub fn reviewed_counts(&self) -> &[u64] {
        &self.reviewed_counts
    }

    /// Per-decisionmaker count of reversed trial verdicts.
    pub fn overturned_counts(&self) -> &[u64] {
        &self.overturned_counts
    }

    /// Cases where the trial verdict was correct.
    pub fn correct_initial(&self) -> u64 {
        self.correct_initial
    }

    /// Cases where the final verdict was correct.
    pub fn correct_final(&self) -> u64 {
        self.correct_final
    }

    /// Total cases recorded so far.
    pub fn cases(&self) -> u64 {
        self.cases
    }

    /// Reduce the accumulator to a summary, correlating the given bias
    /// magnitudes against overturn proportions.
    ///
    /// # Errors
    /// [`StatsError::LengthMismatch`] when `bias_magnitudes` is not
    /// index-aligned with the counters (construction bug).
    pub fn summarize(
        &self,
        bias_magnitudes: &[f64],
        obfuscation_stddev: f64,
        panel_size: usize,
        review_probability: f64,
        overturn_margin: f64,
    ) -> Result<RunSummary, StatsError> {
        let proportions = self.overturn_proportions();
        let correlation = pearson_correlation(bias_magnitudes, &proportions)?;
        Ok(RunSummary {
            obfuscation_stddev,
            panel_size,
            review_probability,
            overturn_margin,
            initial_accuracy: self.correct_initial as f64 / self.cases as f64,
            final_accuracy: self.correct_final as f64 / self.cases as f64,
            bias_overturn_correlation: correlation,
        })
    }
}

/// Summary record for one run: the configuration knobs that were swept plus
/// the aggregate statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Noise magnitude of the observation channel
    pub obfuscation_stddev: f64,

    /// Number of appellate judges per review
    pub panel_size: usize,

    /// Probability a trial verdict is reviewed
    pub review_probability: f64,

    /// Near-toss-up margin within which a panelist always affirms
    pub overturn_margin: f64,

    /// Fraction of cases decided correctly at trial
    pub initial_accuracy: f64,

    /// Fraction of cases decided correctly after review
    pub final_accuracy: f64,

    /// Pearson correlation between bias magnitude and overturn proportion.
    /// NaN when either vector is constant (zero variance).
    pub bias_overturn_correlation: f64,
}

impl std::fmt::Display for RunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "trial noise {} panel size {} review probability {} overturn margin {} \
             initial accuracy {} final accuracy {} bias/overturn correlation {}",
            self.obfuscation_stddev,
            self.panel_size,
            self.review_probability,
            self.overturn_margin,
            self.initial_accuracy,
            self.final_accuracy,
            self.bias_overturn_correlation,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case(trial_dm: usize, reviewed: bool, reversed: bool, correct: bool) -> CaseRecord {
        CaseRecord {
            actual_quality: 0.7,
            correct_outcome: true,
            trial_decisionmaker: trial_dm,
            trial_decision: if correct { 0.7 } else { 0.3 },
            trial_outcome: correct,
            reviewed,
            votes_to_affirm: if reversed { 0 } else { 1 },
            votes_to_reverse: if reversed { 1 } else { 0 },
            reversed,
            final_outcome: if reversed { !correct } else { correct },
        }
    }

    #[test]
    fn test_record_tallies_counts() {
        let mut stats = RunStatistics::new(3);
        stats.record(&case(0, true, true, true));
        stats.record(&case(0, true, false, true));
        stats.record(&case(1, false, false, false));

        assert_eq!(stats.cases(), 3);
        assert_eq!(stats.reviewed_counts(), &[2, 0, 0]);
        assert_eq!(stats.overturned_counts(), &[1, 0, 0]);
        assert_eq!(stats.correct_initial(), 2);
        // Case 0 was reversed (correct -> incorrect), case 1 affirmed,
        // case 2 incorrect and unreviewed.
        assert_eq!(stats.correct_final(), 1);
    }

    #[test]
    fn test_overturn_proportion_zero_when_never_reviewed() {
        let mut stats = RunStatistics::new(2);
        stats.record(&case(0, true, true, true));
        assert_eq!(stats.overturn_proportions(), vec![1.0, 0.0]);
    }

    #[test]
    fn test_correlation_identical_vectors_is_one() {
        let xs = [0.1, 0.4, 0.2, 0.9];
        let corr = pearson_correlation(&xs, &xs).unwrap();
        assert!((corr - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_correlation_symmetric_in_arguments() {
        let xs = [0.1, 0.4, 0.2, 0.9];
        let ys = [0.3, 0.2, 0.8, 0.5];
        let a = pearson_correlation(&xs, &ys).unwrap();
        let b = pearson_correlation(&ys, &xs).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_correlation_length_mismatch() {
        let err = pearson_correlation(&[1.0, 2.0], &[1.0]).unwrap_err();
        assert_eq!(err, StatsError::LengthMismatch { left: 2, right: 1 });
    }

    #[test]
    fn test_correlation_constant_vector_is_nan() {
        let corr = pearson_correlation(&[1.0, 1.0, 1.0], &[0.1, 0.2, 0.3]).unwrap();
        assert!(corr.is_nan());
    }

    #[test]
    fn test_summary_display_is_one_line() {
        let summary = RunSummary {
            obfuscation_stddev: 0.2,
            panel_size: 3,
            review_probability: 1.0,
            overturn_margin: 0.1,
            initial_accuracy: 0.8,
            final_accuracy: 0.85,
            bias_overturn_correlation: 0.4,
        };
        let line = summary.to_string();
        assert!(!line.contains('\n'));
        assert!(line.contains("panel size 3"));
    }
}
