//! Per-case outcome record
//!
//! A `CaseRecord` exists only within one case's processing: the simulator
//! fills it in, the aggregator reads it, and it is dropped. Nothing here is
//! persisted.

/// Outcome of one fully processed case.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseRecord {
    /// True case quality, uniform on (0, 1)
    pub actual_quality: f64,

    /// The verdict a perfect observer would render (quality > 0.5)
    pub correct_outcome: bool,

    /// Pool index of the trial decisionmaker
    pub trial_decisionmaker: usize,

    /// The trial decisionmaker's decision value (estimate + bias)
    pub trial_decision: f64,

    /// Binary verdict at trial (decision > 0.5)
    pub trial_outcome: bool,

    /// Whether appellate review occurred
    pub reviewed: bool,

    /// Panel votes to affirm (0 when not reviewed)
    pub votes_to_affirm: usize,

    /// Panel votes to reverse (0 when not reviewed)
    pub votes_to_reverse: usize,

    /// Whether the panel reversed the trial verdict (ties affirm)
    pub reversed: bool,

    /// Verdict after review, or the trial verdict when no review occurred
    pub final_outcome: bool,
}

impl CaseRecord {
    /// Whether the trial verdict matched the correct outcome.
    pub fn initial_correct(&self) -> bool {
        self.trial_outcome == self.correct_outcome
    }

    /// Whether the final verdict matched the correct outcome.
    pub fn final_correct(&self) -> bool {
        self.final_outcome == self.correct_outcome
    }
}
