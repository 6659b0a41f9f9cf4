//! Graded submissions and score multipliers.

use super::Lateness;

/// A multiplicative factor applied to an assignment score, kept with a
/// human-readable description for the audit trail.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Multiplier {
    /// Factor applied to the raw score, conventionally in `[0, 1]`.
    pub factor: f64,
    pub description: String,
}

impl Multiplier {
    pub fn new(factor: f64, description: impl Into<String>) -> Self {
        Self {
            factor,
            description: description.into(),
        }
    }
}

/// A student's graded submission to an assignment.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Submission {
    /// Raw points earned.
    pub score: f64,
    /// Time past the deadline. Negative after slip days or extensions.
    pub lateness: Lateness,
    /// Slip days spent on this submission so far.
    pub slip_days_applied: u32,
    /// Multipliers in application order (left to right).
    pub multipliers: Vec<Multiplier>,
    /// Excluded from category aggregation when `true`.
    pub dropped: bool,
    /// Replaces the computed adjusted score entirely when present.
    pub override_score: Option<f64>,
    /// Audit comments.
    pub comments: Vec<String>,
}

impl Submission {
    /// An on-time submission with the given raw score.
    pub fn new(score: f64) -> Self {
        Self {
            score,
            ..Self::default()
        }
    }

    pub fn with_lateness(mut self, lateness: Lateness) -> Self {
        self.lateness = lateness;
        self
    }

    pub fn with_multiplier(mut self, multiplier: Multiplier) -> Self {
        self.multipliers.push(multiplier);
        self
    }

    pub fn with_override(mut self, score: f64) -> Self {
        self.override_score = Some(score);
        self
    }

    pub fn with_dropped(mut self, dropped: bool) -> Self {
        self.dropped = dropped;
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comments.push(comment.into());
        self
    }
}
