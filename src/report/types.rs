//! Grade report snapshots.

use std::collections::BTreeMap;

use crate::model::Student;

/// An assignment's line on a [`GradeReport`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReportAssignment {
    /// `score / max_score`, or 0 when the max score is 0.
    pub raw: f64,
    /// The override if present, else `raw` times every multiplier in order.
    pub adjusted: f64,
    /// `adjusted × assignment weight`.
    ///
    /// This is the assignment's term in its category's weighted-average
    /// numerator, *not* a contribution to the total score. Divide the sum
    /// of these terms by the sum of eligible assignment weights to get the
    /// category's raw score.
    pub weighted: f64,
    pub comments: Vec<String>,
}

/// A category's line on a [`GradeReport`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReportCategory {
    /// Weighted average of non-dropped assignments, or 0 with none.
    pub raw: f64,
    /// The category override if present, else `raw`.
    pub adjusted: f64,
    /// `adjusted × category weight`: the category's contribution to
    /// [`GradeReport::total_score`].
    ///
    /// Same field name as [`ReportAssignment::weighted`], different
    /// formula and meaning.
    pub weighted: f64,
    pub comments: Vec<String>,
}

/// A student's final grade under one outcome.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GradeReport {
    /// The outcome this report was computed from.
    pub student: Student,
    /// Sum of category contributions. Not rounded.
    pub total_score: f64,
    pub categories: BTreeMap<String, ReportCategory>,
    pub assignments: BTreeMap<String, ReportAssignment>,
}
