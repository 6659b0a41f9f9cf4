//! Assignments.

use super::Submission;

/// Identifier of a lateness group.
///
/// Assignments sharing a group are judged late by their tardiest member,
/// and slip days are spent on the group as a whole.
pub type GroupId = u32;

/// A piece of graded work belonging to one category.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    pub name: String,
    /// Name of the owning category (a key into the student's categories).
    pub category: String,
    /// Maximum raw score. Must be strictly positive.
    pub max_score: f64,
    /// Relative weight within the category. For weights `{2, 1, 1}` the
    /// first assignment contributes half of the category score.
    pub weight: f64,
    /// Lateness group, or `None` when no slip days apply.
    pub group: Option<GroupId>,
    pub submission: Submission,
}

impl Assignment {
    /// Creates an ungrouped assignment of weight 1 with an empty submission.
    pub fn new(name: impl Into<String>, category: impl Into<String>, max_score: f64) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            max_score,
            weight: 1.0,
            group: None,
            submission: Submission::default(),
        }
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_group(mut self, group: GroupId) -> Self {
        self.group = Some(group);
        self
    }

    pub fn with_submission(mut self, submission: Submission) -> Self {
        self.submission = submission;
        self
    }
}
