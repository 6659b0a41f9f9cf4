//! Grade categories.

/// A group of assignments that together contribute a fixed share of the
/// final grade.
///
/// # Examples
///
/// ```
/// use u_grades::model::Category;
///
/// let projects = Category::new("Projects", 0.4)
///     .with_drops(1)
///     .with_slip_days(3)
///     .with_late_multiplier(true);
/// assert_eq!(projects.drops, 1);
/// assert_eq!(projects.slip_days, 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Category {
    pub name: String,
    /// Fraction of the final grade contributed by this category.
    pub weight: f64,
    /// Number of assignments excluded from the category score.
    pub drops: usize,
    /// Slip-day budget shared across the category's lateness groups.
    pub slip_days: u32,
    /// When `true`, late work is penalized on a sliding scale; otherwise
    /// any remaining lateness zeroes the assignment.
    pub late_multiplier: bool,
    /// Replaces the computed category score when present.
    pub override_score: Option<f64>,
    pub comments: Vec<String>,
}

impl Category {
    pub fn new(name: impl Into<String>, weight: f64) -> Self {
        Self {
            name: name.into(),
            weight,
            drops: 0,
            slip_days: 0,
            late_multiplier: false,
            override_score: None,
            comments: Vec::new(),
        }
    }

    pub fn with_drops(mut self, drops: usize) -> Self {
        self.drops = drops;
        self
    }

    pub fn with_slip_days(mut self, slip_days: u32) -> Self {
        self.slip_days = slip_days;
        self
    }

    pub fn with_late_multiplier(mut self, enabled: bool) -> Self {
        self.late_multiplier = enabled;
        self
    }

    pub fn with_override(mut self, score: f64) -> Self {
        self.override_score = Some(score);
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comments.push(comment.into());
        self
    }
}
