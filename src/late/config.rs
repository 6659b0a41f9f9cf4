//! Late-multiplier configuration.

use crate::error::{GradeError, Result};
use crate::model::Lateness;

/// Default description attached to resolved late multipliers.
pub const DEFAULT_DESCRIPTION: &str = "Late multiplier";

/// Configuration for [`LateMultipliers`](super::LateMultipliers).
///
/// An assignment `n` days late (after grace) receives `scale[n - 1]`;
/// anything later than the scale covers receives ×0.
///
/// # Examples
///
/// ```
/// use u_grades::late::LateMultiplierConfig;
/// use u_grades::model::Lateness;
///
/// let config = LateMultiplierConfig::default()
///     .with_scale(vec![0.9, 0.8, 0.6])
///     .with_grace(Lateness::from_hours(1));
///
/// assert_eq!(config.factor_for(Lateness::from_hours(1), true), None);
/// assert_eq!(config.factor_for(Lateness::from_hours(26), true), Some(0.8));
/// assert_eq!(config.factor_for(Lateness::from_days(5), true), Some(0.0));
/// assert_eq!(config.factor_for(Lateness::from_hours(3), false), Some(0.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LateMultiplierConfig {
    /// Factor per whole day late: `scale[0]` for 1 day, `scale[1]` for 2, ...
    pub scale: Vec<f64>,
    /// Lateness forgiven before any day is counted.
    pub grace: Lateness,
    /// Description recorded on each resolved multiplier.
    pub description: String,
}

impl Default for LateMultiplierConfig {
    fn default() -> Self {
        Self {
            scale: Vec::new(),
            grace: Lateness::ZERO,
            description: DEFAULT_DESCRIPTION.to_string(),
        }
    }
}

impl LateMultiplierConfig {
    /// Sets the sliding scale.
    pub fn with_scale(mut self, scale: Vec<f64>) -> Self {
        self.scale = scale;
        self
    }

    /// Sets the grace period.
    pub fn with_grace(mut self, grace: Lateness) -> Self {
        self.grace = grace;
        self
    }

    /// Sets the multiplier description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Resolves the factor for a raw lateness.
    ///
    /// Returns `None` when the lateness does not exceed the grace period.
    /// When `sliding_scale` is `false` any remaining lateness resolves to 0.
    pub fn factor_for(&self, lateness: Lateness, sliding_scale: bool) -> Option<f64> {
        let effective = lateness - self.grace;
        if !effective.is_late() {
            return None;
        }
        if !sliding_scale {
            return Some(0.0);
        }
        let index = effective.days_late() as usize - 1;
        Some(self.scale.get(index).copied().unwrap_or(0.0))
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if let Some(bad) = self
            .scale
            .iter()
            .find(|f| !f.is_finite() || **f < 0.0 || **f > 1.0)
        {
            return Err(GradeError::Config(format!(
                "late multiplier scale factor {bad} is outside [0, 1]"
            )));
        }
        if self.grace.as_seconds() < 0 {
            return Err(GradeError::Config("grace period must be non-negative".into()));
        }
        Ok(())
    }
}
