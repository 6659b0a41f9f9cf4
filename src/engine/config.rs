//! Pipeline configuration.

use crate::error::{GradeError, Result};

/// Configuration for running policies over a [`Roster`](super::Roster).
///
/// # Examples
///
/// ```
/// use u_grades::engine::PipelineConfig;
///
/// let config = PipelineConfig::default()
///     .with_max_outcomes(5_000)
///     .with_parallel(false);
/// assert_eq!(config.max_outcomes, Some(5_000));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Ceiling on outcomes held for a single student key after any step.
    ///
    /// Exceeding it fails the run with
    /// [`GradeError::OutcomeLimit`]. `None` disables the check.
    pub max_outcomes: Option<usize>,

    /// Whether to apply policies and aggregation in parallel using rayon.
    ///
    /// Has no effect unless the `parallel` feature is enabled.
    pub parallel: bool,

    /// Whether [`Pipeline::run`](super::Pipeline::run) validates every
    /// input outcome before the first policy.
    pub validate_input: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_outcomes: Some(100_000),
            parallel: true,
            validate_input: true,
        }
    }
}

impl PipelineConfig {
    /// Sets the per-student outcome ceiling.
    pub fn with_max_outcomes(mut self, n: usize) -> Self {
        self.max_outcomes = Some(n);
        self
    }

    /// Removes the per-student outcome ceiling.
    pub fn without_outcome_limit(mut self) -> Self {
        self.max_outcomes = None;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Enables or disables input validation.
    pub fn with_validate_input(mut self, validate: bool) -> Self {
        self.validate_input = validate;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.max_outcomes == Some(0) {
            return Err(GradeError::Config(
                "max_outcomes must be positive or None".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PipelineConfig::default();
        assert_eq!(config.max_outcomes, Some(100_000));
        assert!(config.parallel);
        assert!(config.validate_input);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = PipelineConfig::default()
            .with_max_outcomes(10)
            .with_parallel(false)
            .with_validate_input(false);
        assert_eq!(config.max_outcomes, Some(10));
        assert!(!config.parallel);
        assert!(!config.validate_input);
    }

    #[test]
    fn test_without_limit() {
        let config = PipelineConfig::default().without_outcome_limit();
        assert!(config.max_outcomes.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_limit() {
        let config = PipelineConfig::default().with_max_outcomes(0);
        assert!(matches!(config.validate(), Err(GradeError::Config(_))));
    }
}
