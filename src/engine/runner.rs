//! Ordered policy pipelines.
//!
//! Outcome counts multiply across branching policies, so ordering matters:
//! put narrowing or deterministic policies before expensive searches.

use super::config::PipelineConfig;
use super::roster::Roster;
use super::types::Policy;
use crate::error::Result;

/// An ordered sequence of policies applied to a roster.
///
/// # Examples
///
/// ```
/// use u_grades::engine::{Pipeline, PipelineConfig, Roster};
/// use u_grades::late::{LateMultiplierConfig, LateMultipliers};
/// use u_grades::search::{DropSearch, SlipDaySearch};
///
/// let pipeline = Pipeline::new()
///     .with_config(PipelineConfig::default().with_max_outcomes(10_000))
///     .with_policy(SlipDaySearch::new())
///     .with_policy(LateMultipliers::try_new(LateMultiplierConfig::default())?)
///     .with_policy(DropSearch::new());
///
/// assert_eq!(pipeline.policy_names(), vec!["SlipDaySearch", "LateMultipliers", "DropSearch"]);
/// let out = pipeline.run(&Roster::new())?;
/// assert!(out.is_empty());
/// # Ok::<(), u_grades::GradeError>(())
/// ```
pub struct Pipeline {
    policies: Vec<Box<dyn Policy>>,
    config: PipelineConfig,
}

impl Pipeline {
    /// Creates an empty pipeline with the default configuration.
    pub fn new() -> Self {
        Self {
            policies: Vec::new(),
            config: PipelineConfig::default(),
        }
    }

    /// Sets the pipeline configuration.
    pub fn with_config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    /// Appends a policy.
    pub fn with_policy<P: Policy + 'static>(mut self, policy: P) -> Self {
        self.policies.push(Box::new(policy));
        self
    }

    /// Appends an already boxed policy.
    pub fn with_boxed_policy(mut self, policy: Box<dyn Policy>) -> Self {
        self.policies.push(policy);
        self
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Returns the number of policies in this pipeline.
    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }

    /// Returns the names of all policies in order.
    pub fn policy_names(&self) -> Vec<&str> {
        self.policies.iter().map(|p| p.name()).collect()
    }

    /// Runs every policy in order and returns the final roster.
    ///
    /// The configuration and every policy are validated first and, if
    /// [`validate_input`](PipelineConfig::validate_input) is set, so is every
    /// input outcome. The input roster is not modified.
    pub fn run(&self, roster: &Roster) -> Result<Roster> {
        self.config.validate()?;
        for policy in &self.policies {
            policy.validate()?;
        }
        if self.config.validate_input {
            roster.validate()?;
        }

        let mut current = roster.clone();
        for (step, policy) in self.policies.iter().enumerate() {
            let before = current.total_outcomes();
            current = current.apply_policy(policy.as_ref(), &self.config)?;
            tracing::info!(
                step,
                policy = policy.name(),
                before,
                after = current.total_outcomes(),
                "policy applied"
            );
        }
        Ok(current)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::from_fn;
    use crate::error::GradeError;
    use crate::model::{Assignment, Category, Student};

    fn roster() -> Roster {
        Roster::from_students((1..=2).map(|id| {
            Student::new(id, "x")
                .with_category(Category::new("Homework", 1.0))
                .with_assignment(Assignment::new("hw1", "Homework", 10.0))
        }))
    }

    fn double() -> impl Policy {
        from_fn("Double", |s: &Student| Ok(vec![s.clone(), s.clone()]))
    }

    #[test]
    fn test_empty_pipeline_is_identity() {
        let r = roster();
        assert_eq!(Pipeline::new().run(&r).unwrap(), r);
    }

    #[test]
    fn test_policies_run_in_order() {
        let pipeline = Pipeline::new()
            .with_config(PipelineConfig::default().with_parallel(false))
            .with_policy(double())
            .with_policy(double())
            .with_policy(double());
        assert_eq!(pipeline.len(), 3);
        let out = pipeline.run(&roster()).unwrap();
        assert_eq!(out.outcome_count(1), 8);
        assert_eq!(out.outcome_count(2), 8);
    }

    #[test]
    fn test_invalid_input_rejected() {
        let bad = Roster::from_students([Student::new(9, "bad")
            .with_assignment(Assignment::new("hw1", "Missing", 10.0))]);
        let err = Pipeline::new().with_policy(double()).run(&bad).unwrap_err();
        assert!(matches!(err, GradeError::UnknownCategory { student: 9, .. }));
    }

    #[test]
    fn test_skip_input_validation() {
        let bad = Roster::from_students([Student::new(9, "bad")
            .with_assignment(Assignment::new("hw1", "Missing", 10.0))]);
        let pipeline = Pipeline::new()
            .with_config(PipelineConfig::default().with_validate_input(false))
            .with_policy(double());
        assert_eq!(pipeline.run(&bad).unwrap().outcome_count(9), 2);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let pipeline = Pipeline::new()
            .with_config(PipelineConfig::default().with_max_outcomes(0))
            .with_policy(double());
        assert!(matches!(pipeline.run(&roster()), Err(GradeError::Config(_))));
    }

    #[test]
    fn test_invalid_policy_rejected_before_running() {
        use crate::late::{LateMultiplierConfig, LateMultipliers};

        let pipeline = Pipeline::new()
            .with_policy(double())
            .with_policy(LateMultipliers::new(LateMultiplierConfig::default().with_scale(vec![1.5])));
        assert!(matches!(pipeline.run(&roster()), Err(GradeError::Config(_))));
    }

    #[test]
    fn test_limit_stops_pipeline() {
        let pipeline = Pipeline::new()
            .with_config(PipelineConfig::default().with_max_outcomes(4))
            .with_boxed_policy(Box::new(double()))
            .with_boxed_policy(Box::new(double()))
            .with_boxed_policy(Box::new(double()));
        assert!(matches!(
            pipeline.run(&roster()),
            Err(GradeError::OutcomeLimit { count: 8, limit: 4, .. })
        ));
    }
}
