//! Late-multiplier policy.

use super::config::LateMultiplierConfig;
use crate::engine::Policy;
use crate::error::Result;
use crate::model::{Multiplier, Student};

/// Deterministic policy that appends a late multiplier to every late
/// assignment.
///
/// Lateness is the assignment's own when ungrouped and its group's joint
/// (worst-member) lateness when grouped. The configured grace period is
/// subtracted before days are counted. Categories without a sliding scale
/// zero any late work. The multiplier is appended after any existing ones.
pub struct LateMultipliers {
    config: LateMultiplierConfig,
}

impl LateMultipliers {
    /// Creates the policy without checking `config`.
    ///
    /// [`Pipeline::run`](crate::engine::Pipeline::run) still rejects an
    /// invalid configuration before applying anything.
    pub fn new(config: LateMultiplierConfig) -> Self {
        Self { config }
    }

    /// Creates the policy after validating `config`.
    pub fn try_new(config: LateMultiplierConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &LateMultiplierConfig {
        &self.config
    }
}

impl Policy for LateMultipliers {
    fn name(&self) -> &str {
        "LateMultipliers"
    }

    fn validate(&self) -> Result<()> {
        self.config.validate()
    }

    fn apply(&self, outcome: &Student) -> Result<Vec<Student>> {
        let groups = outcome.group_lateness();
        let mut next = outcome.clone();

        for assignment in outcome.assignments() {
            let lateness = assignment
                .group
                .and_then(|g| groups.get(&g).copied())
                .unwrap_or(assignment.submission.lateness);
            let sliding = outcome
                .category(&assignment.category)
                .is_some_and(|c| c.late_multiplier);

            if let Some(factor) = self.config.factor_for(lateness, sliding) {
                let multiplier = Multiplier::new(factor, self.config.description.as_str());
                next.update_assignment(&assignment.name, |a| a.submission.multipliers.push(multiplier));
            }
        }

        Ok(vec![next])
    }
}
