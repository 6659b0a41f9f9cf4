//! Core trait for outcome-branching policies.

use crate::error::Result;
use crate::model::Student;

/// A rule that maps one outcome to its successor outcomes.
///
/// Implementations must be pure: the input is never mutated (it is only
/// borrowed) and successors share unchanged entries with it through
/// copy-on-write. The returned sequence is ordered and finite:
///
/// - **zero** outcomes prune an infeasible hypothesis,
/// - **one** outcome is the deterministic case,
/// - **many** outcomes branch into mutually exclusive hypotheses.
///
/// Policies must be `Send + Sync` because the engine may apply them to
/// different outcomes concurrently. Errors are reserved for configuration
/// faults and resource exhaustion; infeasibility is never an error.
///
/// # Examples
///
/// ```
/// use u_grades::engine::Policy;
/// use u_grades::model::Student;
/// use u_grades::Result;
///
/// /// Forks every outcome into itself and a copy with one more slip day used.
/// struct Fork;
///
/// impl Policy for Fork {
///     fn name(&self) -> &str { "Fork" }
///     fn apply(&self, outcome: &Student) -> Result<Vec<Student>> {
///         let mut other = outcome.clone();
///         other.slip_days_used += 1;
///         Ok(vec![outcome.clone(), other])
///     }
/// }
///
/// let out = Fork.apply(&Student::new(1, "Ada")).unwrap();
/// assert_eq!(out.len(), 2);
/// ```
pub trait Policy: Send + Sync {
    /// Returns the name of this policy, used in logs.
    fn name(&self) -> &str;

    /// Computes the successor outcomes of `outcome`.
    fn apply(&self, outcome: &Student) -> Result<Vec<Student>>;

    /// Computes the successors of `outcome`, failing with
    /// [`GradeError::OutcomeLimit`](crate::GradeError::OutcomeLimit) instead
    /// of building more than `limit` of them.
    ///
    /// The default ignores `limit` and leaves the check to the caller.
    /// Branching searches override it to size their product before
    /// materialising anything.
    fn apply_bounded(&self, outcome: &Student, _limit: Option<usize>) -> Result<Vec<Student>> {
        self.apply(outcome)
    }

    /// Checks this policy's configuration before a pipeline runs.
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

/// A [`Policy`] backed by a closure.
///
/// Created with [`from_fn`].
pub struct FnPolicy<F> {
    name: String,
    f: F,
}

/// Wraps a closure as a named [`Policy`].
///
/// ```
/// use u_grades::engine::{from_fn, Policy};
/// use u_grades::model::Student;
///
/// let prune_all = from_fn("PruneAll", |_s: &Student| Ok(Vec::new()));
/// assert_eq!(prune_all.name(), "PruneAll");
/// assert!(prune_all.apply(&Student::new(1, "Ada")).unwrap().is_empty());
/// ```
pub fn from_fn<F>(name: impl Into<String>, f: F) -> FnPolicy<F>
where
    F: Fn(&Student) -> Result<Vec<Student>> + Send + Sync,
{
    FnPolicy {
        name: name.into(),
        f,
    }
}

impl<F> Policy for FnPolicy<F>
where
    F: Fn(&Student) -> Result<Vec<Student>> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self, outcome: &Student) -> Result<Vec<Student>> {
        (self.f)(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fn_policy_identity() {
        let identity = from_fn("Identity", |s: &Student| Ok(vec![s.clone()]));
        let s = Student::new(7, "Ada");
        assert_eq!(identity.name(), "Identity");
        assert_eq!(identity.apply(&s).unwrap(), vec![s]);
    }

    #[test]
    fn test_default_hooks() {
        let identity = from_fn("Identity", |s: &Student| Ok(vec![s.clone(), s.clone()]));
        assert!(identity.validate().is_ok());
        // Without an override the bound is left to the roster.
        assert_eq!(identity.apply_bounded(&Student::new(1, "Ada"), Some(1)).unwrap().len(), 2);
    }

    #[test]
    fn test_boxed_policy_is_object_safe() {
        let policies: Vec<Box<dyn Policy>> = vec![
            Box::new(from_fn("Keep", |s: &Student| Ok(vec![s.clone()]))),
            Box::new(from_fn("Twice", |s: &Student| Ok(vec![s.clone(), s.clone()]))),
        ];
        let s = Student::new(1, "Ada");
        let counts: Vec<usize> = policies.iter().map(|p| p.apply(&s).unwrap().len()).collect();
        assert_eq!(counts, vec![1, 2]);
    }
}
