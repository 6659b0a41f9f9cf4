//! The roster: every student's set of candidate outcomes.

use std::collections::BTreeMap;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::config::PipelineConfig;
use super::types::Policy;
use crate::error::{GradeError, Result};
use crate::model::Student;
use crate::report::GradeReport;

/// Opaque key identifying one student in a [`Roster`].
pub type StudentKey = u64;

/// Maps each student key to an ordered list of mutually exclusive
/// outcomes.
///
/// Rosters are values: [`apply_policy`](Roster::apply_policy) returns a
/// new roster and leaves the receiver untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    outcomes: BTreeMap<StudentKey, Vec<Student>>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the initial roster: one outcome per student, keyed by id.
    ///
    /// A later student with a repeated id replaces the earlier one.
    pub fn from_students<I: IntoIterator<Item = Student>>(students: I) -> Self {
        let outcomes = students
            .into_iter()
            .map(|s| (s.id, vec![s]))
            .collect();
        Self { outcomes }
    }

    /// Sets the outcomes for `key`, replacing any existing list.
    pub fn insert(&mut self, key: StudentKey, outcomes: Vec<Student>) {
        self.outcomes.insert(key, outcomes);
    }

    /// Returns the outcomes for `key`.
    pub fn get(&self, key: StudentKey) -> Option<&[Student]> {
        self.outcomes.get(&key).map(Vec::as_slice)
    }

    pub fn keys(&self) -> impl Iterator<Item = StudentKey> + '_ {
        self.outcomes.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (StudentKey, &[Student])> {
        self.outcomes.iter().map(|(k, v)| (*k, v.as_slice()))
    }

    /// Number of student keys.
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Number of outcomes held for `key` (0 if absent).
    pub fn outcome_count(&self, key: StudentKey) -> usize {
        self.outcomes.get(&key).map_or(0, Vec::len)
    }

    /// Number of outcomes across all keys.
    pub fn total_outcomes(&self) -> usize {
        self.outcomes.values().map(Vec::len).sum()
    }

    /// Validates every outcome of every key.
    pub fn validate(&self) -> Result<()> {
        self.outcomes.values().flatten().try_for_each(Student::validate)
    }

    /// Applies `policy` to every outcome of every key.
    ///
    /// For each key the new outcome list is the concatenation, in input
    /// order, of the policy's results for each original outcome. Keys whose
    /// outcomes are all pruned remain present with an empty list.
    ///
    /// # Errors
    ///
    /// Propagates the first policy error, and returns
    /// [`GradeError::OutcomeLimit`] when a key would hold more outcomes
    /// than `config.max_outcomes`. The ceiling is also handed to
    /// [`Policy::apply_bounded`], so searches that can size their output
    /// fail before building it.
    pub fn apply_policy<P: Policy + ?Sized>(&self, policy: &P, config: &PipelineConfig) -> Result<Roster> {
        let expand = |(key, outcomes): (&StudentKey, &Vec<Student>)| {
            expand_key(*key, outcomes, policy, config).map(|next| (*key, next))
        };

        #[cfg(feature = "parallel")]
        let outcomes: Result<BTreeMap<StudentKey, Vec<Student>>> = if config.parallel {
            self.outcomes.par_iter().map(expand).collect()
        } else {
            self.outcomes.iter().map(expand).collect()
        };

        #[cfg(not(feature = "parallel"))]
        let outcomes: Result<BTreeMap<StudentKey, Vec<Student>>> =
            self.outcomes.iter().map(expand).collect();

        Ok(Roster {
            outcomes: outcomes?,
        })
    }

    /// Aggregates every outcome into a [`GradeReport`], preserving the
    /// per-key outcome order.
    pub fn grade_reports(&self, config: &PipelineConfig) -> BTreeMap<StudentKey, Vec<GradeReport>> {
        let report_all = |(key, outcomes): (&StudentKey, &Vec<Student>)| {
            let reports = map_outcomes(outcomes, config.parallel, Student::grade_report);
            (*key, reports)
        };

        #[cfg(feature = "parallel")]
        {
            if config.parallel {
                return self.outcomes.par_iter().map(report_all).collect();
            }
        }

        self.outcomes.iter().map(report_all).collect()
    }
}

impl FromIterator<(StudentKey, Vec<Student>)> for Roster {
    fn from_iter<I: IntoIterator<Item = (StudentKey, Vec<Student>)>>(iter: I) -> Self {
        Self {
            outcomes: iter.into_iter().collect(),
        }
    }
}

/// Expands one key's outcomes through `policy` and enforces the ceiling.
fn expand_key<P: Policy + ?Sized>(
    key: StudentKey,
    outcomes: &[Student],
    policy: &P,
    config: &PipelineConfig,
) -> Result<Vec<Student>> {
    // Each outcome alone may not exceed the ceiling either, so searches can
    // refuse before building.
    let branches = try_map_outcomes(outcomes, config.parallel, |o| {
        policy
            .apply_bounded(o, config.max_outcomes)
            .map_err(|e| match e {
                GradeError::OutcomeLimit { count, limit, .. } => {
                    GradeError::OutcomeLimit { key, count, limit }
                }
                other => other,
            })
    })?;

    let count: usize = branches.iter().map(Vec::len).sum();
    if let Some(limit) = config.max_outcomes {
        if count > limit {
            return Err(GradeError::OutcomeLimit { key, count, limit });
        }
    }
    if count == 0 && !outcomes.is_empty() {
        tracing::debug!(key, policy = policy.name(), "all outcomes pruned");
    }

    let mut next = Vec::with_capacity(count);
    for branch in branches {
        next.extend(branch);
    }
    Ok(next)
}

fn try_map_outcomes<T, F>(outcomes: &[Student], parallel: bool, f: F) -> Result<Vec<T>>
where
    T: Send,
    F: Fn(&Student) -> Result<T> + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        if parallel {
            return outcomes.par_iter().map(f).collect();
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    outcomes.iter().map(f).collect()
}

fn map_outcomes<T, F>(outcomes: &[Student], parallel: bool, f: F) -> Vec<T>
where
    T: Send,
    F: Fn(&Student) -> T + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        if parallel {
            return outcomes.par_iter().map(f).collect();
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    outcomes.iter().map(f).collect()
}
