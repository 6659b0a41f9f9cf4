//! Drop search: every legal choice of dropped assignments.

use super::check_ceiling;
use super::combinatorics::{binomial, combinations, cross_product, product_len};
use crate::engine::Policy;
use crate::error::Result;
use crate::model::Student;

/// Branching policy that enumerates which assignments to drop.
///
/// Within each category independently, every way of choosing exactly
/// `drops` of the category's assignments is enumerated; the per-category
/// choices are then crossed. Each whole-student combination becomes one
/// successor outcome whose chosen assignments are marked dropped.
///
/// A category with `drops = 0` contributes a single empty choice. A
/// category holding fewer assignments than `drops` has no legal choice,
/// which prunes the outcome entirely (zero successors).
///
/// # Examples
///
/// ```
/// use u_grades::engine::Policy;
/// use u_grades::model::{Assignment, Category, Student};
/// use u_grades::search::DropSearch;
///
/// let student = Student::new(1, "Ada")
///     .with_category(Category::new("Homework", 1.0).with_drops(1))
///     .with_assignment(Assignment::new("hw1", "Homework", 10.0))
///     .with_assignment(Assignment::new("hw2", "Homework", 10.0))
///     .with_assignment(Assignment::new("hw3", "Homework", 10.0));
///
/// let outcomes = DropSearch::new().apply(&student).unwrap();
/// assert_eq!(outcomes.len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DropSearch {
    max_outcomes: Option<usize>,
}

impl DropSearch {
    /// Creates a drop search without an outcome ceiling.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails with [`GradeError::OutcomeLimit`](crate::GradeError::OutcomeLimit) instead of enumerating more
    /// than `n` outcomes for a single input outcome.
    pub fn with_max_outcomes(mut self, n: usize) -> Self {
        self.max_outcomes = Some(n);
        self
    }
}

impl Policy for DropSearch {
    fn name(&self) -> &str {
        "DropSearch"
    }

    fn apply(&self, outcome: &Student) -> Result<Vec<Student>> {
        self.apply_bounded(outcome, None)
    }

    fn apply_bounded(&self, outcome: &Student, limit: Option<usize>) -> Result<Vec<Student>> {
        let mut members: Vec<Vec<&str>> = Vec::with_capacity(outcome.category_count());
        let mut drops: Vec<usize> = Vec::with_capacity(outcome.category_count());

        for category in outcome.categories() {
            let names: Vec<&str> = outcome
                .assignments_in(&category.name)
                .map(|a| a.name.as_str())
                .collect();
            if names.len() < category.drops {
                tracing::warn!(
                    student = outcome.id,
                    category = %category.name,
                    drops = category.drops,
                    available = names.len(),
                    "category cannot satisfy its drop count; outcome pruned"
                );
                return Ok(Vec::new());
            }
            members.push(names);
            drops.push(category.drops);
        }

        let count = product_len(
            members
                .iter()
                .zip(&drops)
                .map(|(names, &k)| binomial(names.len(), k).unwrap_or(usize::MAX)),
        )
        .unwrap_or(usize::MAX);
        check_ceiling(outcome.id, count, self.max_outcomes, limit)?;

        let choices: Vec<Vec<Vec<&str>>> = members
            .iter()
            .zip(&drops)
            .map(|(names, &k)| combinations(names, k))
            .collect();

        let outcomes: Vec<Student> = cross_product(&choices)
            .into_iter()
            .map(|combo| {
                let mut next = outcome.clone();
                for name in combo.iter().flatten() {
                    next.update_assignment(name, |a| a.submission.dropped = true);
                }
                next
            })
            .collect();

        tracing::debug!(student = outcome.id, outcomes = outcomes.len(), "drop search");
        Ok(outcomes)
    }
}
