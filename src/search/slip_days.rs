//! Slip-day search: every useful way of spending a category's slip days.

use std::collections::BTreeMap;

use super::check_ceiling;
use super::combinatorics::{cross_product, product_len};
use crate::engine::Policy;
use crate::error::Result;
use crate::model::{GroupId, Lateness, Student};

/// Returns every allocation of slip days to groups.
///
/// `days_late[i]` bounds the days given to group `i`; the allocation total
/// never exceeds `budget`. Each allocation is parallel to `days_late`.
/// Giving a group more days than it is late has no effect, so such
/// allocations are never produced. With no groups there is exactly one
/// (empty) allocation.
///
/// # Examples
///
/// ```
/// use u_grades::search::slip_allocations;
///
/// let a = slip_allocations(&[2, 1], 2);
/// assert_eq!(a, vec![
///     vec![0, 0], vec![0, 1],
///     vec![1, 0], vec![1, 1],
///     vec![2, 0],
/// ]);
/// ```
pub fn slip_allocations(days_late: &[u32], budget: u32) -> Vec<Vec<u32>> {
    let budget = effective_budget(days_late, budget);
    let (&first, rest) = match days_late.split_first() {
        Some(split) => split,
        None => return vec![Vec::new()],
    };

    let mut out = Vec::new();
    for slip in 0..=first.min(budget) {
        for tail in slip_allocations(rest, budget - slip) {
            let mut allocation = Vec::with_capacity(days_late.len());
            allocation.push(slip);
            allocation.extend(tail);
            out.push(allocation);
        }
    }
    out
}

/// Number of allocations [`slip_allocations`] would return, or `None` on
/// overflow.
pub fn allocation_count(days_late: &[u32], budget: u32) -> Option<usize> {
    // ways[r] = allocations of the groups processed so far given r days left.
    let budget = effective_budget(days_late, budget) as usize;
    let mut ways = vec![1usize; budget + 1];
    for &days in days_late.iter().rev() {
        let days = days as usize;
        let mut next = vec![0usize; budget + 1];
        for (remaining, slot) in next.iter_mut().enumerate() {
            let mut total: usize = 0;
            for slip in 0..=days.min(remaining) {
                total = total.checked_add(ways[remaining - slip])?;
            }
            *slot = total;
        }
        ways = next;
    }
    Some(ways[budget])
}

/// Caps `budget` at the total days late; days beyond that can never be
/// allocated, so both functions above behave identically with the cap.
fn effective_budget(days_late: &[u32], budget: u32) -> u32 {
    let total: u64 = days_late.iter().map(|&d| u64::from(d)).sum();
    u32::try_from(total.min(u64::from(budget))).unwrap_or(budget)
}

/// Late lateness groups of one category.
struct CategoryGroups {
    ids: Vec<GroupId>,
    days_late: Vec<u32>,
    members: BTreeMap<GroupId, Vec<String>>,
    budget: u32,
}

fn late_groups(student: &Student, category: &str, budget: u32) -> CategoryGroups {
    let mut lateness: BTreeMap<GroupId, Lateness> = BTreeMap::new();
    let mut members: BTreeMap<GroupId, Vec<String>> = BTreeMap::new();

    for assignment in student.assignments_in(category) {
        let Some(group) = assignment.group else {
            continue;
        };
        let l = assignment.submission.lateness;
        lateness
            .entry(group)
            .and_modify(|cur| *cur = (*cur).max(l))
            .or_insert(l);
        members.entry(group).or_default().push(assignment.name.clone());
    }

    let late: Vec<(GroupId, u32)> = lateness
        .into_iter()
        .filter(|(_, l)| l.is_late())
        .map(|(g, l)| (g, l.days_late()))
        .collect();
    members.retain(|g, _| late.iter().any(|(id, _)| id == g));

    CategoryGroups {
        ids: late.iter().map(|(g, _)| *g).collect(),
        days_late: late.iter().map(|(_, d)| *d).collect(),
        members,
        budget,
    }
}

/// Branching policy that enumerates slip-day allocations.
///
/// For each category, every allocation of up to the category's slip-day
/// budget across its *late* lateness groups is enumerated (see
/// [`slip_allocations`]). Groups are judged by their tardiest member;
/// ungrouped assignments and groups that are not late take no slip days.
/// Per-category allocations are crossed, and each whole-student allocation
/// becomes one successor in which every member of an allocated group has
/// its lateness reduced by 24 hours per slip day.
///
/// # Examples
///
/// ```
/// use u_grades::engine::Policy;
/// use u_grades::model::{Assignment, Category, Lateness, Student, Submission};
/// use u_grades::search::SlipDaySearch;
///
/// let late = Submission::new(8.0).with_lateness(Lateness::from_hours(30));
/// let student = Student::new(1, "Ada")
///     .with_category(Category::new("Projects", 1.0).with_slip_days(3))
///     .with_assignment(Assignment::new("p1", "Projects", 10.0).with_group(1).with_submission(late));
///
/// // 30 hours is 2 days late: spend 0, 1 or 2 slip days.
/// let outcomes = SlipDaySearch::new().apply(&student).unwrap();
/// assert_eq!(outcomes.len(), 3);
/// assert_eq!(outcomes[2].assignment("p1").unwrap().submission.lateness, Lateness::from_hours(-18));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SlipDaySearch {
    max_outcomes: Option<usize>,
}

impl SlipDaySearch {
    /// Creates a slip-day search without an outcome ceiling.
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

impl Policy for SlipDaySearch {
    fn name(&self) -> &str {
        "SlipDaySearch"
    }

    fn apply(&self, outcome: &Student) -> Result<Vec<Student>> {
        self.apply_bounded(outcome, None)
    }

    fn apply_bounded(&self, outcome: &Student, limit: Option<usize>) -> Result<Vec<Student>> {
        let categories: Vec<CategoryGroups> = outcome
            .categories()
            .map(|c| late_groups(outcome, &c.name, c.slip_days))
            .collect();

        let count = product_len(
            categories
                .iter()
                .map(|c| allocation_count(&c.days_late, c.budget).unwrap_or(usize::MAX)),
        )
        .unwrap_or(usize::MAX);
        check_ceiling(outcome.id, count, self.max_outcomes, limit)?;

        let per_category: Vec<Vec<Vec<u32>>> = categories
            .iter()
            .map(|c| slip_allocations(&c.days_late, c.budget))
            .collect();

        let outcomes: Vec<Student> = cross_product(&per_category)
            .into_iter()
            .map(|allocation| {
                let mut next = outcome.clone();
                for (groups, days) in categories.iter().zip(&allocation) {
                    for (group, &slip) in groups.ids.iter().zip(days) {
                        if slip == 0 {
                            continue;
                        }
                        let shift = Lateness::from_days(i64::from(slip));
                        for name in groups.members.get(group).into_iter().flatten() {
                            next.update_assignment(name, |a| {
                                a.submission.lateness = a.submission.lateness - shift;
                                a.submission.slip_days_applied += slip;
                            });
                        }
                        next.slip_days_used += slip;
                    }
                }
                next
            })
            .collect();

        tracing::debug!(student = outcome.id, outcomes = outcomes.len(), "slip-day search");
        Ok(outcomes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GradeError;
    use crate::model::{Assignment, Category, Submission};
    use proptest::prelude::*;

    fn late(hours: i64) -> Submission {
        Submission::new(10.0).with_lateness(Lateness::from_hours(hours))
    }

    fn student() -> Student {
        Student::new(1, "Ada")
            .with_category(Category::new("Projects", 0.5).with_slip_days(2))
            .with_category(Category::new("Homework", 0.5).with_slip_days(1))
            // group 1: 2 days late (joint lateness is the worst member)
            .with_assignment(Assignment::new("p1a", "Projects", 10.0).with_group(1).with_submission(late(3)))
            .with_assignment(Assignment::new("p1b", "Projects", 10.0).with_group(1).with_submission(late(40)))
            // group 2: 1 day late
            .with_assignment(Assignment::new("p2", "Projects", 10.0).with_group(2).with_submission(late(5)))
            // group 3: on time
            .with_assignment(Assignment::new("p3", "Projects", 10.0).with_group(3).with_submission(late(-5)))
            // ungrouped and late: never receives slip days
            .with_assignment(Assignment::new("hw1", "Homework", 10.0).with_submission(late(10)))
            // group 4: 1 day late
            .with_assignment(Assignment::new("hw2", "Homework", 10.0).with_group(4).with_submission(late(1)))
    }

    #[test]
    fn test_allocations_respect_bounds() {
        let a = slip_allocations(&[3, 1, 2], 3);
        for alloc in &a {
            assert!(alloc[0] <= 3 && alloc[1] <= 1 && alloc[2] <= 2);
            assert!(alloc.iter().sum::<u32>() <= 3);
        }
        assert_eq!(Some(a.len()), allocation_count(&[3, 1, 2], 3));
    }

    #[test]
    fn test_allocations_base_cases() {
        assert_eq!(slip_allocations(&[], 5), vec![Vec::<u32>::new()]);
        assert_eq!(slip_allocations(&[4], 0), vec![vec![0]]);
        assert_eq!(allocation_count(&[], 5), Some(1));
        assert_eq!(allocation_count(&[4], 0), Some(1));
    }

    #[test]
    fn test_outcome_count() {
        // Projects: groups {1: 2 days, 2: 1 day}, budget 2 -> (0,0),(0,1),(1,0),(1,1),(2,0) = 5
        // Homework: group {4: 1 day}, budget 1 -> 2
        let out = SlipDaySearch::new().apply(&student()).unwrap();
        assert_eq!(out.len(), 10);
    }

    #[test]
    fn test_group_members_shift_together() {
        let s = student();
        let out = SlipDaySearch::new().apply(&s).unwrap();
        // Allocation order: Homework category first (name order), Projects varies fastest.
        // out[4] = Homework 0, Projects (2, 0).
        let o = &out[4];
        assert_eq!(o.assignment("p1a").unwrap().submission.lateness, Lateness::from_hours(3 - 48));
        assert_eq!(o.assignment("p1b").unwrap().submission.lateness, Lateness::from_hours(40 - 48));
        assert_eq!(o.assignment("p1a").unwrap().submission.slip_days_applied, 2);
        assert_eq!(o.assignment("p2").unwrap().submission.lateness, Lateness::from_hours(5));
        assert_eq!(o.slip_days_used, 2);
        assert!(o.shares_assignment_with(&s, "p2"));
    }

    #[test]
    fn test_ungrouped_and_on_time_untouched() {
        let s = student();
        for o in SlipDaySearch::new().apply(&s).unwrap() {
            assert!(o.shares_assignment_with(&s, "hw1"));
            assert!(o.shares_assignment_with(&s, "p3"));
        }
    }

    #[test]
    fn test_zero_budget_single_outcome() {
        let s = Student::new(2, "Bo")
            .with_category(Category::new("Projects", 1.0))
            .with_assignment(Assignment::new("p1", "Projects", 10.0).with_group(1).with_submission(late(30)));
        let out = SlipDaySearch::new().apply(&s).unwrap();
        assert_eq!(out, vec![s]);
    }

    #[test]
    fn test_huge_budget_is_capped() {
        assert_eq!(allocation_count(&[1], u32::MAX), Some(2));
        assert_eq!(allocation_count(&[2, 1], u32::MAX), Some(6));
        assert_eq!(slip_allocations(&[1], u32::MAX), vec![vec![0], vec![1]]);

        let s = Student::new(3, "Cy")
            .with_category(Category::new("Projects", 1.0).with_slip_days(u32::MAX))
            .with_assignment(Assignment::new("p1", "Projects", 10.0).with_group(1).with_submission(late(30)));
        let out = SlipDaySearch::new().apply(&s).unwrap();
        assert_eq!(out.len(), 3);
        assert_eq!(out[2].slip_days_used, 2);
        assert_eq!(out[2].assignment("p1").unwrap().submission.lateness, Lateness::from_hours(-18));
    }

    #[test]
    fn test_outcome_limit() {
        let err = SlipDaySearch::new().with_max_outcomes(9).apply(&student()).unwrap_err();
        assert!(matches!(err, GradeError::OutcomeLimit { count: 10, limit: 9, .. }));
    }

    proptest! {
        #[test]
        fn allocations_never_exceed_bounds(
            days in prop::collection::vec(0u32..4, 0..5),
            budget in 0u32..6,
        ) {
            let allocations = slip_allocations(&days, budget);
            prop_assert_eq!(Some(allocations.len()), allocation_count(&days, budget));
            for alloc in &allocations {
                prop_assert_eq!(alloc.len(), days.len());
                prop_assert!(alloc.iter().sum::<u32>() <= budget);
                for (given, late) in alloc.iter().zip(&days) {
                    prop_assert!(given <= late);
                }
            }
        }
    }
}
