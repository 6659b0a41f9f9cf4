//! Student snapshots with copy-on-write storage.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use super::{Assignment, Category, GroupId, Lateness};
use crate::error::{GradeError, Result};

/// One hypothesis about a student's record (an *outcome*).
///
/// Categories and assignments live behind `Arc`s at two levels: the map
/// itself and each entry. Cloning a `Student` is two reference-count
/// bumps. Updating one entry copies the map's pointer spine (only if the
/// map is shared) and the single entry being changed; every other entry
/// stays shared with the outcome it was cloned from.
///
/// # Examples
///
/// ```
/// use u_grades::model::{Assignment, Category, Student, Submission};
///
/// let base = Student::new(1, "Ada")
///     .with_category(Category::new("Homework", 1.0))
///     .with_assignment(Assignment::new("hw1", "Homework", 10.0).with_submission(Submission::new(9.0)))
///     .with_assignment(Assignment::new("hw2", "Homework", 10.0).with_submission(Submission::new(7.0)));
///
/// let mut branch = base.clone();
/// branch.update_assignment("hw2", |a| a.submission.dropped = true);
///
/// assert!(!base.assignment("hw2").unwrap().submission.dropped);
/// assert!(branch.assignment("hw2").unwrap().submission.dropped);
/// assert!(branch.shares_assignment_with(&base, "hw1"));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Student {
    pub id: u64,
    pub name: String,
    categories: Arc<BTreeMap<String, Arc<Category>>>,
    assignments: Arc<BTreeMap<String, Arc<Assignment>>>,
    /// Slip days spent across all categories so far.
    pub slip_days_used: u32,
}

impl Student {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            categories: Arc::default(),
            assignments: Arc::default(),
            slip_days_used: 0,
        }
    }

    /// Adds or replaces a category, keyed by its name.
    pub fn with_category(mut self, category: Category) -> Self {
        self.replace_category(category);
        self
    }

    /// Adds or replaces an assignment, keyed by its name.
    pub fn with_assignment(mut self, assignment: Assignment) -> Self {
        self.replace_assignment(assignment);
        self
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.get(name).map(Arc::as_ref)
    }

    pub fn assignment(&self, name: &str) -> Option<&Assignment> {
        self.assignments.get(name).map(Arc::as_ref)
    }

    /// Categories in name order.
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.values().map(Arc::as_ref)
    }

    /// Assignments in name order.
    pub fn assignments(&self) -> impl Iterator<Item = &Assignment> {
        self.assignments.values().map(Arc::as_ref)
    }

    /// Assignments belonging to `category`, in name order.
    pub fn assignments_in<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Assignment> {
        self.assignments().filter(move |a| a.category == category)
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }

    pub fn replace_category(&mut self, category: Category) {
        Arc::make_mut(&mut self.categories).insert(category.name.clone(), Arc::new(category));
    }

    pub fn replace_assignment(&mut self, assignment: Assignment) {
        Arc::make_mut(&mut self.assignments).insert(assignment.name.clone(), Arc::new(assignment));
    }

    /// Edits one category in place, cloning it first if it is shared.
    ///
    /// Returns `false` (and changes nothing) if the category does not exist.
    pub fn update_category<F: FnOnce(&mut Category)>(&mut self, name: &str, f: F) -> bool {
        if !self.categories.contains_key(name) {
            return false;
        }
        match Arc::make_mut(&mut self.categories).entry(name.to_string()) {
            Entry::Occupied(mut entry) => {
                f(Arc::make_mut(entry.get_mut()));
                true
            }
            Entry::Vacant(_) => false,
        }
    }

    /// Edits one assignment in place, cloning it first if it is shared.
    ///
    /// Returns `false` (and changes nothing) if the assignment does not exist.
    pub fn update_assignment<F: FnOnce(&mut Assignment)>(&mut self, name: &str, f: F) -> bool {
        if !self.assignments.contains_key(name) {
            return false;
        }
        match Arc::make_mut(&mut self.assignments).entry(name.to_string()) {
            Entry::Occupied(mut entry) => {
                f(Arc::make_mut(entry.get_mut()));
                true
            }
            Entry::Vacant(_) => false,
        }
    }

    /// Returns `true` if both students hold the very same allocation for
    /// the named assignment.
    pub fn shares_assignment_with(&self, other: &Student, name: &str) -> bool {
        match (self.assignments.get(name), other.assignments.get(name)) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Joint lateness of every lateness group: the maximum lateness of any
    /// member assignment.
    pub fn group_lateness(&self) -> BTreeMap<GroupId, Lateness> {
        let mut groups = BTreeMap::new();
        for assignment in self.assignments() {
            if let Some(group) = assignment.group {
                let lateness = assignment.submission.lateness;
                groups
                    .entry(group)
                    .and_modify(|cur: &mut Lateness| *cur = (*cur).max(lateness))
                    .or_insert(lateness);
            }
        }
        groups
    }

    /// Checks the record before it enters a pipeline.
    ///
    /// Rejects non-finite or negative weights, non-positive max scores,
    /// assignments that reference a missing category, categories that drop
    /// more assignments than they hold, and lateness groups that span
    /// categories.
    pub fn validate(&self) -> Result<()> {
        for category in self.categories() {
            if !category.weight.is_finite() || category.weight < 0.0 {
                return Err(GradeError::InvalidWeight {
                    entity: "category",
                    name: category.name.clone(),
                    weight: category.weight,
                });
            }
        }

        let mut per_category: HashMap<&str, usize> = HashMap::new();
        let mut group_home: HashMap<GroupId, &str> = HashMap::new();

        for assignment in self.assignments() {
            if !assignment.weight.is_finite() || assignment.weight < 0.0 {
                return Err(GradeError::InvalidWeight {
                    entity: "assignment",
                    name: assignment.name.clone(),
                    weight: assignment.weight,
                });
            }
            if !(assignment.max_score.is_finite() && assignment.max_score > 0.0) {
                return Err(GradeError::InvalidMaxScore {
                    assignment: assignment.name.clone(),
                    max_score: assignment.max_score,
                });
            }
            if !self.categories.contains_key(&assignment.category) {
                return Err(GradeError::UnknownCategory {
                    student: self.id,
                    assignment: assignment.name.clone(),
                    category: assignment.category.clone(),
                });
            }
            *per_category.entry(assignment.category.as_str()).or_default() += 1;

            if let Some(group) = assignment.group {
                let home = group_home.entry(group).or_insert(assignment.category.as_str());
                if *home != assignment.category {
                    return Err(GradeError::GroupSpansCategories {
                        student: self.id,
                        group,
                    });
                }
            }
        }

        for category in self.categories() {
            let available = per_category.get(category.name.as_str()).copied().unwrap_or(0);
            if category.drops > available {
                return Err(GradeError::TooManyDrops {
                    student: self.id,
                    category: category.name.clone(),
                    drops: category.drops,
                    available,
                });
            }
        }

        Ok(())
    }
}
