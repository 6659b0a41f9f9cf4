//! Per-student category adjustments.
//!
//! Deterministic policies that shift a category's drop count or slip-day
//! budget for specific students before the searches run. A student with
//! no entry in the table passes through unchanged.

use std::collections::BTreeMap;

use crate::engine::{Policy, StudentKey};
use crate::error::{GradeError, Result};
use crate::model::{Category, Student};

/// Student key → category name → signed delta.
pub type AdjustmentTable = BTreeMap<StudentKey, BTreeMap<String, i64>>;

fn shift(value: u64, delta: i64) -> u64 {
    if delta >= 0 {
        value.saturating_add(delta.unsigned_abs())
    } else {
        value.saturating_sub(delta.unsigned_abs())
    }
}

fn adjust(
    table: &AdjustmentTable,
    outcome: &Student,
    mut edit: impl FnMut(&mut Category, i64),
) -> Result<Vec<Student>> {
    let changes = match table.get(&outcome.id) {
        Some(changes) => changes,
        None => return Ok(vec![outcome.clone()]),
    };

    let mut next = outcome.clone();
    for (category, &delta) in changes {
        if !next.update_category(category, |c| edit(c, delta)) {
            return Err(GradeError::AdjustUnknownCategory {
                student: outcome.id,
                category: category.clone(),
            });
        }
    }
    Ok(vec![next])
}

/// Adds a per-student delta to category drop counts (floored at zero).
///
/// # Examples
///
/// ```
/// use u_grades::adjust::AdjustDrops;
/// use u_grades::engine::Policy;
/// use u_grades::model::{Category, Student};
///
/// let policy = AdjustDrops::new().with_adjustment(1, "Homework", 2);
/// let s = Student::new(1, "Ada").with_category(Category::new("Homework", 1.0).with_drops(1));
/// let out = policy.apply(&s).unwrap();
/// assert_eq!(out[0].category("Homework").unwrap().drops, 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AdjustDrops {
    table: AdjustmentTable,
}

impl AdjustDrops {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_table(table: AdjustmentTable) -> Self {
        Self { table }
    }

    /// Adds `delta` drops to `category` for `student` (accumulates).
    pub fn with_adjustment(mut self, student: StudentKey, category: impl Into<String>, delta: i64) -> Self {
        *self
            .table
            .entry(student)
            .or_default()
            .entry(category.into())
            .or_default() += delta;
        self
    }
}

impl Policy for AdjustDrops {
    fn name(&self) -> &str {
        "AdjustDrops"
    }

    fn apply(&self, outcome: &Student) -> Result<Vec<Student>> {
        adjust(&self.table, outcome, |c, delta| {
            let drops = shift(c.drops as u64, delta);
            c.drops = usize::try_from(drops).unwrap_or(usize::MAX);
        })
    }
}

/// Adds a per-student delta to category slip-day budgets (floored at zero).
#[derive(Debug, Clone, Default)]
pub struct AdjustSlipDays {
    table: AdjustmentTable,
}

impl AdjustSlipDays {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_table(table: AdjustmentTable) -> Self {
        Self { table }
    }

    /// Adds `delta` slip days to `category` for `student` (accumulates).
    pub fn with_adjustment(mut self, student: StudentKey, category: impl Into<String>, delta: i64) -> Self {
        *self
            .table
            .entry(student)
            .or_default()
            .entry(category.into())
            .or_default() += delta;
        self
    }
}

impl Policy for AdjustSlipDays {
    fn name(&self) -> &str {
        "AdjustSlipDays"
    }

    fn apply(&self, outcome: &Student) -> Result<Vec<Student>> {
        adjust(&self.table, outcome, |c, delta| {
            let days = shift(u64::from(c.slip_days), delta);
            c.slip_days = u32::try_from(days).unwrap_or(u32::MAX);
        })
    }
}
