//! Score aggregation: one outcome to one report.
//!
//! # Algorithm
//!
//! 1. Per assignment: `raw = score / max_score`; `adjusted` is the override
//!    or `raw × Π multipliers`; `weighted = adjusted × weight`.
//! 2. Per category, over non-dropped members only:
//!    `raw = Σ weighted / Σ weight` (0 when the denominator is 0);
//!    `adjusted` is the category override or `raw`;
//!    `weighted = adjusted × category weight`.
//! 3. `total = Σ category weighted`.
//!
//! Single pass, no side effects, no rounding.

use std::collections::BTreeMap;

use super::types::{GradeReport, ReportAssignment, ReportCategory};
use crate::model::{Assignment, Category, Student};

/// Computes the grade report for one outcome.
///
/// # Examples
///
/// ```
/// use u_grades::model::{Assignment, Category, Student, Submission};
/// use u_grades::report::aggregate;
///
/// let s = Student::new(1, "Ada")
///     .with_category(Category::new("Homework", 1.0))
///     .with_assignment(Assignment::new("hw1", "Homework", 100.0).with_submission(Submission::new(80.0)))
///     .with_assignment(Assignment::new("hw2", "Homework", 100.0).with_submission(Submission::new(100.0)));
///
/// let report = aggregate(&s);
/// assert!((report.total_score - 0.9).abs() < 1e-12);
/// ```
pub fn aggregate(student: &Student) -> GradeReport {
    let assignments: BTreeMap<String, ReportAssignment> = student
        .assignments()
        .map(|a| (a.name.clone(), assess_assignment(a)))
        .collect();

    let categories: BTreeMap<String, ReportCategory> = student
        .categories()
        .map(|c| (c.name.clone(), assess_category(student, c, &assignments)))
        .collect();

    let total_score = categories.values().map(|c| c.weighted).sum();

    GradeReport {
        student: student.clone(),
        total_score,
        categories,
        assignments,
    }
}

fn assess_assignment(assignment: &Assignment) -> ReportAssignment {
    let submission = &assignment.submission;
    let raw = if assignment.max_score == 0.0 {
        0.0
    } else {
        submission.score / assignment.max_score
    };

    let mut comments = submission.comments.clone();
    let adjusted = match submission.override_score {
        Some(score) => score,
        None => submission.multipliers.iter().fold(raw, |acc, m| {
            comments.push(format!("{}: x{}", m.description, m.factor));
            acc * m.factor
        }),
    };

    ReportAssignment {
        raw,
        adjusted,
        weighted: adjusted * assignment.weight,
        comments,
    }
}

fn assess_category(
    student: &Student,
    category: &Category,
    assignments: &BTreeMap<String, ReportAssignment>,
) -> ReportCategory {
    let (numerator, denominator) = student
        .assignments_in(&category.name)
        .filter(|a| !a.submission.dropped)
        .fold((0.0, 0.0), |(num, den), a| {
            let term = assignments.get(&a.name).map_or(0.0, |r| r.weighted);
            (num + term, den + a.weight)
        });

    let raw = if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    };
    let adjusted = category.override_score.unwrap_or(raw);

    ReportCategory {
        raw,
        adjusted,
        weighted: adjusted * category.weight,
        comments: category.comments.clone(),
    }
}

impl Student {
    /// Computes this outcome's grade report. See [`aggregate`].
    pub fn grade_report(&self) -> GradeReport {
        aggregate(self)
    }
}
