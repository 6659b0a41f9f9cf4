//! Shared fixtures for integration tests.

#![allow(dead_code)]

use tracing_subscriber::{fmt, EnvFilter};
use u_grades::model::{Assignment, Category, Lateness, Student, Submission};

/// Installs a test-writer subscriber once per test binary.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let _ = fmt().with_env_filter(filter).with_test_writer().try_init();
}

pub fn submission(score: f64, late_hours: i64) -> Submission {
    Submission::new(score).with_lateness(Lateness::from_hours(late_hours))
}

/// A course with homework (drops, slip days, sliding scale) and exams.
pub fn course_student(id: u64) -> Student {
    Student::new(id, format!("student-{id}"))
        .with_category(
            Category::new("Homework", 0.4)
                .with_drops(1)
                .with_slip_days(2)
                .with_late_multiplier(true),
        )
        .with_category(Category::new("Exams", 0.6))
        .with_assignment(
            Assignment::new("hw1", "Homework", 10.0)
                .with_group(1)
                .with_submission(submission(10.0, 30)),
        )
        .with_assignment(
            Assignment::new("hw2", "Homework", 10.0)
                .with_group(2)
                .with_submission(submission(4.0, 0)),
        )
        .with_assignment(
            Assignment::new("hw3", "Homework", 10.0)
                .with_group(3)
                .with_submission(submission(9.0, 2)),
        )
        .with_assignment(
            Assignment::new("mt", "Exams", 100.0)
                .with_weight(1.0)
                .with_submission(submission(70.0, 0)),
        )
        .with_assignment(
            Assignment::new("final", "Exams", 100.0)
                .with_weight(2.0)
                .with_submission(submission(85.0, 0)),
        )
}
