//! Grade aggregation.
//!
//! [`aggregate`] folds one outcome into an immutable [`GradeReport`] with
//! per-assignment, per-category, and total scores plus audit comments.

mod aggregate;
mod types;

pub use aggregate::aggregate;
pub use types::{GradeReport, ReportAssignment, ReportCategory};
