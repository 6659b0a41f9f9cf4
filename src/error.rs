//! Error types.
//!
//! Three classes of failure exist in the engine:
//!
//! - **Configuration** errors are detected by `validate()` calls before a
//!   pipeline runs (bad weights, dangling references, impossible drops).
//! - **Resource exhaustion** is reported when an enumeration would exceed
//!   a configured outcome ceiling.
//! - **Infeasible branches** are *not* errors: a policy returns zero
//!   successor outcomes and the branch is pruned.

use thiserror::Error;

/// Errors raised by validation, policies, and the pipeline.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradeError {
    /// A configuration struct failed validation.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A category or assignment weight is negative or non-finite.
    #[error("invalid weight {weight} on {entity} '{name}'")]
    InvalidWeight {
        entity: &'static str,
        name: String,
        weight: f64,
    },

    /// An assignment's maximum score is not strictly positive.
    #[error("assignment '{assignment}' has non-positive max score {max_score}")]
    InvalidMaxScore { assignment: String, max_score: f64 },

    /// An assignment names a category the student does not have.
    #[error("student {student}: assignment '{assignment}' references unknown category '{category}'")]
    UnknownCategory {
        student: u64,
        assignment: String,
        category: String,
    },

    /// A category asks to drop more assignments than it contains.
    #[error("student {student}: category '{category}' drops {drops} of {available} assignments")]
    TooManyDrops {
        student: u64,
        category: String,
        drops: usize,
        available: usize,
    },

    /// A lateness group has members in more than one category.
    #[error("student {student}: lateness group {group} spans multiple categories")]
    GroupSpansCategories { student: u64, group: u32 },

    /// An adjustment policy names a category the student does not have.
    #[error("student {student}: adjustment targets unknown category '{category}'")]
    AdjustUnknownCategory { student: u64, category: String },

    /// Enumeration would produce more outcomes than allowed.
    #[error("student {key}: {count} outcomes exceed the limit of {limit}")]
    OutcomeLimit { key: u64, count: usize, limit: usize },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GradeError>;
