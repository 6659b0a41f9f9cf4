//! Outcome-branching grade computation.
//!
//! Grading rules such as "drop the lowest N per category" or "spend S slip
//! days across late work" admit many legal applications. Rather than
//! committing to one early, this crate enumerates every legal application
//! as a distinct candidate *outcome* and computes a grade for each:
//!
//! - **Model** ([`model`]): students, categories, assignments, submissions
//!   and multipliers as immutable, structurally shared snapshots.
//! - **Engine** ([`engine`]): the [`Policy`](engine::Policy) contract (one
//!   outcome in, an ordered list of successor outcomes out), the
//!   [`Roster`](engine::Roster) that applies policies to every student, and
//!   the [`Pipeline`](engine::Pipeline) that chains them.
//! - **Search** ([`search`]): exhaustive, non-redundant drop and slip-day
//!   enumeration.
//! - **Late multipliers** ([`late`]): deterministic sliding-scale penalties.
//! - **Adjustments** ([`adjust`]): per-student drop and slip-day changes.
//! - **Report** ([`report`]): the weighted-average fold from one outcome to
//!   one [`GradeReport`](report::GradeReport).
//!
//! # Example
//!
//! ```
//! use u_grades::engine::{Pipeline, Roster};
//! use u_grades::late::{LateMultiplierConfig, LateMultipliers};
//! use u_grades::model::{Assignment, Category, Lateness, Student, Submission};
//! use u_grades::search::{DropSearch, SlipDaySearch};
//!
//! let student = Student::new(1, "Ada")
//!     .with_category(Category::new("Homework", 1.0).with_drops(1).with_slip_days(1).with_late_multiplier(true))
//!     .with_assignment(Assignment::new("hw1", "Homework", 10.0).with_group(1)
//!         .with_submission(Submission::new(10.0).with_lateness(Lateness::from_hours(20))))
//!     .with_assignment(Assignment::new("hw2", "Homework", 10.0).with_group(2)
//!         .with_submission(Submission::new(6.0)));
//!
//! let pipeline = Pipeline::new()
//!     .with_policy(SlipDaySearch::new())
//!     .with_policy(LateMultipliers::try_new(LateMultiplierConfig::default().with_scale(vec![0.5]))?)
//!     .with_policy(DropSearch::new());
//!
//! let roster = pipeline.run(&Roster::from_students([student]))?;
//! // 2 slip-day allocations × 2 drop choices.
//! assert_eq!(roster.outcome_count(1), 4);
//!
//! let best = roster.get(1).unwrap().iter()
//!     .map(|o| o.grade_report().total_score)
//!     .fold(f64::MIN, f64::max);
//! assert!((best - 1.0).abs() < 1e-12);
//! # Ok::<(), u_grades::GradeError>(())
//! ```
//!
//! # Features
//!
//! - `parallel` (default): apply policies and aggregate reports with rayon.
//! - `serde`: `Serialize`/`Deserialize` for model and report types.

pub mod adjust;
pub mod engine;
pub mod error;
pub mod late;
pub mod model;
pub mod report;
pub mod search;

pub use error::{GradeError, Result};
