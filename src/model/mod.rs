//! Grade domain model.
//!
//! Plain data: [`Student`] snapshots own [`Category`] and [`Assignment`]
//! records, each assignment embedding its [`Submission`]. Nothing here
//! carries behavior beyond construction, lookup, copy-on-write updates,
//! and validation.

mod assignment;
mod category;
mod lateness;
mod student;
mod submission;

pub use assignment::{Assignment, GroupId};
pub use category::Category;
pub use lateness::Lateness;
pub use student::Student;
pub use submission::{Multiplier, Submission};
