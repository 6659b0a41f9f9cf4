//! Late-penalty multipliers.
//!
//! Non-branching: every outcome maps to exactly one successor in which
//! each late assignment carries one more [`Multiplier`](crate::model::Multiplier).
//! Run it after [`SlipDaySearch`](crate::search::SlipDaySearch) so that
//! lateness already reflects spent slip days.

mod config;
mod policy;

pub use config::{LateMultiplierConfig, DEFAULT_DESCRIPTION};
pub use policy::LateMultipliers;
