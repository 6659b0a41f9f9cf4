//! Outcome-branching policy engine.
//!
//! A [`Policy`] maps one outcome (a [`Student`](crate::model::Student)
//! snapshot) to an ordered, possibly empty list of successor outcomes. A
//! [`Roster`] applies a policy to every outcome of every student and
//! concatenates the results per student; a [`Pipeline`] chains policies.
//!
//! Per-student outcome counts after a step equal the sum of branch counts
//! returned for each prior outcome, so counts multiply across branching
//! policies. [`PipelineConfig::max_outcomes`] bounds that growth.

mod config;
mod roster;
mod runner;
mod types;

pub use config::PipelineConfig;
pub use roster::{Roster, StudentKey};
pub use runner::Pipeline;
pub use types::{from_fn, FnPolicy, Policy};
