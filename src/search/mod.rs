//! Combinatorial outcome searches.
//!
//! Two branching policies enumerate every legal application of rules that
//! admit more than one reading:
//!
//! - [`DropSearch`]: which assignments each category drops.
//! - [`SlipDaySearch`]: how each category's slip days are spent across its
//!   late lateness groups.
//!
//! Both build per-category choice sets and cross them with
//! [`cross_product`], so a category with no legal choice prunes the whole
//! outcome. Both check the size of the product before materializing it.

mod combinatorics;
mod drops;
mod slip_days;

pub use combinatorics::{binomial, combinations, cross_product, product_len};
pub use drops::DropSearch;
pub use slip_days::{allocation_count, slip_allocations, SlipDaySearch};

use crate::error::{GradeError, Result};

/// Fails if a search of `count` outcomes for student `key` exceeds the
/// tighter of the search's own ceiling and the caller's.
pub(crate) fn check_ceiling(
    key: u64,
    count: usize,
    own: Option<usize>,
    caller: Option<usize>,
) -> Result<()> {
    let limit = match (own, caller) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    };
    match limit {
        Some(limit) if count > limit => Err(GradeError::OutcomeLimit { key, count, limit }),
        _ => Ok(()),
    }
}
