//! Signed lateness durations.

use std::ops::{Add, Sub};

const SECONDS_PER_HOUR: i64 = 60 * 60;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

/// Time between a deadline and a submission, in whole seconds.
///
/// Positive values are late. Lateness may become negative once slip days
/// or extensions are subtracted from it.
///
/// # Examples
///
/// ```
/// use u_grades::model::Lateness;
///
/// let late = Lateness::from_hours(25);
/// assert_eq!(late.days_late(), 2);
/// assert_eq!((late - Lateness::from_days(1)).days_late(), 1);
/// assert_eq!(Lateness::from_hours(-3).days_late(), 0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lateness(i64);

impl Lateness {
    /// On time.
    pub const ZERO: Lateness = Lateness(0);

    pub fn from_seconds(seconds: i64) -> Self {
        Self(seconds)
    }

    pub fn from_hours(hours: i64) -> Self {
        Self(hours.saturating_mul(SECONDS_PER_HOUR))
    }

    pub fn from_days(days: i64) -> Self {
        Self(days.saturating_mul(SECONDS_PER_DAY))
    }

    pub fn as_seconds(self) -> i64 {
        self.0
    }

    /// Returns `true` if strictly after the deadline.
    pub fn is_late(self) -> bool {
        self.0 > 0
    }

    /// Whole days late, rounded up. Zero or negative lateness is 0 days.
    pub fn days_late(self) -> u32 {
        if self.0 <= 0 {
            return 0;
        }
        let days = self.0 / SECONDS_PER_DAY + i64::from(self.0 % SECONDS_PER_DAY != 0);
        u32::try_from(days).unwrap_or(u32::MAX)
    }
}

impl Add for Lateness {
    type Output = Lateness;

    fn add(self, rhs: Lateness) -> Lateness {
        Lateness(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Lateness {
    type Output = Lateness;

    fn sub(self, rhs: Lateness) -> Lateness {
        Lateness(self.0.saturating_sub(rhs.0))
    }
}
