//! Integer month arithmetic.
//!
//! Unlike the calendar-date arithmetic a market simulation needs, every time
//! value the engine works with is month-grained, so `Month` is plain `i32`
//! arithmetic rather than a `jiff::civil::Date` wrapper: no day-of-month, no
//! leap-day handling, no `Span` normalisation. This mirrors the teacher
//! crate's own preference for direct integer arithmetic over generic date
//! machinery in a hot loop, just pushed one step further since day precision
//! is never needed here at all.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A month, represented as an offset from January 1900.
///
/// `Month(0)` is January 1900; `Month(12)` is January 1901. Negative values
/// represent months before 1900. Two months compare and subtract like plain
/// integers because that is exactly what they are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Month(pub i32);

const EPOCH_YEAR: i32 = 1900;

impl Month {
    /// Construct a month from a calendar year and a zero-based month index
    /// (`0` = January, `11` = December).
    #[must_use]
    pub fn new(year: i32, month_index: i32) -> Self {
        Month((year - EPOCH_YEAR) * 12 + month_index)
    }

    /// The calendar year this month falls in.
    #[must_use]
    pub fn year(self) -> i32 {
        EPOCH_YEAR + self.0.div_euclid(12)
    }

    /// The zero-based month index within the year (`0..=11`).
    #[must_use]
    pub fn month_index(self) -> i32 {
        self.0.rem_euclid(12)
    }

    /// Add an integer number of months (may be negative).
    #[must_use]
    pub fn add_months(self, n: i32) -> Self {
        Month(self.0 + n)
    }

    /// The signed number of months between `self` and `other` (`other - self`).
    #[must_use]
    pub fn months_until(self, other: Month) -> i32 {
        other.0 - self.0
    }

    /// Format as `YYYY-MM`.
    #[must_use]
    pub fn format(self) -> String {
        format!("{:04}-{:02}", self.year(), self.month_index() + 1)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format())
    }
}

/// A source of "now", injected so callers and tests can pin the projection
/// start deterministically instead of reading the system clock inline.
pub trait Clock {
    fn now(&self) -> Month;
}

/// A clock that always returns a fixed month, used by tests and by any
/// caller that has already resolved wall-clock time outside the engine.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Month);

impl Clock for FixedClock {
    fn now(&self) -> Month {
        self.0
    }
}
