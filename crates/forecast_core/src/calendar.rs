//! Month-granularity calendar arithmetic.
//!
//! The forecast never needs day-of-month resolution, so this module skips
//! date libraries entirely and represents a month as a packed
//! `year * 12 + (month - 1)` ordinal, which makes `offset`/`before`/`format`
//! all O(1) integer operations with no allocation or calendar-library
//! dependency at all. Month labels are lexicographically comparable by
//! construction: fixed `YYYY-MM` width.

use std::cmp::Ordering;
use std::fmt;

use crate::error::ConfigError;

/// A calendar month, stored as an ordinal so that offset/comparison are
/// cheap integer operations. `Ord`/`PartialOrd` follow chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Month {
    ordinal: i32,
}

impl Month {
    /// Construct directly from a (year, 1..=12) pair.
    pub fn new(year: i32, month: u32) -> Self {
        debug_assert!((1..=12).contains(&month));
        Month {
            ordinal: year * 12 + (month as i32 - 1),
        }
    }

    fn from_ordinal(ordinal: i32) -> Self {
        Month { ordinal }
    }

    pub fn year(self) -> i32 {
        self.ordinal.div_euclid(12)
    }

    /// 1..=12.
    pub fn month_of(self) -> u32 {
        self.ordinal.rem_euclid(12) as u32 + 1
    }

    /// Parse a `YYYY-MM` label.
    pub fn parse(label: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidMonthLabel(label.to_string());

        if label.len() != 7 || label.as_bytes()[4] != b'-' {
            return Err(invalid());
        }
        let (year_part, rest) = label.split_at(4);
        let month_part = &rest[1..];
        let year: i32 = year_part.parse().map_err(|_| invalid())?;
        let month: u32 = month_part.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }
        Ok(Month::new(year, month))
    }

    /// Format back to `YYYY-MM`.
    pub fn format(self) -> String {
        format!("{:04}-{:02}", self.year(), self.month_of())
    }

    /// Offset by `k` calendar months; `k` may be negative.
    pub fn offset(self, k: i32) -> Self {
        Month::from_ordinal(self.ordinal + k)
    }

    /// Like `offset`, but returns `None` instead of overflowing on an
    /// out-of-range ordinal. Used by the forecast loop's month-by-month
    /// walk, the one place an unbounded `k` (the loop itself, not a fixed
    /// calendar expression) could in principle run past `i32`'s range.
    pub fn checked_offset(self, k: i32) -> Option<Self> {
        self.ordinal.checked_add(k).map(Month::from_ordinal)
    }

    /// Strict "a is before b".
    pub fn before(self, other: Month) -> bool {
        self.ordinal < other.ordinal
    }

    /// Number of whole months from `self` to `other` (can be negative).
    pub fn months_until(self, other: Month) -> i32 {
        other.ordinal - self.ordinal
    }
}

impl PartialOrd for Month {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Month {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ordinal.cmp(&other.ordinal)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format())
    }
}

impl serde::Serialize for Month {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.format())
    }
}

impl<'de> serde::Deserialize<'de> for Month {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Month::parse(&s).map_err(serde::de::Error::custom)
    }
}
