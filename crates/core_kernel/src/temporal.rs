//! Calendar date handling
//!
//! Policies and claims are dated with plain calendar days (no time of day, no
//! timezone). Ranges are inclusive at both ends: a policy running
//! `2025-01-01..=2025-12-31` covers both the first and the last day.
//!
//! "Today" is always read through a [`Clock`] so that background jobs can be
//! driven deterministically in tests.

use chrono::{Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use thiserror::Error;

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid period: start {start} must not be after end {end}")]
    InvalidPeriod {
        start: NaiveDate,
        end: NaiveDate,
    },
}

/// Returns true if the inclusive ranges `[start_a, end_a]` and `[start_b, end_b]` intersect.
///
/// Ranges that only touch at a boundary day overlap: a range ending on the
/// 30th and one starting on the 30th share that day.
///
/// Both ranges must satisfy `start <= end`; this is not checked here.
pub fn overlaps(start_a: NaiveDate, end_a: NaiveDate, start_b: NaiveDate, end_b: NaiveDate) -> bool {
    start_a <= end_b && end_a >= start_b
}

/// An inclusive calendar date range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a range, rejecting `start > end`
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, TemporalError> {
        if start > end {
            return Err(TemporalError::InvalidPeriod { start, end });
        }
        Ok(Self { start, end })
    }

    /// A range covering exactly one day
    pub fn single_day(date: NaiveDate) -> Self {
        Self { start: date, end: date }
    }

    /// Returns true if `date` falls within the range, endpoints included
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.overlaps(&Self::single_day(date))
    }

    /// Returns true if the two ranges share at least one day
    pub fn overlaps(&self, other: &DateRange) -> bool {
        overlaps(self.start, self.end, other.start, other.end)
    }

    /// Number of days covered, both endpoints counted
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// Source of the current UTC calendar date
pub trait Clock: Send + Sync {
    /// Today's date in UTC
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Clock pinned to a settable date
#[derive(Debug)]
pub struct FixedClock {
    today: Mutex<NaiveDate>,
}

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self { today: Mutex::new(today) }
    }

    /// Moves the clock to another date
    pub fn set(&self, date: NaiveDate) {
        let mut today = self.today.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *today = date;
    }

    /// Moves the clock forward by whole days
    pub fn advance_days(&self, days: u64) {
        let mut today = self.today.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(next) = today.checked_add_days(Days::new(days)) {
            *today = next;
        }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        *self.today.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_boundary_touching_ranges_overlap() {
        assert!(overlaps(date(2025, 3, 1), date(2025, 9, 30), date(2025, 9, 30), date(2025, 10, 31)));
        assert!(!overlaps(date(2025, 3, 1), date(2025, 9, 30), date(2025, 10, 1), date(2025, 10, 31)));
    }

    #[test]
    fn test_range_rejects_reversed_bounds() {
        let result = DateRange::new(date(2025, 2, 1), date(2025, 1, 1));
        assert!(matches!(result, Err(TemporalError::InvalidPeriod { .. })));
    }

    #[test]
    fn test_single_day_range_is_valid() {
        let range = DateRange::new(date(2025, 5, 5), date(2025, 5, 5)).unwrap();
        assert_eq!(range.days(), 1);
        assert!(range.contains(date(2025, 5, 5)));
    }

    #[test]
    fn test_contains_includes_endpoints() {
        let range = DateRange::new(date(2025, 1, 1), date(2025, 1, 31)).unwrap();
        assert!(range.contains(date(2025, 1, 1)));
        assert!(range.contains(date(2025, 1, 31)));
        assert!(!range.contains(date(2024, 12, 31)));
        assert!(!range.contains(date(2025, 2, 1)));
    }

    #[test]
    fn test_fixed_clock_advances() {
        let clock = FixedClock::new(date(2025, 3, 1));
        assert_eq!(clock.today(), date(2025, 3, 1));

        clock.advance_days(2);
        assert_eq!(clock.today(), date(2025, 3, 3));
    }
}
