//! Unit tests for the temporal module
//!
//! Tests cover the inclusive overlap rule, DateRange, and the clocks.

use chrono::{Days, NaiveDate};
use core_kernel::{overlaps, Clock, DateRange, FixedClock, SystemClock, TemporalError};
use proptest::prelude::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

mod overlap_rule {
    use super::*;

    #[test]
    fn test_identical_ranges_overlap() {
        assert!(overlaps(date(2025, 1, 1), date(2025, 12, 31), date(2025, 1, 1), date(2025, 12, 31)));
    }

    #[test]
    fn test_end_equal_to_next_start_overlaps() {
        assert!(overlaps(date(2025, 1, 1), date(2025, 6, 30), date(2025, 6, 30), date(2025, 12, 31)));
    }

    #[test]
    fn test_adjacent_days_do_not_overlap() {
        assert!(!overlaps(date(2025, 1, 1), date(2025, 6, 30), date(2025, 7, 1), date(2025, 12, 31)));
    }

    #[test]
    fn test_partial_overlap() {
        assert!(overlaps(date(2025, 3, 1), date(2025, 9, 30), date(2025, 9, 15), date(2025, 10, 15)));
    }

    #[test]
    fn test_containment_overlaps() {
        assert!(overlaps(date(2025, 1, 1), date(2025, 12, 31), date(2025, 5, 1), date(2025, 5, 2)));
        assert!(overlaps(date(2025, 5, 1), date(2025, 5, 2), date(2025, 1, 1), date(2025, 12, 31)));
    }

    #[test]
    fn test_range_entirely_before() {
        assert!(!overlaps(date(2024, 1, 1), date(2024, 12, 31), date(2025, 1, 1), date(2025, 1, 31)));
    }
}

mod date_range {
    use super::*;

    #[test]
    fn test_new_rejects_start_after_end() {
        let result = DateRange::new(date(2025, 12, 31), date(2025, 1, 1));
        assert_eq!(
            result,
            Err(TemporalError::InvalidPeriod {
                start: date(2025, 12, 31),
                end: date(2025, 1, 1),
            })
        );
    }

    #[test]
    fn test_days_counts_both_endpoints() {
        let range = DateRange::new(date(2025, 1, 1), date(2025, 1, 31)).unwrap();
        assert_eq!(range.days(), 31);
    }

    #[test]
    fn test_overlaps_method_matches_free_function() {
        let a = DateRange::new(date(2025, 3, 1), date(2025, 9, 30)).unwrap();
        let b = DateRange::new(date(2025, 10, 1), date(2025, 10, 31)).unwrap();
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }
}

mod clocks {
    use super::*;

    #[test]
    fn test_system_clock_reports_utc_date() {
        let before = chrono::Utc::now().date_naive();
        let today = SystemClock.today();
        let after = chrono::Utc::now().date_naive();
        assert!(before <= today && today <= after);
    }

    #[test]
    fn test_fixed_clock_can_be_moved() {
        let clock = FixedClock::new(date(2025, 1, 1));
        clock.set(date(2025, 6, 1));
        assert_eq!(clock.today(), date(2025, 6, 1));
        clock.advance_days(30);
        assert_eq!(clock.today(), date(2025, 7, 1));
    }
}

fn range_strategy() -> impl Strategy<Value = (NaiveDate, NaiveDate)> {
    (0u64..3650, 0u64..400).prop_map(|(offset, length)| {
        let start = date(2020, 1, 1) + Days::new(offset);
        (start, start + Days::new(length))
    })
}

proptest! {
    #[test]
    fn every_range_overlaps_itself((start, end) in range_strategy()) {
        prop_assert!(overlaps(start, end, start, end));
    }

    #[test]
    fn overlap_is_symmetric((s1, e1) in range_strategy(), (s2, e2) in range_strategy()) {
        prop_assert_eq!(overlaps(s1, e1, s2, e2), overlaps(s2, e2, s1, e1));
    }

    #[test]
    fn touching_ranges_overlap((s1, e1) in range_strategy(), length in 0u64..400) {
        let s2 = e1;
        let e2 = s2 + Days::new(length);
        prop_assert!(overlaps(s1, e1, s2, e2));
    }

    #[test]
    fn strictly_separated_ranges_do_not_overlap((s1, e1) in range_strategy(), gap in 1u64..400, length in 0u64..400) {
        let s2 = e1 + Days::new(gap);
        let e2 = s2 + Days::new(length);
        prop_assert!(!overlaps(s1, e1, s2, e2));
    }

    #[test]
    fn contains_matches_single_day_overlap((start, end) in range_strategy(), offset in 0u64..4400) {
        let range = DateRange::new(start, end).unwrap();
        let day = date(2020, 1, 1) + Days::new(offset);
        prop_assert_eq!(range.contains(day), start <= day && day <= end);
    }
}
