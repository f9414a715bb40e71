//! Custom Test Assertions
//!
//! Assertion helpers for domain types that give more meaningful failure
//! messages than plain `assert!`.

use core_kernel::{overlaps, Money};
use domain_history::HistoryItem;
use domain_policy::InsurancePolicy;

/// Asserts that two amounts are equal in value and currency
pub fn assert_money_eq(actual: &Money, expected: &Money) {
    assert_eq!(
        actual.currency(),
        expected.currency(),
        "Currency mismatch: actual={}, expected={}",
        actual.currency(),
        expected.currency()
    );
    assert_eq!(
        actual.amount(),
        expected.amount(),
        "Amount mismatch: actual={}, expected={}",
        actual,
        expected
    );
}

/// Asserts that no two policies of the same car share a day
pub fn assert_no_overlapping_policies(policies: &[InsurancePolicy]) {
    for (i, a) in policies.iter().enumerate() {
        for b in &policies[i + 1..] {
            if a.car_id != b.car_id {
                continue;
            }
            assert!(
                !overlaps(a.start_date, a.end_date, b.start_date, b.end_date),
                "Policies {} ({}..={}) and {} ({}..={}) overlap",
                a.id,
                a.start_date,
                a.end_date,
                b.id,
                b.start_date,
                b.end_date
            );
        }
    }
}

/// Asserts that history items are in non-decreasing date order
pub fn assert_history_chronological(items: &[HistoryItem]) {
    for pair in items.windows(2) {
        assert!(
            pair[0].date <= pair[1].date,
            "History out of order: {} ({}) before {} ({})",
            pair[0].date,
            pair[0].description,
            pair[1].date,
            pair[1].description
        );
    }
}

/// Asserts the event kinds of a history in order, by their serialized label
pub fn assert_history_kinds(items: &[HistoryItem], expected: &[&str]) {
    let actual: Vec<&str> = items.iter().map(|item| item.event_type.label()).collect();
    assert_eq!(actual, expected, "History event kinds differ");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::TestPolicyBuilder;
    use crate::fixtures::{date, MoneyFixtures};
    use core_kernel::CarId;

    #[test]
    fn test_money_eq_passes_for_equal_values() {
        assert_money_eq(&MoneyFixtures::usd_500(), &MoneyFixtures::usd_500());
    }

    #[test]
    #[should_panic(expected = "Currency mismatch")]
    fn test_money_eq_detects_currency() {
        assert_money_eq(&MoneyFixtures::usd_500(), &MoneyFixtures::ron_1200());
    }

    #[test]
    fn test_policies_of_different_cars_may_overlap() {
        let a = TestPolicyBuilder::new(CarId::new()).build();
        let b = TestPolicyBuilder::new(CarId::new()).build();
        assert_no_overlapping_policies(&[a, b]);
    }

    #[test]
    #[should_panic(expected = "overlap")]
    fn test_touching_policies_overlap() {
        let car_id = CarId::new();
        let a = TestPolicyBuilder::new(car_id)
            .with_period(date(2025, 1, 1), date(2025, 6, 30))
            .build();
        let b = TestPolicyBuilder::new(car_id)
            .with_period(date(2025, 6, 30), date(2025, 12, 31))
            .build();
        assert_no_overlapping_policies(&[a, b]);
    }
}
