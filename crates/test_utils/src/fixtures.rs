//! Pre-built Test Fixtures
//!
//! Ready-to-use values for the common entities. The calendar is pinned to
//! 2025 so tests never depend on the real date.

use chrono::NaiveDate;
use core_kernel::{Currency, Money};
use rust_decimal_macros::dec;

/// Builds a date, panicking on an impossible one
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| panic!("invalid fixture date {}-{}-{}", year, month, day))
}

/// Fixture for temporal test data
pub struct DateFixtures;

impl DateFixtures {
    /// First day of the standard policy year
    pub fn policy_start() -> NaiveDate {
        date(2025, 1, 1)
    }

    /// Last covered day of the standard policy year
    pub fn policy_end() -> NaiveDate {
        date(2025, 12, 31)
    }

    pub fn mid_year() -> NaiveDate {
        date(2025, 6, 15)
    }

    pub fn before_policy() -> NaiveDate {
        date(2024, 12, 31)
    }

    pub fn after_policy() -> NaiveDate {
        date(2026, 1, 1)
    }
}

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// A typical windshield claim
    pub fn usd_500() -> Money {
        Money::new(dec!(500.00), Currency::USD)
    }

    pub fn usd_zero() -> Money {
        Money::zero(Currency::USD)
    }

    pub fn ron_1200() -> Money {
        Money::new(dec!(1200.00), Currency::RON)
    }

    /// Rejected by claim validation
    pub fn usd_negative() -> Money {
        Money::new(dec!(-50.00), Currency::USD)
    }
}

/// Fixture for string test data
pub struct StringFixtures;

impl StringFixtures {
    pub fn vin() -> &'static str {
        "WVWZZZ1JZ3W386752"
    }

    pub fn other_vin() -> &'static str {
        "UU1HSDAG512345678"
    }

    pub fn make() -> &'static str {
        "Dacia"
    }

    pub fn model() -> &'static str {
        "Logan"
    }

    pub fn owner_name() -> &'static str {
        "Ana Popescu"
    }

    pub fn owner_email() -> &'static str {
        "ana.popescu@example.com"
    }

    pub fn provider() -> &'static str {
        "Allianz"
    }

    pub fn claim_description() -> &'static str {
        "Rear bumper damage"
    }
}
