//! Property-Based Test Generators
//!
//! Proptest strategies for the car insurance domain.

use chrono::{Days, NaiveDate};
use core_kernel::{Currency, Money};
use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::fixtures::date;

/// Strategy for supported currencies
pub fn currency_strategy() -> impl Strategy<Value = Currency> {
    prop_oneof![
        Just(Currency::USD),
        Just(Currency::EUR),
        Just(Currency::GBP),
        Just(Currency::JPY),
        Just(Currency::CHF),
        Just(Currency::RON),
        Just(Currency::CAD),
        Just(Currency::AUD),
    ]
}

/// Dates within ten years from 2020-01-01
pub fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0u64..3650).prop_map(|offset| date(2020, 1, 1) + Days::new(offset))
}

/// `(start, end)` pairs with `start < end`, as accepted for new policies
pub fn policy_period_strategy() -> impl Strategy<Value = (NaiveDate, NaiveDate)> {
    (date_strategy(), 1u64..730).prop_map(|(start, length)| (start, start + Days::new(length)))
}

/// Claim amounts from zero to one million, two decimal places
pub fn claim_amount_strategy() -> impl Strategy<Value = Money> {
    (0i64..100_000_000, currency_strategy())
        .prop_map(|(cents, currency)| Money::new(Decimal::new(cents, 2), currency))
}

pub fn provider_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Allianz".to_string()),
        Just("Groupama".to_string()),
        Just("Generali".to_string()),
        "[A-Z][a-z]{2,20}",
    ]
}
