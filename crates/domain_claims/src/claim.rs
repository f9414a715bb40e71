//! Claim records

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{CarId, ClaimId, Money};
use crate::error::ClaimError;

const MAX_DESCRIPTION_LENGTH: usize = 2000;

/// A claim filed for a car on a given date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    pub id: ClaimId,
    pub car_id: CarId,
    pub claim_date: NaiveDate,
    pub description: String,
    pub amount: Money,
    pub created_at: DateTime<Utc>,
}

impl Claim {
    pub fn register(car_id: CarId, request: NewClaim) -> Self {
        Self {
            id: ClaimId::new(),
            car_id,
            claim_date: request.claim_date,
            description: request.description,
            amount: request.amount,
            created_at: Utc::now(),
        }
    }
}

/// Request to register a claim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClaim {
    pub claim_date: NaiveDate,
    pub description: String,
    pub amount: Money,
}

impl NewClaim {
    /// Validates a claim request
    ///
    /// Zero amounts are accepted; negative ones are not.
    pub fn new(
        claim_date: NaiveDate,
        description: impl Into<String>,
        amount: Money,
    ) -> Result<Self, ClaimError> {
        let description = description.into().trim().to_string();
        if description.is_empty() {
            return Err(ClaimError::Validation("Description must not be empty".to_string()));
        }
        if description.chars().count() > MAX_DESCRIPTION_LENGTH {
            return Err(ClaimError::Validation(format!(
                "Description must be at most {} characters",
                MAX_DESCRIPTION_LENGTH
            )));
        }
        if amount.is_negative() {
            return Err(ClaimError::InvalidAmount(format!("{} is negative", amount)));
        }

        Ok(Self {
            claim_date,
            description,
            amount,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::Currency;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_negative_amount_is_rejected() {
        let result = NewClaim::new(
            date(2025, 6, 1),
            "Rear bumper",
            Money::new(dec!(-1), Currency::USD),
        );
        assert!(matches!(result, Err(ClaimError::InvalidAmount(_))));
    }

    #[test]
    fn test_zero_amount_is_accepted() {
        let result = NewClaim::new(date(2025, 6, 1), "Inspection", Money::zero(Currency::EUR));
        assert!(result.is_ok());
    }

    #[test]
    fn test_blank_description_is_rejected() {
        let result = NewClaim::new(date(2025, 6, 1), " ", Money::new(dec!(10), Currency::USD));
        assert!(matches!(result, Err(ClaimError::Validation(_))));
    }
}
