//! Insurance policy records

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{CarId, DateRange, PolicyId};
use crate::error::PolicyError;

const MAX_PROVIDER_LENGTH: usize = 200;

/// A policy covering one car over an inclusive date range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsurancePolicy {
    pub id: PolicyId,
    pub car_id: CarId,
    pub provider: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Set once the expiration scan has reported this policy
    pub notified: bool,
    pub created_at: DateTime<Utc>,
}

impl InsurancePolicy {
    /// Builds a pending policy for `car_id` from a validated request
    pub fn register(car_id: CarId, request: NewPolicy) -> Self {
        Self {
            id: PolicyId::new(),
            car_id,
            provider: request.provider,
            start_date: request.start_date,
            end_date: request.end_date,
            notified: false,
            created_at: Utc::now(),
        }
    }

    pub fn period(&self) -> DateRange {
        DateRange {
            start: self.start_date,
            end: self.end_date,
        }
    }

    /// Returns true if `date` lies within the policy period, endpoints included
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

/// Request to register a policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPolicy {
    pub provider: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl NewPolicy {
    /// Validates a registration request
    ///
    /// A single-day policy (`start == end`) is rejected at this boundary even
    /// though the stored model allows it.
    pub fn new(
        provider: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Self, PolicyError> {
        let provider = provider.into().trim().to_string();
        if provider.is_empty() {
            return Err(PolicyError::Validation("Provider must not be empty".to_string()));
        }
        if provider.chars().count() > MAX_PROVIDER_LENGTH {
            return Err(PolicyError::Validation(format!(
                "Provider must be at most {} characters",
                MAX_PROVIDER_LENGTH
            )));
        }
        if start_date >= end_date {
            return Err(PolicyError::InvalidRange {
                start: start_date,
                end: end_date,
            });
        }

        Ok(Self {
            provider,
            start_date,
            end_date,
        })
    }

    pub fn period(&self) -> DateRange {
        DateRange {
            start: self.start_date,
            end: self.end_date,
        }
    }
}
