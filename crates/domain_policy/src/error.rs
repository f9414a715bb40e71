//! Policy domain errors

use chrono::NaiveDate;
use thiserror::Error;

use core_kernel::PortError;

/// Errors that can occur in the policy domain
#[derive(Debug, Error)]
pub enum PolicyError {
    /// The car the policy refers to is not registered
    #[error("Car not found: {0}")]
    CarNotFound(String),

    /// The new period shares at least one day with an existing policy of the car
    #[error("An overlapping policy already exists for car {car_id}")]
    OverlapConflict {
        car_id: String,
    },

    /// Start date is not strictly before end date
    #[error("Start date {start} must be before end date {end}")]
    InvalidRange {
        start: NaiveDate,
        end: NaiveDate,
    },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error(transparent)]
    Port(#[from] PortError),
}

impl PolicyError {
    pub fn car_not_found(id: impl std::fmt::Display) -> Self {
        PolicyError::CarNotFound(id.to_string())
    }
}
