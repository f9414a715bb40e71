//! Car owners

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::OwnerId;
use crate::error::VehicleError;

/// A person who owns one or more cars
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub id: OwnerId,
    pub name: String,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Owner {
    pub fn register(request: NewOwner) -> Self {
        Self {
            id: OwnerId::new(),
            name: request.name,
            email: request.email,
            created_at: Utc::now(),
        }
    }
}

/// Request to register an owner
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewOwner {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(email)]
    pub email: Option<String>,
}

impl NewOwner {
    /// Trims the inputs and validates them
    pub fn new(name: impl Into<String>, email: Option<String>) -> Result<Self, VehicleError> {
        let request = Self {
            name: name.into().trim().to_string(),
            email: email
                .map(|e| e.trim().to_string())
                .filter(|e| !e.is_empty()),
        };
        request
            .validate()
            .map_err(|e| VehicleError::Validation(e.to_string()))?;
        Ok(request)
    }
}
