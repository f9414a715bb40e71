//! Car aggregate and VIN value type

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{CarId, OwnerId};
use crate::error::VehicleError;

const MAX_VIN_LENGTH: usize = 32;
const EARLIEST_MODEL_YEAR: i32 = 1886;

/// Vehicle identification number
///
/// Stored as entered (trimmed) but compared case-insensitively, so
/// `"wvw123"` and `"WVW123"` are the same vehicle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Vin(String);

impl Vin {
    /// Parses a VIN, rejecting blanks, inner whitespace, and overlong values
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, VehicleError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(VehicleError::InvalidVin("VIN must not be empty".to_string()));
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(VehicleError::InvalidVin(format!("VIN '{}' contains whitespace", trimmed)));
        }
        if trimmed.chars().count() > MAX_VIN_LENGTH {
            return Err(VehicleError::InvalidVin(format!(
                "VIN '{}' exceeds {} characters",
                trimmed, MAX_VIN_LENGTH
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Uppercased form used for uniqueness lookups
    pub fn normalized(&self) -> String {
        self.0.to_uppercase()
    }
}

impl PartialEq for Vin {
    fn eq(&self, other: &Self) -> bool {
        self.normalized() == other.normalized()
    }
}

impl Eq for Vin {}

impl fmt::Display for Vin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Vin {
    type Error = VehicleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Vin::parse(value)
    }
}

impl From<Vin> for String {
    fn from(vin: Vin) -> String {
        vin.0
    }
}

/// A registered car
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Car {
    pub id: CarId,
    pub vin: Vin,
    pub make: Option<String>,
    pub model: Option<String>,
    pub year_of_manufacture: i32,
    pub owner_id: OwnerId,
    pub created_at: DateTime<Utc>,
}

impl Car {
    /// Builds the car record for a validated registration request
    pub fn register(request: NewCar) -> Self {
        Self {
            id: CarId::new(),
            vin: request.vin,
            make: request.make,
            model: request.model,
            year_of_manufacture: request.year_of_manufacture,
            owner_id: request.owner_id,
            created_at: Utc::now(),
        }
    }
}

/// Request to register a car
#[derive(Debug, Clone)]
pub struct NewCar {
    pub vin: Vin,
    pub make: Option<String>,
    pub model: Option<String>,
    pub year_of_manufacture: i32,
    pub owner_id: OwnerId,
}

impl NewCar {
    /// Validates and builds a registration request
    ///
    /// Blank make/model are treated as absent. The model year must lie
    /// between the first automobile and next calendar year.
    pub fn new(
        vin: Vin,
        make: Option<String>,
        model: Option<String>,
        year_of_manufacture: i32,
        owner_id: OwnerId,
    ) -> Result<Self, VehicleError> {
        let latest_year = Utc::now().year() + 1;
        if !(EARLIEST_MODEL_YEAR..=latest_year).contains(&year_of_manufacture) {
            return Err(VehicleError::Validation(format!(
                "Year of manufacture {} must be between {} and {}",
                year_of_manufacture, EARLIEST_MODEL_YEAR, latest_year
            )));
        }

        Ok(Self {
            vin,
            make: non_blank(make),
            model: non_blank(model),
            year_of_manufacture,
            owner_id,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// A car joined with its owner's contact details, as listed to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarSummary {
    pub car: Car,
    pub owner_name: String,
    pub owner_email: Option<String>,
}
