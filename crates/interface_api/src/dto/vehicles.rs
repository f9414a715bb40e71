//! Owner and car DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use domain_vehicle::{Car, CarSummary, Owner};

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateOwnerRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(email)]
    pub email: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OwnerResponse {
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Owner> for OwnerResponse {
    fn from(owner: Owner) -> Self {
        Self {
            id: owner.id.into(),
            name: owner.name,
            email: owner.email,
            created_at: owner.created_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateCarRequest {
    #[validate(length(min = 1, max = 32))]
    pub vin: String,
    #[validate(length(max = 100))]
    pub make: Option<String>,
    #[validate(length(max = 100))]
    pub model: Option<String>,
    pub year_of_manufacture: i32,
    pub owner_id: Uuid,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CarResponse {
    pub id: Uuid,
    pub vin: String,
    pub make: Option<String>,
    pub model: Option<String>,
    pub year_of_manufacture: i32,
    pub owner_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_email: Option<String>,
}

impl From<Car> for CarResponse {
    fn from(car: Car) -> Self {
        Self {
            id: car.id.into(),
            vin: car.vin.into(),
            make: car.make,
            model: car.model,
            year_of_manufacture: car.year_of_manufacture,
            owner_id: car.owner_id.into(),
            owner_name: None,
            owner_email: None,
        }
    }
}

impl From<CarSummary> for CarResponse {
    fn from(summary: CarSummary) -> Self {
        Self {
            owner_name: Some(summary.owner_name),
            owner_email: summary.owner_email,
            ..CarResponse::from(summary.car)
        }
    }
}
