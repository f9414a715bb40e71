//! Claim DTOs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use domain_claims::Claim;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateClaimRequest {
    pub claim_date: NaiveDate,
    #[validate(length(min = 1, max = 2000))]
    pub description: String,
    pub amount: Decimal,
    /// ISO 4217 code; the configured default when absent
    pub currency: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ClaimResponse {
    pub id: Uuid,
    pub car_id: Uuid,
    pub claim_date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
    pub currency: String,
    pub created_at: DateTime<Utc>,
}

impl From<Claim> for ClaimResponse {
    fn from(claim: Claim) -> Self {
        Self {
            id: claim.id.into(),
            car_id: claim.car_id.into(),
            claim_date: claim.claim_date,
            description: claim.description,
            amount: claim.amount.amount(),
            currency: claim.amount.currency().code().to_string(),
            created_at: claim.created_at,
        }
    }
}
