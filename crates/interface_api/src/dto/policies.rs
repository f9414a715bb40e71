//! Policy and validity DTOs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use domain_policy::InsurancePolicy;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreatePolicyRequest {
    #[validate(length(min = 1, max = 200))]
    pub provider: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PolicyResponse {
    pub id: Uuid,
    pub car_id: Uuid,
    pub provider: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub notified: bool,
    pub created_at: DateTime<Utc>,
}

impl From<InsurancePolicy> for PolicyResponse {
    fn from(policy: InsurancePolicy) -> Self {
        Self {
            id: policy.id.into(),
            car_id: policy.car_id.into(),
            provider: policy.provider,
            start_date: policy.start_date,
            end_date: policy.end_date,
            notified: policy.notified,
            created_at: policy.created_at,
        }
    }
}

/// `?date=YYYY-MM-DD`, parsed by the handler so a bad date is a 400
#[derive(Debug, Deserialize)]
pub struct ValidityQuery {
    pub date: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InsuranceValidityResponse {
    pub car_id: Uuid,
    pub date: NaiveDate,
    pub valid: bool,
}
