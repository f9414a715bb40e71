//! Policy and validity handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use uuid::Uuid;
use validator::Validate;

use core_kernel::CarId;
use domain_policy::NewPolicy;

use crate::dto::policies::{
    CreatePolicyRequest, InsuranceValidityResponse, PolicyResponse, ValidityQuery,
};
use crate::{error::ApiError, AppState};

/// `GET /api/cars/:car_id/insurance-valid?date=YYYY-MM-DD`
pub async fn insurance_valid(
    State(state): State<AppState>,
    Path(car_id): Path<Uuid>,
    Query(query): Query<ValidityQuery>,
) -> Result<Json<InsuranceValidityResponse>, ApiError> {
    let raw = query
        .date
        .ok_or_else(|| ApiError::BadRequest("Query parameter 'date' is required".to_string()))?;
    let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| ApiError::BadRequest(format!("Invalid date '{}', expected YYYY-MM-DD", raw)))?;

    let validity = state.validity.is_valid_on(CarId::from(car_id), date).await?;
    if !validity.car_found {
        return Err(ApiError::NotFound(format!("Car {} not found", car_id)));
    }

    Ok(Json(InsuranceValidityResponse {
        car_id,
        date,
        valid: validity.valid,
    }))
}

/// `POST /api/cars/:car_id/policies`
pub async fn create_policy(
    State(state): State<AppState>,
    Path(car_id): Path<Uuid>,
    Json(request): Json<CreatePolicyRequest>,
) -> Result<(StatusCode, Json<PolicyResponse>), ApiError> {
    request.validate()?;

    let new_policy = NewPolicy::new(request.provider, request.start_date, request.end_date)?;
    let policy = state.policies.register(CarId::from(car_id), new_policy).await?;

    Ok((StatusCode::CREATED, Json(policy.into())))
}
