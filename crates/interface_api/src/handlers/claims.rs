//! Claim handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use core_kernel::{CarId, Currency, Money};
use domain_claims::NewClaim;

use crate::dto::claims::{ClaimResponse, CreateClaimRequest};
use crate::{error::ApiError, AppState};

/// `POST /api/cars/:car_id/claims`
pub async fn create_claim(
    State(state): State<AppState>,
    Path(car_id): Path<Uuid>,
    Json(request): Json<CreateClaimRequest>,
) -> Result<(StatusCode, Json<ClaimResponse>), ApiError> {
    request.validate()?;

    let currency = match request.currency.as_deref() {
        Some(code) => code
            .parse::<Currency>()
            .map_err(|e| ApiError::Validation(e.to_string()))?,
        None => state.config.default_currency,
    };

    let new_claim = NewClaim::new(
        request.claim_date,
        request.description,
        Money::new(request.amount, currency),
    )?;
    let claim = state.claims.register(CarId::from(car_id), new_claim).await?;

    Ok((StatusCode::CREATED, Json(claim.into())))
}
