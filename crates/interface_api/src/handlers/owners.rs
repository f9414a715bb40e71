//! Owner handlers

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use domain_vehicle::NewOwner;

use crate::dto::vehicles::{CreateOwnerRequest, OwnerResponse};
use crate::{error::ApiError, AppState};

pub async fn create_owner(
    State(state): State<AppState>,
    Json(request): Json<CreateOwnerRequest>,
) -> Result<(StatusCode, Json<OwnerResponse>), ApiError> {
    request.validate()?;

    let new_owner = NewOwner::new(request.name, request.email)?;
    let owner = state.vehicles.register_owner(new_owner).await?;

    Ok((StatusCode::CREATED, Json(owner.into())))
}
