//! History handler

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use core_kernel::CarId;
use domain_history::HistoryItem;

use crate::{error::ApiError, AppState};

/// `GET /api/cars/:car_id/history`
pub async fn car_history(
    State(state): State<AppState>,
    Path(car_id): Path<Uuid>,
) -> Result<Json<Vec<HistoryItem>>, ApiError> {
    let items = state.history.history_for(CarId::from(car_id)).await?;
    Ok(Json(items))
}
