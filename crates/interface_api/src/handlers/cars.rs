//! Car handlers

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use core_kernel::OwnerId;
use domain_vehicle::{NewCar, Vin};

use crate::dto::vehicles::{CarResponse, CreateCarRequest};
use crate::{error::ApiError, AppState};

pub async fn list_cars(State(state): State<AppState>) -> Result<Json<Vec<CarResponse>>, ApiError> {
    let cars = state.vehicles.list_cars().await?;
    Ok(Json(cars.into_iter().map(CarResponse::from).collect()))
}

pub async fn create_car(
    State(state): State<AppState>,
    Json(request): Json<CreateCarRequest>,
) -> Result<(StatusCode, Json<CarResponse>), ApiError> {
    request.validate()?;

    let new_car = NewCar::new(
        Vin::parse(&request.vin)?,
        request.make,
        request.model,
        request.year_of_manufacture,
        OwnerId::from(request.owner_id),
    )?;
    let car = state.vehicles.register_car(new_car).await?;

    Ok((StatusCode::CREATED, Json(car.into())))
}
