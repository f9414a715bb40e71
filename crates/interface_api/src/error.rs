//! API error handling
//!
//! Every domain error maps to one status code and a JSON body
//! `{"error": "<kind>", "message": "<text>"}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

use core_kernel::PortError;
use domain_claims::ClaimError;
use domain_history::HistoryError;
use domain_policy::PolicyError;
use domain_vehicle::VehicleError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Service unavailable: {0}")]
    Unavailable(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            ApiError::NotFound(_) => "not_found",
            ApiError::BadRequest(_) => "bad_request",
            ApiError::Conflict(_) => "conflict",
            ApiError::Validation(_) => "validation_error",
            ApiError::Unavailable(_) => "service_unavailable",
            ApiError::Internal(_) => "internal_error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            ApiError::NotFound(msg)
            | ApiError::BadRequest(msg)
            | ApiError::Conflict(msg)
            | ApiError::Validation(msg)
            | ApiError::Unavailable(msg) => msg.clone(),
            ApiError::Internal(msg) => {
                error!(error = %msg, "Request failed");
                "An internal error occurred".to_string()
            }
        };

        let body = ErrorResponse {
            error: self.kind().to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<PortError> for ApiError {
    fn from(err: PortError) -> Self {
        match err {
            PortError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            PortError::Conflict { message } => ApiError::Conflict(message),
            ref e if e.is_transient() => ApiError::Unavailable(e.to_string()),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<VehicleError> for ApiError {
    fn from(err: VehicleError) -> Self {
        match err {
            // The owner is referenced from the request body, not the path
            VehicleError::OwnerNotFound(_) => ApiError::BadRequest(err.to_string()),
            VehicleError::VinConflict(_) => ApiError::Conflict(err.to_string()),
            VehicleError::InvalidVin(_) | VehicleError::Validation(_) => {
                ApiError::Validation(err.to_string())
            }
            VehicleError::Port(e) => e.into(),
        }
    }
}

impl From<PolicyError> for ApiError {
    fn from(err: PolicyError) -> Self {
        match err {
            PolicyError::CarNotFound(_) => ApiError::NotFound(err.to_string()),
            PolicyError::OverlapConflict { .. } => ApiError::Conflict(err.to_string()),
            PolicyError::InvalidRange { .. } => ApiError::BadRequest(err.to_string()),
            PolicyError::Validation(_) => ApiError::Validation(err.to_string()),
            PolicyError::Port(e) => e.into(),
        }
    }
}

impl From<ClaimError> for ApiError {
    fn from(err: ClaimError) -> Self {
        match err {
            ClaimError::CarNotFound(_) => ApiError::NotFound(err.to_string()),
            ClaimError::InvalidAmount(_) | ClaimError::Validation(_) => {
                ApiError::Validation(err.to_string())
            }
            ClaimError::Port(e) => e.into(),
        }
    }
}

impl From<HistoryError> for ApiError {
    fn from(err: HistoryError) -> Self {
        match err {
            HistoryError::CarNotFound(_) => ApiError::NotFound(err.to_string()),
            HistoryError::Port(e) => e.into(),
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        ApiError::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_policy_errors_map_to_statuses() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let cases = [
            (PolicyError::CarNotFound("CAR-1".into()), StatusCode::NOT_FOUND),
            (PolicyError::OverlapConflict { car_id: "CAR-1".into() }, StatusCode::CONFLICT),
            (PolicyError::InvalidRange { start: date, end: date }, StatusCode::BAD_REQUEST),
            (PolicyError::Validation("provider".into()), StatusCode::UNPROCESSABLE_ENTITY),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status(), status);
        }
    }

    #[test]
    fn test_vehicle_errors_map_to_statuses() {
        assert_eq!(
            ApiError::from(VehicleError::OwnerNotFound("OWN-1".into())).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(VehicleError::VinConflict("VIN".into())).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::from(VehicleError::InvalidVin("blank".into())).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_port_errors_map_to_statuses() {
        assert_eq!(ApiError::from(PortError::connection("down")).status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(ApiError::from(PortError::internal("boom")).status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(ApiError::from(PortError::not_found("Car", "x")).status(), StatusCode::NOT_FOUND);
    }
}
