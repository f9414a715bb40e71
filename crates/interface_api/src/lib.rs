//! HTTP API Layer
//!
//! REST API for the car insurance core using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: one module per resource, thin wrappers over domain services
//! - **Middleware**: request ids, tracing, request logging
//! - **DTOs**: request/response bodies with `validator` rules
//! - **Error Handling**: domain errors mapped to status codes in [`error`]
//!
//! Handlers only see the port traits, so the same router runs on PostgreSQL
//! adapters in production and on in-memory adapters in tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState, Ports};
//!
//! let state = AppState::new(config, Ports::postgres(pool));
//! axum::serve(listener, create_router(state)).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use std::sync::Arc;

use axum::{
    http::HeaderName,
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use domain_claims::{ClaimPort, ClaimRegistrar};
use domain_history::HistoryService;
use domain_policy::{PolicyPort, PolicyRegistrar, ValidityEvaluator};
use domain_vehicle::{VehiclePort, VehicleRegistry};

use crate::config::ApiConfig;
use crate::handlers::{cars, claims, health, history, owners, policies};
use crate::middleware::{request_logging, REQUEST_ID_HEADER};

/// The storage adapters behind the API
#[derive(Clone)]
pub struct Ports {
    pub vehicles: Arc<dyn VehiclePort>,
    pub policies: Arc<dyn PolicyPort>,
    pub claims: Arc<dyn ClaimPort>,
}

impl Ports {
    /// PostgreSQL adapters sharing one pool
    pub fn postgres(pool: infra_db::DatabasePool) -> Self {
        Self {
            vehicles: Arc::new(infra_db::PostgresVehicleAdapter::new(pool.clone())),
            policies: Arc::new(infra_db::PostgresPolicyAdapter::new(pool.clone())),
            claims: Arc::new(infra_db::PostgresClaimAdapter::new(pool)),
        }
    }
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub ports: Ports,
    pub vehicles: VehicleRegistry,
    pub policies: PolicyRegistrar,
    pub claims: ClaimRegistrar,
    pub validity: ValidityEvaluator,
    pub history: HistoryService,
}

impl AppState {
    pub fn new(config: ApiConfig, ports: Ports) -> Self {
        Self {
            vehicles: VehicleRegistry::new(ports.vehicles.clone()),
            policies: PolicyRegistrar::new(ports.vehicles.clone(), ports.policies.clone()),
            claims: ClaimRegistrar::new(ports.vehicles.clone(), ports.claims.clone()),
            validity: ValidityEvaluator::new(ports.vehicles.clone(), ports.policies.clone()),
            history: HistoryService::new(
                ports.vehicles.clone(),
                ports.policies.clone(),
                ports.claims.clone(),
            ),
            config,
            ports,
        }
    }
}

/// Creates the API router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let car_routes = Router::new()
        .route("/", get(cars::list_cars).post(cars::create_car))
        .route("/:car_id/insurance-valid", get(policies::insurance_valid))
        .route("/:car_id/policies", post(policies::create_policy))
        .route("/:car_id/claims", post(claims::create_claim))
        .route("/:car_id/history", get(history::car_history));

    let api_routes = Router::new()
        .route("/owners", post(owners::create_owner))
        .nest("/cars", car_routes)
        .layer(axum_middleware::from_fn(request_logging));

    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    Router::new()
        .merge(public_routes)
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
