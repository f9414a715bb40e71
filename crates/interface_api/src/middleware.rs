//! API middleware

use std::time::Instant;

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use tracing::{info, warn};

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Logs method, path, status, and latency of every request
pub async fn request_logging(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-")
        .to_string();

    let start = Instant::now();
    let response = next.run(request).await;
    let latency_ms = start.elapsed().as_millis() as u64;
    let status = response.status();

    if status.is_server_error() {
        warn!(
            %method,
            path = %uri.path(),
            status = status.as_u16(),
            latency_ms,
            request_id = %request_id,
            "API request failed"
        );
    } else {
        info!(
            %method,
            path = %uri.path(),
            status = status.as_u16(),
            latency_ms,
            request_id = %request_id,
            "API request"
        );
    }

    response
}
