//! Domain Adapters
//!
//! PostgreSQL implementations of the domain ports. Each adapter converts
//! between domain values and repository rows and turns [`DatabaseError`]
//! into `PortError`.
//!
//! [`DatabaseError`]: crate::DatabaseError

pub mod vehicle;
pub mod policy;
pub mod claim;

pub use vehicle::PostgresVehicleAdapter;
pub use policy::PostgresPolicyAdapter;
pub use claim::PostgresClaimAdapter;

use std::time::Instant;

use chrono::Utc;
use sqlx::PgPool;

use core_kernel::{AdapterHealth, HealthCheckResult};

/// Round trips slower than this are reported as degraded
const DEGRADED_LATENCY_MS: u64 = 1_000;

/// Runs `SELECT 1` against the pool and grades the result
pub(crate) async fn check_pool(pool: &PgPool, adapter_id: &str) -> HealthCheckResult {
    let start = Instant::now();
    let result = sqlx::query_scalar::<_, i32>("SELECT 1").fetch_one(pool).await;
    let latency_ms = start.elapsed().as_millis() as u64;

    let (status, message) = match result {
        Ok(_) if latency_ms > DEGRADED_LATENCY_MS => (
            AdapterHealth::Degraded,
            Some(format!("Slow database round trip: {}ms", latency_ms)),
        ),
        Ok(_) => (AdapterHealth::Healthy, None),
        Err(e) => (AdapterHealth::Unhealthy, Some(format!("Database error: {}", e))),
    };

    HealthCheckResult {
        adapter_id: adapter_id.to_string(),
        status,
        latency_ms,
        message,
        checked_at: Utc::now(),
    }
}
