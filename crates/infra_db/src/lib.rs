//! Infrastructure Database Layer
//!
//! PostgreSQL persistence for the car insurance domains, using SQLx with
//! runtime-bound queries.
//!
//! # Layout
//!
//! - [`repositories`]: SQL and row types, returning [`DatabaseError`]
//! - [`adapters`]: implementations of the domain ports over the repositories,
//!   translating [`DatabaseError`] into `PortError`
//!
//! Policy periods are protected by an exclusion constraint so two policies
//! of the same car can never overlap, even under concurrent registration.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, run_migrations, DatabaseConfig, PostgresPolicyAdapter};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/car_insurance")).await?;
//! run_migrations(&pool).await?;
//! let policies = PostgresPolicyAdapter::new(pool.clone());
//! ```

pub mod pool;
pub mod error;
pub mod repositories;
pub mod adapters;

pub use pool::{create_pool, run_migrations, DatabaseConfig, DatabasePool, DEFAULT_DATABASE_URL};
pub use error::DatabaseError;
pub use adapters::{PostgresClaimAdapter, PostgresPolicyAdapter, PostgresVehicleAdapter};
