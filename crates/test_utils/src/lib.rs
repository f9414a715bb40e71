//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! car insurance test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test data for common entities
//! - `builders`: Builder patterns for owners, cars, policies, and claims
//! - `store`: In-memory adapters bundled together, with seeding helpers
//! - `database`: PostgreSQL for integration tests, from `TEST_DATABASE_URL` or a container
//! - `assertions`: Custom assertion helpers for domain types
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod store;
pub mod database;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use store::*;
pub use database::*;
pub use assertions::*;
pub use generators::*;
