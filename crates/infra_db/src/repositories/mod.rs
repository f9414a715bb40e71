//! Repository implementations
//!
//! Each repository owns the SQL for one table group and maps rows with
//! `sqlx::FromRow`. Reads of per-car records are ordered by creation time
//! then id, which is insertion order.

pub mod vehicles;
pub mod policies;
pub mod claims;

pub use vehicles::VehicleRepository;
pub use policies::PolicyRepository;
pub use claims::ClaimRepository;
