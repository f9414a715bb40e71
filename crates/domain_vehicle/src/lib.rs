//! Vehicle Registry Domain
//!
//! Cars and their owners. Every other domain references a car by [`CarId`]
//! and relies on this crate only to answer "does this car exist?".
//!
//! # Invariants
//!
//! - A VIN identifies at most one car, compared case-insensitively
//! - A car always references an existing owner
//!
//! [`CarId`]: core_kernel::CarId

pub mod car;
pub mod owner;
pub mod error;
pub mod ports;
pub mod registry;

pub use car::{Car, CarSummary, NewCar, Vin};
pub use owner::{Owner, NewOwner};
pub use error::VehicleError;
pub use ports::VehiclePort;
#[cfg(any(test, feature = "mock"))]
pub use ports::mock::MockVehiclePort;
pub use registry::VehicleRegistry;
