//! Vehicle registry errors

use thiserror::Error;

use core_kernel::PortError;

/// Errors that can occur in the vehicle registry
#[derive(Debug, Error)]
pub enum VehicleError {
    /// The referenced owner does not exist
    #[error("Owner not found: {0}")]
    OwnerNotFound(String),

    /// Another car is already registered under this VIN
    #[error("A car with VIN '{0}' already exists")]
    VinConflict(String),

    #[error("Invalid VIN: {0}")]
    InvalidVin(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error(transparent)]
    Port(#[from] PortError),
}
