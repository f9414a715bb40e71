//! History errors

use thiserror::Error;

use core_kernel::PortError;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("Car not found: {0}")]
    CarNotFound(String),

    #[error(transparent)]
    Port(#[from] PortError),
}
