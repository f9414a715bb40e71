//! Claims Domain
//!
//! Claims recorded against a car. Claims are insert-only: there is no
//! uniqueness or overlap rule among them, and they are never mutated after
//! registration.

pub mod claim;
pub mod error;
pub mod ports;
pub mod registrar;

pub use claim::{Claim, NewClaim};
pub use error::ClaimError;
pub use ports::ClaimPort;
#[cfg(any(test, feature = "mock"))]
pub use ports::mock::MockClaimPort;
pub use registrar::ClaimRegistrar;
