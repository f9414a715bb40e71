//! Policy Domain
//!
//! Insurance policies attached to cars and the rules that govern them:
//!
//! - **Registration**: a car's policies never overlap (inclusive bounds)
//! - **Validity**: a car is insured on a date if any policy covers it
//! - **Expiration**: a background scan marks newly expired policies as
//!   notified, exactly once per policy
//!
//! # Policy Lifecycle
//!
//! ```text
//! registered (notified = false) -> expired and scanned (notified = true)
//! ```
//!
//! Nothing else mutates a policy after registration.

pub mod policy;
pub mod error;
pub mod ports;
pub mod validity;
pub mod registrar;
pub mod expiration;

pub use policy::{InsurancePolicy, NewPolicy};
pub use error::PolicyError;
pub use ports::PolicyPort;
#[cfg(any(test, feature = "mock"))]
pub use ports::mock::MockPolicyPort;
pub use validity::{is_covered, InsuranceValidity, ValidityEvaluator};
pub use registrar::PolicyRegistrar;
pub use expiration::{
    ExpirationCriteria, ExpirationReport, ExpirationScanner, ExpirationWindow,
    ExpirationWorker, ExpirationWorkerConfig, ExpirationWorkerHandle,
};
