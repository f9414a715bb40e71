//! Claims Domain Ports

use async_trait::async_trait;

use core_kernel::{CarId, DomainPort, HealthCheckable, PortError};

use crate::claim::Claim;

/// Storage operations for claims
#[async_trait]
pub trait ClaimPort: DomainPort + HealthCheckable {
    /// All claims of a car in insertion order
    async fn claims_for_car(&self, car_id: CarId) -> Result<Vec<Claim>, PortError>;

    async fn insert_claim(&self, claim: &Claim) -> Result<(), PortError>;
}

/// In-memory implementation of ClaimPort for testing
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    use core_kernel::HealthCheckResult;

    #[derive(Debug, Default)]
    pub struct MockClaimPort {
        claims: Arc<RwLock<Vec<Claim>>>,
    }

    impl MockClaimPort {
        pub fn new() -> Self {
            Self::default()
        }

        pub async fn with_claims(claims: Vec<Claim>) -> Self {
            let port = Self::new();
            port.claims.write().await.extend(claims);
            port
        }
    }

    impl DomainPort for MockClaimPort {}

    #[async_trait]
    impl HealthCheckable for MockClaimPort {
        async fn health_check(&self) -> HealthCheckResult {
            HealthCheckResult::healthy("mock-claim-port")
        }
    }

    #[async_trait]
    impl ClaimPort for MockClaimPort {
        async fn claims_for_car(&self, car_id: CarId) -> Result<Vec<Claim>, PortError> {
            Ok(self
                .claims
                .read()
                .await
                .iter()
                .filter(|c| c.car_id == car_id)
                .cloned()
                .collect())
        }

        async fn insert_claim(&self, claim: &Claim) -> Result<(), PortError> {
            self.claims.write().await.push(claim.clone());
            Ok(())
        }
    }
}
