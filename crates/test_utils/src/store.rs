//! In-memory store
//!
//! Bundles the three mock adapters so a test can hand the same instances to
//! several services and then inspect what was written.

use std::sync::Arc;

use core_kernel::{CarId, OwnerId};
use domain_claims::{ClaimPort, MockClaimPort};
use domain_policy::{InsurancePolicy, MockPolicyPort, PolicyPort};
use domain_vehicle::{MockVehiclePort, VehiclePort};

use crate::builders::{TestCarBuilder, TestOwnerBuilder};

#[derive(Clone, Default)]
pub struct InMemoryStore {
    pub vehicles: Arc<MockVehiclePort>,
    pub policies: Arc<MockPolicyPort>,
    pub claims: Arc<MockClaimPort>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vehicle_port(&self) -> Arc<dyn VehiclePort> {
        self.vehicles.clone()
    }

    pub fn policy_port(&self) -> Arc<dyn PolicyPort> {
        self.policies.clone()
    }

    pub fn claim_port(&self) -> Arc<dyn ClaimPort> {
        self.claims.clone()
    }

    /// Inserts a fresh owner and returns its id
    pub async fn seed_owner(&self) -> OwnerId {
        let owner = TestOwnerBuilder::new().build();
        self.vehicles
            .insert_owner(&owner)
            .await
            .unwrap_or_else(|e| panic!("seeding owner failed: {}", e));
        owner.id
    }

    /// Inserts an owner and a car with the given VIN, returning the car id
    pub async fn seed_car(&self, vin: &str) -> CarId {
        let owner_id = self.seed_owner().await;
        let car = TestCarBuilder::new(owner_id).with_vin(vin).build();
        self.vehicles
            .insert_car(&car)
            .await
            .unwrap_or_else(|e| panic!("seeding car failed: {}", e));
        car.id
    }

    /// Inserts a policy straight into the port, skipping the car check
    pub async fn seed_policy(&self, policy: &InsurancePolicy) {
        self.policies
            .insert_policy(policy)
            .await
            .unwrap_or_else(|e| panic!("seeding policy failed: {}", e));
    }
}
