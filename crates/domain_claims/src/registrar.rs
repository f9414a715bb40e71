//! Claim registration

use std::sync::Arc;

use tracing::info;

use core_kernel::CarId;
use domain_vehicle::VehiclePort;

use crate::claim::{Claim, NewClaim};
use crate::error::ClaimError;
use crate::ports::ClaimPort;

#[derive(Clone)]
pub struct ClaimRegistrar {
    vehicles: Arc<dyn VehiclePort>,
    claims: Arc<dyn ClaimPort>,
}

impl ClaimRegistrar {
    pub fn new(vehicles: Arc<dyn VehiclePort>, claims: Arc<dyn ClaimPort>) -> Self {
        Self { vehicles, claims }
    }

    /// Records a claim for an existing car
    pub async fn register(&self, car_id: CarId, request: NewClaim) -> Result<Claim, ClaimError> {
        if !self.vehicles.car_exists(car_id).await? {
            return Err(ClaimError::CarNotFound(car_id.to_string()));
        }

        let claim = Claim::register(car_id, request);
        self.claims.insert_claim(&claim).await?;

        info!(claim_id = %claim.id, %car_id, amount = %claim.amount, "Registered claim");
        Ok(claim)
    }
}
