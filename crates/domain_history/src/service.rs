//! History service

use std::sync::Arc;

use tracing::debug;

use core_kernel::CarId;
use domain_claims::ClaimPort;
use domain_policy::PolicyPort;
use domain_vehicle::VehiclePort;

use crate::aggregator::build_history;
use crate::error::HistoryError;
use crate::item::HistoryItem;

/// Resolves a car and reads its records for [`build_history`]
#[derive(Clone)]
pub struct HistoryService {
    vehicles: Arc<dyn VehiclePort>,
    policies: Arc<dyn PolicyPort>,
    claims: Arc<dyn ClaimPort>,
}

impl HistoryService {
    pub fn new(
        vehicles: Arc<dyn VehiclePort>,
        policies: Arc<dyn PolicyPort>,
        claims: Arc<dyn ClaimPort>,
    ) -> Self {
        Self {
            vehicles,
            policies,
            claims,
        }
    }

    /// Returns the car's history, empty if it has no records
    pub async fn history_for(&self, car_id: CarId) -> Result<Vec<HistoryItem>, HistoryError> {
        if !self.vehicles.car_exists(car_id).await? {
            return Err(HistoryError::CarNotFound(car_id.to_string()));
        }

        let policies = self.policies.policies_for_car(car_id).await?;
        let claims = self.claims.claims_for_car(car_id).await?;
        debug!(%car_id, policies = policies.len(), claims = claims.len(), "Building history");

        Ok(build_history(&policies, &claims))
    }
}
