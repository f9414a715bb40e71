//! Policy registration
//!
//! A car's policies must never overlap. The registrar checks this explicitly
//! so callers get a clear [`PolicyError::OverlapConflict`]; the PostgreSQL
//! adapter also enforces it with an exclusion constraint, which closes the
//! race between two concurrent registrations for the same car.

use std::sync::Arc;

use tracing::{info, warn};

use core_kernel::CarId;
use domain_vehicle::VehiclePort;

use crate::error::PolicyError;
use crate::policy::{InsurancePolicy, NewPolicy};
use crate::ports::PolicyPort;

#[derive(Clone)]
pub struct PolicyRegistrar {
    vehicles: Arc<dyn VehiclePort>,
    policies: Arc<dyn PolicyPort>,
}

impl PolicyRegistrar {
    pub fn new(vehicles: Arc<dyn VehiclePort>, policies: Arc<dyn PolicyPort>) -> Self {
        Self { vehicles, policies }
    }

    /// Registers a policy for an existing car
    ///
    /// # Errors
    ///
    /// - [`PolicyError::CarNotFound`] if the car is not registered
    /// - [`PolicyError::OverlapConflict`] if any existing policy of the car
    ///   shares at least one day with the new period
    pub async fn register(
        &self,
        car_id: CarId,
        request: NewPolicy,
    ) -> Result<InsurancePolicy, PolicyError> {
        if !self.vehicles.car_exists(car_id).await? {
            return Err(PolicyError::car_not_found(car_id));
        }

        if let Some(existing) = self.policies.find_overlapping(car_id, request.period()).await? {
            warn!(
                %car_id,
                existing_policy_id = %existing.id,
                start = %request.start_date,
                end = %request.end_date,
                "Rejected overlapping policy"
            );
            return Err(PolicyError::OverlapConflict {
                car_id: car_id.to_string(),
            });
        }

        let policy = InsurancePolicy::register(car_id, request);
        match self.policies.insert_policy(&policy).await {
            Ok(()) => {}
            Err(e) if e.is_conflict() => {
                warn!(%car_id, "Storage rejected overlapping policy");
                return Err(PolicyError::OverlapConflict {
                    car_id: car_id.to_string(),
                });
            }
            Err(e) => return Err(e.into()),
        }

        info!(
            policy_id = %policy.id,
            %car_id,
            provider = %policy.provider,
            "Registered policy"
        );
        Ok(policy)
    }
}
