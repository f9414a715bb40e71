//! Vehicle registry service
//!
//! Registers owners and cars and answers existence queries for the other
//! domains.

use std::sync::Arc;

use tracing::{info, warn};

use core_kernel::CarId;

use crate::car::{Car, CarSummary, NewCar};
use crate::error::VehicleError;
use crate::owner::{NewOwner, Owner};
use crate::ports::VehiclePort;

/// Application service over a [`VehiclePort`]
#[derive(Clone)]
pub struct VehicleRegistry {
    port: Arc<dyn VehiclePort>,
}

impl VehicleRegistry {
    pub fn new(port: Arc<dyn VehiclePort>) -> Self {
        Self { port }
    }

    pub async fn register_owner(&self, request: NewOwner) -> Result<Owner, VehicleError> {
        let owner = Owner::register(request);
        self.port.insert_owner(&owner).await?;
        info!(owner_id = %owner.id, "Registered owner");
        Ok(owner)
    }

    /// Registers a car for an existing owner
    ///
    /// The owner is checked first, then VIN uniqueness. A storage-level
    /// uniqueness violation raced in between is also reported as
    /// [`VehicleError::VinConflict`].
    pub async fn register_car(&self, request: NewCar) -> Result<Car, VehicleError> {
        if !self.port.owner_exists(request.owner_id).await? {
            return Err(VehicleError::OwnerNotFound(request.owner_id.to_string()));
        }

        if self.port.find_car_by_vin(&request.vin).await?.is_some() {
            warn!(vin = %request.vin, "Rejected car registration with duplicate VIN");
            return Err(VehicleError::VinConflict(request.vin.to_string()));
        }

        let car = Car::register(request);
        match self.port.insert_car(&car).await {
            Ok(()) => {}
            Err(e) if e.is_conflict() => {
                return Err(VehicleError::VinConflict(car.vin.to_string()));
            }
            Err(e) => return Err(e.into()),
        }

        info!(car_id = %car.id, owner_id = %car.owner_id, "Registered car");
        Ok(car)
    }

    pub async fn list_cars(&self) -> Result<Vec<CarSummary>, VehicleError> {
        Ok(self.port.list_cars().await?)
    }

    pub async fn car_exists(&self, id: CarId) -> Result<bool, VehicleError> {
        Ok(self.port.car_exists(id).await?)
    }
}
