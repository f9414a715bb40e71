//! Vehicle Registry Ports
//!
//! `VehiclePort` is the storage interface for cars and owners. The PostgreSQL
//! adapter lives in `infra_db`; an in-memory adapter is provided here behind
//! the `mock` feature.

use async_trait::async_trait;

use core_kernel::{CarId, DomainPort, HealthCheckable, OwnerId, PortError};

use crate::car::{Car, CarSummary, Vin};
use crate::owner::Owner;

/// Storage operations for cars and owners
#[async_trait]
pub trait VehiclePort: DomainPort + HealthCheckable {
    async fn car_exists(&self, id: CarId) -> Result<bool, PortError>;

    async fn get_car(&self, id: CarId) -> Result<Car, PortError>;

    /// Looks a car up by VIN, ignoring case
    async fn find_car_by_vin(&self, vin: &Vin) -> Result<Option<Car>, PortError>;

    async fn owner_exists(&self, id: OwnerId) -> Result<bool, PortError>;

    async fn insert_owner(&self, owner: &Owner) -> Result<(), PortError>;

    /// Inserts a car; a duplicate VIN is reported as [`PortError::Conflict`]
    async fn insert_car(&self, car: &Car) -> Result<(), PortError>;

    /// All cars with their owner's contact details, in registration order
    async fn list_cars(&self) -> Result<Vec<CarSummary>, PortError>;
}

/// In-memory implementation of VehiclePort for testing
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    use core_kernel::HealthCheckResult;

    #[derive(Debug, Default)]
    pub struct MockVehiclePort {
        owners: Arc<RwLock<HashMap<OwnerId, Owner>>>,
        cars: Arc<RwLock<HashMap<CarId, Car>>>,
    }

    impl MockVehiclePort {
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates the store
        pub async fn with_records(owners: Vec<Owner>, cars: Vec<Car>) -> Self {
            let port = Self::new();
            {
                let mut stored = port.owners.write().await;
                for owner in owners {
                    stored.insert(owner.id, owner);
                }
            }
            {
                let mut stored = port.cars.write().await;
                for car in cars {
                    stored.insert(car.id, car);
                }
            }
            port
        }
    }

    impl DomainPort for MockVehiclePort {}

    #[async_trait]
    impl HealthCheckable for MockVehiclePort {
        async fn health_check(&self) -> HealthCheckResult {
            HealthCheckResult::healthy("mock-vehicle-port")
        }
    }

    #[async_trait]
    impl VehiclePort for MockVehiclePort {
        async fn car_exists(&self, id: CarId) -> Result<bool, PortError> {
            Ok(self.cars.read().await.contains_key(&id))
        }

        async fn get_car(&self, id: CarId) -> Result<Car, PortError> {
            self.cars
                .read()
                .await
                .get(&id)
                .cloned()
                .ok_or_else(|| PortError::not_found("Car", id))
        }

        async fn find_car_by_vin(&self, vin: &Vin) -> Result<Option<Car>, PortError> {
            Ok(self
                .cars
                .read()
                .await
                .values()
                .find(|car| &car.vin == vin)
                .cloned())
        }

        async fn owner_exists(&self, id: OwnerId) -> Result<bool, PortError> {
            Ok(self.owners.read().await.contains_key(&id))
        }

        async fn insert_owner(&self, owner: &Owner) -> Result<(), PortError> {
            self.owners.write().await.insert(owner.id, owner.clone());
            Ok(())
        }

        async fn insert_car(&self, car: &Car) -> Result<(), PortError> {
            let mut cars = self.cars.write().await;
            if cars.values().any(|existing| existing.vin == car.vin) {
                return Err(PortError::conflict(format!("VIN '{}' already registered", car.vin)));
            }
            if !self.owners.read().await.contains_key(&car.owner_id) {
                return Err(PortError::not_found("Owner", car.owner_id));
            }
            cars.insert(car.id, car.clone());
            Ok(())
        }

        async fn list_cars(&self) -> Result<Vec<CarSummary>, PortError> {
            let cars = self.cars.read().await;
            let owners = self.owners.read().await;

            let mut summaries: Vec<CarSummary> = cars
                .values()
                .filter_map(|car| {
                    owners.get(&car.owner_id).map(|owner| CarSummary {
                        car: car.clone(),
                        owner_name: owner.name.clone(),
                        owner_email: owner.email.clone(),
                    })
                })
                .collect();
            summaries.sort_by_key(|summary| summary.car.id);
            Ok(summaries)
        }
    }
}
