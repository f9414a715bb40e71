//! PostgreSQL Vehicle Adapter

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use core_kernel::{CarId, DomainPort, HealthCheckResult, HealthCheckable, OwnerId, PortError};
use domain_vehicle::{Car, CarSummary, Owner, VehiclePort, Vin};

use crate::repositories::vehicles::{CarRow, CarWithOwnerRow, OwnerRow, VehicleRepository};

#[derive(Debug, Clone)]
pub struct PostgresVehicleAdapter {
    repository: VehicleRepository,
    pool: PgPool,
}

impl PostgresVehicleAdapter {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool.clone()),
            pool,
        }
    }
}

impl DomainPort for PostgresVehicleAdapter {}

#[async_trait]
impl HealthCheckable for PostgresVehicleAdapter {
    async fn health_check(&self) -> HealthCheckResult {
        super::check_pool(&self.pool, "postgres-vehicle-adapter").await
    }
}

#[async_trait]
impl VehiclePort for PostgresVehicleAdapter {
    #[instrument(skip(self), fields(car_id = %id))]
    async fn car_exists(&self, id: CarId) -> Result<bool, PortError> {
        Ok(self.repository.car_exists(id.into()).await?)
    }

    #[instrument(skip(self), fields(car_id = %id))]
    async fn get_car(&self, id: CarId) -> Result<Car, PortError> {
        let row = self.repository.get_car(id.into()).await?;
        row_to_car(row)
    }

    #[instrument(skip(self), fields(vin = %vin))]
    async fn find_car_by_vin(&self, vin: &Vin) -> Result<Option<Car>, PortError> {
        self.repository
            .find_car_by_vin(vin.as_str())
            .await?
            .map(row_to_car)
            .transpose()
    }

    #[instrument(skip(self), fields(owner_id = %id))]
    async fn owner_exists(&self, id: OwnerId) -> Result<bool, PortError> {
        Ok(self.repository.owner_exists(id.into()).await?)
    }

    #[instrument(skip(self, owner), fields(owner_id = %owner.id))]
    async fn insert_owner(&self, owner: &Owner) -> Result<(), PortError> {
        debug!("Inserting owner");
        let row = OwnerRow {
            id: owner.id.into(),
            name: owner.name.clone(),
            email: owner.email.clone(),
            created_at: owner.created_at,
        };
        Ok(self.repository.insert_owner(&row).await?)
    }

    #[instrument(skip(self, car), fields(car_id = %car.id, owner_id = %car.owner_id))]
    async fn insert_car(&self, car: &Car) -> Result<(), PortError> {
        debug!("Inserting car");
        Ok(self.repository.insert_car(&car_to_row(car)).await?)
    }

    #[instrument(skip(self))]
    async fn list_cars(&self) -> Result<Vec<CarSummary>, PortError> {
        self.repository
            .list_with_owners()
            .await?
            .into_iter()
            .map(|CarWithOwnerRow { car, owner_name, owner_email }| {
                Ok(CarSummary {
                    car: row_to_car(car)?,
                    owner_name,
                    owner_email,
                })
            })
            .collect()
    }
}

fn row_to_car(row: CarRow) -> Result<Car, PortError> {
    let vin = Vin::parse(&row.vin)
        .map_err(|e| PortError::transformation(format!("car {}: {}", row.id, e)))?;
    Ok(Car {
        id: CarId::from(row.id),
        vin,
        make: row.make,
        model: row.model,
        year_of_manufacture: row.year_of_manufacture,
        owner_id: OwnerId::from(row.owner_id),
        created_at: row.created_at,
    })
}

fn car_to_row(car: &Car) -> CarRow {
    CarRow {
        id: car.id.into(),
        vin: car.vin.as_str().to_string(),
        make: car.make.clone(),
        model: car.model.clone(),
        year_of_manufacture: car.year_of_manufacture,
        owner_id: car.owner_id.into(),
        created_at: car.created_at,
    }
}
