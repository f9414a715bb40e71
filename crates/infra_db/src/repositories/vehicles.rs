//! Owners and cars

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::DatabaseError;

#[derive(Debug, Clone)]
pub struct VehicleRepository {
    pool: PgPool,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct OwnerRow {
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CarRow {
    pub id: Uuid,
    pub vin: String,
    pub make: Option<String>,
    pub model: Option<String>,
    pub year_of_manufacture: i32,
    pub owner_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// A car row joined with its owner's contact details
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CarWithOwnerRow {
    #[sqlx(flatten)]
    pub car: CarRow,
    pub owner_name: String,
    pub owner_email: Option<String>,
}

const CAR_COLUMNS: &str =
    "c.id, c.vin, c.make, c.model, c.year_of_manufacture, c.owner_id, c.created_at";

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn car_exists(&self, id: Uuid) -> Result<bool, DatabaseError> {
        let exists = sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM cars WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    pub async fn get_car(&self, id: Uuid) -> Result<CarRow, DatabaseError> {
        sqlx::query_as::<_, CarRow>(&format!("SELECT {CAR_COLUMNS} FROM cars c WHERE c.id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DatabaseError::not_found("Car", id))
    }

    /// Case-insensitive lookup, served by the `upper(vin)` unique index
    pub async fn find_car_by_vin(&self, vin: &str) -> Result<Option<CarRow>, DatabaseError> {
        let row = sqlx::query_as::<_, CarRow>(&format!(
            "SELECT {CAR_COLUMNS} FROM cars c WHERE upper(c.vin) = upper($1)"
        ))
        .bind(vin)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn owner_exists(&self, id: Uuid) -> Result<bool, DatabaseError> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM owners WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    pub async fn insert_owner(&self, owner: &OwnerRow) -> Result<(), DatabaseError> {
        sqlx::query("INSERT INTO owners (id, name, email, created_at) VALUES ($1, $2, $3, $4)")
            .bind(owner.id)
            .bind(&owner.name)
            .bind(&owner.email)
            .bind(owner.created_at)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn insert_car(&self, car: &CarRow) -> Result<(), DatabaseError> {
        sqlx::query(
            "INSERT INTO cars (id, vin, make, model, year_of_manufacture, owner_id, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(car.id)
        .bind(&car.vin)
        .bind(&car.make)
        .bind(&car.model)
        .bind(car.year_of_manufacture)
        .bind(car.owner_id)
        .bind(car.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn list_with_owners(&self) -> Result<Vec<CarWithOwnerRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, CarWithOwnerRow>(&format!(
            "SELECT {CAR_COLUMNS}, o.name AS owner_name, o.email AS owner_email \
             FROM cars c JOIN owners o ON o.id = c.owner_id \
             ORDER BY c.created_at, c.id"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
