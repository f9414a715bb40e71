//! Claims

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::DatabaseError;

#[derive(Debug, Clone)]
pub struct ClaimRepository {
    pool: PgPool,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ClaimRow {
    pub id: Uuid,
    pub car_id: Uuid,
    pub claim_date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
    pub currency: String,
    pub created_at: DateTime<Utc>,
}

impl ClaimRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_car(&self, car_id: Uuid) -> Result<Vec<ClaimRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, ClaimRow>(
            "SELECT id, car_id, claim_date, description, amount, currency, created_at \
             FROM claims WHERE car_id = $1 ORDER BY created_at, id",
        )
        .bind(car_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn insert(&self, claim: &ClaimRow) -> Result<(), DatabaseError> {
        sqlx::query(
            "INSERT INTO claims (id, car_id, claim_date, description, amount, currency, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(claim.id)
        .bind(claim.car_id)
        .bind(claim.claim_date)
        .bind(&claim.description)
        .bind(claim.amount)
        .bind(&claim.currency)
        .bind(claim.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
