//! Insurance policies

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::DatabaseError;

#[derive(Debug, Clone)]
pub struct PolicyRepository {
    pool: PgPool,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PolicyRow {
    pub id: Uuid,
    pub car_id: Uuid,
    pub provider: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub notified: bool,
    pub created_at: DateTime<Utc>,
}

const POLICY_COLUMNS: &str = "id, car_id, provider, start_date, end_date, notified, created_at";

impl PolicyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_car(&self, car_id: Uuid) -> Result<Vec<PolicyRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, PolicyRow>(&format!(
            "SELECT {POLICY_COLUMNS} FROM policies WHERE car_id = $1 ORDER BY created_at, id"
        ))
        .bind(car_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// First policy of the car whose inclusive period intersects `[start, end]`
    pub async fn find_overlapping(
        &self,
        car_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Option<PolicyRow>, DatabaseError> {
        let row = sqlx::query_as::<_, PolicyRow>(&format!(
            "SELECT {POLICY_COLUMNS} FROM policies \
             WHERE car_id = $1 AND start_date <= $3 AND end_date >= $2 \
             ORDER BY created_at, id LIMIT 1"
        ))
        .bind(car_id)
        .bind(start)
        .bind(end)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn any_covering(&self, car_id: Uuid, date: NaiveDate) -> Result<bool, DatabaseError> {
        let covered = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM policies \
             WHERE car_id = $1 AND start_date <= $2 AND end_date >= $2)",
        )
        .bind(car_id)
        .bind(date)
        .fetch_one(&self.pool)
        .await?;
        Ok(covered)
    }

    pub async fn insert(&self, policy: &PolicyRow) -> Result<(), DatabaseError> {
        sqlx::query(
            "INSERT INTO policies (id, car_id, provider, start_date, end_date, notified, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(policy.id)
        .bind(policy.car_id)
        .bind(&policy.provider)
        .bind(policy.start_date)
        .bind(policy.end_date)
        .bind(policy.notified)
        .bind(policy.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn get(&self, id: Uuid) -> Result<PolicyRow, DatabaseError> {
        sqlx::query_as::<_, PolicyRow>(&format!("SELECT {POLICY_COLUMNS} FROM policies WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DatabaseError::not_found("Policy", id))
    }

    /// Pending policies whose last day is exactly `end_date`
    pub async fn find_pending_ending_on(
        &self,
        end_date: NaiveDate,
    ) -> Result<Vec<PolicyRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, PolicyRow>(&format!(
            "SELECT {POLICY_COLUMNS} FROM policies \
             WHERE end_date = $1 AND NOT notified ORDER BY created_at, id"
        ))
        .bind(end_date)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Pending policies whose last day is before `date`
    pub async fn find_pending_ending_before(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<PolicyRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, PolicyRow>(&format!(
            "SELECT {POLICY_COLUMNS} FROM policies \
             WHERE end_date < $1 AND NOT notified ORDER BY created_at, id"
        ))
        .bind(date)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Flips the given pending policies to notified in one statement,
    /// returning the ids that changed
    pub async fn mark_notified(&self, ids: &[Uuid]) -> Result<Vec<Uuid>, DatabaseError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let changed = sqlx::query_scalar::<_, Uuid>(
            "UPDATE policies SET notified = true WHERE id = ANY($1) AND NOT notified RETURNING id",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;
        Ok(changed)
    }
}
