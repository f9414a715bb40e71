//! PostgreSQL Claim Adapter

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use core_kernel::{CarId, ClaimId, Currency, DomainPort, HealthCheckResult, HealthCheckable, Money, PortError};
use domain_claims::{Claim, ClaimPort};

use crate::repositories::claims::{ClaimRepository, ClaimRow};

#[derive(Debug, Clone)]
pub struct PostgresClaimAdapter {
    repository: ClaimRepository,
    pool: PgPool,
}

impl PostgresClaimAdapter {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ClaimRepository::new(pool.clone()),
            pool,
        }
    }
}

impl DomainPort for PostgresClaimAdapter {}

#[async_trait]
impl HealthCheckable for PostgresClaimAdapter {
    async fn health_check(&self) -> HealthCheckResult {
        super::check_pool(&self.pool, "postgres-claim-adapter").await
    }
}

#[async_trait]
impl ClaimPort for PostgresClaimAdapter {
    #[instrument(skip(self), fields(car_id = %car_id))]
    async fn claims_for_car(&self, car_id: CarId) -> Result<Vec<Claim>, PortError> {
        self.repository
            .find_by_car(car_id.into())
            .await?
            .into_iter()
            .map(row_to_claim)
            .collect()
    }

    #[instrument(skip(self, claim), fields(claim_id = %claim.id, car_id = %claim.car_id))]
    async fn insert_claim(&self, claim: &Claim) -> Result<(), PortError> {
        debug!("Inserting claim");
        Ok(self.repository.insert(&claim_to_row(claim)).await?)
    }
}

fn row_to_claim(row: ClaimRow) -> Result<Claim, PortError> {
    let currency: Currency = row
        .currency
        .parse()
        .map_err(|e| PortError::transformation(format!("claim {}: {}", row.id, e)))?;

    Ok(Claim {
        id: ClaimId::from(row.id),
        car_id: CarId::from(row.car_id),
        claim_date: row.claim_date,
        description: row.description,
        amount: Money::new(row.amount, currency),
        created_at: row.created_at,
    })
}

fn claim_to_row(claim: &Claim) -> ClaimRow {
    ClaimRow {
        id: claim.id.into(),
        car_id: claim.car_id.into(),
        claim_date: claim.claim_date,
        description: claim.description.clone(),
        amount: claim.amount.amount(),
        currency: claim.amount.currency().code().to_string(),
        created_at: claim.created_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn row(currency: &str) -> ClaimRow {
        ClaimRow {
            id: Uuid::now_v7(),
            car_id: Uuid::now_v7(),
            claim_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            description: "Hail".to_string(),
            amount: dec!(120.5000),
            currency: currency.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_amount_and_currency_are_restored() {
        let claim = row_to_claim(row("EUR")).unwrap();
        assert_eq!(claim.amount.to_string(), "€ 120.50");
        assert_eq!(claim_to_row(&claim).currency, "EUR");
    }

    #[test]
    fn test_unknown_currency_is_a_transformation_error() {
        assert!(matches!(row_to_claim(row("XXX")), Err(PortError::Transformation { .. })));
    }
}
