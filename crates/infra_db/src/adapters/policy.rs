//! PostgreSQL Policy Adapter

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::{debug, instrument};
use uuid::Uuid;

use core_kernel::{CarId, DateRange, DomainPort, HealthCheckResult, HealthCheckable, PolicyId, PortError};
use domain_policy::{ExpirationCriteria, ExpirationWindow, InsurancePolicy, PolicyPort};

use crate::repositories::policies::{PolicyRepository, PolicyRow};

/// Policy storage backed by the `policies` table
///
/// Overlapping periods for one car are rejected by the `policies_no_overlap`
/// exclusion constraint and surface as [`PortError::Conflict`].
#[derive(Debug, Clone)]
pub struct PostgresPolicyAdapter {
    repository: PolicyRepository,
    pool: PgPool,
}

impl PostgresPolicyAdapter {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PolicyRepository::new(pool.clone()),
            pool,
        }
    }
}

impl DomainPort for PostgresPolicyAdapter {}

#[async_trait]
impl HealthCheckable for PostgresPolicyAdapter {
    async fn health_check(&self) -> HealthCheckResult {
        super::check_pool(&self.pool, "postgres-policy-adapter").await
    }
}

#[async_trait]
impl PolicyPort for PostgresPolicyAdapter {
    #[instrument(skip(self), fields(car_id = %car_id))]
    async fn policies_for_car(&self, car_id: CarId) -> Result<Vec<InsurancePolicy>, PortError> {
        let rows = self.repository.find_by_car(car_id.into()).await?;
        Ok(rows.into_iter().map(row_to_policy).collect())
    }

    #[instrument(skip(self), fields(car_id = %car_id, start = %range.start, end = %range.end))]
    async fn find_overlapping(
        &self,
        car_id: CarId,
        range: DateRange,
    ) -> Result<Option<InsurancePolicy>, PortError> {
        let row = self
            .repository
            .find_overlapping(car_id.into(), range.start, range.end)
            .await?;
        Ok(row.map(row_to_policy))
    }

    #[instrument(skip(self), fields(car_id = %car_id, date = %date))]
    async fn any_covering(&self, car_id: CarId, date: NaiveDate) -> Result<bool, PortError> {
        Ok(self.repository.any_covering(car_id.into(), date).await?)
    }

    #[instrument(skip(self, policy), fields(policy_id = %policy.id, car_id = %policy.car_id))]
    async fn insert_policy(&self, policy: &InsurancePolicy) -> Result<(), PortError> {
        debug!("Inserting policy");
        Ok(self.repository.insert(&policy_to_row(policy)).await?)
    }

    #[instrument(skip(self), fields(policy_id = %id))]
    async fn get_policy(&self, id: PolicyId) -> Result<InsurancePolicy, PortError> {
        let row = self.repository.get(id.into()).await?;
        Ok(row_to_policy(row))
    }

    #[instrument(skip(self, criteria), fields(window = %criteria.window, today = %criteria.today))]
    async fn find_pending_expired(
        &self,
        criteria: &ExpirationCriteria,
    ) -> Result<Vec<InsurancePolicy>, PortError> {
        let rows = match criteria.window {
            ExpirationWindow::ExactDay => {
                self.repository.find_pending_ending_on(criteria.yesterday()).await?
            }
            ExpirationWindow::CatchUp => {
                self.repository.find_pending_ending_before(criteria.today).await?
            }
        };
        Ok(rows.into_iter().map(row_to_policy).collect())
    }

    #[instrument(skip(self, ids), fields(count = ids.len()))]
    async fn mark_notified(&self, ids: &[PolicyId]) -> Result<Vec<PolicyId>, PortError> {
        let ids: Vec<Uuid> = ids.iter().map(|id| Uuid::from(*id)).collect();
        let changed = self.repository.mark_notified(&ids).await?;
        debug!(changed = changed.len(), "Marked policies as notified");
        Ok(changed.into_iter().map(PolicyId::from).collect())
    }
}

fn row_to_policy(row: PolicyRow) -> InsurancePolicy {
    InsurancePolicy {
        id: PolicyId::from(row.id),
        car_id: CarId::from(row.car_id),
        provider: row.provider,
        start_date: row.start_date,
        end_date: row.end_date,
        notified: row.notified,
        created_at: row.created_at,
    }
}

fn policy_to_row(policy: &InsurancePolicy) -> PolicyRow {
    PolicyRow {
        id: policy.id.into(),
        car_id: policy.car_id.into(),
        provider: policy.provider.clone(),
        start_date: policy.start_date,
        end_date: policy.end_date,
        notified: policy.notified,
        created_at: policy.created_at,
    }
}
