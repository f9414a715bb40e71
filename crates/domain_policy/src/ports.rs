//! Policy Domain Ports
//!
//! `PolicyPort` is the storage interface for insurance policies. Read
//! operations return policies in insertion order (creation time, then id).

use async_trait::async_trait;
use chrono::NaiveDate;

use core_kernel::{CarId, DateRange, DomainPort, HealthCheckable, PolicyId, PortError};

use crate::expiration::ExpirationCriteria;
use crate::policy::InsurancePolicy;

/// Storage operations for insurance policies
#[async_trait]
pub trait PolicyPort: DomainPort + HealthCheckable {
    /// All policies of a car in insertion order
    async fn policies_for_car(&self, car_id: CarId) -> Result<Vec<InsurancePolicy>, PortError>;

    /// First policy of the car whose period shares a day with `range`
    async fn find_overlapping(
        &self,
        car_id: CarId,
        range: DateRange,
    ) -> Result<Option<InsurancePolicy>, PortError>;

    /// Returns true if any policy of the car covers `date`
    async fn any_covering(&self, car_id: CarId, date: NaiveDate) -> Result<bool, PortError>;

    /// Inserts a policy; an overlap rejected by storage is a [`PortError::Conflict`]
    async fn insert_policy(&self, policy: &InsurancePolicy) -> Result<(), PortError>;

    async fn get_policy(&self, id: PolicyId) -> Result<InsurancePolicy, PortError>;

    /// Pending policies matching the expiration criteria, in insertion order
    async fn find_pending_expired(
        &self,
        criteria: &ExpirationCriteria,
    ) -> Result<Vec<InsurancePolicy>, PortError>;

    /// Marks the given policies as notified in a single write
    ///
    /// Only policies still pending are flipped. Returns the ids this call
    /// flipped, so a concurrent scan that got there first is not counted.
    /// Either every eligible row changes or none does.
    async fn mark_notified(&self, ids: &[PolicyId]) -> Result<Vec<PolicyId>, PortError>;
}

/// In-memory implementation of PolicyPort for testing
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use tokio::sync::RwLock;

    use core_kernel::HealthCheckResult;

    /// Stores policies in a vector so reads keep insertion order
    #[derive(Debug, Default)]
    pub struct MockPolicyPort {
        policies: Arc<RwLock<Vec<InsurancePolicy>>>,
        fail_mark_notified: AtomicBool,
    }

    impl MockPolicyPort {
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates with policies, bypassing the overlap check
        pub async fn with_policies(policies: Vec<InsurancePolicy>) -> Self {
            let port = Self::new();
            port.policies.write().await.extend(policies);
            port
        }

        /// Makes every subsequent `mark_notified` call fail with a connection error
        pub fn fail_mark_notified(&self, fail: bool) {
            self.fail_mark_notified.store(fail, Ordering::SeqCst);
        }

        /// Snapshot of everything stored
        pub async fn all(&self) -> Vec<InsurancePolicy> {
            self.policies.read().await.clone()
        }
    }

    impl DomainPort for MockPolicyPort {}

    #[async_trait]
    impl HealthCheckable for MockPolicyPort {
        async fn health_check(&self) -> HealthCheckResult {
            HealthCheckResult::healthy("mock-policy-port")
        }
    }

    #[async_trait]
    impl PolicyPort for MockPolicyPort {
        async fn policies_for_car(&self, car_id: CarId) -> Result<Vec<InsurancePolicy>, PortError> {
            Ok(self
                .policies
                .read()
                .await
                .iter()
                .filter(|p| p.car_id == car_id)
                .cloned()
                .collect())
        }

        async fn find_overlapping(
            &self,
            car_id: CarId,
            range: DateRange,
        ) -> Result<Option<InsurancePolicy>, PortError> {
            Ok(self
                .policies
                .read()
                .await
                .iter()
                .find(|p| p.car_id == car_id && p.period().overlaps(&range))
                .cloned())
        }

        async fn any_covering(&self, car_id: CarId, date: NaiveDate) -> Result<bool, PortError> {
            Ok(self
                .policies
                .read()
                .await
                .iter()
                .any(|p| p.car_id == car_id && p.covers(date)))
        }

        async fn insert_policy(&self, policy: &InsurancePolicy) -> Result<(), PortError> {
            let mut policies = self.policies.write().await;
            let clashes = policies
                .iter()
                .any(|p| p.car_id == policy.car_id && p.period().overlaps(&policy.period()));
            if clashes {
                return Err(PortError::conflict(format!(
                    "policy period overlaps an existing policy of car {}",
                    policy.car_id
                )));
            }
            policies.push(policy.clone());
            Ok(())
        }

        async fn get_policy(&self, id: PolicyId) -> Result<InsurancePolicy, PortError> {
            self.policies
                .read()
                .await
                .iter()
                .find(|p| p.id == id)
                .cloned()
                .ok_or_else(|| PortError::not_found("Policy", id))
        }

        async fn find_pending_expired(
            &self,
            criteria: &ExpirationCriteria,
        ) -> Result<Vec<InsurancePolicy>, PortError> {
            Ok(self
                .policies
                .read()
                .await
                .iter()
                .filter(|p| criteria.matches(p))
                .cloned()
                .collect())
        }

        async fn mark_notified(&self, ids: &[PolicyId]) -> Result<Vec<PolicyId>, PortError> {
            if self.fail_mark_notified.load(Ordering::SeqCst) {
                return Err(PortError::connection("simulated write failure"));
            }

            let mut policies = self.policies.write().await;
            let mut changed = Vec::new();
            for policy in policies.iter_mut() {
                if !policy.notified && ids.contains(&policy.id) {
                    policy.notified = true;
                    changed.push(policy.id);
                }
            }
            Ok(changed)
        }
    }
}
