//! Insurance validity
//!
//! Answers "is car X insured on date D?". An unknown car is not an error: it
//! is reported through [`InsuranceValidity::car_found`] so callers can map it
//! to their own not-found outcome.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::CarId;
use domain_vehicle::VehiclePort;

use crate::error::PolicyError;
use crate::policy::InsurancePolicy;
use crate::ports::PolicyPort;

/// Outcome of a validity check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsuranceValidity {
    pub car_found: bool,
    pub valid: bool,
}

impl InsuranceValidity {
    pub fn car_not_found() -> Self {
        Self {
            car_found: false,
            valid: false,
        }
    }
}

/// Returns true if at least one policy covers `date`, endpoints included
pub fn is_covered(policies: &[InsurancePolicy], date: NaiveDate) -> bool {
    policies.iter().any(|policy| policy.covers(date))
}

/// Evaluates coverage against the vehicle and policy stores
#[derive(Clone)]
pub struct ValidityEvaluator {
    vehicles: Arc<dyn VehiclePort>,
    policies: Arc<dyn PolicyPort>,
}

impl ValidityEvaluator {
    pub fn new(vehicles: Arc<dyn VehiclePort>, policies: Arc<dyn PolicyPort>) -> Self {
        Self { vehicles, policies }
    }

    pub async fn is_valid_on(
        &self,
        car_id: CarId,
        date: NaiveDate,
    ) -> Result<InsuranceValidity, PolicyError> {
        if !self.vehicles.car_exists(car_id).await? {
            debug!(%car_id, "Validity requested for unknown car");
            return Ok(InsuranceValidity::car_not_found());
        }

        let valid = self.policies.any_covering(car_id, date).await?;
        debug!(%car_id, %date, valid, "Evaluated insurance validity");

        Ok(InsuranceValidity {
            car_found: true,
            valid,
        })
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::policy::NewPolicy;
    use chrono::Days;
    use proptest::prelude::*;

    fn base() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    proptest! {
        #[test]
        fn covered_iff_some_period_contains_the_date(
            periods in prop::collection::vec((0u64..700, 1u64..120), 0..6),
            offset in 0u64..900
        ) {
            let policies: Vec<InsurancePolicy> = periods
                .iter()
                .map(|(offset, length)| {
                    let start = base() + Days::new(*offset);
                    let request = NewPolicy::new("Omniasig", start, start + Days::new(*length)).unwrap();
                    InsurancePolicy::register(CarId::new(), request)
                })
                .collect();
            let day = base() + Days::new(offset);

            let expected = policies.iter().any(|p| p.period().contains(day));
            prop_assert_eq!(is_covered(&policies, day), expected);
        }
    }
}
