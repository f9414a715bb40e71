//! Test Data Builders
//!
//! Builders construct domain records directly, bypassing request validation,
//! so tests can set up states the services would refuse to create (a policy
//! already marked notified, a claim with a past creation time).

use chrono::{DateTime, NaiveDate, Utc};
use core_kernel::{CarId, ClaimId, Money, OwnerId, PolicyId};
use domain_claims::Claim;
use domain_policy::InsurancePolicy;
use domain_vehicle::{Car, Owner, Vin};

use crate::fixtures::{DateFixtures, MoneyFixtures, StringFixtures};

/// Builder for owners
pub struct TestOwnerBuilder {
    id: OwnerId,
    name: String,
    email: Option<String>,
}

impl Default for TestOwnerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestOwnerBuilder {
    pub fn new() -> Self {
        Self {
            id: OwnerId::new(),
            name: StringFixtures::owner_name().to_string(),
            email: Some(StringFixtures::owner_email().to_string()),
        }
    }

    pub fn with_id(mut self, id: OwnerId) -> Self {
        self.id = id;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn without_email(mut self) -> Self {
        self.email = None;
        self
    }

    pub fn build(self) -> Owner {
        Owner {
            id: self.id,
            name: self.name,
            email: self.email,
            created_at: Utc::now(),
        }
    }
}

/// Builder for cars
pub struct TestCarBuilder {
    id: CarId,
    vin: String,
    make: Option<String>,
    model: Option<String>,
    year_of_manufacture: i32,
    owner_id: OwnerId,
}

impl TestCarBuilder {
    /// A car belonging to `owner_id`
    pub fn new(owner_id: OwnerId) -> Self {
        Self {
            id: CarId::new(),
            vin: StringFixtures::vin().to_string(),
            make: Some(StringFixtures::make().to_string()),
            model: Some(StringFixtures::model().to_string()),
            year_of_manufacture: 2021,
            owner_id,
        }
    }

    pub fn with_id(mut self, id: CarId) -> Self {
        self.id = id;
        self
    }

    pub fn with_vin(mut self, vin: impl Into<String>) -> Self {
        self.vin = vin.into();
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year_of_manufacture = year;
        self
    }

    /// Panics if the VIN does not parse
    pub fn build(self) -> Car {
        let vin = Vin::parse(&self.vin)
            .unwrap_or_else(|e| panic!("invalid test VIN '{}': {}", self.vin, e));
        Car {
            id: self.id,
            vin,
            make: self.make,
            model: self.model,
            year_of_manufacture: self.year_of_manufacture,
            owner_id: self.owner_id,
            created_at: Utc::now(),
        }
    }
}

/// Builder for insurance policies
pub struct TestPolicyBuilder {
    id: PolicyId,
    car_id: CarId,
    provider: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    notified: bool,
    created_at: DateTime<Utc>,
}

impl TestPolicyBuilder {
    /// A pending policy for the standard 2025 policy year
    pub fn new(car_id: CarId) -> Self {
        Self {
            id: PolicyId::new(),
            car_id,
            provider: StringFixtures::provider().to_string(),
            start_date: DateFixtures::policy_start(),
            end_date: DateFixtures::policy_end(),
            notified: false,
            created_at: Utc::now(),
        }
    }

    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = provider.into();
        self
    }

    pub fn with_period(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    /// Keeps the length of the period, moving it to end on `end`
    pub fn ending_on(mut self, end: NaiveDate) -> Self {
        let length = self.end_date - self.start_date;
        self.start_date = end - length;
        self.end_date = end;
        self
    }

    pub fn notified(mut self) -> Self {
        self.notified = true;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn build(self) -> InsurancePolicy {
        InsurancePolicy {
            id: self.id,
            car_id: self.car_id,
            provider: self.provider,
            start_date: self.start_date,
            end_date: self.end_date,
            notified: self.notified,
            created_at: self.created_at,
        }
    }
}

/// Builder for claims
pub struct TestClaimBuilder {
    id: ClaimId,
    car_id: CarId,
    claim_date: NaiveDate,
    description: String,
    amount: Money,
    created_at: DateTime<Utc>,
}

impl TestClaimBuilder {
    pub fn new(car_id: CarId) -> Self {
        Self {
            id: ClaimId::new(),
            car_id,
            claim_date: DateFixtures::mid_year(),
            description: StringFixtures::claim_description().to_string(),
            amount: MoneyFixtures::usd_500(),
            created_at: Utc::now(),
        }
    }

    pub fn on(mut self, date: NaiveDate) -> Self {
        self.claim_date = date;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_amount(mut self, amount: Money) -> Self {
        self.amount = amount;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn build(self) -> Claim {
        Claim {
            id: self.id,
            car_id: self.car_id,
            claim_date: self.claim_date,
            description: self.description,
            amount: self.amount,
            created_at: self.created_at,
        }
    }
}
