//! Claim registration tests against the in-memory ports

use std::sync::Arc;

use chrono::NaiveDate;
use core_kernel::{CarId, Currency, Money};
use domain_claims::{ClaimError, ClaimPort, ClaimRegistrar, MockClaimPort, NewClaim};
use domain_vehicle::{Car, MockVehiclePort, NewCar, NewOwner, Owner, Vin};
use proptest::prelude::*;
use rust_decimal_macros::dec;
use test_utils::{assert_money_eq, claim_amount_strategy};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

async fn setup() -> (CarId, Arc<MockClaimPort>, ClaimRegistrar) {
    let owner = Owner::register(NewOwner::new("Ana", None).unwrap());
    let car = Car::register(NewCar::new(Vin::parse("VIN0001").unwrap(), None, None, 2020, owner.id).unwrap());
    let car_id = car.id;
    let vehicles = Arc::new(MockVehiclePort::with_records(vec![owner], vec![car]).await);
    let claims = Arc::new(MockClaimPort::new());
    let registrar = ClaimRegistrar::new(vehicles, claims.clone());
    (car_id, claims, registrar)
}

mod registration {
    use super::*;

    #[tokio::test]
    async fn test_claim_is_recorded_for_known_car() {
        let (car_id, claims, registrar) = setup().await;
        let request = NewClaim::new(date(2025, 6, 1), "Windshield", Money::new(dec!(500), Currency::USD)).unwrap();

        let claim = registrar.register(car_id, request).await.unwrap();

        assert_eq!(claim.car_id, car_id);
        assert_money_eq(&claim.amount, &Money::new(dec!(500), Currency::USD));
        assert_eq!(claim.amount.to_string(), "$ 500.00");
        assert_eq!(claims.claims_for_car(car_id).await.unwrap(), vec![claim]);
    }

    #[tokio::test]
    async fn test_unknown_car_is_rejected() {
        let (_, claims, registrar) = setup().await;
        let other = CarId::new();
        let request = NewClaim::new(date(2025, 6, 1), "Windshield", Money::new(dec!(500), Currency::USD)).unwrap();

        let result = registrar.register(other, request).await;

        assert!(matches!(result, Err(ClaimError::CarNotFound(_))));
        assert!(claims.claims_for_car(other).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_claims_are_allowed_and_keep_insertion_order() {
        let (car_id, claims, registrar) = setup().await;
        let request = NewClaim::new(date(2025, 6, 1), "Hail", Money::new(dec!(120.5), Currency::EUR)).unwrap();

        let first = registrar.register(car_id, request.clone()).await.unwrap();
        let second = registrar.register(car_id, request).await.unwrap();

        let stored = claims.claims_for_car(car_id).await.unwrap();
        assert_eq!(stored.iter().map(|c| c.id).collect::<Vec<_>>(), vec![first.id, second.id]);
    }
}

mod serialization {
    use super::*;

    #[test]
    fn test_claim_serializes_amount_and_currency() {
        let request = NewClaim::new(date(2025, 6, 1), "Hail", Money::new(dec!(120.50), Currency::EUR)).unwrap();
        let claim = domain_claims::Claim::register(CarId::new(), request);

        let json = serde_json::to_value(&claim).unwrap();
        assert_eq!(json["claim_date"], "2025-06-01");
        assert_eq!(json["amount"]["currency"], "EUR");
    }
}

proptest! {
    #[test]
    fn any_non_negative_amount_is_recorded_unchanged(amount in claim_amount_strategy()) {
        let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
        runtime.block_on(async {
            let (car_id, claims, registrar) = setup().await;
            let request = NewClaim::new(date(2025, 6, 1), "Hail", amount).unwrap();
            registrar.register(car_id, request).await.unwrap();

            let stored = claims.claims_for_car(car_id).await.unwrap();
            assert_eq!(stored.len(), 1);
            assert_money_eq(&stored[0].amount, &amount);
        });
    }
}
