//! HTTP API tests
//!
//! Drive the full router over in-memory adapters with `tower::ServiceExt`.

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use core_kernel::CarId;
use interface_api::{config::ApiConfig, create_router, AppState, Ports};
use test_utils::{InMemoryStore, StringFixtures, TestPolicyBuilder};

fn router_for(store: &InMemoryStore) -> Router {
    let ports = Ports {
        vehicles: store.vehicle_port(),
        policies: store.policy_port(),
        claims: store.claim_port(),
    };
    create_router(AppState::new(ApiConfig::default(), ports))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

async fn create_owner(app: &Router) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/api/owners",
        Some(json!({ "name": StringFixtures::owner_name(), "email": StringFixtures::owner_email() })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().unwrap().to_string()
}

async fn create_car(app: &Router, vin: &str) -> String {
    let owner_id = create_owner(app).await;
    let (status, body) = send(
        app,
        "POST",
        "/api/cars",
        Some(json!({
            "vin": vin,
            "make": "Dacia",
            "model": "Logan",
            "year_of_manufacture": 2021,
            "owner_id": owner_id,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    body["id"].as_str().unwrap().to_string()
}

fn policy_body(start: &str, end: &str) -> Value {
    json!({ "provider": "Allianz", "start_date": start, "end_date": end })
}

mod health {
    use super::*;

    #[tokio::test]
    async fn test_liveness_and_readiness() {
        let app = router_for(&InMemoryStore::new());

        let (status, body) = send(&app, "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");

        let (status, body) = send(&app, "GET", "/health/ready", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["adapters"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_request_id_is_echoed() {
        let app = router_for(&InMemoryStore::new());
        let request = Request::builder()
            .uri("/health")
            .header("x-request-id", "abc-123")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.headers()["x-request-id"], "abc-123");
    }
}

mod cars {
    use super::*;

    #[tokio::test]
    async fn test_list_includes_owner_details() {
        let app = router_for(&InMemoryStore::new());
        create_car(&app, StringFixtures::vin()).await;

        let (status, body) = send(&app, "GET", "/api/cars", None).await;
        assert_eq!(status, StatusCode::OK);
        let cars = body.as_array().unwrap();
        assert_eq!(cars.len(), 1);
        assert_eq!(cars[0]["vin"], StringFixtures::vin());
        assert_eq!(cars[0]["owner_name"], StringFixtures::owner_name());
    }

    #[tokio::test]
    async fn test_duplicate_vin_is_conflict() {
        let app = router_for(&InMemoryStore::new());
        create_car(&app, StringFixtures::vin()).await;
        let owner_id = create_owner(&app).await;

        let (status, body) = send(
            &app,
            "POST",
            "/api/cars",
            Some(json!({
                "vin": StringFixtures::vin().to_lowercase(),
                "year_of_manufacture": 2020,
                "owner_id": owner_id,
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"], "conflict");
    }

    #[tokio::test]
    async fn test_unknown_owner_is_bad_request() {
        let app = router_for(&InMemoryStore::new());
        let (status, _) = send(
            &app,
            "POST",
            "/api/cars",
            Some(json!({
                "vin": StringFixtures::vin(),
                "year_of_manufacture": 2020,
                "owner_id": uuid::Uuid::new_v4(),
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_invalid_vin_is_unprocessable() {
        let app = router_for(&InMemoryStore::new());
        let owner_id = create_owner(&app).await;
        let (status, body) = send(
            &app,
            "POST",
            "/api/cars",
            Some(json!({ "vin": "VIN 123", "year_of_manufacture": 2020, "owner_id": owner_id })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "validation_error");
    }
}

mod validity {
    use super::*;

    #[tokio::test]
    async fn test_validity_follows_policy_period() {
        let app = router_for(&InMemoryStore::new());
        let car_id = create_car(&app, StringFixtures::vin()).await;
        let (status, _) = send(
            &app,
            "POST",
            &format!("/api/cars/{}/policies", car_id),
            Some(policy_body("2025-01-01", "2025-12-31")),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        for (day, expected) in [("2025-01-01", true), ("2025-12-31", true), ("2026-01-01", false)] {
            let (status, body) = send(
                &app,
                "GET",
                &format!("/api/cars/{}/insurance-valid?date={}", car_id, day),
                None,
            )
            .await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["valid"], expected, "on {}", day);
            assert_eq!(body["date"], day);
        }
    }

    #[tokio::test]
    async fn test_missing_or_malformed_date_is_bad_request() {
        let app = router_for(&InMemoryStore::new());
        let car_id = create_car(&app, StringFixtures::vin()).await;

        let (status, _) = send(&app, "GET", &format!("/api/cars/{}/insurance-valid", car_id), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(
            &app,
            "GET",
            &format!("/api/cars/{}/insurance-valid?date=2025-13-01", car_id),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_car_is_not_found() {
        let app = router_for(&InMemoryStore::new());
        let (status, body) = send(
            &app,
            "GET",
            &format!("/api/cars/{}/insurance-valid?date=2025-01-01", CarId::new().as_uuid()),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "not_found");
    }
}

mod policies {
    use super::*;

    #[tokio::test]
    async fn test_overlapping_policy_is_conflict() {
        let app = router_for(&InMemoryStore::new());
        let car_id = create_car(&app, StringFixtures::vin()).await;
        let uri = format!("/api/cars/{}/policies", car_id);

        let (status, body) = send(&app, "POST", &uri, Some(policy_body("2025-01-01", "2025-06-30"))).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["notified"], false);

        let (status, _) = send(&app, "POST", &uri, Some(policy_body("2025-06-30", "2025-12-31"))).await;
        assert_eq!(status, StatusCode::CONFLICT);

        let (status, _) = send(&app, "POST", &uri, Some(policy_body("2025-07-01", "2025-12-31"))).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_inverted_period_is_bad_request() {
        let app = router_for(&InMemoryStore::new());
        let car_id = create_car(&app, StringFixtures::vin()).await;
        let (status, _) = send(
            &app,
            "POST",
            &format!("/api/cars/{}/policies", car_id),
            Some(policy_body("2025-12-31", "2025-01-01")),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_blank_provider_is_unprocessable() {
        let app = router_for(&InMemoryStore::new());
        let car_id = create_car(&app, StringFixtures::vin()).await;
        let (status, _) = send(
            &app,
            "POST",
            &format!("/api/cars/{}/policies", car_id),
            Some(json!({ "provider": "", "start_date": "2025-01-01", "end_date": "2025-12-31" })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_policy_for_unknown_car_is_not_found() {
        let app = router_for(&InMemoryStore::new());
        let (status, _) = send(
            &app,
            "POST",
            &format!("/api/cars/{}/policies", CarId::new().as_uuid()),
            Some(policy_body("2025-01-01", "2025-12-31")),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}

mod claims {
    use super::*;

    #[tokio::test]
    async fn test_claim_defaults_to_configured_currency() {
        let app = router_for(&InMemoryStore::new());
        let car_id = create_car(&app, StringFixtures::vin()).await;
        let (status, body) = send(
            &app,
            "POST",
            &format!("/api/cars/{}/claims", car_id),
            Some(json!({ "claim_date": "2025-05-01", "description": "Windshield", "amount": "500.00" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "{}", body);
        assert_eq!(body["currency"], "USD");
        assert_eq!(body["car_id"], car_id);
    }

    #[tokio::test]
    async fn test_negative_amount_is_unprocessable() {
        let app = router_for(&InMemoryStore::new());
        let car_id = create_car(&app, StringFixtures::vin()).await;
        let (status, _) = send(
            &app,
            "POST",
            &format!("/api/cars/{}/claims", car_id),
            Some(json!({ "claim_date": "2025-05-01", "description": "Dent", "amount": "-1.00" })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_unknown_currency_is_unprocessable() {
        let app = router_for(&InMemoryStore::new());
        let car_id = create_car(&app, StringFixtures::vin()).await;
        let (status, _) = send(
            &app,
            "POST",
            &format!("/api/cars/{}/claims", car_id),
            Some(json!({
                "claim_date": "2025-05-01",
                "description": "Dent",
                "amount": "10.00",
                "currency": "XYZ",
            })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_claim_for_unknown_car_is_not_found() {
        let app = router_for(&InMemoryStore::new());
        let (status, _) = send(
            &app,
            "POST",
            &format!("/api/cars/{}/claims", CarId::new().as_uuid()),
            Some(json!({ "claim_date": "2025-05-01", "description": "Dent", "amount": "10.00" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}

mod history {
    use super::*;

    #[tokio::test]
    async fn test_history_is_chronological() {
        let store = InMemoryStore::new();
        let app = router_for(&store);
        let car_id = create_car(&app, StringFixtures::vin()).await;

        send(
            &app,
            "POST",
            &format!("/api/cars/{}/policies", car_id),
            Some(policy_body("2025-01-01", "2025-12-31")),
        )
        .await;
        send(
            &app,
            "POST",
            &format!("/api/cars/{}/claims", car_id),
            Some(json!({ "claim_date": "2025-03-15", "description": "Windshield", "amount": "500.00" })),
        )
        .await;

        let (status, body) = send(&app, "GET", &format!("/api/cars/{}/history", car_id), None).await;
        assert_eq!(status, StatusCode::OK);

        let kinds: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item["event_type"].as_str().unwrap())
            .collect();
        assert_eq!(kinds, vec!["Policy Start", "Claim", "Policy End"]);
        assert_eq!(body[1]["description"], "Description: Windshield, Amount: $ 500.00");
    }

    #[tokio::test]
    async fn test_history_includes_notified_policies() {
        let store = InMemoryStore::new();
        let app = router_for(&store);
        let car_id = store.seed_car(StringFixtures::vin()).await;
        store
            .seed_policy(&TestPolicyBuilder::new(car_id).notified().build())
            .await;

        let (status, body) = send(
            &app,
            "GET",
            &format!("/api/cars/{}/history", car_id.as_uuid()),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_unknown_car_is_not_found() {
        let app = router_for(&InMemoryStore::new());
        let (status, _) = send(
            &app,
            "GET",
            &format!("/api/cars/{}/history", CarId::new().as_uuid()),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
