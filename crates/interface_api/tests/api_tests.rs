//! HTTP-level integration tests
//!
//! Each test spins up the full router against an in-memory SQLite database
//! with migrations and seed data applied, then exercises the endpoints the
//! way a client would.

use axum_test::TestServer;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::Value;

use interface_api::{config::ApiConfig, create_router};
use test_utils::{insurance_body, seeded_memory_pool, upload_body};

async fn test_server() -> TestServer {
    let pool = seeded_memory_pool().await;
    let app = create_router(pool, ApiConfig::default());
    TestServer::new(app).expect("Failed to start test server")
}

mod catalog_endpoints {
    use super::*;

    #[tokio::test]
    async fn test_types_are_sorted_and_non_empty() {
        let server = test_server().await;

        for country in ["usa", "india"] {
            let response = server.get(&format!("/api/types/{}", country)).await;
            response.assert_status_ok();

            let types: Vec<String> = response.json();
            assert!(!types.is_empty(), "{} returned no types", country);

            let mut sorted = types.clone();
            sorted.sort();
            sorted.dedup();
            assert_eq!(types, sorted);
        }
    }

    #[tokio::test]
    async fn test_search_returns_policies_ordered_by_premium() {
        let server = test_server().await;

        let response = server.get("/api/search/usa").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["country"], "usa");

        let policies = body["policies"].as_array().expect("policies array");
        assert_eq!(body["total"].as_u64().unwrap() as usize, policies.len());
        assert!(!policies.is_empty());

        let premiums: Vec<Decimal> = policies
            .iter()
            .map(|p| p["premium_usd"].as_str().unwrap().parse().unwrap())
            .collect();
        for pair in premiums.windows(2) {
            assert!(pair[0] <= pair[1], "premiums out of order: {:?}", premiums);
        }

        // USA responses carry no INR conversion
        assert!(policies[0].get("premium_inr").is_none());
        assert!(policies[0]["premium_formatted"]
            .as_str()
            .unwrap()
            .starts_with('$'));
    }

    #[tokio::test]
    async fn test_search_india_includes_inr_conversion() {
        let server = test_server().await;

        let response = server.get("/api/search/india").await;
        response.assert_status_ok();

        let body: Value = response.json();
        let policies = body["policies"].as_array().expect("policies array");
        assert!(!policies.is_empty());

        for policy in policies {
            let usd: Decimal = policy["premium_usd"].as_str().unwrap().parse().unwrap();
            let inr: Decimal = policy["premium_inr"].as_str().unwrap().parse().unwrap();
            assert_eq!(inr, (usd * dec!(83.50)).round_dp(2));

            assert!(policy["premium_formatted"]
                .as_str()
                .unwrap()
                .starts_with('₹'));
        }
    }

    #[tokio::test]
    async fn test_search_with_type_filter() {
        let server = test_server().await;

        let response = server
            .get("/api/search/usa")
            .add_query_param("type", "Auto Insurance")
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        let policies = body["policies"].as_array().expect("policies array");
        assert!(!policies.is_empty());
        assert!(policies
            .iter()
            .all(|p| p["insurance_type"] == "Auto Insurance"));
    }

    #[tokio::test]
    async fn test_unknown_country_is_client_error() {
        let server = test_server().await;

        for path in ["/api/types/germany", "/api/search/germany", "/search/mars"] {
            let response = server.get(path).await;
            assert_eq!(response.status_code(), 400, "{} was not rejected", path);
        }
    }

    #[tokio::test]
    async fn test_exchange_rate_endpoint() {
        let server = test_server().await;

        let response = server.get("/api/exchange-rate").await;
        response.assert_status_ok();

        let body: Value = response.json();
        let rate: Decimal = body["usd_to_inr"].as_str().unwrap().parse().unwrap();
        assert_eq!(rate, dec!(83.50));
        assert_eq!(body["source"], "demo_fixed_rate");
    }
}

mod upload_and_estimate {
    use super::*;

    #[tokio::test]
    async fn test_upload_returns_unique_id() {
        let server = test_server().await;

        let response = server
            .post("/upload")
            .json(&upload_body("usa", "Alice", 30))
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert!(body["uniqueId"].as_str().is_some());
        assert!(body.get("error").is_none());
    }

    #[tokio::test]
    async fn test_duplicate_upload_returns_same_id_with_notice() {
        let server = test_server().await;

        let first: Value = server
            .post("/upload")
            .json(&upload_body("india", "Bala", 25))
            .await
            .json();
        let second: Value = server
            .post("/upload")
            .json(&upload_body("india", "Bala", 60))
            .await
            .json();

        assert_eq!(first["uniqueId"], second["uniqueId"]);
        assert!(first.get("error").is_none());
        assert_eq!(second["error"], "Record already exists");
    }

    #[tokio::test]
    async fn test_upload_rejects_invalid_age() {
        let server = test_server().await;

        let response = server
            .post("/upload")
            .json(&upload_body("usa", "Eve", 0))
            .await;
        assert_eq!(response.status_code(), 422);
    }

    #[tokio::test]
    async fn test_truncated_body_gets_json_error_envelope() {
        let server = test_server().await;

        let response = server
            .post("/upload")
            .content_type("application/json")
            .bytes(r#"{"country":"usa","firstName":"#.into())
            .await;
        assert_eq!(response.status_code(), 422);

        let body: Value = response.json();
        assert_eq!(body["error"], "validation_error");
        assert!(body["message"].as_str().is_some());
    }

    #[tokio::test]
    async fn test_wrong_typed_field_gets_json_error_envelope() {
        let server = test_server().await;

        let mut request = upload_body("usa", "Hank", 30);
        request["age"] = serde_json::json!(-5);

        let response = server.post("/upload").json(&request).await;
        assert_eq!(response.status_code(), 422);

        let body: Value = response.json();
        assert_eq!(body["error"], "validation_error");
        assert!(body["message"].as_str().is_some());
    }

    #[tokio::test]
    async fn test_upload_rejects_unknown_country() {
        let server = test_server().await;

        let response = server
            .post("/upload")
            .json(&upload_body("atlantis", "Finn", 30))
            .await;
        assert_eq!(response.status_code(), 400);
    }

    #[tokio::test]
    async fn test_estimate_tiers_for_usa() {
        let server = test_server().await;

        let cases = [
            ("Young", 20, "$100 per month"),
            ("Middle", 21, "$200 per month"),
            ("Senior", 51, "$500 per month"),
        ];

        for (name, age, expected) in cases {
            let upload: Value = server
                .post("/upload")
                .json(&upload_body("usa", name, age))
                .await
                .json();
            let unique_id = upload["uniqueId"].as_str().unwrap();

            let response = server
                .post("/insurance")
                .json(&insurance_body("usa", unique_id))
                .await;
            response.assert_status_ok();

            let body: Value = response.json();
            assert_eq!(body["insurancePremium"], expected, "age {}", age);
            assert_eq!(body["uniqueId"].as_str().unwrap(), unique_id);
        }
    }

    #[tokio::test]
    async fn test_estimate_converts_to_inr_for_india() {
        let server = test_server().await;

        let upload: Value = server
            .post("/upload")
            .json(&upload_body("india", "Gita", 35))
            .await
            .json();
        let unique_id = upload["uniqueId"].as_str().unwrap();

        let response = server
            .post("/insurance")
            .json(&insurance_body("india", unique_id))
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        // $200 tier at the default 83.50 rate
        assert_eq!(body["insurancePremium"], "₹16,700 per month");
    }

    #[tokio::test]
    async fn test_estimate_unknown_id_is_404() {
        let server = test_server().await;

        let response = server
            .post("/insurance")
            .json(&insurance_body(
                "usa",
                "00000000-0000-4000-8000-000000000000",
            ))
            .await;
        assert_eq!(response.status_code(), 404);

        let body: Value = response.json();
        assert_eq!(body["message"], "User not found");
    }

    #[tokio::test]
    async fn test_estimate_malformed_id_is_404() {
        let server = test_server().await;

        let response = server
            .post("/insurance")
            .json(&insurance_body("usa", "not-a-uuid"))
            .await;
        assert_eq!(response.status_code(), 404);
    }
}

mod pages_and_health {
    use super::*;

    #[tokio::test]
    async fn test_health_endpoints() {
        let server = test_server().await;

        server.get("/health").await.assert_status_ok();
        server.get("/health/ready").await.assert_status_ok();
    }

    #[tokio::test]
    async fn test_landing_page_renders() {
        let server = test_server().await;

        let response = server.get("/").await;
        response.assert_status_ok();
        assert!(response.text().contains("Insurance Search Portal"));
    }

    #[tokio::test]
    async fn test_search_page_substitutes_country() {
        let server = test_server().await;

        let response = server.get("/search/india").await;
        response.assert_status_ok();

        let page = response.text();
        assert!(page.contains("const country = 'india'"));
        assert!(!page.contains("{{country}}"));
    }
}
