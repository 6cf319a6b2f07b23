use std::time::Duration;

use agrifin_server::{api::app_router, build_state, config::Config};
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use rust_decimal::Decimal;
use serde_json::{json, Value};
use tempfile::{tempdir, TempDir};
use tower::ServiceExt;

fn test_config(tmp: &TempDir) -> Config {
    Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        db_path: tmp.path().join("test.db").to_string_lossy().into_owned(),
        cors_allow: vec!["*".to_string()],
        request_timeout: Duration::from_secs(30),
        disbursement_address: "0x742d35Cc6634C0532925a3b844Bc454e4438f44e".to_string(),
        premium_address: "0x742d35Cc6634C0532925a3b844Bc454e4438f44e".to_string(),
        wallet_balance: Decimal::TEN,
        network_id: "0x1".to_string(),
    }
}

async fn build_test_router() -> (TempDir, Router) {
    let tmp = tempdir().unwrap();
    let config = test_config(&tmp);
    let state = build_state(&config).await.unwrap();
    (tmp, app_router(state, &config))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, value)
}

fn seed_loan() -> Value {
    json!({
        "loanType": "Seed & Fertilizer Loan",
        "amount": "5000",
        "purpose": "buy seeds",
        "repaymentTerm": "6months"
    })
}

#[tokio::test]
async fn healthz_reports_ok() {
    let (_tmp, app) = build_test_router().await;
    let (status, body) = send(&app, Method::GET, "/api/v1/healthz", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn profile_lifecycle() {
    let (_tmp, app) = build_test_router().await;

    let (status, body) = send(&app, Method::GET, "/api/v1/profile", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 404);

    let input = json!({
        "name": "Ravi Kumar",
        "mobileNumber": "9876543210",
        "nationalId": "123456789012",
        "location": "Guntur",
        "primaryCrop": "rice",
        "farmSizeAcres": "4.5",
        "irrigationType": "flood"
    });
    let (status, saved) = send(&app, Method::PUT, "/api/v1/profile", Some(input)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(saved["farmSizeAcres"], "4.5");

    let (_, loaded) = send(&app, Method::GET, "/api/v1/profile", None).await;
    assert_eq!(loaded, saved);

    let bad = json!({
        "name": "Ravi Kumar",
        "mobileNumber": "12345",
        "nationalId": "123456789012",
        "location": "Guntur",
        "primaryCrop": "rice",
        "farmSizeAcres": "4.5"
    });
    let (status, body) = send(&app, Method::PUT, "/api/v1/profile", Some(bad)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);

    let (status, _) = send(&app, Method::DELETE, "/api/v1/profile", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, Method::GET, "/api/v1/profile", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn loan_submission_and_review() {
    let (_tmp, app) = build_test_router().await;

    let (status, loan) = send(&app, Method::POST, "/api/v1/loans", Some(seed_loan())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(loan["status"], "pending");
    assert_eq!(loan["amount"], "5000");
    assert_eq!(loan["loanType"], "seed_fertilizer");
    let id = loan["id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/loans",
        Some(json!({
            "loanType": "seed_fertilizer",
            "amount": "0",
            "purpose": "buy seeds",
            "repaymentTerm": "6months"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);

    let (_, review) = send(&app, Method::GET, "/api/v1/admin/loans", None).await;
    assert_eq!(review[0]["id"], id.as_str());
    assert_eq!(review[0]["farmerName"], "Unknown Farmer");

    let approve_uri = format!("/api/v1/loans/{}/approve", id);
    let (status, approved) = send(&app, Method::POST, &approve_uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(approved["status"], "approved");
    assert!(approved["transactionHash"]
        .as_str()
        .unwrap()
        .starts_with("0x"));

    let (status, body) = send(&app, Method::POST, &approve_uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 404);

    let reject_uri = format!("/api/v1/loans/{}/reject", id);
    let (status, _) = send(&app, Method::POST, &reject_uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, pending) = send(&app, Method::GET, "/api/v1/loans?status=pending", None).await;
    assert_eq!(pending, json!([]));

    let (_, all) = send(&app, Method::GET, "/api/v1/loans", None).await;
    assert_eq!(all.as_array().unwrap().len(), 1);

    let (status, _) = send(&app, Method::GET, "/api/v1/loans/missing", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn loan_types_catalog() {
    let (_tmp, app) = build_test_router().await;
    let (status, types) = send(&app, Method::GET, "/api/v1/loans/types", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(types.as_array().unwrap().len(), 3);
    assert_eq!(types[2]["name"], "Seed & Fertilizer Loan");
}

#[tokio::test]
async fn insurance_purchase_and_quote() {
    let (_tmp, app) = build_test_router().await;
    let request = json!({ "insuranceType": "Drought Protection", "cropAreaAcres": "2" });

    let (status, quote) = send(&app, Method::POST, "/api/v1/insurance/quote", Some(request.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(quote["premium"], "4000");
    assert_eq!(quote["maxCoverage"], "100000");

    let (status, policy) = send(&app, Method::POST, "/api/v1/insurance", Some(request)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(policy["status"], "active");
    assert_eq!(policy["cropAreaAcres"], "2");
    assert!(policy["policyNumber"].as_str().unwrap().starts_with("POL-"));
    assert!(policy.get("transactionHash").is_none());

    let (status, paid) = send(
        &app,
        Method::POST,
        "/api/v1/insurance",
        Some(json!({
            "insuranceType": "weather_protection",
            "cropAreaAcres": "1",
            "payWithWallet": true
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(paid["transactionHash"].as_str().unwrap().starts_with("0x"));

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/insurance",
        Some(json!({ "insuranceType": "Crop Protection", "cropAreaAcres": "-3" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, policies) = send(&app, Method::GET, "/api/v1/insurance", None).await;
    assert_eq!(policies.as_array().unwrap().len(), 2);

    let policy_uri = format!("/api/v1/insurance/{}", policy["id"].as_str().unwrap());
    let (status, fetched) = send(&app, Method::GET, &policy_uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, policy);
}

#[tokio::test]
async fn dashboard_and_risk() {
    let (_tmp, app) = build_test_router().await;
    send(&app, Method::POST, "/api/v1/loans", Some(seed_loan())).await;

    let (status, summary) = send(&app, Method::GET, "/api/v1/dashboard", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["loans"]["total"], 1);
    assert_eq!(summary["loans"]["pending"], 1);
    assert_eq!(summary["insurance"]["totalPolicies"], 0);
    assert!(summary["profile"].is_null());

    let (status, risk) = send(&app, Method::GET, "/api/v1/risk", None).await;
    assert_eq!(status, StatusCode::OK);
    let score = risk["score"].as_u64().unwrap();
    assert!((30..=85).contains(&score));
    assert_eq!(risk["eligibleToApply"], score >= 45);
}

#[tokio::test]
async fn wallet_connect() {
    let (_tmp, app) = build_test_router().await;
    let (status, wallet) = send(&app, Method::POST, "/api/v1/wallet/connect", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(wallet["networkId"], "0x1");
    assert!(wallet["address"].as_str().unwrap().starts_with("0x"));
}

#[tokio::test]
async fn fractional_policy_reloads_unchanged() {
    let (_tmp, app) = build_test_router().await;
    let request = json!({
        "insuranceType": "weather_protection",
        "cropAreaAcres": "1.123456789012345678"
    });

    let (status, policy) = send(&app, Method::POST, "/api/v1/insurance", Some(request)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(policy["premium"], "3370.370367037037034000");

    let policy_uri = format!("/api/v1/insurance/{}", policy["id"].as_str().unwrap());
    let (_, fetched) = send(&app, Method::GET, &policy_uri, None).await;
    assert_eq!(fetched, policy);
}

#[tokio::test]
async fn oversized_crop_area_is_rejected() {
    let (_tmp, app) = build_test_router().await;
    let request = json!({
        "insuranceType": "crop_protection",
        "cropAreaAcres": "79228162514264337593543950335"
    });

    let (status, body) = send(&app, Method::POST, "/api/v1/insurance/quote", Some(request.clone())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);

    let (status, _) = send(&app, Method::POST, "/api/v1/insurance", Some(request)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, summary) = send(&app, Method::GET, "/api/v1/dashboard", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["insurance"]["totalPolicies"], 0);
}

#[tokio::test]
async fn transfers_are_bound_to_configured_recipients() {
    let tmp = tempdir().unwrap();
    let mut config = test_config(&tmp);
    config.premium_address = "0xpremiums".to_string();

    let state = build_state(&config).await.unwrap();
    assert_eq!(state.disbursement.recipient(), config.disbursement_address);
    assert_eq!(state.premium_collection.recipient(), "0xpremiums");
}
