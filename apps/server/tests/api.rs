use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use nestegg_server::{api::app_router, build_state, config::Config};
use serde_json::{json, Value};
use tempfile::{tempdir, TempDir};
use tower::ServiceExt;

fn test_config(tmp: &TempDir, seed_demo_data: bool) -> Config {
    Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        db_path: tmp.path().join("test.db").to_string_lossy().to_string(),
        cors_allow: vec!["*".to_string()],
        request_timeout: Duration::from_secs(30),
        static_dir: tmp.path().join("dist").to_string_lossy().to_string(),
        seed_demo_data,
    }
}

async fn build_app(seed_demo_data: bool) -> (Router, TempDir) {
    let tmp = tempdir().unwrap();
    let config = test_config(&tmp, seed_demo_data);
    let state = build_state(&config).await.unwrap();
    (app_router(state, &config), tmp)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, value)
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(
        app,
        Request::builder().uri(uri).body(Body::empty()).unwrap(),
    )
    .await
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

#[tokio::test]
async fn health_and_readiness_respond_ok() {
    let (app, _tmp) = build_app(false).await;
    for uri in ["/api/healthz", "/api/readyz"] {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(body, "ok".as_bytes());
    }
}

#[tokio::test]
async fn fixed_contribution_projection() {
    let (app, _tmp) = build_app(false).await;
    let (status, body) = get_json(
        &app,
        "/api/retirement-impact?currentContribution=250&contributionType=fixed&currentAge=30&salary=80000&retirementAge=65&currentSavings=0",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["currentAge"], 30);
    assert_eq!(body["retirementAge"], 65);
    assert_eq!(body["yearsToRetirement"], 35);
    assert_eq!(body["annualContribution"], 3000);
    assert_eq!(body["futureValueOfCurrent"], 0);
    assert_eq!(body["futureValueOfContributions"], 270_961);
    assert_eq!(body["estimatedSavings"], 270_961);
    assert_eq!(body["totalContributions"], 105_000);
    assert_eq!(body["investmentGrowth"], 165_961);
    assert_eq!(body["annualReturnRate"], json!(0.05));
}

#[tokio::test]
async fn percentage_contribution_projection_with_savings() {
    let (app, _tmp) = build_app(false).await;
    let (status, body) = get_json(
        &app,
        "/api/retirement-impact?currentContribution=5&contributionType=percentage&currentAge=40&salary=100000&retirementAge=65&currentSavings=10000",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["annualContribution"], 5000);
    assert_eq!(body["yearsToRetirement"], 25);
    assert_eq!(body["futureValueOfCurrent"], 33_864);
    assert_eq!(body["futureValueOfContributions"], 238_635);
    assert_eq!(body["estimatedSavings"], 272_499);
    assert_eq!(body["totalContributions"], 125_000);
    assert_eq!(body["investmentGrowth"], 137_499);
}

#[tokio::test]
async fn current_savings_defaults_to_zero() {
    let (app, _tmp) = build_app(false).await;
    let (status, body) = get_json(
        &app,
        "/api/retirement-impact?currentContribution=250&contributionType=fixed&currentAge=30&salary=80000&retirementAge=65",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["futureValueOfCurrent"], 0);
    assert_eq!(body["estimatedSavings"], 270_961);
}

#[tokio::test]
async fn missing_parameters_are_rejected() {
    let (app, _tmp) = build_app(false).await;
    let (status, body) =
        get_json(&app, "/api/retirement-impact?currentContribution=250&salary=80000").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
    let message = body["message"].as_str().unwrap();
    assert!(message.contains(
        "Missing required parameters: currentContribution, contributionType, currentAge, salary, retirementAge"
    ));
    assert!(body.get("estimatedSavings").is_none());
}

#[tokio::test]
async fn unknown_contribution_type_is_rejected() {
    let (app, _tmp) = build_app(false).await;
    let (status, body) = get_json(
        &app,
        "/api/retirement-impact?currentContribution=250&contributionType=weekly&currentAge=30&salary=80000&retirementAge=65",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("weekly"));
}

#[tokio::test]
async fn non_numeric_parameter_is_rejected() {
    let (app, _tmp) = build_app(false).await;
    let (status, _) = get_json(
        &app,
        "/api/retirement-impact?currentContribution=abc&contributionType=fixed&currentAge=30&salary=80000&retirementAge=65",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn retirement_age_already_passed_still_projects() {
    let (app, _tmp) = build_app(false).await;
    let (status, body) = get_json(
        &app,
        "/api/retirement-impact?currentContribution=250&contributionType=fixed&currentAge=70&salary=80000&retirementAge=65&currentSavings=1000",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["yearsToRetirement"], -5);
    assert_eq!(body["futureValueOfCurrent"], 784);
    assert_eq!(body["futureValueOfContributions"], -12_988);
    assert_eq!(body["totalContributions"], -15_000);
}

#[tokio::test]
async fn ages_beyond_a_human_lifetime_are_rejected() {
    let (app, _tmp) = build_app(false).await;
    let (status, body) = get_json(
        &app,
        "/api/retirement-impact?currentContribution=250&contributionType=fixed&currentAge=0&salary=80000&retirementAge=100000",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
    assert!(body["message"].as_str().unwrap().contains("retirementAge"));
    assert!(body.get("estimatedSavings").is_none());
}

#[tokio::test]
async fn settings_default_until_saved() {
    let (app, _tmp) = build_app(false).await;
    let (status, body) = get_json(&app, "/api/user-settings").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["contribution_type"], "fixed");
    assert_eq!(body["contribution_value"], json!(250.0));
    assert_eq!(body["age"], 30);
    assert_eq!(body["salary"], json!(80000.0));
    assert_eq!(body["retirement_age"], 65);
    assert!(body.get("id").is_none());
}

#[tokio::test]
async fn saving_settings_replaces_the_snapshot() {
    let (app, _tmp) = build_app(false).await;
    let (status, saved) = post_json(
        &app,
        "/api/user-settings",
        json!({
            "contribution_type": "percentage",
            "contribution_value": 6,
            "age": 35,
            "salary": 95000,
            "retirement_age": 67
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(saved["message"], "Settings updated successfully");
    assert_eq!(saved["contribution_type"], "percentage");
    assert!(saved["id"].is_number());

    let (_, current) = get_json(&app, "/api/user-settings").await;
    assert_eq!(current["contribution_type"], "percentage");
    assert_eq!(current["contribution_value"], json!(6.0));
    assert_eq!(current["age"], 35);
    assert_eq!(current["retirement_age"], 67);
    assert_eq!(current["id"], saved["id"]);
    assert!(current.get("message").is_none());
}

#[tokio::test]
async fn invalid_settings_are_not_saved() {
    let (app, _tmp) = build_app(false).await;
    let (status, body) = post_json(
        &app,
        "/api/user-settings",
        json!({ "contribution_type": "percentage", "contribution_value": 150 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);

    let (status, _) = post_json(&app, "/api/user-settings", json!({ "age": 40 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, current) = get_json(&app, "/api/user-settings").await;
    assert_eq!(current["contribution_type"], "fixed");
    assert!(current.get("id").is_none());
}

#[tokio::test]
async fn malformed_json_body_gets_error_envelope() {
    let (app, _tmp) = build_app(false).await;
    let (status, body) = send(
        &app,
        Request::builder()
            .method(Method::POST)
            .uri("/api/user-settings")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
}

#[tokio::test]
async fn demo_history_is_seeded_on_startup() {
    let (app, _tmp) = build_app(true).await;
    let (status, body) = get_json(&app, "/api/ytd-contributions").await;

    assert_eq!(status, StatusCode::OK);
    let entries = body["contributions"].as_array().unwrap();
    assert_eq!(entries.len(), 11);
    assert_eq!(entries[0]["date"], "2025-01-15");
    assert_eq!(entries[0]["type"], "contribution");
    assert_eq!(body["totalYTD"], json!(2750.0));
}

#[tokio::test]
async fn recorded_contributions_count_toward_ytd() {
    let (app, _tmp) = build_app(false).await;
    let (_, empty) = get_json(&app, "/api/ytd-contributions").await;
    assert_eq!(empty["contributions"], json!([]));
    assert_eq!(empty["totalYTD"], json!(0.0));

    let (status, stored) = post_json(
        &app,
        "/api/contributions",
        json!({ "date": "2025-12-15", "amount": 300.5 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stored["type"], "contribution");
    assert!(stored["id"].is_number());

    let (_, ytd) = get_json(&app, "/api/ytd-contributions").await;
    assert_eq!(ytd["contributions"].as_array().unwrap().len(), 1);
    assert_eq!(ytd["totalYTD"], json!(300.5));

    let (status, _) = post_json(
        &app,
        "/api/contributions",
        json!({ "date": "2025-12-16", "amount": -10 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn current_projection_uses_saved_settings_and_ytd() {
    let (app, _tmp) = build_app(true).await;
    let (status, body) = get_json(&app, "/api/retirement-impact/current").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["yearsToRetirement"], 35);
    assert_eq!(body["annualContribution"], 3000);
    assert_eq!(body["futureValueOfCurrent"], 15_169);
    assert_eq!(body["estimatedSavings"], 286_130);

    post_json(
        &app,
        "/api/user-settings",
        json!({
            "contribution_type": "percentage",
            "contribution_value": 5,
            "age": 40,
            "salary": 100000,
            "retirement_age": 65
        }),
    )
    .await;
    let (_, body) = get_json(&app, "/api/retirement-impact/current").await;
    assert_eq!(body["annualContribution"], 5000);
    assert_eq!(body["yearsToRetirement"], 25);
}

#[tokio::test]
async fn openapi_document_lists_routes() {
    let (app, _tmp) = build_app(false).await;
    let (status, doc) = get_json(&app, "/api/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"].get("/api/retirement-impact").is_some());
    assert!(doc["paths"].get("/api/user-settings").is_some());
}
