//! Health Check and Metrics API Tests

use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{ship_body, TestApp};

#[tokio::test]
async fn test_health_check_returns_ok() {
    let app = TestApp::new();

    let response = app.server.get("/health").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["status"], json!("healthy"));
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_liveness_probe() {
    let app = TestApp::new();

    let body = app.server.get("/health/live").await.json::<Value>();

    assert_eq!(body, json!({ "status": "alive" }));
}

#[tokio::test]
async fn test_metrics_expose_request_counters() {
    let app = TestApp::new();
    app.create(ship_body()).await;

    let response = app.server.get("/metrics").await;

    response.assert_status_ok();
    let text = response.text();
    assert!(text.contains("starship_registry_http_requests_total"));
    assert!(text.contains("/rest/ships"));
}

#[tokio::test]
async fn test_ship_routes_live_under_base_path() {
    let app = TestApp::new();

    app.server.get("/ships").await.assert_status_not_found();
    app.server.get("/rest/ships").await.assert_status_ok();
}
