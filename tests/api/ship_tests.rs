//! Ship API Tests
//!
//! End-to-end tests against the router with an in-memory store.

use axum::body::Bytes;
use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use test_case::test_case;

use crate::common::{ids, ship_body, TestApp, BASE, YEAR_2800_MILLIS, YEAR_3018_MILLIS};

// ============================================================================
// Create
// ============================================================================

#[tokio::test]
async fn test_create_ship_computes_rating() {
    let app = TestApp::new();

    let ship = app
        .create(json!({
            "name": "Levi",
            "planet": "Earth",
            "shipType": "MILITARY",
            "prodDate": YEAR_2800_MILLIS,
            "speed": 0.5,
            "crewSize": 10
        }))
        .await;

    assert_eq!(ship["id"], json!(1));
    assert_eq!(ship["name"], json!("Levi"));
    assert_eq!(ship["shipType"], json!("MILITARY"));
    assert_eq!(ship["prodDate"], json!(YEAR_2800_MILLIS));
    assert_eq!(ship["isUsed"], json!(false));
    assert_eq!(ship["rating"], json!(0.18));
}

#[tokio::test]
async fn test_create_ignores_client_id_and_rating() {
    let app = TestApp::new();

    let mut body = ship_body();
    body["id"] = json!(77);
    body["rating"] = json!(99.0);
    body["isUsed"] = json!(true);
    let ship = app.create(body).await;

    assert_eq!(ship["id"], json!(1));
    assert_eq!(ship["isUsed"], json!(true));
    // 80 * 0.5 * 0.5 / (3019 - 2900 + 1)
    assert_eq!(ship["rating"], json!(0.17));
}

#[test_case("name", json!("") ; "empty name")]
#[test_case("name", json!("x".repeat(51)) ; "name too long")]
#[test_case("planet", json!(null) ; "missing planet")]
#[test_case("speed", json!(1.0) ; "speed too high")]
#[test_case("speed", json!(0.001) ; "speed too low")]
#[test_case("crewSize", json!(0) ; "crew too small")]
#[test_case("crewSize", json!(10_000) ; "crew too large")]
#[test_case("prodDate", json!(YEAR_2800_MILLIS - 1) ; "built before 2800")]
#[test_case("prodDate", json!(-5) ; "negative date")]
#[test_case("shipType", json!("SPACESHIP") ; "unknown ship type")]
#[tokio::test]
async fn test_create_rejects_invalid_ship(field: &str, value: Value) {
    let app = TestApp::new();

    let mut body = ship_body();
    body[field] = value;
    let response = app.server.post(BASE).json(&body).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(app.count().await, 0);
}

#[tokio::test]
async fn test_create_rejects_malformed_json() {
    let app = TestApp::new();

    let response = app
        .server
        .post(BASE)
        .bytes(Bytes::from_static(b"{ not json"))
        .content_type("application/json")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(app.count().await, 0);
}

// ============================================================================
// Get / Update / Delete
// ============================================================================

#[tokio::test]
async fn test_get_ship_by_id() {
    let app = TestApp::new();
    let created = app.create(ship_body()).await;

    let response = app.server.get(&format!("{BASE}/1")).await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), created);
}

#[test_case("0" ; "zero")]
#[test_case("-3" ; "negative")]
#[test_case("abc" ; "not a number")]
#[test_case("1.5" ; "fractional")]
#[tokio::test]
async fn test_invalid_id_is_bad_request(id: &str) {
    let app = TestApp::new();
    app.create(ship_body()).await;

    app.server
        .get(&format!("{BASE}/{id}"))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    app.server
        .delete(&format!("{BASE}/{id}"))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    app.server
        .post(&format!("{BASE}/{id}"))
        .json(&json!({ "speed": 0.2 }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_id_is_not_found() {
    let app = TestApp::new();

    app.server.get(&format!("{BASE}/42")).await.assert_status_not_found();
    app.server.delete(&format!("{BASE}/42")).await.assert_status_not_found();
    app.server
        .post(&format!("{BASE}/42"))
        .json(&json!({ "speed": 0.2 }))
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_update_changes_only_present_fields() {
    let app = TestApp::new();
    let created = app.create(ship_body()).await;

    let response = app
        .server
        .post(&format!("{BASE}/1"))
        .json(&json!({ "speed": 0.99, "prodDate": YEAR_3018_MILLIS }))
        .await;

    response.assert_status_ok();
    let updated = response.json::<Value>();
    assert_eq!(updated["name"], created["name"]);
    assert_eq!(updated["planet"], created["planet"]);
    assert_eq!(updated["crewSize"], created["crewSize"]);
    assert_eq!(updated["speed"], json!(0.99));
    assert_eq!(updated["prodDate"], json!(YEAR_3018_MILLIS));
    // 80 * 0.99 / (3019 - 3018 + 1)
    assert_eq!(updated["rating"], json!(39.6));

    let fetched = app.server.get(&format!("{BASE}/1")).await.json::<Value>();
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn test_update_with_empty_body_keeps_ship() {
    let app = TestApp::new();
    let created = app.create(ship_body()).await;

    let response = app.server.post(&format!("{BASE}/1")).json(&json!({})).await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), created);
}

#[tokio::test]
async fn test_update_marks_ship_used() {
    let app = TestApp::new();
    let created = app.create(ship_body()).await;

    let updated = app
        .server
        .post(&format!("{BASE}/1"))
        .json(&json!({ "isUsed": true }))
        .await
        .json::<Value>();

    assert_eq!(updated["isUsed"], json!(true));
    assert!(updated["rating"].as_f64() < created["rating"].as_f64());
}

#[tokio::test]
async fn test_invalid_update_leaves_ship_untouched() {
    let app = TestApp::new();
    let created = app.create(ship_body()).await;

    app.server
        .post(&format!("{BASE}/1"))
        .json(&json!({ "name": "Renamed", "crewSize": 0 }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let fetched = app.server.get(&format!("{BASE}/1")).await.json::<Value>();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let app = TestApp::new();
    app.create(ship_body()).await;

    app.server
        .delete(&format!("{BASE}/1"))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    app.server.get(&format!("{BASE}/1")).await.assert_status_not_found();
    app.server.delete(&format!("{BASE}/1")).await.assert_status_not_found();
    assert_eq!(app.count().await, 0);
}

// ============================================================================
// List / Count
// ============================================================================

async fn seed_fleet(app: &TestApp) {
    app.seed(json!({ "name": "Levi", "shipType": "MILITARY", "speed": 0.4, "crewSize": 100 })).await;
    app.seed(json!({ "name": "Aurora", "shipType": "TRANSPORT", "speed": 0.2, "crewSize": 5 })).await;
    app.seed(json!({ "name": "Leviathan", "shipType": "MILITARY", "speed": 0.9, "crewSize": 40, "isUsed": true })).await;
    app.seed(json!({ "name": "Bazaar", "planet": "Mars", "shipType": "MERCHANT", "speed": 0.3, "crewSize": 12 })).await;
    app.seed(json!({ "name": "Comet", "shipType": "MILITARY", "speed": 0.1, "crewSize": 2 })).await;
}

#[tokio::test]
async fn test_list_defaults_to_first_page_of_three_by_id() {
    let app = TestApp::new();
    seed_fleet(&app).await;

    let page = app.server.get(BASE).await.json::<Value>();

    assert_eq!(ids(&page), vec![1, 2, 3]);
}

#[tokio::test]
async fn test_list_pages() {
    let app = TestApp::new();
    seed_fleet(&app).await;

    let page = app
        .server
        .get(BASE)
        .add_query_param("pageNumber", 1)
        .add_query_param("pageSize", 2)
        .await
        .json::<Value>();
    assert_eq!(ids(&page), vec![3, 4]);

    let beyond = app
        .server
        .get(BASE)
        .add_query_param("pageNumber", 10)
        .await
        .json::<Value>();
    assert_eq!(beyond, json!([]));
}

#[test_case("SPEED", vec![5, 2, 4, 1, 3] ; "by speed")]
#[test_case("CREW_SIZE", vec![5, 2, 4, 3, 1] ; "by crew size")]
#[test_case("NAME", vec![2, 4, 5, 1, 3] ; "by name")]
#[test_case("ID", vec![1, 2, 3, 4, 5] ; "by id")]
#[tokio::test]
async fn test_list_order(order: &str, expected: Vec<i64>) {
    let app = TestApp::new();
    seed_fleet(&app).await;

    let page = app
        .server
        .get(BASE)
        .add_query_param("order", order)
        .add_query_param("pageSize", 10)
        .await
        .json::<Value>();

    assert_eq!(ids(&page), expected);
}

#[test_case(&[("name", "Levi")], vec![1, 3] ; "name substring")]
#[test_case(&[("name", "levi")], vec![] ; "name is case sensitive")]
#[test_case(&[("planet", "Mar")], vec![4] ; "planet substring")]
#[test_case(&[("shipType", "MILITARY")], vec![1, 3, 5] ; "ship type")]
#[test_case(&[("isUsed", "true")], vec![3] ; "used only")]
#[test_case(&[("minSpeed", "0.3")], vec![1, 3, 4] ; "min speed only")]
#[test_case(&[("maxSpeed", "0.3")], vec![2, 4, 5] ; "max speed only")]
#[test_case(&[("minCrewSize", "5"), ("maxCrewSize", "40")], vec![2, 3, 4] ; "crew size range")]
#[test_case(&[("minRating", "0.2"), ("maxRating", "0.3")], vec![1, 3, 4] ; "rating range")]
#[test_case(&[("before", "29348006400000")], vec![1, 2, 3, 4, 5] ; "before only inclusive")]
#[test_case(&[("before", "29348006399999")], vec![] ; "before only excludes later")]
#[test_case(&[("shipType", "MILITARY"), ("minSpeed", "0.3")], vec![1, 3] ; "combined")]
#[tokio::test]
async fn test_list_filters(params: &[(&str, &str)], expected: Vec<i64>) {
    let app = TestApp::new();
    seed_fleet(&app).await;

    let mut request = app.server.get(BASE).add_query_param("pageSize", 10);
    for (key, value) in params {
        request = request.add_query_param(key, value);
    }
    let page = request.await.json::<Value>();

    assert_eq!(ids(&page), expected);
}

#[tokio::test]
async fn test_list_filters_by_production_date() {
    let app = TestApp::new();
    app.seed(json!({ "prodDate": YEAR_2800_MILLIS })).await;
    app.seed(json!({})).await;
    app.seed(json!({ "prodDate": YEAR_3018_MILLIS })).await;

    let page = app
        .server
        .get(BASE)
        .add_query_param("after", YEAR_2800_MILLIS + 1)
        .add_query_param("before", YEAR_3018_MILLIS)
        .await
        .json::<Value>();

    assert_eq!(ids(&page), vec![2, 3]);
}

#[tokio::test]
async fn test_count_ignores_paging() {
    let app = TestApp::new();
    seed_fleet(&app).await;

    let count = app
        .server
        .get(&format!("{BASE}/count"))
        .add_query_param("shipType", "MILITARY")
        .add_query_param("minSpeed", "0.3")
        .add_query_param("pageSize", 1)
        .await
        .json::<i64>();

    assert_eq!(count, 2);
    assert_eq!(app.count().await, 5);
}

#[test_case("pageSize", "0" ; "empty page")]
#[test_case("pageNumber", "-1" ; "negative page")]
#[test_case("order", "COLOR" ; "unknown order")]
#[test_case("minSpeed", "fast" ; "non numeric bound")]
#[test_case("shipType", "YACHT" ; "unknown ship type")]
#[test_case("minSpeed", "NaN" ; "nan speed bound")]
#[test_case("maxRating", "inf" ; "infinite rating bound")]
#[tokio::test]
async fn test_list_rejects_bad_query(key: &str, value: &str) {
    let app = TestApp::new();
    seed_fleet(&app).await;

    app.server
        .get(BASE)
        .add_query_param(key, value)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_error_body_shape() {
    let app = TestApp::new();

    let body = app.server.get(&format!("{BASE}/9")).await.json::<Value>();

    assert_eq!(body["code"], json!(10001));
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_count_rejects_nan_bound() {
    let app = TestApp::new();
    app.create(ship_body()).await;

    app.server
        .get(&format!("{BASE}/count"))
        .add_query_param("maxSpeed", "NaN")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_rejects_page_past_addressable_range() {
    let app = TestApp::new();
    seed_fleet(&app).await;

    app.server
        .get(BASE)
        .add_query_param("pageNumber", u32::MAX)
        .add_query_param("pageSize", u32::MAX)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_validation_message_uses_wire_field_names() {
    let app = TestApp::new();

    let mut body = ship_body();
    body["crewSize"] = json!(0);
    let message = app.server.post(BASE).json(&body).await.json::<Value>()["message"]
        .as_str()
        .unwrap_or_default()
        .to_owned();

    assert!(message.contains("crewSize"), "{message}");
    assert!(!message.contains("crew_size"), "{message}");
}
