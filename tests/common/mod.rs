//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test infrastructure.

use axum_test::TestServer;
use fake::faker::lorem::en::Word;
use fake::Fake;
use serde_json::{json, Value};

use starship_registry::presentation::http::routes::create_router;
use starship_registry::startup::AppState;

/// 2800-01-01T00:00:00Z
pub const YEAR_2800_MILLIS: i64 = 26_192_246_400_000;

/// 2900-01-01T00:00:00Z
pub const YEAR_2900_MILLIS: i64 = 29_348_006_400_000;

/// 3018-01-01T00:00:00Z
pub const YEAR_3018_MILLIS: i64 = 33_071_673_600_000;

pub const BASE: &str = "/rest/ships";

/// Test application backed by a fresh in-memory store
pub struct TestApp {
    pub server: TestServer,
}

impl TestApp {
    pub fn new() -> Self {
        let router = create_router(AppState::in_memory(), "/rest");
        Self {
            server: TestServer::new(router).expect("test server"),
        }
    }

    /// Create a ship from a JSON body and return the response body
    pub async fn create(&self, body: Value) -> Value {
        let response = self.server.post(BASE).json(&body).await;
        response.assert_status_ok();
        response.json::<Value>()
    }

    /// Seed a ship that differs from the defaults by the given fields
    pub async fn seed(&self, overrides: Value) -> Value {
        let mut body = ship_body();
        if let (Some(body), Some(overrides)) = (body.as_object_mut(), overrides.as_object()) {
            for (key, value) in overrides {
                body.insert(key.clone(), value.clone());
            }
        }
        self.create(body).await
    }

    pub async fn count(&self) -> i64 {
        self.server.get(&format!("{BASE}/count")).await.json::<i64>()
    }
}

/// A valid creation body with a random name
pub fn ship_body() -> Value {
    let name: String = Word().fake();
    json!({
        "name": name,
        "planet": "Earth",
        "shipType": "TRANSPORT",
        "prodDate": YEAR_2900_MILLIS,
        "speed": 0.5,
        "crewSize": 10
    })
}

/// Ids of a listed page, in response order
pub fn ids(page: &Value) -> Vec<i64> {
    page.as_array()
        .map(|ships| ships.iter().filter_map(|s| s["id"].as_i64()).collect())
        .unwrap_or_default()
}
