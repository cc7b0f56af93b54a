//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{middleware, response::IntoResponse, routing::get, Router};

use super::handlers;
use crate::infrastructure::metrics;
use crate::presentation::middleware::track_metrics;
use crate::startup::AppState;

/// Create the main API router with the ship routes under `base_path`
pub fn create_router(state: AppState, base_path: &str) -> Router {
    let api = ship_routes();
    let router = if base_path.is_empty() || base_path == "/" {
        Router::new().merge(api)
    } else {
        Router::new().nest(base_path, api)
    };

    router
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        // Prometheus metrics endpoint
        .route("/metrics", get(metrics_handler))
        .route_layer(middleware::from_fn(track_metrics))
        .with_state(state)
}

/// Prometheus metrics endpoint handler
async fn metrics_handler() -> impl IntoResponse {
    let metrics = metrics::gather_metrics();
    (
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        metrics,
    )
}

/// Ship routes
fn ship_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/ships",
            get(handlers::ship::list_ships).post(handlers::ship::create_ship),
        )
        .route("/ships/count", get(handlers::ship::count_ships))
        .route(
            "/ships/{id}",
            get(handlers::ship::get_ship)
                .post(handlers::ship::update_ship)
                .delete(handlers::ship::delete_ship),
        )
}
