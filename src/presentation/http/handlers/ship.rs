//! Ship Handlers

use axum::{extract::State, http::StatusCode, Json};

use crate::application::dto::request::{ShipFilterParams, ShipPageParams};
use crate::application::dto::response::ShipResponse;
use crate::domain::ShipPatch;
use crate::presentation::http::extractors::{ApiJson, ApiQuery, ShipId};
use crate::shared::error::AppError;
use crate::startup::AppState;

/// List one page of ships matching the query filters
pub async fn list_ships(
    State(state): State<AppState>,
    ApiQuery(filter): ApiQuery<ShipFilterParams>,
    ApiQuery(paging): ApiQuery<ShipPageParams>,
) -> Result<Json<Vec<ShipResponse>>, AppError> {
    let ships = state
        .ships
        .list_ships(filter.into_filter()?, paging.order, paging.page())
        .await?;

    Ok(Json(ships.into_iter().map(ShipResponse::from).collect()))
}

/// Count all ships matching the query filters
pub async fn count_ships(
    State(state): State<AppState>,
    ApiQuery(filter): ApiQuery<ShipFilterParams>,
) -> Result<Json<i64>, AppError> {
    let count = state.ships.count_ships(filter.into_filter()?).await?;
    Ok(Json(count))
}

/// Register a new ship
pub async fn create_ship(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<ShipPatch>,
) -> Result<Json<ShipResponse>, AppError> {
    let ship = state.ships.create_ship(body).await?;
    Ok(Json(ShipResponse::from(ship)))
}

/// Get ship by ID
pub async fn get_ship(
    State(state): State<AppState>,
    ShipId(id): ShipId,
) -> Result<Json<ShipResponse>, AppError> {
    let ship = state.ships.get_ship(id).await?;
    Ok(Json(ShipResponse::from(ship)))
}

/// Update the fields present in the body
pub async fn update_ship(
    State(state): State<AppState>,
    ShipId(id): ShipId,
    ApiJson(body): ApiJson<ShipPatch>,
) -> Result<Json<ShipResponse>, AppError> {
    let ship = state.ships.update_ship(id, body).await?;
    Ok(Json(ShipResponse::from(ship)))
}

/// Delete ship
pub async fn delete_ship(
    State(state): State<AppState>,
    ShipId(id): ShipId,
) -> Result<StatusCode, AppError> {
    state.ships.delete_ship(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
