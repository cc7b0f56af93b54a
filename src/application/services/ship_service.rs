//! Ship Service
//!
//! Validation, rating and persistence orchestration for ships.

use std::sync::Arc;

use async_trait::async_trait;
use validator::ValidationErrors;

use crate::domain::{PageRequest, Ship, ShipFilter, ShipOrder, ShipPatch, ShipRepository};
use crate::infrastructure::metrics;
use crate::shared::error::AppError;
use crate::shared::validation;

/// Ship service trait
#[async_trait]
pub trait ShipService: Send + Sync {
    /// List one page of ships matching `filter`
    async fn list_ships(
        &self,
        filter: ShipFilter,
        order: ShipOrder,
        page: PageRequest,
    ) -> Result<Vec<Ship>, ShipError>;

    /// Count all ships matching `filter`
    async fn count_ships(&self, filter: ShipFilter) -> Result<i64, ShipError>;

    /// Validate and register a new ship
    async fn create_ship(&self, patch: ShipPatch) -> Result<Ship, ShipError>;

    /// Get ship by ID
    async fn get_ship(&self, id: i64) -> Result<Ship, ShipError>;

    /// Apply a partial update
    async fn update_ship(&self, id: i64, patch: ShipPatch) -> Result<Ship, ShipError>;

    /// Delete ship
    async fn delete_ship(&self, id: i64) -> Result<(), ShipError>;
}

/// Ship service errors
#[derive(Debug, thiserror::Error)]
pub enum ShipError {
    #[error("Ship not found")]
    NotFound,

    #[error("Invalid ship ID: {0}")]
    InvalidId(i64),

    #[error("Invalid ship: {0}")]
    Invalid(String),

    #[error("Invalid page: {0}")]
    InvalidPage(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ValidationErrors> for ShipError {
    fn from(errors: ValidationErrors) -> Self {
        ShipError::Invalid(validation::describe(&errors))
    }
}

impl From<ShipError> for AppError {
    fn from(error: ShipError) -> Self {
        match error {
            ShipError::NotFound => AppError::NotFound("Ship not found".into()),
            ShipError::InvalidId(id) => AppError::BadRequest(format!("Invalid ship ID: {id}")),
            ShipError::Invalid(msg) => AppError::Validation(msg),
            ShipError::InvalidPage(msg) => AppError::BadRequest(msg),
            ShipError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

/// Repository failures surface as internal errors, except a row that
/// disappeared between load and write.
fn storage_error(error: AppError) -> ShipError {
    match error {
        AppError::NotFound(_) => ShipError::NotFound,
        e => ShipError::Internal(e.to_string()),
    }
}

/// ShipService implementation
pub struct ShipServiceImpl<R>
where
    R: ShipRepository,
{
    ship_repo: Arc<R>,
}

impl<R> ShipServiceImpl<R>
where
    R: ShipRepository,
{
    pub fn new(ship_repo: Arc<R>) -> Self {
        Self { ship_repo }
    }

    async fn load(&self, id: i64) -> Result<Ship, ShipError> {
        if id <= 0 {
            return Err(ShipError::InvalidId(id));
        }

        self.ship_repo
            .find_by_id(id)
            .await
            .map_err(storage_error)?
            .ok_or(ShipError::NotFound)
    }
}

#[async_trait]
impl<R> ShipService for ShipServiceImpl<R>
where
    R: ShipRepository + 'static,
{
    async fn list_ships(
        &self,
        filter: ShipFilter,
        order: ShipOrder,
        page: PageRequest,
    ) -> Result<Vec<Ship>, ShipError> {
        if page.size == 0 {
            return Err(ShipError::InvalidPage("pageSize must be at least 1".into()));
        }
        if page.offset().is_none() {
            return Err(ShipError::InvalidPage("pageNumber is out of range".into()));
        }

        self.ship_repo
            .find_all(&filter, order, Some(page))
            .await
            .map_err(storage_error)
    }

    async fn count_ships(&self, filter: ShipFilter) -> Result<i64, ShipError> {
        self.ship_repo.count(&filter).await.map_err(storage_error)
    }

    async fn create_ship(&self, patch: ShipPatch) -> Result<Ship, ShipError> {
        let new_ship = patch.into_new_ship().map_err(|errors| {
            tracing::debug!(errors = %validation::describe(&errors), "Rejected ship creation");
            metrics::record_ship_operation("create", "invalid");
            ShipError::from(errors)
        })?;

        let ship = self
            .ship_repo
            .create(&new_ship)
            .await
            .map_err(storage_error)?;

        metrics::record_ship_operation("create", "ok");
        tracing::info!(ship_id = ship.id, rating = ship.rating, "Ship created");
        Ok(ship)
    }

    async fn get_ship(&self, id: i64) -> Result<Ship, ShipError> {
        self.load(id).await
    }

    async fn update_ship(&self, id: i64, patch: ShipPatch) -> Result<Ship, ShipError> {
        let mut ship = self.load(id).await?;

        patch.apply_to(&mut ship).map_err(|errors| {
            tracing::debug!(ship_id = id, errors = %validation::describe(&errors), "Rejected ship update");
            metrics::record_ship_operation("update", "invalid");
            ShipError::from(errors)
        })?;

        let updated = self.ship_repo.update(&ship).await.map_err(storage_error)?;

        metrics::record_ship_operation("update", "ok");
        tracing::info!(ship_id = updated.id, rating = updated.rating, "Ship updated");
        Ok(updated)
    }

    async fn delete_ship(&self, id: i64) -> Result<(), ShipError> {
        self.load(id).await?;

        self.ship_repo.delete(id).await.map_err(storage_error)?;

        metrics::record_ship_operation("delete", "ok");
        tracing::info!(ship_id = id, "Ship deleted");
        Ok(())
    }
}
