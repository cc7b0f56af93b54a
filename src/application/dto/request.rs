//! Request DTOs
//!
//! Query parameter structures. Ship bodies deserialize directly into
//! [`ShipPatch`](crate::domain::ShipPatch).

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::{PageRequest, ShipFilter, ShipOrder, ShipType, DEFAULT_PAGE_SIZE};
use crate::shared::error::AppError;

/// Filter query parameters shared by list and count
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipFilterParams {
    pub name: Option<String>,
    pub planet: Option<String>,
    pub ship_type: Option<ShipType>,
    /// Epoch millis, inclusive lower bound on production date
    pub after: Option<i64>,
    /// Epoch millis, inclusive upper bound on production date
    pub before: Option<i64>,
    pub is_used: Option<bool>,
    pub min_speed: Option<f64>,
    pub max_speed: Option<f64>,
    pub min_crew_size: Option<i32>,
    pub max_crew_size: Option<i32>,
    pub min_rating: Option<f64>,
    pub max_rating: Option<f64>,
}

impl ShipFilterParams {
    /// Build the predicate conjunction for these parameters.
    pub fn into_filter(self) -> Result<ShipFilter, AppError> {
        let after = self.after.map(millis_to_datetime).transpose()?;
        let before = self.before.map(millis_to_datetime).transpose()?;
        let min_speed = finite("minSpeed", self.min_speed)?;
        let max_speed = finite("maxSpeed", self.max_speed)?;
        let min_rating = finite("minRating", self.min_rating)?;
        let max_rating = finite("maxRating", self.max_rating)?;

        Ok(ShipFilter::new()
            .name_contains(self.name)
            .planet_contains(self.planet)
            .ship_type(self.ship_type)
            .prod_date_between(after, before)
            .used(self.is_used)
            .speed_between(min_speed, max_speed)
            .crew_size_between(self.min_crew_size, self.max_crew_size)
            .rating_between(min_rating, max_rating))
    }
}

fn millis_to_datetime(millis: i64) -> Result<DateTime<Utc>, AppError> {
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| AppError::BadRequest(format!("Timestamp out of range: {millis}")))
}

/// NaN and infinities have no consistent ordering across storage backends.
fn finite(name: &str, value: Option<f64>) -> Result<Option<f64>, AppError> {
    match value {
        Some(v) if !v.is_finite() => Err(AppError::BadRequest(format!("{name} must be a finite number"))),
        other => Ok(other),
    }
}

/// Ordering and paging query parameters for list
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipPageParams {
    #[serde(default)]
    pub order: ShipOrder,
    #[serde(default)]
    pub page_number: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl ShipPageParams {
    pub fn page(&self) -> PageRequest {
        PageRequest::new(self.page_number, self.page_size)
    }
}
