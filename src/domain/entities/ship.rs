//! Ship entity, patch payload and repository trait.
//!
//! Maps to the `ships` table in the database schema.

use std::borrow::Cow;
use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::services::RatingService;
use crate::domain::value_objects::{PageRequest, ShipFilter, ShipOrder};
use crate::shared::error::AppError;

/// Earliest accepted production date (2800-01-01T00:00:00Z), in epoch millis.
pub const PROD_DATE_MIN_MILLIS: i64 = 26_192_246_400_000;

/// Latest accepted production date (3019-01-01T00:00:00Z), in epoch millis.
pub const PROD_DATE_MAX_MILLIS: i64 = 33_103_209_600_000;

pub const MAX_NAME_LENGTH: u64 = 50;
pub const MAX_PLANET_LENGTH: u64 = 50;

pub const MIN_SPEED: f64 = 0.01;
pub const MAX_SPEED: f64 = 0.99;

pub const MIN_CREW_SIZE: i32 = 1;
pub const MAX_CREW_SIZE: i32 = 9999;

/// Ship classes. Stored and transmitted in upper case.
///
/// Database definition:
/// ```sql
/// ship_type VARCHAR(16) NOT NULL CHECK (ship_type IN ('TRANSPORT', 'MILITARY', 'MERCHANT'))
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShipType {
    Transport,
    Military,
    Merchant,
}

impl ShipType {
    /// Convert to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Transport => "TRANSPORT",
            Self::Military => "MILITARY",
            Self::Merchant => "MERCHANT",
        }
    }
}

impl FromStr for ShipType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TRANSPORT" => Ok(Self::Transport),
            "MILITARY" => Ok(Self::Military),
            "MERCHANT" => Ok(Self::Merchant),
            other => Err(AppError::Internal(format!("Unknown ship type: {other}"))),
        }
    }
}

impl std::fmt::Display for ShipType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A registered ship.
///
/// Maps to the `ships` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - name: VARCHAR(50) NOT NULL
/// - planet: VARCHAR(50) NOT NULL
/// - ship_type: VARCHAR(16) NOT NULL
/// - prod_date: TIMESTAMPTZ NOT NULL
/// - is_used: BOOLEAN NOT NULL DEFAULT FALSE
/// - speed: DOUBLE PRECISION NOT NULL
/// - crew_size: INTEGER NOT NULL
/// - rating: DOUBLE PRECISION NOT NULL
#[derive(Debug, Clone, PartialEq)]
pub struct Ship {
    /// Store-generated identifier
    pub id: i64,

    /// Ship name (1-50 characters)
    pub name: String,

    /// Home planet (1-50 characters)
    pub planet: String,

    pub ship_type: ShipType,

    /// Production date
    pub prod_date: DateTime<Utc>,

    /// Whether the ship has had previous owners
    pub is_used: bool,

    /// Speed (0.01-0.99)
    pub speed: f64,

    /// Crew size (1-9999)
    pub crew_size: i32,

    /// Derived from speed, used flag and production year
    pub rating: f64,
}

impl Ship {
    /// Recompute the derived rating from the current field values.
    pub fn refresh_rating(&mut self) {
        self.rating = RatingService::calculate(self.speed, self.is_used, self.prod_date);
    }

    /// Production date as epoch milliseconds.
    pub fn prod_date_millis(&self) -> i64 {
        self.prod_date.timestamp_millis()
    }
}

/// A fully validated ship that has not been persisted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewShip {
    pub name: String,
    pub planet: String,
    pub ship_type: ShipType,
    pub prod_date: DateTime<Utc>,
    pub is_used: bool,
    pub speed: f64,
    pub crew_size: i32,
    pub rating: f64,
}

impl NewShip {
    /// Attach a store-generated id.
    pub fn with_id(self, id: i64) -> Ship {
        Ship {
            id,
            name: self.name,
            planet: self.planet,
            ship_type: self.ship_type,
            prod_date: self.prod_date,
            is_used: self.is_used,
            speed: self.speed,
            crew_size: self.crew_size,
            rating: self.rating,
        }
    }
}

/// Incoming ship payload where every field is optional.
///
/// Used as-is for partial updates; creation additionally requires every
/// field except `isUsed`. `id` and `rating` are never read from callers.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShipPatch {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH, message = "must be 1-50 characters"))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = MAX_PLANET_LENGTH, message = "must be 1-50 characters"))]
    pub planet: Option<String>,

    pub ship_type: Option<ShipType>,

    /// Epoch milliseconds
    #[validate(range(
        min = PROD_DATE_MIN_MILLIS,
        max = PROD_DATE_MAX_MILLIS,
        message = "must be between years 2800 and 3019"
    ))]
    pub prod_date: Option<i64>,

    pub is_used: Option<bool>,

    #[validate(range(min = MIN_SPEED, max = MAX_SPEED, message = "must be between 0.01 and 0.99"))]
    pub speed: Option<f64>,

    #[validate(range(min = MIN_CREW_SIZE, max = MAX_CREW_SIZE, message = "must be between 1 and 9999"))]
    pub crew_size: Option<i32>,
}

impl ShipPatch {
    /// Validate a creation payload and turn it into a [`NewShip`].
    ///
    /// Bound violations and missing required fields are reported together.
    pub fn into_new_ship(self) -> Result<NewShip, ValidationErrors> {
        let mut errors = self.validate().err().unwrap_or_else(ValidationErrors::new);

        let name = required(&mut errors, "name", self.name);
        let planet = required(&mut errors, "planet", self.planet);
        let ship_type = required(&mut errors, "ship_type", self.ship_type);
        let prod_date = required(&mut errors, "prod_date", self.prod_date)
            .and_then(|millis| to_datetime(&mut errors, millis));
        let speed = required(&mut errors, "speed", self.speed);
        let crew_size = required(&mut errors, "crew_size", self.crew_size);

        if !errors.is_empty() {
            return Err(errors);
        }

        match (name, planet, ship_type, prod_date, speed, crew_size) {
            (Some(name), Some(planet), Some(ship_type), Some(prod_date), Some(speed), Some(crew_size)) => {
                let is_used = self.is_used.unwrap_or(false);
                Ok(NewShip {
                    rating: RatingService::calculate(speed, is_used, prod_date),
                    name,
                    planet,
                    ship_type,
                    prod_date,
                    is_used,
                    speed,
                    crew_size,
                })
            }
            _ => Err(errors),
        }
    }

    /// Validate the present fields and merge them into `ship`.
    ///
    /// `ship` is left untouched when any present field is invalid. The
    /// rating is recomputed after a successful merge.
    pub fn apply_to(self, ship: &mut Ship) -> Result<(), ValidationErrors> {
        self.validate()?;

        let mut errors = ValidationErrors::new();
        let prod_date = match self.prod_date {
            Some(millis) => match to_datetime(&mut errors, millis) {
                Some(date) => Some(date),
                None => return Err(errors),
            },
            None => None,
        };

        if let Some(name) = self.name {
            ship.name = name;
        }
        if let Some(planet) = self.planet {
            ship.planet = planet;
        }
        if let Some(ship_type) = self.ship_type {
            ship.ship_type = ship_type;
        }
        if let Some(prod_date) = prod_date {
            ship.prod_date = prod_date;
        }
        if let Some(is_used) = self.is_used {
            ship.is_used = is_used;
        }
        if let Some(speed) = self.speed {
            ship.speed = speed;
        }
        if let Some(crew_size) = self.crew_size {
            ship.crew_size = crew_size;
        }

        ship.refresh_rating();
        Ok(())
    }
}

fn required<T>(errors: &mut ValidationErrors, field: &'static str, value: Option<T>) -> Option<T> {
    if value.is_none() {
        errors.add(
            field,
            ValidationError::new("required").with_message(Cow::Borrowed("is required")),
        );
    }
    value
}

fn to_datetime(errors: &mut ValidationErrors, millis: i64) -> Option<DateTime<Utc>> {
    let date = DateTime::from_timestamp_millis(millis);
    if date.is_none() {
        errors.add(
            "prod_date",
            ValidationError::new("range").with_message(Cow::Borrowed("is not a valid timestamp")),
        );
    }
    date
}

/// Repository trait for Ship data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShipRepository: Send + Sync {
    /// Find a ship by its ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<Ship>, AppError>;

    /// Find all ships matching `filter`, sorted by `order`.
    ///
    /// Returns only the requested page when `page` is given.
    async fn find_all(
        &self,
        filter: &ShipFilter,
        order: ShipOrder,
        page: Option<PageRequest>,
    ) -> Result<Vec<Ship>, AppError>;

    /// Count all ships matching `filter`.
    async fn count(&self, filter: &ShipFilter) -> Result<i64, AppError>;

    /// Persist a new ship and return it with its generated ID.
    async fn create(&self, ship: &NewShip) -> Result<Ship, AppError>;

    /// Overwrite an existing ship.
    async fn update(&self, ship: &Ship) -> Result<Ship, AppError>;

    /// Delete a ship permanently.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
