//! Composable ship filter.
//!
//! A [`ShipFilter`] is a conjunction of [`ShipPredicate`] fragments. Absent
//! parameters never produce a fragment, so an empty filter matches every
//! ship.

use chrono::{DateTime, Utc};

use crate::domain::entities::{Ship, ShipType};

/// Inclusive, optionally open-ended range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds<T> {
    pub min: Option<T>,
    pub max: Option<T>,
}

impl<T: PartialOrd + Copy> Bounds<T> {
    pub fn new(min: Option<T>, max: Option<T>) -> Self {
        Self { min, max }
    }

    /// True when neither end is constrained.
    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Check `min <= value <= max`, skipping absent ends.
    pub fn contains(&self, value: T) -> bool {
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value <= max)
    }
}

/// A single filter condition over ship fields.
#[derive(Debug, Clone, PartialEq)]
pub enum ShipPredicate {
    /// Case-sensitive substring match on the name
    NameContains(String),
    /// Case-sensitive substring match on the planet
    PlanetContains(String),
    ShipTypeIs(ShipType),
    ProdDateWithin(Bounds<DateTime<Utc>>),
    UsedIs(bool),
    SpeedWithin(Bounds<f64>),
    CrewSizeWithin(Bounds<i32>),
    RatingWithin(Bounds<f64>),
}

impl ShipPredicate {
    /// Evaluate the condition against a ship.
    pub fn matches(&self, ship: &Ship) -> bool {
        match self {
            Self::NameContains(needle) => ship.name.contains(needle.as_str()),
            Self::PlanetContains(needle) => ship.planet.contains(needle.as_str()),
            Self::ShipTypeIs(ship_type) => ship.ship_type == *ship_type,
            Self::ProdDateWithin(bounds) => bounds.contains(ship.prod_date),
            Self::UsedIs(is_used) => ship.is_used == *is_used,
            Self::SpeedWithin(bounds) => bounds.contains(ship.speed),
            Self::CrewSizeWithin(bounds) => bounds.contains(ship.crew_size),
            Self::RatingWithin(bounds) => bounds.contains(ship.rating),
        }
    }
}

/// Conjunction of predicate fragments.
///
/// ```rust,ignore
/// let filter = ShipFilter::new()
///     .ship_type(Some(ShipType::Military))
///     .speed_between(Some(0.3), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShipFilter {
    predicates: Vec<ShipPredicate>,
}

impl ShipFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name_contains(self, name: Option<String>) -> Self {
        self.with(name.map(ShipPredicate::NameContains))
    }

    pub fn planet_contains(self, planet: Option<String>) -> Self {
        self.with(planet.map(ShipPredicate::PlanetContains))
    }

    pub fn ship_type(self, ship_type: Option<ShipType>) -> Self {
        self.with(ship_type.map(ShipPredicate::ShipTypeIs))
    }

    pub fn prod_date_between(self, after: Option<DateTime<Utc>>, before: Option<DateTime<Utc>>) -> Self {
        self.with_bounds(Bounds::new(after, before), ShipPredicate::ProdDateWithin)
    }

    pub fn used(self, is_used: Option<bool>) -> Self {
        self.with(is_used.map(ShipPredicate::UsedIs))
    }

    pub fn speed_between(self, min: Option<f64>, max: Option<f64>) -> Self {
        self.with_bounds(Bounds::new(min, max), ShipPredicate::SpeedWithin)
    }

    pub fn crew_size_between(self, min: Option<i32>, max: Option<i32>) -> Self {
        self.with_bounds(Bounds::new(min, max), ShipPredicate::CrewSizeWithin)
    }

    pub fn rating_between(self, min: Option<f64>, max: Option<f64>) -> Self {
        self.with_bounds(Bounds::new(min, max), ShipPredicate::RatingWithin)
    }

    /// The fragments making up this filter.
    pub fn predicates(&self) -> &[ShipPredicate] {
        &self.predicates
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// True when every fragment matches.
    pub fn matches(&self, ship: &Ship) -> bool {
        self.predicates.iter().all(|predicate| predicate.matches(ship))
    }

    fn with(mut self, predicate: Option<ShipPredicate>) -> Self {
        if let Some(predicate) = predicate {
            self.predicates.push(predicate);
        }
        self
    }

    fn with_bounds<T, F>(self, bounds: Bounds<T>, make: F) -> Self
    where
        T: PartialOrd + Copy,
        F: FnOnce(Bounds<T>) -> ShipPredicate,
    {
        if bounds.is_unbounded() {
            self
        } else {
            self.with(Some(make(bounds)))
        }
    }
}
