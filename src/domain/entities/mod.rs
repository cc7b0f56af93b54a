//! # Domain Entities
//!
//! The registry manages a single entity, the **Ship**.
//!
//! ## Repository Traits
//!
//! `ShipRepository` defines the data access operations. It is implemented in
//! the infrastructure layer, following the dependency inversion principle.

mod ship;

pub use ship::{
    NewShip, Ship, ShipPatch, ShipRepository, ShipType, MAX_CREW_SIZE, MAX_NAME_LENGTH,
    MAX_PLANET_LENGTH, MAX_SPEED, MIN_CREW_SIZE, MIN_SPEED, PROD_DATE_MAX_MILLIS,
    PROD_DATE_MIN_MILLIS,
};

#[cfg(test)]
pub use ship::MockShipRepository;
