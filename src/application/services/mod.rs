//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **ShipService**: Ship validation, rating, filtering and persistence

pub mod ship_service;

pub use ship_service::{ShipError, ShipService, ShipServiceImpl};
