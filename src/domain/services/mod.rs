//! # Domain Services
//!
//! Business rules that don't belong to a single field of an entity.
//!
//! - **RatingService**: derived ship rating

mod rating_service;

pub use rating_service::*;
