//! # Domain Layer
//!
//! The domain layer contains the core business rules of the ship registry.
//! It is independent of any external frameworks or infrastructure concerns.
//!
//! ## Structure
//!
//! - **entities**: The `Ship` entity, its patch payload and repository trait
//! - **value_objects**: Filters, ordering and paging
//! - **services**: Rating calculation
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Validation bounds live next to the entity they constrain
//! - Repository traits define data access contracts

pub mod entities;
pub mod services;
pub mod value_objects;

// Re-export commonly used types
pub use entities::*;
pub use value_objects::*;
