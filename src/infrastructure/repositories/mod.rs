//! Repository Implementations
//!
//! Implementations of the domain `ShipRepository` trait.
//!
//! ## Available Repositories
//!
//! - **PgShipRepository** - PostgreSQL storage, filters rendered as SQL
//! - **InMemoryShipRepository** - process-local storage, filters evaluated in Rust
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sqlx::PgPool;
//! use crate::infrastructure::repositories::{InMemoryShipRepository, PgShipRepository};
//!
//! fn setup_repositories(pool: PgPool) {
//!     let pg_repo = PgShipRepository::new(pool);
//!     let memory_repo = InMemoryShipRepository::new();
//! }
//! ```

pub mod memory_ship_repository;
pub mod ship_repository;

pub use memory_ship_repository::InMemoryShipRepository;
pub use ship_repository::{PgShipRepository, PushSql};
