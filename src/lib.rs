//! # Starship Registry Library
//!
//! This crate provides a REST service for registering ships with:
//! - Filtered, ordered and paged listings
//! - Field validation and a derived rating
//! - PostgreSQL (or in-memory) persistence
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: The ship entity, filters and repository trait
//! - **Application Layer**: The ship service and DTOs
//! - **Infrastructure Layer**: Database, repositories and metrics
//! - **Presentation Layer**: HTTP routes, extractors and middleware
//!
//! ## Module Structure
//!
//! ```text
//! starship_registry/
//! +-- config/         Configuration management
//! +-- domain/         Entity, value objects, rating
//! +-- application/    Ship service and DTOs
//! +-- infrastructure/ Database, repositories, metrics
//! +-- presentation/   HTTP routes and middleware
//! +-- shared/         Errors and validation helpers
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
