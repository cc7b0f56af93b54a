//! HTTP API
//!
//! Route table, handlers and request extractors.

pub mod extractors;
pub mod handlers;
pub mod routes;
