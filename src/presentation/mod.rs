//! Presentation Layer
//!
//! HTTP routes, extractors and middleware.

pub mod http;
pub mod middleware;
