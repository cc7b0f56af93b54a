//! REST API endpoint tests

mod health_tests;
mod ship_tests;
