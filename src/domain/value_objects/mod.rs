//! # Domain Value Objects
//!
//! Immutable value types that describe how ships are selected.
//!
//! - **ShipFilter**: conjunction of optional predicate fragments
//! - **ShipOrder** / **PageRequest**: listing order and page selection

mod paging;
mod ship_filter;

pub use paging::*;
pub use ship_filter::*;
