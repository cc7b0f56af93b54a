//! Ordering and paging of ship listings.

use std::cmp::Ordering;

use serde::Deserialize;

use crate::domain::entities::Ship;

/// Sort key for ship listings. Ties are always broken by ID ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShipOrder {
    #[default]
    Id,
    Name,
    #[serde(alias = "PROD_DATE")]
    Date,
    Speed,
    #[serde(alias = "IS_USED")]
    Used,
    CrewSize,
    Rating,
}

impl ShipOrder {
    /// Compare two ships by this key, then by ID.
    pub fn compare(&self, a: &Ship, b: &Ship) -> Ordering {
        let primary = match self {
            Self::Id => Ordering::Equal,
            Self::Name => a.name.cmp(&b.name),
            Self::Date => a.prod_date.cmp(&b.prod_date),
            Self::Speed => a.speed.total_cmp(&b.speed),
            Self::Used => a.is_used.cmp(&b.is_used),
            Self::CrewSize => a.crew_size.cmp(&b.crew_size),
            Self::Rating => a.rating.total_cmp(&b.rating),
        };
        primary.then_with(|| a.id.cmp(&b.id))
    }
}

/// Default number of ships per page.
pub const DEFAULT_PAGE_SIZE: u32 = 3;

/// Zero-based page selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub number: u32,
    pub size: u32,
}

impl PageRequest {
    pub fn new(number: u32, size: u32) -> Self {
        Self { number, size }
    }

    /// Number of rows to skip, or `None` when it does not fit in an `i64`.
    pub fn offset(&self) -> Option<i64> {
        i64::from(self.number).checked_mul(i64::from(self.size))
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE)
    }
}
