//! In-Memory Ship Repository
//!
//! Process-local implementation of the ShipRepository trait. Filters are
//! evaluated with [`ShipFilter::matches`]. Data does not survive a restart.

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::{NewShip, PageRequest, Ship, ShipFilter, ShipOrder, ShipRepository};
use crate::shared::error::AppError;

#[derive(Debug, Default)]
struct Store {
    ships: BTreeMap<i64, Ship>,
    last_id: i64,
}

/// In-memory ship repository.
#[derive(Debug, Default)]
pub struct InMemoryShipRepository {
    store: RwLock<Store>,
}

impl InMemoryShipRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ShipRepository for InMemoryShipRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Ship>, AppError> {
        Ok(self.store.read().ships.get(&id).cloned())
    }

    async fn find_all(
        &self,
        filter: &ShipFilter,
        order: ShipOrder,
        page: Option<PageRequest>,
    ) -> Result<Vec<Ship>, AppError> {
        let mut ships: Vec<Ship> = self
            .store
            .read()
            .ships
            .values()
            .filter(|ship| filter.matches(ship))
            .cloned()
            .collect();
        ships.sort_by(|a, b| order.compare(a, b));

        Ok(match page {
            Some(page) => ships
                .into_iter()
                .skip(
                    page.offset()
                        .and_then(|offset| usize::try_from(offset).ok())
                        .unwrap_or(usize::MAX),
                )
                .take(page.size as usize)
                .collect(),
            None => ships,
        })
    }

    async fn count(&self, filter: &ShipFilter) -> Result<i64, AppError> {
        let count = self
            .store
            .read()
            .ships
            .values()
            .filter(|ship| filter.matches(ship))
            .count();
        Ok(count as i64)
    }

    async fn create(&self, ship: &NewShip) -> Result<Ship, AppError> {
        let mut store = self.store.write();
        store.last_id += 1;
        let ship = ship.clone().with_id(store.last_id);
        store.ships.insert(ship.id, ship.clone());
        Ok(ship)
    }

    async fn update(&self, ship: &Ship) -> Result<Ship, AppError> {
        let mut store = self.store.write();
        match store.ships.get_mut(&ship.id) {
            Some(stored) => {
                *stored = ship.clone();
                Ok(ship.clone())
            }
            None => Err(AppError::NotFound(format!("Ship with id {} not found", ship.id))),
        }
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.store
            .write()
            .ships
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Ship with id {} not found", id)))
    }
}
