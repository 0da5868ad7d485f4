//! In-memory entity store.
//!
//! One [`MemStore`] is built per process and shared through `AppState`.
//! All tables live behind a single `RwLock`, so a write closure observes and
//! mutates every table atomically with respect to other requests.

mod seed;
mod table;

pub use seed::seed_catalog;
pub use table::Table;

use parking_lot::RwLock;

use crate::entities::prelude::*;

#[derive(Debug, Default)]
pub struct StoreState {
    pub users: Table<User>,
    pub retailers: Table<Retailer>,
    pub categories: Table<Category>,
    pub products: Table<Product>,
    pub orders: Table<Order>,
    pub retailer_orders: Table<RetailerOrder>,
}

#[derive(Debug, Default)]
pub struct MemStore {
    state: RwLock<StoreState>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-loaded with the demo catalog
    pub fn seeded() -> Self {
        let store = Self::new();
        store.write(seed_catalog);
        store
    }

    /// Run `f` under the shared read guard.
    pub fn read<R>(&self, f: impl FnOnce(&StoreState) -> R) -> R {
        f(&*self.state.read())
    }

    /// Run `f` under the exclusive write guard. Nothing else reads or writes
    /// the store until `f` returns.
    pub fn write<R>(&self, f: impl FnOnce(&mut StoreState) -> R) -> R {
        f(&mut *self.state.write())
    }
}
