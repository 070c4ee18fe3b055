use tracing::{debug, info, warn};

use crate::error::Result;
use crate::models::{Category, FoodCatalog};
use crate::state::store::{CatalogStore, StoreKey};

/// The catalog of one user (or the local slot) together with its store.
///
/// Edits are persisted before the in-memory snapshot changes, so a failed
/// save never shows up as current state. There is no locking or merging:
/// two sessions editing the same key overwrite each other, last write wins.
pub struct CatalogSession<S: CatalogStore> {
    store: S,
    key: StoreKey,
    catalog: FoodCatalog,
}

impl<S: CatalogStore> CatalogSession<S> {
    /// Load the stored catalog for `key`, or start from the default foods.
    pub fn open(store: S, key: StoreKey) -> Result<Self> {
        let catalog = match store.load(&key)? {
            Some(catalog) => {
                debug!(%key, entries = catalog.len(), "loaded stored catalog");
                catalog
            }
            None => {
                info!(%key, "no stored catalog, using defaults");
                FoodCatalog::default()
            }
        };

        Ok(Self {
            store,
            key,
            catalog,
        })
    }

    /// Overwrite the stored catalog for `key` with the default foods, without
    /// reading what was there. Works even when the stored record is corrupt.
    pub fn restore_defaults(mut store: S, key: StoreKey) -> Result<Self> {
        let catalog = FoodCatalog::default();
        if let Err(e) = store.save(&key, &catalog) {
            warn!(%key, error = %e, "restoring default catalog failed");
            return Err(e);
        }
        info!(%key, "default catalog restored");

        Ok(Self {
            store,
            key,
            catalog,
        })
    }

    pub fn catalog(&self) -> &FoodCatalog {
        &self.catalog
    }

    pub fn key(&self) -> &StoreKey {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Append `label` to `category`. Blank labels are ignored.
    pub fn add(&mut self, category: Category, label: &str) -> Result<&FoodCatalog> {
        let next = self.catalog.with_food(category, label);
        self.commit(next)
    }

    /// Remove the first `label` from `category`. Absent labels are ignored.
    pub fn remove(&mut self, category: Category, label: &str) -> Result<&FoodCatalog> {
        let next = self.catalog.without_food(category, label);
        self.commit(next)
    }

    fn commit(&mut self, next: FoodCatalog) -> Result<&FoodCatalog> {
        if next == self.catalog {
            debug!(key = %self.key, "catalog unchanged, skipping save");
            return Ok(&self.catalog);
        }

        if let Err(e) = self.store.save(&self.key, &next) {
            warn!(key = %self.key, error = %e, "catalog save failed, keeping previous snapshot");
            return Err(e);
        }

        info!(key = %self.key, entries = next.len(), "catalog saved");
        self.catalog = next;
        Ok(&self.catalog)
    }
}
