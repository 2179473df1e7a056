//! Catalog service

use crate::catalog::CatalogStore;
use crate::error::{Error, Result};
use crate::types::{Item, ItemId};

/// Read access to one store, with missing items reported as errors.
#[derive(Debug, Clone)]
pub struct CatalogService {
    store: CatalogStore,
}

impl CatalogService {
    pub fn new(store: CatalogStore) -> Self {
        Self { store }
    }

    pub fn get_items(&self) -> &[Item] {
        self.store.get_all_items()
    }

    pub fn get_item(&self, id: ItemId) -> Result<&Item> {
        self.store
            .get_item_by_id(id)
            .ok_or(Error::ItemNotFound(id))
    }
}
