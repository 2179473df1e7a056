//! Fixed item store

use crate::types::{Item, ItemId};

/// Ordered, read-only collection of items.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    items: Vec<Item>,
}

impl CatalogStore {
    /// Create the default two-item catalog.
    pub fn new() -> Self {
        Self::from_items(vec![
            Item::new(1, "First Item"),
            Item::new(2, "Second Item"),
        ])
    }

    /// Create a store over an arbitrary item list, preserving its order.
    pub fn from_items(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn get_all_items(&self) -> &[Item] {
        &self.items
    }

    /// First item with a matching id, if any.
    pub fn get_item_by_id(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_in_insertion_order() {
        let store = CatalogStore::new();
        assert_eq!(
            store.get_all_items(),
            &[Item::new(1, "First Item"), Item::new(2, "Second Item")]
        );
    }

    #[test]
    fn lookup_by_id() {
        let store = CatalogStore::new();
        assert_eq!(
            store.get_item_by_id(2).map(|i| i.name.as_str()),
            Some("Second Item")
        );
        assert!(store.get_item_by_id(3).is_none());
        assert!(store.get_item_by_id(-1).is_none());
    }

    #[test]
    fn lookup_returns_first_match() {
        let store = CatalogStore::from_items(vec![Item::new(7, "a"), Item::new(7, "b")]);
        assert_eq!(store.get_item_by_id(7).map(|i| i.name.as_str()), Some("a"));
    }

    #[test]
    fn empty_store() {
        let store = CatalogStore::from_items(Vec::new());
        assert!(store.get_all_items().is_empty());
        assert!(store.get_item_by_id(1).is_none());
    }
}
