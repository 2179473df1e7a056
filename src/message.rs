//! Message decoration with catalog item names

use crate::catalog::{CatalogService, ServiceResolver};

/// Appends the names of every catalog item to a caller-supplied message.
#[derive(Debug, Clone)]
pub struct MessageDecorator {
    service: CatalogService,
}

impl MessageDecorator {
    pub fn new(service: CatalogService) -> Self {
        Self { service }
    }

    /// Build a decorator over its own freshly resolved service.
    pub fn resolve(resolver: ServiceResolver) -> Self {
        Self::new(resolver())
    }

    pub fn process_with_items(&self, message: &str) -> String {
        let names = self
            .service
            .get_items()
            .iter()
            .map(|item| item.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        format!("{message}. Available items: {names}")
    }
}
