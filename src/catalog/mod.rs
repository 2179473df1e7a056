//! In-memory item catalog
//!
//! The catalog is rebuilt from scratch every time a service is resolved.
//! Nothing is cached between calls, so two resolutions never share a store.

pub mod service;
pub mod store;

pub use service::CatalogService;
pub use store::CatalogStore;

/// Factory producing a fully wired [`CatalogService`].
pub type ServiceResolver = fn() -> CatalogService;

/// Build a fresh store and a service bound to it.
pub fn resolve_service() -> CatalogService {
    CatalogService::new(CatalogStore::new())
}
