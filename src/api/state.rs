//! API server state

use std::sync::Arc;

use crate::catalog::{resolve_service, CatalogService, ServiceResolver};
use crate::config::ObserverKind;
use crate::observer::{CatalogObserver, NoopObserver, TracingObserver};

/// API server state
///
/// Holds no catalog data. Every handler resolves its own service.
#[derive(Clone)]
pub struct AppState {
    /// Factory called once per catalog access
    pub resolver: ServiceResolver,

    /// Notified before and after each catalog call
    pub observer: Arc<dyn CatalogObserver>,
}

impl AppState {
    pub fn new(observer: Arc<dyn CatalogObserver>) -> Self {
        Self {
            resolver: resolve_service,
            observer,
        }
    }

    /// State for the uninstrumented service
    pub fn plain() -> Self {
        Self::new(Arc::new(NoopObserver))
    }

    /// State whose handlers log through `tracing`
    pub fn instrumented() -> Self {
        Self::new(Arc::new(TracingObserver))
    }

    pub fn for_observer(kind: ObserverKind) -> Self {
        match kind {
            ObserverKind::None => Self::plain(),
            ObserverKind::Tracing => Self::instrumented(),
        }
    }

    /// Swap the service factory.
    pub fn with_resolver(mut self, resolver: ServiceResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Build a fresh service for this request.
    pub fn resolve_service(&self) -> CatalogService {
        (self.resolver)()
    }
}
