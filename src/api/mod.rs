//! HTTP API server

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

pub mod error;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

/// Build the API router using the provided application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/items", get(handlers::list_items))
        .route("/items/:item_id", get(handlers::get_item))
        .route("/process-message", get(handlers::process_message))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Router without instrumentation
pub fn create_plain_router() -> Router {
    create_router(AppState::plain())
}

/// Router whose handlers log every catalog call
pub fn create_instrumented_router() -> Router {
    create_router(AppState::instrumented())
}
