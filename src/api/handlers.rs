//! API handlers
//!
//! Each handler reports its call to the state's observer, resolves a fresh
//! catalog service, and serializes the result.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::api::{ApiError, AppState};
use crate::error::Error;
use crate::message::MessageDecorator;
use crate::observer::{CallOutcome, CatalogCall};
use crate::types::{Item, ItemId};

/// List every item in the catalog
pub async fn list_items(State(state): State<AppState>) -> Json<Vec<Item>> {
    let call = CatalogCall::ListItems;
    state.observer.before(&call);

    let service = state.resolve_service();
    let items = service.get_items();

    state.observer.after(&call, &CallOutcome::Items(items));
    Json(items.to_vec())
}

/// Fetch a single item by id
pub async fn get_item(
    State(state): State<AppState>,
    Path(item_id): Path<ItemId>,
) -> Result<Json<Item>, ApiError> {
    let call = CatalogCall::GetItem(item_id);
    state.observer.before(&call);

    let service = state.resolve_service();
    match service.get_item(item_id) {
        Ok(item) => {
            state.observer.after(&call, &CallOutcome::Item(item));
            Ok(Json(item.clone()))
        }
        Err(err @ Error::ItemNotFound(_)) => {
            state.observer.after(&call, &CallOutcome::NotFound);
            Err(err.into())
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ProcessMessageParams {
    #[serde(default = "default_message")]
    pub message: String,
}

fn default_message() -> String {
    "Hello".to_string()
}

#[derive(Debug, Serialize)]
pub struct ProcessMessageResponse {
    pub msg: String,
}

/// Decorate a message with the names of all catalog items
pub async fn process_message(
    State(state): State<AppState>,
    Query(params): Query<ProcessMessageParams>,
) -> Json<ProcessMessageResponse> {
    let call = CatalogCall::ProcessMessage(&params.message);
    state.observer.before(&call);

    let decorator = MessageDecorator::resolve(state.resolver);
    let msg = decorator.process_with_items(&params.message);

    state.observer.after(&call, &CallOutcome::Message(&msg));
    Json(ProcessMessageResponse { msg })
}
