//! Request observers
//!
//! Handlers report each catalog call to an injected [`CatalogObserver`]
//! once before running it and once after. Observers see the call and its
//! outcome but cannot change either.

use std::fmt;

use crate::types::{Item, ItemId};

/// The catalog operation a handler is about to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogCall<'a> {
    ListItems,
    GetItem(ItemId),
    ProcessMessage(&'a str),
}

impl fmt::Display for CatalogCall<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogCall::ListItems => write!(f, "list_items"),
            CatalogCall::GetItem(_) => write!(f, "get_item"),
            CatalogCall::ProcessMessage(_) => write!(f, "process_message"),
        }
    }
}

/// What a catalog call produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallOutcome<'a> {
    Items(&'a [Item]),
    Item(&'a Item),
    NotFound,
    Message(&'a str),
}

pub trait CatalogObserver: Send + Sync {
    fn before(&self, call: &CatalogCall<'_>);

    fn after(&self, call: &CatalogCall<'_>, outcome: &CallOutcome<'_>);
}

/// Observer for the uninstrumented service.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl CatalogObserver for NoopObserver {
    fn before(&self, _call: &CatalogCall<'_>) {}

    fn after(&self, _call: &CatalogCall<'_>, _outcome: &CallOutcome<'_>) {}
}

/// Emits a DEBUG event before each call and an INFO event after it.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl CatalogObserver for TracingObserver {
    fn before(&self, call: &CatalogCall<'_>) {
        match call {
            CatalogCall::ListItems => tracing::debug!(%call, "Fetching all items"),
            CatalogCall::GetItem(item_id) => tracing::debug!(%call, item_id, "Fetching item"),
            CatalogCall::ProcessMessage(message) => {
                tracing::debug!(%call, message, "Processing message")
            }
        }
    }

    fn after(&self, call: &CatalogCall<'_>, outcome: &CallOutcome<'_>) {
        match outcome {
            CallOutcome::Items(items) => {
                tracing::info!(%call, count = items.len(), "Returned items")
            }
            CallOutcome::Item(item) => {
                tracing::info!(%call, item_id = item.id, name = %item.name, "Returned item")
            }
            CallOutcome::NotFound => tracing::info!(%call, "Item not found"),
            CallOutcome::Message(msg) => tracing::info!(%call, msg, "Processed message"),
        }
    }
}
