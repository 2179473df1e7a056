//! item-catalog - A small HTTP service over an in-memory item catalog
//!
//! Provides:
//! - A fixed two-item catalog, rebuilt for every request
//! - Read endpoints for all items and single items
//! - A message endpoint that appends catalog item names
//! - Optional per-call logging through an injected observer
//! - Optional OTLP log export (`otlp` feature)

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod message;
pub mod observer;
pub mod telemetry;
pub mod types;

pub use error::{Error, Result};
