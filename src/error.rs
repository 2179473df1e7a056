//! Error types for item-catalog

use axum::http::StatusCode;
use thiserror::Error;

use crate::types::ItemId;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The detail text is fixed; the id is kept for logs only.
    #[error("Item not found")]
    ItemNotFound(ItemId),
}

impl Error {
    /// HTTP status the error surfaces as.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::ItemNotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_has_fixed_detail_and_404() {
        let err = Error::ItemNotFound(42);
        assert_eq!(err.to_string(), "Item not found");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }
}
