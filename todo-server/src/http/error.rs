//! API error types with IntoResponse
//!
//! Client errors carry a short plain-text body. Store failures are logged
//! and answered with a generic 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::db::StoreError;

pub const INVALID_ITEM: &str = "Invalid item data";
pub const INVALID_ITEM_ID: &str = "Invalid item id";
pub const ITEM_NOT_FOUND: &str = "Item not found";

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Missing or malformed request input (400)
    Validation { message: &'static str },

    /// No item with the requested id (404)
    NotFound { message: &'static str },

    /// Store failure (500 unless the record vanished)
    Store(StoreError),
}

impl ApiError {
    pub fn invalid_item() -> Self {
        Self::Validation {
            message: INVALID_ITEM,
        }
    }

    pub fn item_not_found() -> Self {
        Self::NotFound {
            message: ITEM_NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation { message } => (StatusCode::BAD_REQUEST, message).into_response(),
            Self::NotFound { message } => (StatusCode::NOT_FOUND, message).into_response(),
            Self::Store(StoreError::Missing { id }) => {
                // Deleted by a concurrent request after our lookup
                tracing::debug!(id, "item vanished before write");
                (StatusCode::NOT_FOUND, ITEM_NOT_FOUND).into_response()
            }
            Self::Store(e) => {
                tracing::error!("Store error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "an internal error occurred").into_response()
            }
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}
