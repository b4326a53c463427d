//! Custom Axum extractors
//!
//! Both reject with [`ApiError::Validation`] so that malformed input gets
//! the same 400 body whatever axum's own rejection would have been.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;

use super::error::{ApiError, INVALID_ITEM_ID};
use crate::models::ItemPayload;

/// Extract an item id from the path
pub struct ItemId(pub i32);

impl<S> FromRequestParts<S> for ItemId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<i32> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Validation {
                message: INVALID_ITEM_ID,
            })?;
        Ok(Self(id))
    }
}

/// Extract an item payload from a JSON body.
///
/// An empty body, a `null` body, a wrong content type and unparseable JSON
/// all count as missing item data.
pub struct ItemBody(pub ItemPayload);

impl<S> FromRequest<S> for ItemBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<ItemPayload>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::debug!("rejected item body: {}", rejection.body_text());
                ApiError::invalid_item()
            })?;
        Ok(Self(payload))
    }
}
