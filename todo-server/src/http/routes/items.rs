//! Item endpoints
//!
//! Validation and existence checks happen here; the store only executes.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, put},
    Json, Router,
};

use crate::http::error::ApiError;
use crate::http::extractors::{ItemBody, ItemId};
use crate::http::server::AppState;
use crate::models::{Item, NewItem};

pub const ITEM_DELETED: &str = "Item deleted successfully";

/// GET /items - list every item
async fn list_items(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Item>>, ApiError> {
    let items = state.store.list_all().await?;
    Ok(Json(items))
}

/// POST /items - create an item, the store assigns the id
async fn create_item(
    State(state): State<Arc<AppState>>,
    ItemBody(payload): ItemBody,
) -> Result<impl IntoResponse, ApiError> {
    let item = state.store.add(NewItem::from(payload)).await?;
    tracing::debug!(id = item.id, "created item");

    let location = format!("/items/{}", item.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(item)))
}

/// PUT /items/{id} - set the completion flag of an existing item
async fn update_item(
    State(state): State<Arc<AppState>>,
    ItemId(id): ItemId,
    ItemBody(payload): ItemBody,
) -> Result<Json<Item>, ApiError> {
    let mut item = state
        .store
        .find_by_id(id)
        .await?
        .ok_or_else(ApiError::item_not_found)?;

    item.apply(&payload);
    state.store.update(&item).await?;
    tracing::debug!(id, is_complete = item.is_complete, "updated item");

    Ok(Json(item))
}

/// DELETE /items/{id} - remove an existing item
async fn delete_item(
    State(state): State<Arc<AppState>>,
    ItemId(id): ItemId,
) -> Result<&'static str, ApiError> {
    let item = state
        .store
        .find_by_id(id)
        .await?
        .ok_or_else(ApiError::item_not_found)?;

    state.store.remove(&item).await?;
    tracing::debug!(id, "deleted item");

    Ok(ITEM_DELETED)
}

/// Item routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route("/items/{id}", put(update_item).delete(delete_item))
}
