//! Item store trait - the persistence seam
//!
//! The router only ever talks to `dyn ItemStore`, so tests can run the full
//! HTTP stack against [`super::MemoryItemStore`].

use async_trait::async_trait;

use crate::models::{Item, NewItem};

/// Store error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The record passed to a write no longer exists.
    #[error("item {id} does not exist")]
    Missing { id: i32 },

    /// No ids left in the INT range.
    #[error("item id space exhausted")]
    IdsExhausted,
}

/// CRUD gateway to the items table.
///
/// Every mutating call commits before it returns. Nothing is retried.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Every stored item, in the backend's natural order.
    async fn list_all(&self) -> Result<Vec<Item>, StoreError>;

    /// Insert a new item and return it with its assigned id.
    async fn add(&self, item: NewItem) -> Result<Item, StoreError>;

    /// Point lookup; `Ok(None)` when no row matches.
    async fn find_by_id(&self, id: i32) -> Result<Option<Item>, StoreError>;

    /// Persist an item previously returned by [`ItemStore::find_by_id`].
    async fn update(&self, item: &Item) -> Result<(), StoreError>;

    /// Delete an item previously returned by [`ItemStore::find_by_id`].
    async fn remove(&self, item: &Item) -> Result<(), StoreError>;
}
