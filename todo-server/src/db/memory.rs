//! In-process item store
//!
//! Backs `todo serve --in-memory` and the HTTP tests. Ids start at 1 and
//! are never reused, matching AUTO_INCREMENT.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::store::{ItemStore, StoreError};
use crate::models::{Item, NewItem};

#[derive(Default)]
struct Inner {
    last_id: i32,
    items: BTreeMap<i32, Item>,
}

/// Item store kept in memory behind an async lock.
#[derive(Default)]
pub struct MemoryItemStore {
    inner: RwLock<Inner>,
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored items
    pub async fn len(&self) -> usize {
        self.inner.read().await.items.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn list_all(&self) -> Result<Vec<Item>, StoreError> {
        Ok(self.inner.read().await.items.values().cloned().collect())
    }

    async fn add(&self, item: NewItem) -> Result<Item, StoreError> {
        let mut inner = self.inner.write().await;
        inner.last_id = inner
            .last_id
            .checked_add(1)
            .ok_or(StoreError::IdsExhausted)?;

        let item = Item {
            id: inner.last_id,
            name: item.name,
            is_complete: item.is_complete,
        };
        inner.items.insert(item.id, item.clone());
        Ok(item)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Item>, StoreError> {
        Ok(self.inner.read().await.items.get(&id).cloned())
    }

    async fn update(&self, item: &Item) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        match inner.items.get_mut(&item.id) {
            Some(stored) => {
                *stored = item.clone();
                Ok(())
            }
            None => Err(StoreError::Missing { id: item.id }),
        }
    }

    async fn remove(&self, item: &Item) -> Result<(), StoreError> {
        self.inner
            .write()
            .await
            .items
            .remove(&item.id)
            .map(|_| ())
            .ok_or(StoreError::Missing { id: item.id })
    }
}
