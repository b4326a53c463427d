//! MySQL-backed item store

use async_trait::async_trait;
use sqlx::MySqlPool;

use super::store::{ItemStore, StoreError};
use crate::models::{Item, NewItem};

/// Item store over a MySQL pool.
#[derive(Clone)]
pub struct MySqlItemStore {
    pool: MySqlPool,
}

impl MySqlItemStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemStore for MySqlItemStore {
    async fn list_all(&self) -> Result<Vec<Item>, StoreError> {
        let items = sqlx::query_as::<_, Item>("SELECT id, name, is_complete FROM items")
            .fetch_all(&self.pool)
            .await?;
        Ok(items)
    }

    async fn add(&self, item: NewItem) -> Result<Item, StoreError> {
        let result = sqlx::query("INSERT INTO items (name, is_complete) VALUES (?, ?)")
            .bind(&item.name)
            .bind(item.is_complete)
            .execute(&self.pool)
            .await?;

        // items.id is a signed INT column
        let id = result.last_insert_id() as i32;
        tracing::debug!(id, "inserted item");

        Ok(Item {
            id,
            name: item.name,
            is_complete: item.is_complete,
        })
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Item>, StoreError> {
        let item = sqlx::query_as::<_, Item>(
            "SELECT id, name, is_complete FROM items WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(item)
    }

    async fn update(&self, item: &Item) -> Result<(), StoreError> {
        // MySQL reports changed rows, not matched rows, so an unchanged
        // record affects zero rows. Existence is the caller's check.
        sqlx::query("UPDATE items SET name = ?, is_complete = ? WHERE id = ?")
            .bind(&item.name)
            .bind(item.is_complete)
            .bind(item.id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn remove(&self, item: &Item) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM items WHERE id = ?")
            .bind(item.id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::Missing { id: item.id });
        }
        Ok(())
    }
}
