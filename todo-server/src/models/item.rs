//! To-do item records

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stored to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Assigned by the store on insert, never changed afterwards
    pub id: i32,
    pub name: Option<String>,
    pub is_complete: bool,
}

/// An item that has not been stored yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewItem {
    pub name: Option<String>,
    pub is_complete: bool,
}

/// Request body for `POST /items` and `PUT /items/{id}`.
///
/// Every field is optional. A client-supplied `id` is accepted and dropped.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub is_complete: bool,
}

impl From<ItemPayload> for NewItem {
    fn from(p: ItemPayload) -> Self {
        Self {
            name: p.name,
            is_complete: p.is_complete,
        }
    }
}

impl Item {
    /// Copy the mutable part of a payload onto this item.
    ///
    /// Only `isComplete` is writable through the API; `name` keeps its
    /// stored value.
    pub fn apply(&mut self, payload: &ItemPayload) {
        self.is_complete = payload.is_complete;
    }
}
