//! todo-server: HTTP CRUD service for to-do items
//!
//! Items live in a single MySQL table behind the [`db::ItemStore`] trait.
//! The [`http`] layer maps four routes onto that trait.

pub mod db;
pub mod http;
pub mod models;

pub use db::{ItemStore, MemoryItemStore, MySqlItemStore, StoreError};
pub use http::{build_router, run_server, ServerConfig};
pub use models::{Item, ItemPayload, NewItem};
