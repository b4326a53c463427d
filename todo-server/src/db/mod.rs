//! Database layer - connection pool and item stores
//!
//! # Design Principles
//!
//! - Connection pool with a small fixed limit
//! - One statement per store call, auto-committed
//! - Stores never validate; the HTTP layer checks existence first

pub mod memory;
pub mod migrations;
pub mod mysql;
pub mod pool;
pub mod store;

pub use memory::MemoryItemStore;
pub use mysql::MySqlItemStore;
pub use pool::{create_pool, create_pool_with_options};
pub use store::{ItemStore, StoreError};
