//! Domain models
//!
//! `Item` is what the store returns and what the API serializes.
//! `ItemPayload` is what clients send; it never carries an id the
//! server trusts.

pub mod item;

pub use item::{Item, ItemPayload, NewItem};
