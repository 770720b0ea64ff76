//! Data model shared by the API client, the store and the renderer.
//!
//! Inventory and cart are independent lists keyed by [`ItemId`]. The same id
//! may appear in both: on an [`InventoryItem`] it carries the *pending*
//! quantity the user has dialed in, on a [`CartItem`] the *committed* quantity
//! the backend has acknowledged.

mod id;
mod item;

pub use id::ItemId;
pub use item::{CartItem, InventoryItem, QuantityUpdate};
