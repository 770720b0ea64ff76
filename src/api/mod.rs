//! Cart backend client.
//!
//! [`CartApi`] wraps the six calls the client makes against the backend:
//!
//! | Method | Path        | Body                 | Response          |
//! |--------|-------------|----------------------|-------------------|
//! | GET    | /inventory  |                      | `InventoryItem[]` |
//! | GET    | /cart       |                      | `CartItem[]`      |
//! | POST   | /cart       | `{id,name,quantity}` | created line      |
//! | PUT    | /cart/{id}  | `{quantity}`         | updated line      |
//! | DELETE | /cart/{id}  |                      | deletion result   |
//! | DELETE | /cart       |                      | clear result      |
//!
//! Two implementations ship with the crate: [`HttpCartApi`] talks to a real
//! backend (requires the `http` feature), [`InMemoryCartApi`] keeps inventory
//! and cart as in-process lists and records each call.

#[cfg(feature = "http")]
mod http;
mod in_memory;

#[cfg(feature = "http")]
pub use http::HttpCartApi;
pub use in_memory::{ApiCall, InMemoryCartApi};

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::model::{CartItem, InventoryItem, ItemId};

/// The backend operations the controller depends on.
///
/// Every call either resolves with the parsed response body or fails with a
/// [`CartError`](crate::CartError). Nothing is retried.
#[async_trait]
pub trait CartApi: Send + Sync {
    /// `GET /inventory`
    async fn fetch_inventory(&self) -> Result<Vec<InventoryItem>>;

    /// `GET /cart`
    async fn fetch_cart(&self) -> Result<Vec<CartItem>>;

    /// `POST /cart` — create a cart line; returns the line as stored.
    async fn add_to_cart(&self, item: &CartItem) -> Result<CartItem>;

    /// `PUT /cart/{id}` — set the committed quantity of an existing line.
    ///
    /// The reply is returned as raw JSON: backends differ on whether it echoes
    /// the whole line or only the fields that were sent.
    async fn update_cart_item(&self, id: &ItemId, quantity: u32) -> Result<Value>;

    /// `DELETE /cart/{id}`
    async fn delete_cart_item(&self, id: &ItemId) -> Result<Value>;

    /// `DELETE /cart` — clear every line.
    async fn checkout_cart(&self) -> Result<Value>;
}

#[async_trait]
impl<T: CartApi + ?Sized> CartApi for Arc<T> {
    async fn fetch_inventory(&self) -> Result<Vec<InventoryItem>> {
        (**self).fetch_inventory().await
    }

    async fn fetch_cart(&self) -> Result<Vec<CartItem>> {
        (**self).fetch_cart().await
    }

    async fn add_to_cart(&self, item: &CartItem) -> Result<CartItem> {
        (**self).add_to_cart(item).await
    }

    async fn update_cart_item(&self, id: &ItemId, quantity: u32) -> Result<Value> {
        (**self).update_cart_item(id, quantity).await
    }

    async fn delete_cart_item(&self, id: &ItemId) -> Result<Value> {
        (**self).delete_cart_item(id).await
    }

    async fn checkout_cart(&self) -> Result<Value> {
        (**self).checkout_cart().await
    }
}
