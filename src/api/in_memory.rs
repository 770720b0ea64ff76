//! InMemoryCartApi - backend double for tests, demos and offline development.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use serde_json::{json, Value};

use super::CartApi;
use crate::error::{CartError, Result};
use crate::model::{CartItem, InventoryItem, ItemId};

/// One recorded call against [`InMemoryCartApi`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    FetchInventory,
    FetchCart,
    AddToCart(CartItem),
    UpdateCartItem { id: ItemId, quantity: u32 },
    DeleteCartItem(ItemId),
    CheckoutCart,
}

#[derive(Default)]
struct Backend {
    inventory: Vec<InventoryItem>,
    cart: Vec<CartItem>,
    calls: Vec<ApiCall>,
    fail_next: Option<String>,
}

/// Cart backend kept in process memory.
///
/// Behaves like a plain JSON CRUD server: POST stores the line it was given
/// (replacing one with the same id), PUT and DELETE on an unknown id fail with
/// [`CartError::NotFound`]. Every call is recorded, including failed ones.
///
/// Clone-friendly via Arc; clones observe the same backend.
#[derive(Clone, Default)]
pub struct InMemoryCartApi {
    backend: Arc<Mutex<Backend>>,
}

impl InMemoryCartApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the inventory returned by `fetch_inventory`.
    pub fn with_inventory(self, inventory: Vec<InventoryItem>) -> Self {
        self.lock().inventory = inventory;
        self
    }

    /// Seed the cart returned by `fetch_cart`.
    pub fn with_cart(self, cart: Vec<CartItem>) -> Self {
        self.lock().cart = cart;
        self
    }

    /// Make the next call fail with [`CartError::Injected`].
    pub fn fail_next(&self, reason: impl Into<String>) {
        self.lock().fail_next = Some(reason.into());
    }

    /// Calls received so far, oldest first.
    pub fn calls(&self) -> Vec<ApiCall> {
        self.lock().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.lock().calls.clear();
    }

    /// Cart lines currently held by the backend.
    pub fn stored_cart(&self) -> Vec<CartItem> {
        self.lock().cart.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Backend> {
        self.backend.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Record the call and consume any injected failure.
    fn begin(&self, call: ApiCall) -> Result<MutexGuard<'_, Backend>> {
        let mut backend = self.lock();
        tracing::debug!(?call, "in-memory cart api");
        backend.calls.push(call);
        match backend.fail_next.take() {
            Some(reason) => Err(CartError::Injected(reason)),
            None => Ok(backend),
        }
    }
}

#[async_trait]
impl CartApi for InMemoryCartApi {
    async fn fetch_inventory(&self) -> Result<Vec<InventoryItem>> {
        let backend = self.begin(ApiCall::FetchInventory)?;
        Ok(backend
            .inventory
            .iter()
            .map(|item| InventoryItem::new(item.id.clone(), item.name.clone()))
            .collect())
    }

    async fn fetch_cart(&self) -> Result<Vec<CartItem>> {
        let backend = self.begin(ApiCall::FetchCart)?;
        Ok(backend.cart.clone())
    }

    async fn add_to_cart(&self, item: &CartItem) -> Result<CartItem> {
        let mut backend = self.begin(ApiCall::AddToCart(item.clone()))?;
        match backend.cart.iter().position(|line| line.id == item.id) {
            Some(index) => backend.cart[index] = item.clone(),
            None => backend.cart.push(item.clone()),
        }
        Ok(item.clone())
    }

    async fn update_cart_item(&self, id: &ItemId, quantity: u32) -> Result<Value> {
        let mut backend = self.begin(ApiCall::UpdateCartItem {
            id: id.clone(),
            quantity,
        })?;
        let line = backend
            .cart
            .iter_mut()
            .find(|line| &line.id == id)
            .ok_or_else(|| CartError::NotFound(id.clone()))?;
        line.quantity = quantity;
        Ok(serde_json::to_value(&*line)?)
    }

    async fn delete_cart_item(&self, id: &ItemId) -> Result<Value> {
        let mut backend = self.begin(ApiCall::DeleteCartItem(id.clone()))?;
        let before = backend.cart.len();
        backend.cart.retain(|line| &line.id != id);
        if backend.cart.len() == before {
            return Err(CartError::NotFound(id.clone()));
        }
        Ok(json!({}))
    }

    async fn checkout_cart(&self) -> Result<Value> {
        let mut backend = self.begin(ApiCall::CheckoutCart)?;
        backend.cart.clear();
        Ok(json!({}))
    }
}
