use std::sync::{Arc, Mutex, PoisonError};

use super::UiEvent;
use crate::api::CartApi;
use crate::error::{CartError, Result};
use crate::model::{CartItem, InventoryItem, ItemId};
use crate::store::{Store, SubscriptionId};
use crate::view::{mount_points, Document, View};

/// Drives the cart client.
///
/// Built once from its collaborators; owns a render subscription on the store
/// that is released on drop. Every action mutates local state only after the
/// backend call it depends on has succeeded. A failed call is logged and
/// returned, and leaves the store as it was.
///
/// Overlapping actions are not serialized: two `AddToCart` dispatches for
/// the same item that are in flight at once will both reach the backend.
pub struct Controller<A, D> {
    api: A,
    store: Store,
    view: Arc<View<D>>,
    subscription: Mutex<Option<SubscriptionId>>,
}

impl<A, D> Controller<A, D>
where
    A: CartApi,
    D: Document + 'static,
{
    pub fn new(api: A, store: Store, document: D) -> Self {
        Self {
            api,
            store,
            view: Arc::new(View::new(document)),
            subscription: Mutex::new(None),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn document(&self) -> &D {
        self.view.document()
    }

    /// Check the mount points, subscribe the renderer, then load inventory
    /// and cart from the backend. Each load re-renders.
    pub async fn init(&self) -> Result<()> {
        for selector in mount_points() {
            if !self.document().contains(selector) {
                return Err(CartError::MissingElement(selector.to_string()));
            }
        }
        self.bind();

        let inventory = self
            .api
            .fetch_inventory()
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "failed to load inventory"))?;
        self.store.set_inventory(inventory);

        let cart = self
            .api
            .fetch_cart()
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "failed to load cart"))?;
        self.store.set_cart(cart);

        tracing::info!(
            inventory = self.store.inventory().len(),
            cart = self.store.cart().len(),
            "cart client ready"
        );
        Ok(())
    }

    /// Subscribe the renderer to the store. Calling it again is a no-op.
    fn bind(&self) {
        let mut subscription = self
            .subscription
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if subscription.is_some() {
            return;
        }
        let view = Arc::clone(&self.view);
        *subscription = Some(self.store.subscribe(move |_, snapshot| {
            view.render(&snapshot.inventory, &snapshot.cart);
        }));
    }

    /// Single entry point for user interaction.
    pub async fn dispatch(&self, event: UiEvent) -> Result<()> {
        tracing::debug!(?event, "dispatch");
        let result = match &event {
            UiEvent::Increase(id) => {
                self.increase(id);
                Ok(())
            }
            UiEvent::Decrease(id) => {
                self.decrease(id);
                Ok(())
            }
            UiEvent::AddToCart(id) => self.add_to_cart(id).await,
            UiEvent::Delete(id) => self.delete(id).await,
            UiEvent::Checkout => self.checkout().await,
        };
        if let Err(e) = &result {
            tracing::warn!(?event, error = %e, "cart action failed");
        }
        result
    }

    /// Delegated click handler: resolve the click to an event and dispatch
    /// it. Clicks that are not actions are ignored.
    pub async fn handle_click(&self, class: &str, data_id: Option<&str>) -> Result<()> {
        match UiEvent::from_click(class, data_id) {
            Some(event) => self.dispatch(event).await,
            None => Ok(()),
        }
    }

    /// Raise the pending quantity by one. Returns false if the item is unknown.
    pub fn increase(&self, id: &ItemId) -> bool {
        self.update_pending(id, |item| {
            item.selected_quantity = item.selected_quantity.saturating_add(1);
            true
        })
    }

    /// Lower the pending quantity by one. Returns false if the item is
    /// unknown or already at zero; neither case writes to the store.
    pub fn decrease(&self, id: &ItemId) -> bool {
        self.update_pending(id, |item| {
            if item.selected_quantity == 0 {
                return false;
            }
            item.selected_quantity -= 1;
            true
        })
    }

    /// Commit the pending quantity of an item to the cart.
    ///
    /// No-op without a network call when the pending quantity is zero. If the
    /// cart already holds the item, the backend line is updated to the summed
    /// quantity; otherwise a new line is created and the line the backend
    /// returns is appended.
    pub async fn add_to_cart(&self, id: &ItemId) -> Result<()> {
        let Some(item) = self.store.inventory().into_iter().find(|item| &item.id == id) else {
            return Ok(());
        };
        let pending = item.selected_quantity;
        if pending == 0 {
            return Ok(());
        }

        let existing = self.store.cart().into_iter().find(|line| &line.id == id);
        match existing {
            Some(line) => {
                let quantity = line.quantity.saturating_add(pending);
                self.api.update_cart_item(id, quantity).await?;

                let mut cart = self.store.cart();
                if let Some(line) = cart.iter_mut().find(|line| &line.id == id) {
                    line.quantity = quantity;
                }
                self.clear_pending(id);
                self.store.set_cart(cart);
            }
            None => {
                let request = CartItem {
                    id: item.id,
                    name: item.name,
                    quantity: pending,
                };
                let created = self.api.add_to_cart(&request).await?;

                self.clear_pending(id);
                let mut cart = self.store.cart();
                cart.push(created);
                self.store.set_cart(cart);
            }
        }
        Ok(())
    }

    /// Remove a cart line on the backend, then drop it locally.
    pub async fn delete(&self, id: &ItemId) -> Result<()> {
        self.api.delete_cart_item(id).await?;
        let cart: Vec<CartItem> = self
            .store
            .cart()
            .into_iter()
            .filter(|line| &line.id != id)
            .collect();
        self.store.set_cart(cart);
        Ok(())
    }

    /// Clear the cart on the backend, empty it locally, then reload the
    /// inventory once.
    pub async fn checkout(&self) -> Result<()> {
        self.api.checkout_cart().await?;
        self.store.set_cart(Vec::new());

        let inventory = self.api.fetch_inventory().await?;
        self.store.set_inventory(inventory);
        tracing::info!("checked out");
        Ok(())
    }

    /// Copy the inventory, apply `f` to the matching item, and write the copy
    /// back if `f` reports a change.
    fn update_pending<F>(&self, id: &ItemId, f: F) -> bool
    where
        F: FnOnce(&mut InventoryItem) -> bool,
    {
        let mut inventory = self.store.inventory();
        let changed = match inventory.iter_mut().find(|item| &item.id == id) {
            Some(item) => f(item),
            None => false,
        };
        if changed {
            self.store.set_inventory(inventory);
        }
        changed
    }

    fn clear_pending(&self, id: &ItemId) {
        let mut inventory = self.store.inventory();
        if let Some(item) = inventory.iter_mut().find(|item| &item.id == id) {
            item.selected_quantity = 0;
        }
        self.store.set_inventory(inventory);
    }
}

impl<A, D> Drop for Controller<A, D> {
    fn drop(&mut self) {
        let subscription = self
            .subscription
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(id) = subscription {
            self.store.unsubscribe(id);
        }
    }
}
