#![allow(dead_code)]

pub mod backend;

use cart_client::{
    CartItem, Controller, InMemoryCartApi, InventoryItem, ItemId, MemoryDocument, Store,
};

pub type TestController = Controller<InMemoryCartApi, MemoryDocument>;

pub fn apple() -> InventoryItem {
    InventoryItem::new(1, "Apple")
}

pub fn pear() -> InventoryItem {
    InventoryItem::new(2, "Pear")
}

pub fn id(n: i64) -> ItemId {
    ItemId::from(n)
}

/// Controller over an in-memory backend, initialized.
pub async fn started(inventory: Vec<InventoryItem>, cart: Vec<CartItem>) -> TestController {
    let api = InMemoryCartApi::new()
        .with_inventory(inventory)
        .with_cart(cart);
    let controller = Controller::new(api, Store::new(), MemoryDocument::with_mount_points());
    controller.init().await.expect("init");
    controller.api().clear_calls();
    controller
}

pub fn pending(controller: &TestController, item: &ItemId) -> Option<u32> {
    controller
        .store()
        .inventory()
        .into_iter()
        .find(|i| &i.id == item)
        .map(|i| i.selected_quantity)
}
