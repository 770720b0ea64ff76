//! View - renders state into markup and writes it into a [`Document`].
//!
//! Rendering is a pure function of the two lists. Each render replaces the
//! full inner markup of its container; there is no incremental patching.

mod document;
mod render;

pub use document::{Document, MemoryDocument};
pub use render::{escape_html, render_cart, render_inventory, View};

/// Container that receives the inventory panel.
pub const INVENTORY_CONTAINER: &str = ".inventory-container";
/// Container that receives the cart lines.
pub const CART_CONTAINER: &str = ".cart-items";
/// The checkout trigger.
pub const CHECKOUT_BUTTON: &str = ".checkout-button";

/// Elements that must exist before the controller starts.
pub fn mount_points() -> [&'static str; 3] {
    [INVENTORY_CONTAINER, CART_CONTAINER, CHECKOUT_BUTTON]
}
