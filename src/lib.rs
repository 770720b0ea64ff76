//! cart_client — shopping-cart client for a JSON CRUD backend.
//!
//! The client keeps two lists, the backend's inventory and the user's cart,
//! in an observable [`Store`]. A [`Controller`] loads both from a [`CartApi`],
//! re-renders them into a [`Document`] whenever the store changes, and turns
//! user actions ([`UiEvent`]) into backend calls followed by store writes.
//!
//! ```text
//!   UiEvent ──▶ Controller ──▶ CartApi (HTTP / in-memory)
//!                   │
//!                   ▼ set_inventory / set_cart
//!                 Store ──▶ observers ──▶ View ──▶ Document
//! ```

pub mod api;
pub mod config;
pub mod controller;
mod error;
pub mod model;
pub mod store;
pub mod telemetry;
pub mod view;

#[cfg(feature = "http")]
pub use api::HttpCartApi;
pub use api::{ApiCall, CartApi, InMemoryCartApi};
pub use config::ClientConfig;
pub use controller::{Controller, ParseEventError, UiEvent};
pub use error::{CartError, Result};
pub use model::{CartItem, InventoryItem, ItemId, QuantityUpdate};
pub use store::{StateChange, StateSnapshot, Store, SubscriptionId};
pub use view::{Document, MemoryDocument, View};
