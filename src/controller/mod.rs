//! Controller - wires the API client, store and view together and turns user
//! interaction into state transitions.
//!
//! Events are delegated: the host maps a click (the target's class plus the
//! closest `data-id`) to a [`UiEvent`] once, and hands it to
//! [`Controller::dispatch`]. Nothing is re-bound after a render.
//!
//! ## Example
//!
//! ```ignore
//! use cart_client::{Controller, HttpCartApi, MemoryDocument, Store, UiEvent};
//!
//! let api = HttpCartApi::new("http://localhost:3000")?;
//! let controller = Controller::new(api, Store::new(), MemoryDocument::with_mount_points());
//! controller.init().await?;
//!
//! controller.dispatch(UiEvent::Increase(1.into())).await?;
//! controller.dispatch(UiEvent::AddToCart(1.into())).await?;
//! controller.dispatch(UiEvent::Checkout).await?;
//! ```

mod cart_controller;
mod event;

pub use cart_controller::Controller;
pub use event::{ParseEventError, UiEvent};
