//! Store - observable holder of the inventory and cart lists.
//!
//! ```ignore
//! use cart_client::{Store, StateChange};
//!
//! let store = Store::new();
//! let id = store.subscribe(|change, snapshot| {
//!     println!("{:?}: {} cart lines", change, snapshot.cart.len());
//! });
//!
//! store.set_cart(vec![]);   // notifies every observer
//! store.unsubscribe(id);
//! ```

mod observer;
mod state;

pub use observer::{Observer, SubscriptionId};
pub use state::{StateChange, StateSnapshot, Store};
