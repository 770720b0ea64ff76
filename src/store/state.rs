use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::{Observer, SubscriptionId};
use crate::model::{CartItem, InventoryItem};

/// Which list a write replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateChange {
    Inventory,
    Cart,
}

/// Copy of both lists taken right after a write.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateSnapshot {
    pub inventory: Vec<InventoryItem>,
    pub cart: Vec<CartItem>,
    /// Number of writes the store has seen, including this one.
    pub revision: u64,
}

#[derive(Default)]
struct Inner {
    state: RwLock<StateSnapshot>,
    observers: RwLock<Vec<(SubscriptionId, Observer)>>,
    next_id: AtomicU64,
}

/// Holds the inventory and cart lists and notifies observers on every write.
///
/// Setters replace a list wholesale and then call every observer, in
/// subscription order, synchronously and unconditionally: writing an identical
/// list still notifies. No lock is held while observers run, so an observer
/// may read from or write to the store.
///
/// Clone-friendly via Arc; clones share state and observers.
#[derive(Clone, Default)]
pub struct Store {
    inner: Arc<Inner>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inventory(&self) -> Vec<InventoryItem> {
        self.read().inventory.clone()
    }

    pub fn cart(&self) -> Vec<CartItem> {
        self.read().cart.clone()
    }

    pub fn revision(&self) -> u64 {
        self.read().revision
    }

    /// Replace the inventory list and notify.
    pub fn set_inventory(&self, inventory: Vec<InventoryItem>) {
        let snapshot = {
            let mut state = self.write();
            state.inventory = inventory;
            state.revision += 1;
            state.clone()
        };
        self.notify(StateChange::Inventory, &snapshot);
    }

    /// Replace the cart list and notify.
    pub fn set_cart(&self, cart: Vec<CartItem>) {
        let snapshot = {
            let mut state = self.write();
            state.cart = cart;
            state.revision += 1;
            state.clone()
        };
        self.notify(StateChange::Cart, &snapshot);
    }

    /// Register an observer. Any number may be registered; each is called on
    /// every write until unsubscribed.
    pub fn subscribe<F>(&self, observer: F) -> SubscriptionId
    where
        F: Fn(StateChange, &StateSnapshot) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.inner.next_id.fetch_add(1, Ordering::Relaxed));
        self.inner
            .observers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Arc::new(observer)));
        id
    }

    /// Remove an observer. Returns false if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut observers = self
            .inner
            .observers
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let before = observers.len();
        observers.retain(|(sub, _)| *sub != id);
        observers.len() != before
    }

    pub fn observer_count(&self) -> usize {
        self.inner
            .observers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn notify(&self, change: StateChange, snapshot: &StateSnapshot) {
        let observers: Vec<Observer> = self
            .inner
            .observers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, observer)| Arc::clone(observer))
            .collect();

        tracing::debug!(
            ?change,
            revision = snapshot.revision,
            observers = observers.len(),
            "store changed"
        );

        for observer in observers {
            observer(change, snapshot);
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, StateSnapshot> {
        self.inner.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StateSnapshot> {
        self.inner.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Mutex;

    #[test]
    fn every_observer_sees_every_write() {
        let store = Store::new();
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&first);
        store.subscribe(move |_, _| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let counter = Arc::clone(&second);
        store.subscribe(move |_, _| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        store.set_inventory(vec![InventoryItem::new(1, "Apple")]);
        store.set_cart(vec![]);

        assert_eq!(first.load(Ordering::SeqCst), 2);
        assert_eq!(second.load(Ordering::SeqCst), 2);
        assert_eq!(store.revision(), 2);
    }

    #[test]
    fn identical_write_still_notifies() {
        let store = Store::new();
        let changes = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&changes);
        store.subscribe(move |change, snapshot| {
            seen.lock().unwrap().push((change, snapshot.revision));
        });

        store.set_cart(vec![]);
        store.set_cart(vec![]);

        assert_eq!(
            *changes.lock().unwrap(),
            vec![(StateChange::Cart, 1), (StateChange::Cart, 2)]
        );
    }

    #[test]
    fn snapshot_reflects_the_write() {
        let store = Store::new();
        store.set_cart(vec![CartItem::new(1, "Apple", 2)]);

        let captured = Arc::new(Mutex::new(None));
        let slot = Arc::clone(&captured);
        store.subscribe(move |_, snapshot| {
            *slot.lock().unwrap() = Some(snapshot.clone());
        });
        store.set_inventory(vec![InventoryItem::new(2, "Pear")]);

        let snapshot = captured.lock().unwrap().clone().unwrap();
        assert_eq!(snapshot.cart, vec![CartItem::new(1, "Apple", 2)]);
        assert_eq!(snapshot.inventory, vec![InventoryItem::new(2, "Pear")]);
    }

    #[test]
    fn unsubscribe_removes_only_that_observer() {
        let store = Store::new();
        let a = store.subscribe(|_, _| {});
        let b = store.subscribe(|_, _| {});
        assert_ne!(a, b);

        assert!(store.unsubscribe(a));
        assert!(!store.unsubscribe(a));
        assert_eq!(store.observer_count(), 1);
    }

    #[test]
    fn observer_may_read_the_store() {
        let store = Store::new();
        let reader = store.clone();
        let lengths = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&lengths);
        store.subscribe(move |_, _| {
            seen.lock().unwrap().push(reader.cart().len());
        });

        store.set_cart(vec![CartItem::new(1, "Apple", 1)]);
        assert_eq!(*lengths.lock().unwrap(), vec![1]);
    }
}
