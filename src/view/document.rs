use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::mount_points;

/// The slice of a DOM the client needs: look up an element by selector and
/// replace its inner markup.
pub trait Document: Send + Sync {
    fn contains(&self, selector: &str) -> bool;

    /// Replace the inner markup of the element matching `selector`. Unknown
    /// selectors are ignored.
    fn set_inner_html(&self, selector: &str, html: &str);
}

impl<T: Document + ?Sized> Document for Arc<T> {
    fn contains(&self, selector: &str) -> bool {
        (**self).contains(selector)
    }

    fn set_inner_html(&self, selector: &str, html: &str) {
        (**self).set_inner_html(selector, html)
    }
}

#[derive(Default)]
struct Element {
    html: String,
    writes: usize,
}

/// Document kept in memory: a set of selectors, each with its current markup
/// and a count of how many times it has been written.
///
/// Clone-friendly via Arc; clones see the same elements.
#[derive(Clone, Default)]
pub struct MemoryDocument {
    elements: Arc<Mutex<HashMap<String, Element>>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Document with the inventory container, cart container and checkout
    /// button already present.
    pub fn with_mount_points() -> Self {
        let doc = Self::new();
        for selector in mount_points() {
            doc.insert(selector);
        }
        doc
    }

    /// Add an empty element.
    pub fn insert(&self, selector: &str) {
        self.lock().entry(selector.to_string()).or_default();
    }

    pub fn inner_html(&self, selector: &str) -> Option<String> {
        self.lock().get(selector).map(|el| el.html.clone())
    }

    /// How many times the element's markup has been replaced.
    pub fn writes(&self, selector: &str) -> usize {
        self.lock().get(selector).map(|el| el.writes).unwrap_or(0)
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Element>> {
        self.elements.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Document for MemoryDocument {
    fn contains(&self, selector: &str) -> bool {
        self.lock().contains_key(selector)
    }

    fn set_inner_html(&self, selector: &str, html: &str) {
        if let Some(el) = self.lock().get_mut(selector) {
            el.html = html.to_string();
            el.writes += 1;
        }
    }
}
