//! ItemId - identifier that tolerates both numeric and string ids on the wire.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Identifier of an inventory item or cart line.
///
/// Backends are inconsistent about whether ids are JSON numbers or strings,
/// and ids read back from markup (`data-id`) are always strings. The wire form
/// is preserved for serialization, but equality and hashing go through the
/// textual form, so `ItemId::from(1) == ItemId::from("1")`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(i64),
    Text(String),
}

impl ItemId {
    /// Textual form, as it appears in a URL path segment or `data-id`.
    pub fn as_text(&self) -> String {
        match self {
            ItemId::Number(n) => n.to_string(),
            ItemId::Text(s) => s.clone(),
        }
    }
}

impl PartialEq for ItemId {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ItemId::Number(a), ItemId::Number(b)) => a == b,
            (ItemId::Text(a), ItemId::Text(b)) => a == b,
            _ => self.as_text() == other.as_text(),
        }
    }
}

impl Eq for ItemId {}

impl Hash for ItemId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_text().hash(state);
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Number(n) => write!(f, "{}", n),
            ItemId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for ItemId {
    fn from(n: i64) -> Self {
        ItemId::Number(n)
    }
}

impl From<i32> for ItemId {
    fn from(n: i32) -> Self {
        ItemId::Number(i64::from(n))
    }
}

impl From<u32> for ItemId {
    fn from(n: u32) -> Self {
        ItemId::Number(i64::from(n))
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        ItemId::Text(s.to_string())
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        ItemId::Text(s)
    }
}
