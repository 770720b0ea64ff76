use serde::{Deserialize, Deserializer, Serialize};

use super::ItemId;

/// An item offered by the backend, plus the quantity the user has selected
/// but not yet added to the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: ItemId,
    pub name: String,
    /// Pending quantity. UI-only; absent or `null` on the wire reads as 0.
    #[serde(
        rename = "selectedQuantity",
        default,
        deserialize_with = "null_as_zero",
        skip_serializing_if = "is_zero"
    )]
    pub selected_quantity: u32,
}

impl InventoryItem {
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            selected_quantity: 0,
        }
    }
}

/// A committed cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: ItemId,
    pub name: String,
    pub quantity: u32,
}

impl CartItem {
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>, quantity: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            quantity,
        }
    }
}

/// Body of `PUT /cart/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityUpdate {
    pub quantity: u32,
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or(0))
}

fn is_zero(n: &u32) -> bool {
    *n == 0
}
