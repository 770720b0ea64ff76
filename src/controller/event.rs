use std::str::FromStr;

use thiserror::Error;

use crate::model::ItemId;

/// A user action, already resolved to the item it targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Raise the pending quantity of an inventory item by one.
    Increase(ItemId),
    /// Lower the pending quantity of an inventory item by one, not below zero.
    Decrease(ItemId),
    /// Commit the pending quantity of an inventory item to the cart.
    AddToCart(ItemId),
    /// Remove a cart line.
    Delete(ItemId),
    /// Clear the cart.
    Checkout,
}

impl UiEvent {
    /// Map a click to an event using the clicked element's class and the
    /// `data-id` of its closest row (`.item` or `li`).
    ///
    /// Returns `None` for clicks that are not actions, or for item actions
    /// with no row id.
    pub fn from_click(class: &str, data_id: Option<&str>) -> Option<Self> {
        let id = data_id.map(ItemId::from);
        match class {
            "increase" => id.map(UiEvent::Increase),
            "decrease" => id.map(UiEvent::Decrease),
            "add-to-cart" => id.map(UiEvent::AddToCart),
            "delete-from-cart" => id.map(UiEvent::Delete),
            "checkout-button" => Some(UiEvent::Checkout),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ParseEventError(String);

/// Terminal command form: `inc <id>`, `dec <id>`, `add <id>`, `del <id>`,
/// `checkout`.
impl FromStr for UiEvent {
    type Err = ParseEventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let verb = parts
            .next()
            .ok_or_else(|| ParseEventError("empty command".into()))?;
        let id = parts.next().map(ItemId::from);
        if parts.next().is_some() {
            return Err(ParseEventError(format!("too many arguments: {}", s.trim())));
        }

        let need_id = |id: Option<ItemId>| {
            id.ok_or_else(|| ParseEventError(format!("{} needs an item id", verb)))
        };
        match verb {
            "inc" | "+" => Ok(UiEvent::Increase(need_id(id)?)),
            "dec" | "-" => Ok(UiEvent::Decrease(need_id(id)?)),
            "add" => Ok(UiEvent::AddToCart(need_id(id)?)),
            "del" | "rm" => Ok(UiEvent::Delete(need_id(id)?)),
            "checkout" if id.is_none() => Ok(UiEvent::Checkout),
            "checkout" => Err(ParseEventError("checkout takes no id".into())),
            other => Err(ParseEventError(format!("unknown command: {}", other))),
        }
    }
}
