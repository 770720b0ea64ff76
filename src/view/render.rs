use super::{Document, CART_CONTAINER, INVENTORY_CONTAINER};
use crate::model::{CartItem, InventoryItem};

/// Inventory panel: a heading plus one `.item` row per item with the pending
/// quantity stepper and an add-to-cart button.
pub fn render_inventory(inventory: &[InventoryItem]) -> String {
    let mut html = String::from("<h1>Inventory</h1>\n");
    for item in inventory {
        html.push_str(&format!(
            concat!(
                "<div class=\"item\" data-id=\"{id}\">",
                "<span class=\"name\">{name}</span>",
                "<button class=\"decrease\">-</button>",
                "<span class=\"quantity\">{quantity}</span>",
                "<button class=\"increase\">+</button>",
                "<button class=\"add-to-cart\">Add to Cart</button>",
                "</div>\n"
            ),
            id = escape_html(&item.id.as_text()),
            name = escape_html(&item.name),
            quantity = item.selected_quantity,
        ));
    }
    html
}

/// Cart list: one `<li>` per committed line with a delete button.
pub fn render_cart(cart: &[CartItem]) -> String {
    let mut html = String::new();
    for line in cart {
        html.push_str(&format!(
            concat!(
                "<li data-id=\"{id}\">{name} x {quantity}",
                "<button class=\"delete-from-cart\">Delete</button>",
                "</li>\n"
            ),
            id = escape_html(&line.id.as_text()),
            name = escape_html(&line.name),
            quantity = line.quantity,
        ));
    }
    html
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Writes rendered markup into a document's two containers.
pub struct View<D> {
    document: D,
}

impl<D: Document> View<D> {
    pub fn new(document: D) -> Self {
        Self { document }
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn render_inventory(&self, inventory: &[InventoryItem]) {
        self.document
            .set_inner_html(INVENTORY_CONTAINER, &render_inventory(inventory));
    }

    pub fn render_cart(&self, cart: &[CartItem]) {
        self.document
            .set_inner_html(CART_CONTAINER, &render_cart(cart));
    }

    /// Re-render both containers.
    pub fn render(&self, inventory: &[InventoryItem], cart: &[CartItem]) {
        self.render_inventory(inventory);
        self.render_cart(cart);
    }
}
