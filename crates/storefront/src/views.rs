//! Cart display data and page templates.
//!
//! Views are pure projections: cart state goes in, preformatted BRL
//! strings and markup come out. Nothing here mutates the cart.

use askama::Template;
use quitanda_core::Price;

use crate::cart::{CartStorage, CartStore, LineItem};
use crate::filters;

/// Cart item display data for templates.
#[derive(Debug, Clone)]
pub struct CartItemView {
    pub name: String,
    pub quantity: u32,
    pub unit_price: String,
    pub line_total: String,
    pub image: Option<ImageView>,
}

/// Image display data for templates.
#[derive(Debug, Clone)]
pub struct ImageView {
    pub url: String,
}

/// Cart display data for templates.
#[derive(Debug, Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub total: String,
    pub item_count: u32,
}

impl CartView {
    /// Create an empty cart view.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: Price::ZERO.to_string(),
            item_count: 0,
        }
    }
}

impl From<&LineItem> for CartItemView {
    fn from(item: &LineItem) -> Self {
        Self {
            name: item.name.clone(),
            quantity: item.quantity,
            unit_price: item.unit_price.to_string(),
            line_total: item.line_total().to_string(),
            image: item
                .image_ref
                .as_ref()
                .map(|url| ImageView { url: url.clone() }),
        }
    }
}

impl<S: CartStorage> From<&CartStore<S>> for CartView {
    fn from(store: &CartStore<S>) -> Self {
        Self {
            items: store.items().iter().map(CartItemView::from).collect(),
            total: store.total().to_string(),
            item_count: store.item_count(),
        }
    }
}

/// Cart page template.
#[derive(Template)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
}

/// Cart items fragment template.
#[derive(Template)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template.
#[derive(Template)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}
