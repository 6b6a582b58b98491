//! Shopping cart and line item types.
//!
//! The cart is the only durable entity in the storefront. It serializes as a
//! plain array of line items so the persisted form stays compatible with the
//! storage layout described in the storage module.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::Product;

/// One row in the cart: a product and its requested quantity.
///
/// Title, price, and image are captured when the line is first created and
/// are intentionally not refreshed on later adds. A price change in the
/// catalog does not rewrite lines already in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Product identifier this line refers to.
    pub id: u64,
    /// Title as stored at first add.
    pub title: String,
    /// Unit price as stored at first add.
    pub price: Decimal,
    /// Image URL as stored at first add.
    pub image: String,
    /// Requested quantity, always at least 1.
    pub quantity: u32,
}

impl From<&Product> for CartLine {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity: 1,
        }
    }
}

/// An insertion-ordered shopping cart.
///
/// Invariant: at most one [`CartLine`] per product id. Adding a product that
/// is already in the cart increments that line's quantity instead of
/// appending a duplicate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add one unit of `product` to the cart.
    ///
    /// If a line with the same product id already exists its quantity is
    /// incremented; the stored title, price, and image are left untouched.
    /// Otherwise a new line with quantity 1 is appended.
    pub fn add(&mut self, product: &Product) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.id == product.id) {
            line.quantity = line.quantity.saturating_add(1);
        } else {
            self.lines.push(CartLine::from(product));
        }
    }

    /// The cart lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Sum of `price * quantity` across all lines.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.lines
            .iter()
            .map(|l| l.price * Decimal::from(l.quantity))
            .sum()
    }
}
