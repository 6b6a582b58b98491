//! Integration tests for Storeclick.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p storeclick-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_flow` - Cart mutation, persistence, and event ordering
//! - `catalog_filtering` - Filters applied against the catalog store
//! - `account_registration` - Form validation gating and persistence
//!
//! Tests run against real filesystem storage in per-test temporary
//! directories; no network access is required.

#![cfg_attr(not(test), forbid(unsafe_code))]

use rust_decimal::Decimal;
use storeclick_core::{Product, Rating};

/// Build a catalog product for tests.
#[must_use]
pub fn product(id: u64, title: &str, price: &str) -> Product {
    Product {
        id,
        title: title.to_string(),
        price: price.parse().unwrap_or(Decimal::ONE),
        description: format!("Description of {title}"),
        category: "test goods".to_string(),
        image: format!("https://example.com/products/{id}.jpg"),
        rating: None,
    }
}

/// Build a rated catalog product for tests.
#[must_use]
pub fn rated_product(id: u64, title: &str, rate: &str) -> Product {
    let mut p = product(id, title, "10.00");
    p.rating = Some(Rating {
        rate: rate.parse().unwrap_or(Decimal::ZERO),
        count: 25,
    });
    p
}
