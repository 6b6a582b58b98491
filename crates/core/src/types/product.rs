//! Catalog product types.
//!
//! Mirrors the JSON shape served by the catalog API. Products are read-only
//! within a session: the storefront fetches the catalog once and treats the
//! records as immutable from then on.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog-assigned product identifier.
    pub id: u64,
    /// Display title.
    pub title: String,
    /// Unit price in the store currency. The API serves plain JSON numbers;
    /// `Decimal` keeps comparisons and formatting exact.
    pub price: Decimal,
    /// Long-form description.
    pub description: String,
    /// Category label (e.g., "electronics").
    pub category: String,
    /// Product image URL.
    pub image: String,
    /// Aggregate customer rating, if the API provides one.
    #[serde(default)]
    pub rating: Option<Rating>,
}

/// Aggregate customer rating for a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Average star rating (0.0 - 5.0).
    pub rate: Decimal,
    /// Number of reviews behind the average.
    pub count: u64,
}

impl Product {
    /// The product's rating rate, treating a missing rating as zero.
    #[must_use]
    pub fn rating_rate(&self) -> Decimal {
        self.rating
            .as_ref()
            .map_or_else(Decimal::default, |r| r.rate)
    }
}
