//! Catalog filters.
//!
//! Each navigation entry of the storefront maps to a [`CatalogFilter`] that
//! derives a display subset from the full catalog. Filters are pure: they
//! take the catalog as a slice and return an owned subset plus display copy,
//! so they can be unit-tested without any rendering layer.
//!
//! Index-parity filters (hot deals, free shipping) always select against the
//! *full catalog order*, never against an already-filtered list.

use rust_decimal::Decimal;

use crate::types::Product;

/// Minimum rating for a product to count as a best seller.
const BEST_SELLER_MIN_RATE: Decimal = Decimal::from_parts(4, 0, 0, false, 0);

/// Navigation entries shown in the storefront header.
///
/// Used by the renderer to mark the active entry. An empty search resolves
/// to [`NavEntry::Home`], matching the "empty query resets to home" rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEntry {
    Home,
    HotDeals,
    BestSellers,
    FreeShipping,
    Search,
}

impl NavEntry {
    /// Stable identifier used by templates to mark the active entry.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::HotDeals => "hot-deals",
            Self::BestSellers => "best-sellers",
            Self::FreeShipping => "free-shipping",
            Self::Search => "search",
        }
    }
}

/// A named rule deriving a display subset (and ordering) of the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogFilter {
    /// The full catalog, unchanged.
    All,
    /// Products at odd zero-based catalog positions.
    HotDeals,
    /// Products rated at least 4.0, highest rated first.
    BestSellers,
    /// Products at even zero-based catalog positions.
    FreeShipping,
    /// Case-insensitive substring search over title, description, category.
    Search(String),
}

impl CatalogFilter {
    /// Build a filter from a raw search query.
    ///
    /// The query is trimmed; an empty or whitespace-only query is equivalent
    /// to [`CatalogFilter::All`] and therefore also resets the active
    /// navigation entry to Home.
    #[must_use]
    pub fn from_search_query(query: &str) -> Self {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            Self::All
        } else {
            Self::Search(trimmed.to_string())
        }
    }

    /// Apply the filter to the full catalog, returning the display subset.
    ///
    /// An empty result on a loaded catalog means "no matches for this
    /// filter"; the caller distinguishes that from a catalog that has not
    /// loaded yet (see the storefront's catalog store).
    #[must_use]
    pub fn apply(&self, catalog: &[Product]) -> Vec<Product> {
        match self {
            Self::All => catalog.to_vec(),
            Self::HotDeals => index_parity(catalog, 1),
            Self::FreeShipping => index_parity(catalog, 0),
            Self::BestSellers => best_sellers(catalog),
            Self::Search(query) => search(catalog, query),
        }
    }

    /// Human-readable heading for the rendered product grid.
    #[must_use]
    pub fn heading(&self) -> String {
        match self {
            Self::All => "All Products".to_string(),
            Self::HotDeals => "Hot Deals - Up to 40% Off".to_string(),
            Self::BestSellers => "Best Sellers - Highest Rated".to_string(),
            Self::FreeShipping => "Free Shipping - No minimum order".to_string(),
            Self::Search(query) => format!("Search Results for \"{query}\""),
        }
    }

    /// Message shown when the filter matches nothing on a loaded catalog.
    #[must_use]
    pub fn empty_message(&self) -> String {
        match self {
            Self::All => "No products available".to_string(),
            Self::HotDeals => "No hot deals available".to_string(),
            Self::BestSellers => "No best sellers available".to_string(),
            Self::FreeShipping => "No free shipping products available".to_string(),
            Self::Search(query) => format!("No products found for \"{query}\""),
        }
    }

    /// The navigation entry this filter activates.
    #[must_use]
    pub const fn nav_entry(&self) -> NavEntry {
        match self {
            Self::All => NavEntry::Home,
            Self::HotDeals => NavEntry::HotDeals,
            Self::BestSellers => NavEntry::BestSellers,
            Self::FreeShipping => NavEntry::FreeShipping,
            Self::Search(_) => NavEntry::Search,
        }
    }
}

/// Select catalog entries whose zero-based index has the given parity.
fn index_parity(catalog: &[Product], remainder: usize) -> Vec<Product> {
    catalog
        .iter()
        .enumerate()
        .filter(|(i, _)| i % 2 == remainder)
        .map(|(_, p)| p.clone())
        .collect()
}

/// Products rated at least [`BEST_SELLER_MIN_RATE`], sorted descending by
/// rate. The sort is stable: ties keep their catalog order.
fn best_sellers(catalog: &[Product]) -> Vec<Product> {
    let mut selected: Vec<Product> = catalog
        .iter()
        .filter(|p| p.rating_rate() >= BEST_SELLER_MIN_RATE)
        .cloned()
        .collect();
    selected.sort_by(|a, b| b.rating_rate().cmp(&a.rating_rate()));
    selected
}

/// Case-insensitive substring match on title, description, or category.
fn search(catalog: &[Product], query: &str) -> Vec<Product> {
    let needle = query.to_lowercase();
    catalog
        .iter()
        .filter(|p| {
            p.title.to_lowercase().contains(&needle)
                || p.description.to_lowercase().contains(&needle)
                || p.category.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
