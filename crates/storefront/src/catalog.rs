//! Catalog API client and in-memory catalog store.
//!
//! The catalog is fetched exactly once per process, at startup, from a plain
//! REST endpoint returning a JSON array of products. There is no retry and
//! no cache invalidation: on failure the page shows an inline error and the
//! user reloads manually.
//!
//! [`CatalogStore`] tracks the load lifecycle explicitly so the renderer can
//! tell "still loading" apart from "loaded but this filter matched nothing"
//! and from "the fetch failed".

use std::sync::{PoisonError, RwLock};

use thiserror::Error;
use url::Url;

use storeclick_core::Product;

/// Errors that can occur when fetching the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP transport failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint answered with a non-2xx status.
    #[error("catalog endpoint returned HTTP {status}")]
    Status { status: reqwest::StatusCode },

    /// Response body was not a JSON array of products.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// HTTP client for the catalog API.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl CatalogClient {
    /// Create a client for the given catalog endpoint.
    #[must_use]
    pub fn new(endpoint: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint,
        }
    }

    /// Perform the single catalog retrieval.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] on transport failure, non-2xx status, or a
    /// malformed response body.
    pub async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        let response = self.http.get(self.endpoint.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status { status });
        }

        let body = response.text().await?;
        let products = serde_json::from_str(&body)?;
        Ok(products)
    }
}

/// Load lifecycle of the in-memory catalog.
#[derive(Debug, Clone, Default)]
pub enum CatalogState {
    /// Initial fetch has not resolved yet.
    #[default]
    Loading,
    /// Catalog loaded; the product list is immutable for the session.
    Ready(Vec<Product>),
    /// Initial fetch failed and no prior catalog exists.
    Failed(String),
}

/// Holder of the session's product list.
///
/// The list is replaced on a successful load and read by everything else;
/// a failed load never discards an already-loaded catalog.
#[derive(Debug, Default)]
pub struct CatalogStore {
    state: RwLock<CatalogState>,
}

impl CatalogStore {
    /// Create a store in the `Loading` state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the catalog and record the outcome.
    pub async fn load(&self, client: &CatalogClient) {
        let result = client.fetch_products().await;
        self.apply_load_result(result);
    }

    /// Record the outcome of a catalog fetch.
    pub fn apply_load_result(&self, result: Result<Vec<Product>, CatalogError>) {
        let mut state = self
            .state
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        match result {
            Ok(products) => {
                tracing::info!(count = products.len(), "catalog loaded");
                *state = CatalogState::Ready(products);
            }
            Err(e) => {
                if matches!(*state, CatalogState::Ready(_)) {
                    // Keep serving the catalog we already have
                    tracing::warn!(error = %e, "catalog refresh failed, keeping current products");
                } else {
                    tracing::error!(error = %e, "catalog load failed");
                    *state = CatalogState::Failed(e.to_string());
                }
            }
        }
    }

    /// A snapshot of the current load state and product list.
    #[must_use]
    pub fn snapshot(&self) -> CatalogState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Look up a product by id in the loaded catalog.
    #[must_use]
    pub fn product(&self, id: u64) -> Option<Product> {
        match &*self.state.read().unwrap_or_else(PoisonError::into_inner) {
            CatalogState::Ready(products) => products.iter().find(|p| p.id == id).cloned(),
            CatalogState::Loading | CatalogState::Failed(_) => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn product(id: u64) -> Product {
        Product {
            id,
            title: format!("p{id}"),
            price: Decimal::ONE,
            description: String::new(),
            category: "misc".to_string(),
            image: String::new(),
            rating: None,
        }
    }

    fn parse_error() -> CatalogError {
        serde_json::from_str::<Vec<Product>>("not json")
            .unwrap_err()
            .into()
    }

    #[test]
    fn test_starts_in_loading_state() {
        let store = CatalogStore::new();
        assert!(matches!(store.snapshot(), CatalogState::Loading));
        assert!(store.product(1).is_none());
    }

    #[test]
    fn test_successful_load_replaces_state() {
        let store = CatalogStore::new();
        store.apply_load_result(Ok(vec![product(1), product(2)]));

        match store.snapshot() {
            CatalogState::Ready(products) => assert_eq!(products.len(), 2),
            other => panic!("expected Ready, got {other:?}"),
        }
        assert_eq!(store.product(2).map(|p| p.id), Some(2));
        assert!(store.product(99).is_none());
    }

    #[test]
    fn test_first_load_failure_is_recorded() {
        let store = CatalogStore::new();
        store.apply_load_result(Err(parse_error()));
        assert!(matches!(store.snapshot(), CatalogState::Failed(_)));
    }

    #[test]
    fn test_failure_keeps_previously_loaded_catalog() {
        let store = CatalogStore::new();
        store.apply_load_result(Ok(vec![product(1)]));
        store.apply_load_result(Err(parse_error()));

        match store.snapshot() {
            CatalogState::Ready(products) => assert_eq!(products.len(), 1),
            other => panic!("expected Ready, got {other:?}"),
        }
    }
}
