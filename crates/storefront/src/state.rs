//! Application state shared across handlers.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use storeclick_core::{Overlay, OverlayKind};

use crate::catalog::{CatalogClient, CatalogStore};
use crate::config::StorefrontConfig;
use crate::services::CartService;
use crate::storage::{JsonStore, StorageError};

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; provides access to the catalog store, the
/// cart service, and the overlay controllers.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog_client: CatalogClient,
    catalog: CatalogStore,
    storage: JsonStore,
    cart: CartService,
    account_overlay: Mutex<Overlay>,
    help_overlay: Mutex<Overlay>,
}

impl AppState {
    /// Create the application state.
    ///
    /// Opens the JSON store under the configured data directory, builds the
    /// cart service with its default logging listener, and prepares an
    /// unloaded catalog store.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub fn new(config: StorefrontConfig) -> Result<Self, StorageError> {
        let storage = JsonStore::open(&config.data_dir)?;

        let mut cart = CartService::new(storage.clone());
        cart.subscribe(|cart| {
            tracing::info!(
                lines = cart.lines().len(),
                quantity = cart.total_quantity(),
                "cart updated"
            );
        });

        let catalog_client = CatalogClient::new(config.catalog_url.clone());

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog_client,
                catalog: CatalogStore::new(),
                storage,
                cart,
                account_overlay: Mutex::new(Overlay::new(OverlayKind::Account)),
                help_overlay: Mutex::new(Overlay::new(OverlayKind::Help)),
            }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog store.
    #[must_use]
    pub fn catalog(&self) -> &CatalogStore {
        &self.inner.catalog
    }

    /// Get a reference to the persisted key-value store.
    #[must_use]
    pub fn storage(&self) -> &JsonStore {
        &self.inner.storage
    }

    /// Get a reference to the cart service.
    #[must_use]
    pub fn cart(&self) -> &CartService {
        &self.inner.cart
    }

    /// Lock the account-overlay controller.
    #[must_use]
    pub fn account_overlay(&self) -> MutexGuard<'_, Overlay> {
        self.inner
            .account_overlay
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Lock the help-overlay controller.
    #[must_use]
    pub fn help_overlay(&self) -> MutexGuard<'_, Overlay> {
        self.inner
            .help_overlay
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Mark both overlay controllers closed.
    ///
    /// Called by every full-page handler: a full page render starts from
    /// markup with no overlay, so the controllers must follow. Without this
    /// a reload while an overlay is open would leave it recorded as Open
    /// and every later open request would be refused as a duplicate.
    pub fn close_overlays(&self) {
        self.account_overlay().close();
        self.help_overlay().close();
    }

    /// Start the one-time catalog fetch in the background.
    ///
    /// Pages render a loading indicator until the fetch resolves; filter and
    /// search actions against the unloaded catalog are graceful no-ops.
    pub fn start_catalog_load(&self) {
        let state = self.clone();
        tokio::spawn(async move {
            state
                .inner
                .catalog
                .load(&state.inner.catalog_client)
                .await;
        });
    }
}
