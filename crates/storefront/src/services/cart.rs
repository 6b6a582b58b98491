//! Cart service: persisted mutations plus event publishing.
//!
//! The service is the single reader/writer of the persisted cart. Every
//! mutation is a full read-modify-write of the stored cart performed under
//! one lock with no suspension points, so rapid successive add-to-cart
//! actions can never lose increments. The cart-updated event is published
//! after the write, so listeners always observe storage-consistent state.

use std::sync::{Mutex, PoisonError};

use storeclick_core::{Cart, CartEvents, Product};

use crate::storage::JsonStore;

/// The cart store: owns the persisted cart and its event bus.
pub struct CartService {
    store: JsonStore,
    events: CartEvents,
    /// Serializes read-modify-write turns on the persisted cart.
    turn: Mutex<()>,
}

impl CartService {
    /// Create a service over the given store, with no listeners yet.
    #[must_use]
    pub fn new(store: JsonStore) -> Self {
        Self {
            store,
            events: CartEvents::new(),
            turn: Mutex::new(()),
        }
    }

    /// Register a cart-updated listener.
    ///
    /// Listeners are registered at startup, before the service is shared.
    pub fn subscribe(&mut self, listener: impl Fn(&Cart) + Send + Sync + 'static) {
        self.events.subscribe(listener);
    }

    /// The current cart as persisted (empty if absent or unreadable).
    #[must_use]
    pub fn get(&self) -> Cart {
        self.store.read_cart()
    }

    /// Add one unit of `product` to the cart and persist the result.
    ///
    /// Increments the existing line for the product or appends a new one,
    /// writes the cart back synchronously, then publishes exactly one
    /// cart-updated event with the post-mutation snapshot. A failed write is
    /// logged; the in-memory mutation still takes effect for this session.
    pub fn add_item(&self, product: &Product) -> Cart {
        let _turn = self.turn.lock().unwrap_or_else(PoisonError::into_inner);

        let mut cart = self.store.read_cart();
        cart.add(product);

        if let Err(e) = self.store.write_cart(&cart) {
            tracing::error!(error = %e, product_id = product.id, "failed to persist cart");
        }

        self.events.publish(&cart);
        cart
    }
}

impl std::fmt::Debug for CartService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartService")
            .field("events", &self.events)
            .finish_non_exhaustive()
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
            price: Decimal::new(999, 2),
            description: String::new(),
            category: "misc".to_string(),
            image: String::new(),
            rating: None,
        }
    }

    #[test]
    fn test_add_item_persists_before_returning() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();
        let service = CartService::new(store.clone());

        let returned = service.add_item(&product(1));
        assert_eq!(store.read_cart(), returned);
    }

    #[test]
    fn test_get_reflects_prior_session_state() {
        let dir = tempfile::tempdir().unwrap();
        {
            let service = CartService::new(JsonStore::open(dir.path()).unwrap());
            service.add_item(&product(1));
            service.add_item(&product(1));
        }

        // A fresh service over the same directory sees the same cart
        let service = CartService::new(JsonStore::open(dir.path()).unwrap());
        let cart = service.get();
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
    }
}
