//! Typed cart-updated publish/subscribe bus.
//!
//! Decouples cart mutation from whatever renders the cart summary. The bus
//! is deliberately minimal: synchronous delivery, registration order, no
//! buffering, and no delivery guarantee beyond "listeners registered before
//! publish receive it". The payload is an immutable snapshot of the cart
//! taken after the mutation has been persisted, so listeners always observe
//! storage-consistent state.

use crate::types::Cart;

/// Name of the cart-updated event as exposed to the browser layer
/// (`HX-Trigger` response header).
pub const CART_UPDATED: &str = "cart-updated";

/// A registered cart-updated listener.
type Listener = Box<dyn Fn(&Cart) + Send + Sync>;

/// The cart-updated event bus.
///
/// Listeners are registered once at startup (before the bus is shared) and
/// notified on every publish, in registration order.
#[derive(Default)]
pub struct CartEvents {
    listeners: Vec<Listener>,
}

impl CartEvents {
    /// Create a bus with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. Listeners are invoked in registration order.
    pub fn subscribe(&mut self, listener: impl Fn(&Cart) + Send + Sync + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Notify all registered listeners with a snapshot of the cart.
    ///
    /// Returns the number of listeners notified.
    pub fn publish(&self, cart: &Cart) -> usize {
        for listener in &self.listeners {
            listener(cart);
        }
        self.listeners.len()
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl std::fmt::Debug for CartEvents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartEvents")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
