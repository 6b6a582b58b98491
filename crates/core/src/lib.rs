//! Storeclick Core - Catalog, cart, and filter logic.
//!
//! This crate provides the data model and pure business logic shared across
//! Storeclick components:
//! - `storefront` - Public-facing storefront widget
//! - `integration-tests` - Cross-crate flow tests
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients, no filesystem access. Catalog filtering, cart arithmetic, and
//! form validation can all be exercised without a running server.
//!
//! # Modules
//!
//! - [`types`] - Product, cart, and account-registration types
//! - [`filter`] - Catalog filters (hot deals, best sellers, search, ...)
//! - [`events`] - Typed cart-updated publish/subscribe bus
//! - [`overlay`] - Open/Closed state machine for modal overlays

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod events;
pub mod filter;
pub mod overlay;
pub mod types;

pub use events::CartEvents;
pub use filter::{CatalogFilter, NavEntry};
pub use overlay::{Overlay, OverlayKind, OverlayTransition};
pub use types::*;
