//! Business logic services for the storefront.
//!
//! # Services
//!
//! - [`cart`] - Cart mutations over persisted storage, with event publishing

pub mod cart;

pub use cart::CartService;
