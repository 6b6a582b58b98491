//! Data model for the storefront.
//!
//! - [`product`] - Read-only catalog products as served by the catalog API
//! - [`cart`] - The persisted shopping cart and its line items
//! - [`registration`] - Account-registration record and validation

pub mod cart;
pub mod product;
pub mod registration;

pub use cart::{Cart, CartLine};
pub use product::{Product, Rating};
pub use registration::{GmailAddress, Registration, RegistrationError};
