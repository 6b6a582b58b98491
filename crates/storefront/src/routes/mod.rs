//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                - Home page (full catalog)
//! GET  /health          - Health check
//!
//! # Catalog filters
//! GET  /hot-deals       - Odd-position picks
//! GET  /best-sellers    - Top-rated products
//! GET  /free-shipping   - Even-position picks
//! GET  /search?q=       - Title/description/category search
//!
//! # Cart (HTMX fragments)
//! POST /cart/add        - Add to cart (notification fragment, triggers cart-updated)
//! GET  /cart            - Cart page
//! GET  /cart/count      - Cart count badge (fragment)
//!
//! # Overlays (at most one instance each)
//! GET  /account         - Account-registration overlay (fragment)
//! POST /account         - Submit registration form
//! POST /account/close   - Dismiss the account overlay
//! GET  /help            - Help overlay (fragment)
//! POST /help/close      - Dismiss the help overlay
//! ```

pub mod account;
pub mod cart;
pub mod help;
pub mod home;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the storefront router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        .route("/hot-deals", get(home::hot_deals))
        .route("/best-sellers", get(home::best_sellers))
        .route("/free-shipping", get(home::free_shipping))
        .route("/search", get(home::search))
        .route("/cart", get(cart::page))
        .route("/cart/add", post(cart::add))
        .route("/cart/count", get(cart::count))
        .route("/account", get(account::open).post(account::register))
        .route("/account/close", post(account::close))
        .route("/help", get(help::open))
        .route("/help/close", post(help::close))
}
