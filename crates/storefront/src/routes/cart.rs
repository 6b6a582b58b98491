//! Cart route handlers.
//!
//! Cart operations use HTMX fragments for dynamic updates without full page
//! reloads. A successful add responds with the added-to-cart notification
//! and an `HX-Trigger` header naming the cart-updated event, which any
//! independently rendered cart summary (the badge) listens for.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, IntoResponse},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::instrument;

use storeclick_core::{Cart, CartLine, events::CART_UPDATED};

use crate::error::AppError;
use crate::filters;
use crate::state::AppState;

/// Cart line display data for templates.
///
/// Amounts stay `Decimal`; the template formats them with the `money`
/// filter, same as the product grid.
#[derive(Debug, Clone)]
pub struct CartItemView {
    pub title: String,
    pub image: String,
    pub quantity: u32,
    pub price: Decimal,
    pub line_price: Decimal,
}

/// Cart display data for templates.
#[derive(Debug, Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: Decimal,
    pub item_count: u32,
}

impl From<&CartLine> for CartItemView {
    fn from(line: &CartLine) -> Self {
        Self {
            title: line.title.clone(),
            image: line.image.clone(),
            quantity: line.quantity,
            price: line.price,
            line_price: line.price * Decimal::from(line.quantity),
        }
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.lines().iter().map(CartItemView::from).collect(),
            subtotal: cart.subtotal(),
            item_count: cart.total_quantity(),
        }
    }
}

/// Add-to-cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub id: u64,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/cart.html")]
pub struct CartPageTemplate {
    pub nav_active: &'static str,
    pub cart: CartView,
}

/// Added-to-cart notification fragment.
#[derive(Template, WebTemplate)]
#[template(path = "partials/added_notification.html")]
pub struct AddedNotificationTemplate {
    pub title: String,
}

/// Cart count badge fragment.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub item_count: u32,
}

/// Add a product to the cart (HTMX).
///
/// Looks the product up in the loaded catalog, delegates the mutation to
/// the cart service, and answers with the notification fragment. The
/// `HX-Trigger` header re-fires the cart-updated event in the browser so
/// the badge fragment refreshes itself.
#[instrument(skip(state), fields(product_id = form.id))]
pub async fn add(
    State(state): State<AppState>,
    Form(form): Form<AddToCartForm>,
) -> Result<impl IntoResponse, AppError> {
    let product = state
        .catalog()
        .product(form.id)
        .ok_or_else(|| AppError::NotFound(format!("product {}", form.id)))?;

    state.cart().add_item(&product);

    Ok((
        AppendHeaders([("HX-Trigger", CART_UPDATED)]),
        AddedNotificationTemplate {
            title: product.title,
        },
    ))
}

/// Cart page.
#[instrument(skip(state))]
pub async fn page(State(state): State<AppState>) -> impl IntoResponse {
    // The rendered page carries no overlay; the controllers must agree
    state.close_overlays();

    let cart = state.cart().get();
    CartPageTemplate {
        nav_active: "",
        cart: CartView::from(&cart),
    }
}

/// Cart count badge (HTMX fragment).
#[instrument(skip(state))]
pub async fn count(State(state): State<AppState>) -> impl IntoResponse {
    CartCountTemplate {
        item_count: state.cart().get().total_quantity(),
    }
}
