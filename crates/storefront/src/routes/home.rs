//! Catalog page route handlers: home, filter views, and search.
//!
//! These handlers are a thin rendering adapter: filtering and ordering live
//! in `storeclick_core::filter`, and the catalog load lifecycle lives in the
//! catalog store. The template receives pre-formatted display data only.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::instrument;

use storeclick_core::{CatalogFilter, Product};

use crate::catalog::CatalogState;
use crate::filters;
use crate::state::AppState;

/// Placeholder shown when a product image fails to load.
pub const IMAGE_FALLBACK_URL: &str = "https://via.placeholder.com/150?text=Image+Not+Found";

/// Product card display data for templates.
#[derive(Debug, Clone)]
pub struct ProductCardView {
    pub id: u64,
    pub title: String,
    pub price: Decimal,
    pub image: String,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            price: product.price,
            image: product.image.clone(),
        }
    }
}

/// Catalog page template, covering home, filter views, and search results.
///
/// Exactly one of the display states is populated: `loading`, a non-empty
/// `error_message`, a non-empty `empty_message`, or the product list.
#[derive(Template, WebTemplate)]
#[template(path = "pages/home.html")]
pub struct CatalogPageTemplate {
    pub heading: String,
    pub nav_active: &'static str,
    pub query: String,
    pub loading: bool,
    pub error_message: String,
    pub empty_message: String,
    pub products: Vec<ProductCardView>,
    pub image_fallback: &'static str,
}

/// Search page query parameters.
#[derive(Debug, Deserialize)]
pub struct SearchPageQuery {
    #[serde(default)]
    pub q: String,
}

/// Home page: the full catalog.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    catalog_page(&state, &CatalogFilter::All)
}

/// Hot deals: products at odd catalog positions.
#[instrument(skip(state))]
pub async fn hot_deals(State(state): State<AppState>) -> impl IntoResponse {
    catalog_page(&state, &CatalogFilter::HotDeals)
}

/// Best sellers: products rated 4.0 or higher, highest first.
#[instrument(skip(state))]
pub async fn best_sellers(State(state): State<AppState>) -> impl IntoResponse {
    catalog_page(&state, &CatalogFilter::BestSellers)
}

/// Free shipping: products at even catalog positions.
#[instrument(skip(state))]
pub async fn free_shipping(State(state): State<AppState>) -> impl IntoResponse {
    catalog_page(&state, &CatalogFilter::FreeShipping)
}

/// Search results; an empty or whitespace-only query renders the home view.
#[instrument(skip(state), fields(query = %query.q))]
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchPageQuery>,
) -> impl IntoResponse {
    let filter = CatalogFilter::from_search_query(&query.q);
    catalog_page(&state, &filter)
}

/// Build the catalog page for a filter from the current catalog state.
fn catalog_page(state: &AppState, filter: &CatalogFilter) -> CatalogPageTemplate {
    // The rendered page carries no overlay; the controllers must agree
    state.close_overlays();

    let query = match filter {
        CatalogFilter::Search(q) => q.clone(),
        _ => String::new(),
    };

    let mut page = CatalogPageTemplate {
        heading: filter.heading(),
        nav_active: filter.nav_entry().as_str(),
        query,
        loading: false,
        error_message: String::new(),
        empty_message: String::new(),
        products: Vec::new(),
        image_fallback: IMAGE_FALLBACK_URL,
    };

    match state.catalog().snapshot() {
        CatalogState::Loading => page.loading = true,
        CatalogState::Failed(message) => {
            page.error_message =
                format!("Error loading products: {message}. Please refresh the page to try again.");
        }
        CatalogState::Ready(catalog) => {
            let subset = filter.apply(&catalog);
            if subset.is_empty() {
                // Loaded but nothing matched: a filter-specific empty state,
                // never confused with the loading indicator
                page.empty_message = filter.empty_message();
            } else {
                page.products = subset.iter().map(ProductCardView::from).collect();
            }
        }
    }

    page
}
