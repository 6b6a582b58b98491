//! Integration tests for filters applied against the catalog store.
//!
//! The filter engine itself is covered by unit tests in `storeclick-core`;
//! these tests exercise the combination with the catalog load lifecycle:
//! filtering before the fetch resolves, after a failure, and over a loaded
//! ten-product catalog.

use storeclick_core::{CatalogFilter, NavEntry, Product};
use storeclick_integration_tests::{product, rated_product};
use storeclick_storefront::catalog::{CatalogState, CatalogStore};

fn ten_products() -> Vec<Product> {
    (0..10).map(|i| product(i, &format!("p{i}"), "5.00")).collect()
}

fn ids(products: &[Product]) -> Vec<u64> {
    products.iter().map(|p| p.id).collect()
}

// =============================================================================
// Load Lifecycle
// =============================================================================

#[test]
fn test_filtering_before_load_is_a_graceful_no_op() {
    let store = CatalogStore::new();

    // While the fetch is pending there is nothing to filter, and that must
    // not be mistaken for an empty filter result
    match store.snapshot() {
        CatalogState::Loading => {}
        other => panic!("expected Loading, got {other:?}"),
    }

    // Applying a filter to the (absent) catalog yields no products
    assert!(CatalogFilter::HotDeals.apply(&[]).is_empty());
}

#[test]
fn test_failed_load_is_distinct_from_empty_results() {
    let store = CatalogStore::new();
    let parse_error = serde_json::from_str::<Vec<Product>>("oops")
        .expect_err("must fail")
        .into();
    store.apply_load_result(Err(parse_error));

    match store.snapshot() {
        CatalogState::Failed(message) => assert!(!message.is_empty()),
        other => panic!("expected Failed, got {other:?}"),
    }
}

// =============================================================================
// Filters Over a Loaded Catalog
// =============================================================================

#[test]
fn test_hot_deals_and_free_shipping_partition_by_index_parity() {
    let store = CatalogStore::new();
    store.apply_load_result(Ok(ten_products()));

    let CatalogState::Ready(catalog) = store.snapshot() else {
        panic!("catalog must be ready");
    };

    assert_eq!(ids(&CatalogFilter::HotDeals.apply(&catalog)), vec![1, 3, 5, 7, 9]);
    assert_eq!(
        ids(&CatalogFilter::FreeShipping.apply(&catalog)),
        vec![0, 2, 4, 6, 8]
    );
}

#[test]
fn test_best_sellers_over_loaded_catalog() {
    let store = CatalogStore::new();
    store.apply_load_result(Ok(vec![
        rated_product(0, "a", "3.9"),
        rated_product(1, "b", "4.0"),
        rated_product(2, "c", "4.8"),
        rated_product(3, "d", "4.8"),
        rated_product(4, "e", "4.2"),
    ]));

    let CatalogState::Ready(catalog) = store.snapshot() else {
        panic!("catalog must be ready");
    };

    assert_eq!(ids(&CatalogFilter::BestSellers.apply(&catalog)), vec![2, 3, 4, 1]);
}

#[test]
fn test_search_matches_across_fields_case_insensitively() {
    let store = CatalogStore::new();
    let mut catalog = ten_products();
    catalog.push(product(42, "Smartphone Case", "12.99"));
    store.apply_load_result(Ok(catalog));

    let CatalogState::Ready(catalog) = store.snapshot() else {
        panic!("catalog must be ready");
    };

    let filter = CatalogFilter::from_search_query("PHONE");
    assert_eq!(ids(&filter.apply(&catalog)), vec![42]);

    // Every product's generated description contains its title
    let filter = CatalogFilter::from_search_query("description of p3");
    assert_eq!(ids(&filter.apply(&catalog)), vec![3]);
}

#[test]
fn test_blank_search_reproduces_the_full_catalog_and_home_nav() {
    let store = CatalogStore::new();
    store.apply_load_result(Ok(ten_products()));

    let CatalogState::Ready(catalog) = store.snapshot() else {
        panic!("catalog must be ready");
    };

    let filter = CatalogFilter::from_search_query("   ");
    assert_eq!(filter, CatalogFilter::All);
    assert_eq!(filter.nav_entry(), NavEntry::Home);
    assert_eq!(filter.apply(&catalog), catalog);
}

#[test]
fn test_product_lookup_by_id() {
    let store = CatalogStore::new();
    store.apply_load_result(Ok(ten_products()));

    assert_eq!(store.product(4).map(|p| p.id), Some(4));
    assert!(store.product(99).is_none());
}
