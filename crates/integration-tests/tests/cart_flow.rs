//! Integration tests for cart mutation, persistence, and event ordering.
//!
//! These exercise the cart service over real filesystem storage: repeated
//! adds, round-trips across service instances, recovery from corrupt
//! storage, and the guarantee that the cart-updated event fires after the
//! persisted write with the post-mutation snapshot.

use std::sync::{Arc, Mutex};

use storeclick_core::Cart;
use storeclick_integration_tests::product;
use storeclick_storefront::services::CartService;
use storeclick_storefront::storage::JsonStore;

// =============================================================================
// Idempotent Increment
// =============================================================================

#[test]
fn test_repeated_add_yields_one_line_with_counted_quantity() {
    let dir = tempfile::tempdir().expect("tempdir");
    let service = CartService::new(JsonStore::open(dir.path()).expect("open store"));

    let p = product(7, "Smartphone Case", "12.99");
    for _ in 0..4 {
        service.add_item(&p);
    }

    let cart = service.get();
    assert_eq!(cart.lines().len(), 1);
    let line = &cart.lines()[0];
    assert_eq!(line.id, 7);
    assert_eq!(line.quantity, 4);
    // Remaining fields equal the product's fields at first insertion
    assert_eq!(line.title, "Smartphone Case");
    assert_eq!(line.price, "12.99".parse().expect("decimal"));
    assert_eq!(line.image, p.image);
}

#[test]
fn test_later_catalog_changes_do_not_rewrite_existing_lines() {
    let dir = tempfile::tempdir().expect("tempdir");
    let service = CartService::new(JsonStore::open(dir.path()).expect("open store"));

    service.add_item(&product(7, "Smartphone Case", "12.99"));
    // Same id with refreshed title and price, as if the catalog changed
    service.add_item(&product(7, "Smartphone Case Pro", "15.99"));

    let cart = service.get();
    assert_eq!(cart.lines().len(), 1);
    assert_eq!(cart.lines()[0].title, "Smartphone Case");
    assert_eq!(cart.lines()[0].price, "12.99".parse().expect("decimal"));
    assert_eq!(cart.lines()[0].quantity, 2);
}

// =============================================================================
// Persistence Round-Trip
// =============================================================================

#[test]
fn test_cart_survives_service_restart_in_order() {
    let dir = tempfile::tempdir().expect("tempdir");

    let before = {
        let service = CartService::new(JsonStore::open(dir.path()).expect("open store"));
        service.add_item(&product(3, "Mug", "4.50"));
        service.add_item(&product(1, "Backpack", "109.95"));
        service.add_item(&product(2, "Lamp", "24.00"));
        service.get()
    };

    // New service over the same data dir simulates the next session
    let service = CartService::new(JsonStore::open(dir.path()).expect("open store"));
    let after = service.get();

    assert_eq!(after, before);
    let ids: Vec<u64> = after.lines().iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![3, 1, 2]);
}

#[test]
fn test_corrupt_persisted_cart_recovers_to_empty() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("cart.json"), "[{\"id\": oops").expect("write");

    let service = CartService::new(JsonStore::open(dir.path()).expect("open store"));
    assert!(service.get().is_empty());

    // The next mutation replaces the corrupt file with valid state
    service.add_item(&product(1, "Backpack", "109.95"));
    assert_eq!(service.get().lines().len(), 1);
}

// =============================================================================
// Event Ordering
// =============================================================================

#[test]
fn test_add_publishes_exactly_once_after_the_durable_write() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = JsonStore::open(dir.path()).expect("open store");

    // Each publish records (persisted cart, payload) as observed inside the
    // listener, proving the write happened before delivery
    #[allow(clippy::type_complexity)]
    let observed: Arc<Mutex<Vec<(Cart, Cart)>>> = Arc::new(Mutex::new(Vec::new()));

    let mut service = CartService::new(store.clone());
    {
        let observed = Arc::clone(&observed);
        let store = store.clone();
        service.subscribe(move |payload: &Cart| {
            observed
                .lock()
                .expect("lock")
                .push((store.read_cart(), payload.clone()));
        });
    }

    service.add_item(&product(1, "Backpack", "109.95"));
    service.add_item(&product(1, "Backpack", "109.95"));

    let observed = observed.lock().expect("lock");
    // Exactly one publish per mutation
    assert_eq!(observed.len(), 2);
    for (persisted, payload) in observed.iter() {
        // Listener saw storage-consistent state
        assert_eq!(persisted, payload);
    }
    // Payloads carry the post-mutation carts
    assert_eq!(observed[0].1.total_quantity(), 1);
    assert_eq!(observed[1].1.total_quantity(), 2);
}

#[test]
fn test_listeners_run_in_registration_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    let order = Arc::new(Mutex::new(Vec::new()));

    let mut service = CartService::new(JsonStore::open(dir.path()).expect("open store"));
    for label in ["badge", "log"] {
        let order = Arc::clone(&order);
        service.subscribe(move |_: &Cart| order.lock().expect("lock").push(label));
    }

    service.add_item(&product(1, "Backpack", "109.95"));
    assert_eq!(*order.lock().expect("lock"), vec!["badge", "log"]);
}
