mod common;

use cartstash::cart::CartStore;
use common::{product, FailingStore, SharedStore};

const SLOT: &str = "cart.v1";

#[test]
fn load_from_absent_slot_starts_empty() {
    let store = CartStore::load(Box::new(SharedStore::new()), SLOT);
    assert!(store.cart().is_empty());
    assert_eq!(store.slot(), SLOT);
}

#[test]
fn mutations_persist_and_reload_equal() {
    let handle = SharedStore::new();
    let mut store = CartStore::load(Box::new(handle.clone()), SLOT);
    store.add(product("mug", Some(14.5)), 2);
    store.add(product("poster", None), 1);
    store.set_quantity("mug", 3);
    let before = store.cart().clone();
    drop(store);

    let reloaded = CartStore::load(Box::new(handle), SLOT);
    assert_eq!(reloaded.cart(), &before);
    assert_eq!(reloaded.cart().item_count(), 4);
    assert_eq!(reloaded.cart().get("mug").unwrap().unit_price, Some(14.5));
    assert_eq!(reloaded.cart().get("poster").unwrap().unit_price, None);
}

#[test]
fn malformed_blob_loads_as_empty_cart() {
    for blob in ["not json at all", "[1, 2, 3]", "42", "{\"mug\": \"nope\"}"] {
        let handle = SharedStore::seeded(SLOT, blob);
        let store = CartStore::load(Box::new(handle), SLOT);
        assert!(store.cart().is_empty(), "blob {blob:?}");
    }
}

#[test]
fn invariant_violating_blob_loads_as_empty_cart() {
    // qty 0 is never stored by mutators, so a blob carrying it is shape
    // failure, not data to repair.
    let blob = r#"{"mug":{"sku":"mug","title":"Mug","img":"mug.jpg","qty":0}}"#;
    let store = CartStore::load(Box::new(SharedStore::seeded(SLOT, blob)), SLOT);
    assert!(store.cart().is_empty());

    let blob = r#"{"mug":{"sku":"mug","title":"Mug","img":"mug.jpg","price":-2.0,"qty":1}}"#;
    let store = CartStore::load(Box::new(SharedStore::seeded(SLOT, blob)), SLOT);
    assert!(store.cart().is_empty());
}

#[test]
fn wire_format_uses_short_field_names() {
    let handle = SharedStore::new();
    let mut store = CartStore::load(Box::new(handle.clone()), SLOT);
    store.add(product("mug", Some(14.5)), 2);

    let blob = handle.blob(SLOT).unwrap();
    assert!(blob.contains("\"img\""));
    assert!(blob.contains("\"price\""));
    assert!(blob.contains("\"qty\""));
    assert!(!blob.contains("image_ref"));
}

#[test]
fn write_failure_is_swallowed_and_memory_stays_authoritative() {
    let mut store = CartStore::load(Box::new(FailingStore), SLOT);
    store.add(product("mug", Some(14.5)), 2);
    store.set_quantity("mug", 5);
    assert_eq!(store.cart().item_count(), 5);

    store.clear();
    assert!(store.cart().is_empty());
}

#[test]
fn clear_empties_cart_and_destroys_slot() {
    let handle = SharedStore::new();
    let mut store = CartStore::load(Box::new(handle.clone()), SLOT);
    store.add(product("mug", Some(14.5)), 2);
    assert!(handle.blob(SLOT).is_some());

    store.clear();
    assert!(store.cart().is_empty());
    assert_eq!(handle.blob(SLOT), None);
}
