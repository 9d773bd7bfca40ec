//! Shared test fixtures.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use cartstash::cart::Product;
use cartstash::storage::{KeyValueStore, MemoryStore, StorageError};

/// Catalog entry fixture. `price: None` models an unpriced product.
pub fn product(sku: &str, price: Option<f64>) -> Product {
    Product {
        sku: sku.to_string(),
        title: format!("Product {sku}"),
        image_ref: format!("img/{sku}.jpg"),
        unit_price: price,
    }
}

/// Memory store handle that stays inspectable after a `CartStore` takes
/// ownership of a boxed clone.
#[derive(Clone, Default)]
pub struct SharedStore {
    inner: Rc<RefCell<MemoryStore>>,
}

impl SharedStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(key: &str, value: &str) -> Self {
        Self {
            inner: Rc::new(RefCell::new(MemoryStore::with_slot(key, value))),
        }
    }

    /// Raw blob currently stored under `key`.
    pub fn blob(&self, key: &str) -> Option<String> {
        self.inner.borrow().get(key).unwrap()
    }
}

impl KeyValueStore for SharedStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.borrow().get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner.borrow_mut().set(key, value)
    }

    fn clear(&mut self, key: &str) -> Result<(), StorageError> {
        self.inner.borrow_mut().clear(key)
    }
}

/// Store whose writes always fail, for exercising best-effort persistence.
pub struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set(&mut self, key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::WriteError {
            path: key.into(),
            source: std::io::Error::other("injected write failure"),
        })
    }

    fn clear(&mut self, key: &str) -> Result<(), StorageError> {
        Err(StorageError::ClearError {
            path: key.into(),
            source: std::io::Error::other("injected clear failure"),
        })
    }
}
