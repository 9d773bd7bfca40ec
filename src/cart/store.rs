use crate::storage::KeyValueStore;

use super::intent::{CartIntent, Product};
use super::reducer::reduce;
use super::state::Cart;

/// Owns the current cart and the durable slot it lives in.
///
/// Every mutation runs reduce-then-persist. Persistence is best effort:
/// write failures are logged and swallowed, and the in-memory cart stays
/// authoritative for the session.
pub struct CartStore {
    cart: Cart,
    storage: Box<dyn KeyValueStore>,
    slot: String,
}

impl CartStore {
    /// Rehydrate the cart from `slot`.
    ///
    /// Falls back to an empty cart on a missing blob, unreadable storage,
    /// a parse failure, or a shape failure. Never fatal.
    pub fn load(storage: Box<dyn KeyValueStore>, slot: impl Into<String>) -> Self {
        let slot = slot.into();
        let cart = match storage.get(&slot) {
            Ok(Some(blob)) => match serde_json::from_str::<Cart>(&blob) {
                Ok(cart) if cart.is_well_formed() => cart,
                Ok(_) => {
                    tracing::warn!(
                        slot = %slot,
                        "persisted cart violates line invariants, starting empty"
                    );
                    Cart::new()
                }
                Err(error) => {
                    tracing::warn!(
                        slot = %slot,
                        %error,
                        "persisted cart is malformed, starting empty"
                    );
                    Cart::new()
                }
            },
            Ok(None) => Cart::new(),
            Err(error) => {
                tracing::warn!(
                    slot = %slot,
                    %error,
                    "failed to read persisted cart, starting empty"
                );
                Cart::new()
            }
        };
        Self {
            cart,
            storage,
            slot,
        }
    }

    /// Current cart snapshot.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Name of the durable slot this store persists to.
    pub fn slot(&self) -> &str {
        &self.slot
    }

    /// Apply one intent and persist the result.
    pub fn apply(&mut self, intent: CartIntent) {
        let cart = std::mem::take(&mut self.cart);
        self.cart = reduce(cart, intent);
        self.persist();
    }

    /// Add `qty` of a product (see [`CartIntent::Add`]).
    pub fn add(&mut self, product: Product, qty: i64) {
        self.apply(CartIntent::Add { product, qty });
    }

    /// Overwrite a line's quantity; zero or less removes the line.
    pub fn set_quantity(&mut self, sku: impl Into<String>, qty: i64) {
        self.apply(CartIntent::SetQuantity {
            sku: sku.into(),
            qty,
        });
    }

    /// Drop a line unconditionally.
    pub fn remove(&mut self, sku: impl Into<String>) {
        self.apply(CartIntent::Remove { sku: sku.into() });
    }

    /// Empty the cart and clear the durable slot.
    ///
    /// This is the one lifecycle operation that destroys the slot itself
    /// rather than overwriting its contents.
    pub fn clear(&mut self) {
        self.cart = Cart::new();
        if let Err(error) = self.storage.clear(&self.slot) {
            tracing::warn!(
                slot = %self.slot,
                %error,
                "failed to clear slot, keeping in-memory state"
            );
        }
    }

    fn persist(&mut self) {
        let blob = match serde_json::to_string(&self.cart) {
            Ok(blob) => blob,
            Err(error) => {
                tracing::warn!(
                    slot = %self.slot,
                    %error,
                    "failed to serialize cart, keeping in-memory state"
                );
                return;
            }
        };
        if let Err(error) = self.storage.set(&self.slot, &blob) {
            tracing::warn!(
                slot = %self.slot,
                %error,
                "failed to persist cart, keeping in-memory state"
            );
        }
    }
}
