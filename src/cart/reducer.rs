use super::intent::CartIntent;
use super::state::{clamp_quantity, Cart, CartLine, MAX_QUANTITY};

/// Pure state transition: apply one intent to a cart snapshot.
///
/// Quantities are clamped into `[MIN_QUANTITY, MAX_QUANTITY]` before use,
/// and intents targeting absent skus are no-ops.
pub fn reduce(mut cart: Cart, intent: CartIntent) -> Cart {
    match intent {
        CartIntent::Add { product, qty } => {
            let qty = clamp_quantity(qty);
            match cart.get_mut(&product.sku) {
                Some(line) => {
                    // Accumulate, re-clamped: 60 + 60 stores 99, not 120.
                    line.quantity = (line.quantity + qty).min(MAX_QUANTITY);
                }
                None => {
                    let unit_price = product
                        .unit_price
                        .filter(|price| price.is_finite() && *price >= 0.0);
                    cart.insert(CartLine {
                        sku: product.sku,
                        title: product.title,
                        image_ref: product.image_ref,
                        unit_price,
                        quantity: qty,
                    });
                }
            }
            cart
        }
        CartIntent::SetQuantity { sku, qty } => {
            if qty <= 0 {
                cart.remove(&sku);
            } else if let Some(line) = cart.get_mut(&sku) {
                line.quantity = clamp_quantity(qty);
            }
            cart
        }
        CartIntent::Remove { sku } => {
            cart.remove(&sku);
            cart
        }
    }
}
