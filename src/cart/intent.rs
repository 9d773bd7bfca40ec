/// Catalog-side description of a product being added to the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub sku: String,
    pub title: String,
    pub image_ref: String,
    /// Advertised unit price. Recorded on the new line only when finite and
    /// non-negative; otherwise the line's price is unknown.
    pub unit_price: Option<f64>,
}

/// User actions against the cart.
///
/// Reduction never fails: out-of-range quantities are normalized and absent
/// skus are no-ops. See [`super::reduce`].
#[derive(Debug, Clone)]
pub enum CartIntent {
    /// Add `qty` of a product. Adding an existing sku increments its line.
    Add { product: Product, qty: i64 },
    /// Overwrite a line's quantity. Zero or negative removes the line.
    SetQuantity { sku: String, qty: i64 },
    /// Drop a line unconditionally.
    Remove { sku: String },
}
