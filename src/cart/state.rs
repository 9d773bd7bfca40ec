use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Smallest quantity a stored line can carry.
pub const MIN_QUANTITY: u32 = 1;

/// Largest quantity a stored line can carry.
pub const MAX_QUANTITY: u32 = 99;

/// Clamp a requested quantity into the storable range.
///
/// Zero and negative requests clamp up to [`MIN_QUANTITY`]. Callers that
/// want "zero deletes the line" semantics check the sign before clamping.
pub(crate) fn clamp_quantity(qty: i64) -> u32 {
    qty.clamp(i64::from(MIN_QUANTITY), i64::from(MAX_QUANTITY)) as u32
}

/// One entry in the cart: a product and its requested quantity.
///
/// The serde renames pin the persisted wire names (`img`, `price`, `qty`).
/// The slot name versions the format informally, so once published these
/// must not change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub sku: String,
    pub title: String,
    #[serde(rename = "img")]
    pub image_ref: String,
    /// Unit price, or `None` when the price is unknown.
    #[serde(rename = "price", default)]
    pub unit_price: Option<f64>,
    #[serde(rename = "qty")]
    pub quantity: u32,
}

impl CartLine {
    /// A line is well-formed when its quantity is in range and any recorded
    /// price is finite and non-negative.
    fn is_well_formed(&self) -> bool {
        (MIN_QUANTITY..=MAX_QUANTITY).contains(&self.quantity)
            && self.unit_price.is_none_or(|p| p.is_finite() && p >= 0.0)
    }
}

/// Total price of the cart under the all-or-nothing pricing policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CartTotal {
    /// Every line carries a unit price; the sum is meaningful.
    Known(f64),
    /// At least one line has an unknown unit price.
    Unknown,
}

impl CartTotal {
    /// The summed amount, if every line was priced.
    pub fn known(self) -> Option<f64> {
        match self {
            CartTotal::Known(amount) => Some(amount),
            CartTotal::Unknown => None,
        }
    }
}

/// Mapping from sku to cart line.
///
/// Keys are unique; insertion order is not significant. Serializes
/// transparently as the mapping itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: HashMap<String, CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines (not the item count).
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn get(&self, sku: &str) -> Option<&CartLine> {
        self.lines.get(sku)
    }

    /// Iterate over lines in unspecified order.
    pub fn lines(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.values()
    }

    /// Sum of all quantities.
    pub fn item_count(&self) -> u32 {
        self.lines.values().map(|line| line.quantity).sum()
    }

    /// Sum of `unit_price * quantity` over all lines, or
    /// [`CartTotal::Unknown`] if any line's price is unknown. Never a
    /// partial sum.
    pub fn total(&self) -> CartTotal {
        let mut sum = 0.0;
        for line in self.lines.values() {
            match line.unit_price {
                Some(price) => sum += price * f64::from(line.quantity),
                None => return CartTotal::Unknown,
            }
        }
        CartTotal::Known(sum)
    }

    /// Whether every entry satisfies the line invariants and is keyed by its
    /// own sku. Rehydration rejects the whole blob when this fails.
    pub(crate) fn is_well_formed(&self) -> bool {
        self.lines
            .iter()
            .all(|(key, line)| key == &line.sku && line.is_well_formed())
    }

    pub(crate) fn insert(&mut self, line: CartLine) {
        self.lines.insert(line.sku.clone(), line);
    }

    pub(crate) fn remove(&mut self, sku: &str) {
        self.lines.remove(sku);
    }

    pub(crate) fn get_mut(&mut self, sku: &str) -> Option<&mut CartLine> {
        self.lines.get_mut(sku)
    }
}
