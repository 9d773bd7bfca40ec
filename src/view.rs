//! Pure projections of a cart snapshot.
//!
//! Nothing here owns state: every function is a function of the cart
//! passed in, so callers re-render after each mutation.

use crate::cart::{Cart, CartLine, CartTotal};
use crate::config::DisplayConfig;

/// Display record for one cart line.
#[derive(Debug, Clone, PartialEq)]
pub struct LineView {
    pub title: String,
    pub image_ref: String,
    /// Formatted unit price, or the configured placeholder when unknown.
    pub price_display: String,
    pub quantity: u32,
}

/// Rendered snapshot of the whole cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartRender {
    pub lines: Vec<LineView>,
    /// Formatted total, or the placeholder when any line is unpriced.
    pub total_display: String,
    pub item_count: u32,
}

/// Project a cart into display records plus a total display.
///
/// Lines are ordered by sku so output is deterministic; storage order
/// carries no meaning.
pub fn render(cart: &Cart, display: &DisplayConfig) -> CartRender {
    let lines = sorted_lines(cart)
        .into_iter()
        .map(|line| LineView {
            title: line.title.clone(),
            image_ref: line.image_ref.clone(),
            price_display: match line.unit_price {
                Some(price) => format_amount(price, display),
                None => display.unknown_price.clone(),
            },
            quantity: line.quantity,
        })
        .collect();

    let total_display = match cart.total() {
        CartTotal::Known(total) => format_amount(total, display),
        CartTotal::Unknown => display.unknown_price.clone(),
    };

    CartRender {
        lines,
        total_display,
        item_count: cart.item_count(),
    }
}

/// Plain-text order summary: one `title (qty N)` entry per line, for
/// external handoff such as an email body.
pub fn order_summary(cart: &Cart) -> String {
    sorted_lines(cart)
        .into_iter()
        .map(|line| format!("{} (qty {})", line.title, line.quantity))
        .collect::<Vec<_>>()
        .join("\n")
}

fn sorted_lines(cart: &Cart) -> Vec<&CartLine> {
    let mut lines: Vec<&CartLine> = cart.lines().collect();
    lines.sort_by(|a, b| a.sku.cmp(&b.sku));
    lines
}

/// Currency-prefixed amount, truncated (not rounded) to two decimals.
fn format_amount(amount: f64, display: &DisplayConfig) -> String {
    let cents = (amount * 100.0).trunc() as i64;
    format!("{}{}.{:02}", display.currency, cents / 100, cents % 100)
}
