//! Cart domain: cart lines, totals, mutation results.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod state;
pub mod wire;

use crate::shared::{product_image_url, Category, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use state::Cart;

/// Flat shipping fee charged on any non-empty cart, in rupees.
pub const SHIPPING_FEE: Decimal = Decimal::from_parts(99, 0, 0, false, 0);

// ─── CartItem ────────────────────────────────────────────────────────────────

/// One line of the shopper's cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: ProductId,
    pub name: String,
    pub category: Category,
    pub price: Decimal,
    pub quantity: u32,
    pub image: Option<String>,
}

impl CartItem {
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }

    pub fn image_url(&self) -> String {
        product_image_url(self.image.as_deref())
    }
}

// ─── Mutation results ────────────────────────────────────────────────────────

/// Full cart contents as returned by a mutation that echoes the cart.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CartSnapshot {
    pub items: Vec<CartItem>,
    /// Server-computed total, when the response carried one.
    pub server_total: Option<Decimal>,
}

/// Result of a cart mutation: the new count, plus the full cart when the
/// endpoint returns it (remove/update/clear do, add does not).
#[derive(Debug, Clone, PartialEq)]
pub struct CartUpdate {
    pub cart_count: u32,
    pub snapshot: Option<CartSnapshot>,
}

// ─── Totals ──────────────────────────────────────────────────────────────────

/// Amounts shown in the cart summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartTotals {
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub total: Decimal,
}

impl CartTotals {
    /// Subtotal and shipping are always derived from the lines. The total is
    /// the server's figure when it sent a non-zero one, otherwise
    /// subtotal + shipping.
    pub fn compute(items: &[CartItem], server_total: Option<Decimal>) -> Self {
        let subtotal: Decimal = items.iter().map(CartItem::line_total).sum();
        let shipping = if subtotal > Decimal::ZERO {
            SHIPPING_FEE
        } else {
            Decimal::ZERO
        };
        let total = server_total
            .filter(|t| !t.is_zero())
            .unwrap_or(subtotal + shipping);

        Self {
            subtotal,
            shipping,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u64, price: i64, quantity: u32) -> CartItem {
        CartItem {
            product_id: ProductId::new(id),
            name: format!("Item {}", id),
            category: Category::from("Accessories"),
            price: Decimal::new(price, 0),
            quantity,
            image: None,
        }
    }

    #[test]
    fn test_fallback_total_adds_shipping() {
        let items = vec![item(1, 1000, 2), item(2, 500, 1)];
        let totals = CartTotals::compute(&items, None);
        assert_eq!(totals.subtotal, Decimal::new(2500, 0));
        assert_eq!(totals.shipping, Decimal::new(99, 0));
        assert_eq!(totals.total, Decimal::new(2599, 0));
    }

    #[test]
    fn test_server_total_is_authoritative() {
        let items = vec![item(1, 1000, 2)];
        let totals = CartTotals::compute(&items, Some(Decimal::new(2000, 0)));
        assert_eq!(totals.subtotal, Decimal::new(2000, 0));
        assert_eq!(totals.shipping, Decimal::new(99, 0));
        assert_eq!(totals.total, Decimal::new(2000, 0));
    }

    #[test]
    fn test_zero_server_total_falls_back() {
        let items = vec![item(1, 10, 1)];
        let totals = CartTotals::compute(&items, Some(Decimal::ZERO));
        assert_eq!(totals.total, Decimal::new(109, 0));
    }

    #[test]
    fn test_empty_cart_has_no_shipping() {
        let totals = CartTotals::compute(&[], None);
        assert_eq!(totals.subtotal, Decimal::ZERO);
        assert_eq!(totals.shipping, Decimal::ZERO);
        assert_eq!(totals.total, Decimal::ZERO);
    }
}
