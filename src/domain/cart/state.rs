//! Cart mirror: the last cart contents the server reported.

use super::{CartItem, CartSnapshot, CartTotals};
use crate::shared::ProductId;
use rust_decimal::Decimal;

/// Client-side copy of the cart. Only ever replaced wholesale from a server
/// response; never edited line by line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
    server_total: Option<Decimal>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn server_total(&self) -> Option<Decimal> {
        self.server_total
    }

    pub fn get(&self, id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.product_id == id)
    }

    /// Replace the contents from a full cart listing (`GET /api/cart`), which
    /// carries no total.
    pub fn replace_items(&mut self, items: Vec<CartItem>) {
        self.items = items;
        self.server_total = None;
    }

    /// Replace the contents from a mutation response.
    pub fn apply_snapshot(&mut self, snapshot: CartSnapshot) {
        self.items = snapshot.items;
        self.server_total = snapshot.server_total;
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.server_total = None;
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn totals(&self) -> CartTotals {
        CartTotals::compute(&self.items, self.server_total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::Category;

    fn item(id: u64, quantity: u32) -> CartItem {
        CartItem {
            product_id: ProductId::new(id),
            name: "Charger".to_string(),
            category: Category::from("Accessories"),
            price: Decimal::new(500, 0),
            quantity,
            image: None,
        }
    }

    #[test]
    fn test_snapshot_replaces_everything() {
        let mut cart = Cart::new();
        cart.replace_items(vec![item(1, 1), item(2, 1)]);
        cart.apply_snapshot(CartSnapshot {
            items: vec![item(2, 3)],
            server_total: Some(Decimal::new(1500, 0)),
        });

        assert!(cart.get(ProductId::new(1)).is_none());
        assert_eq!(cart.get(ProductId::new(2)).unwrap().quantity, 3);
        assert_eq!(cart.totals().total, Decimal::new(1500, 0));
    }

    #[test]
    fn test_listing_drops_stale_server_total() {
        let mut cart = Cart::new();
        cart.apply_snapshot(CartSnapshot {
            items: vec![item(1, 1)],
            server_total: Some(Decimal::new(500, 0)),
        });
        cart.replace_items(vec![item(1, 2)]);
        assert_eq!(cart.server_total(), None);
        assert_eq!(cart.totals().total, Decimal::new(1099, 0));
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.replace_items(vec![item(1, 1)]);
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.totals().total, Decimal::ZERO);
    }
}
