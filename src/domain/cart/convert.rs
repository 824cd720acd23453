//! Conversions from wire types to domain types for the cart.

use super::wire::{CartCountResponse, CartItemResponse, CartSnapshotResponse};
use super::{CartItem, CartSnapshot, CartUpdate};

impl From<CartItemResponse> for CartItem {
    fn from(item: CartItemResponse) -> Self {
        Self {
            product_id: item.product_id.unwrap_or(item.id),
            name: item.name,
            category: item.category,
            price: item.price,
            quantity: item.quantity,
            image: item.image,
        }
    }
}

impl From<CartCountResponse> for CartUpdate {
    fn from(resp: CartCountResponse) -> Self {
        Self {
            cart_count: resp.cart_count,
            snapshot: None,
        }
    }
}

impl From<CartSnapshotResponse> for CartUpdate {
    fn from(resp: CartSnapshotResponse) -> Self {
        let snapshot = resp.cart_items.map(|items| CartSnapshot {
            items: items.into_iter().map(CartItem::from).collect(),
            server_total: resp.cart_total,
        });
        Self {
            cart_count: resp.cart_count,
            snapshot,
        }
    }
}
