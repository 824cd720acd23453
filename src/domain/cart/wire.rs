//! Wire types for cart endpoints.

use crate::shared::{serde_util, Category, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A cart row joined with its product, as returned by `GET /api/cart` and in
/// `cart_items` of mutation responses.
///
/// `id` is the product id; rows that also carry an explicit `product_id`
/// use that instead.
#[derive(Debug, Clone, Deserialize)]
pub struct CartItemResponse {
    pub id: ProductId,
    #[serde(default)]
    pub product_id: Option<ProductId>,
    pub name: String,
    #[serde(default)]
    pub category: Category,
    pub price: Decimal,
    pub quantity: u32,
    #[serde(default)]
    pub image: Option<String>,
}

/// Response from `POST /api/cart/add/:id`.
#[derive(Debug, Clone, Deserialize)]
pub struct CartCountResponse {
    #[serde(default, with = "serde_util::count_or_zero")]
    pub cart_count: u32,
}

/// Response from remove/update/clear, which echo the whole cart.
#[derive(Debug, Clone, Deserialize)]
pub struct CartSnapshotResponse {
    #[serde(default, with = "serde_util::count_or_zero")]
    pub cart_count: u32,
    #[serde(default)]
    pub cart_items: Option<Vec<CartItemResponse>>,
    #[serde(default)]
    pub cart_total: Option<Decimal>,
}

/// `POST /api/cart/update/:id` body.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateQuantityRequest {
    pub quantity: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_without_total() {
        let json = r#"{
            "success": true,
            "cart_count": 1,
            "cart_items": [{"id": 4, "name": "Earbuds", "category": "Audio",
                            "price": 2999.0, "quantity": 2, "image": null}]
        }"#;
        let resp: CartSnapshotResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.cart_count, 1);
        assert!(resp.cart_total.is_none());
        assert_eq!(resp.cart_items.unwrap()[0].quantity, 2);
    }

    #[test]
    fn test_count_only_response() {
        let resp: CartCountResponse =
            serde_json::from_str(r#"{"success": true, "message": "Added to cart", "cart_count": 3}"#)
                .unwrap();
        assert_eq!(resp.cart_count, 3);
    }
}
