//! Wire types for order endpoints.
//!
//! Order rows store their product lines as a JSON-encoded string in the
//! `products` column; the row id and the display `order_id` are separate.

use super::PaymentMethod;
use crate::shared::{serde_util, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A row of `GET /api/orders`.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderRow {
    #[serde(default)]
    pub id: Option<u64>,
    /// String or number; `null` on rows created without a display id.
    #[serde(default)]
    pub order_id: Option<serde_json::Value>,
    /// JSON-encoded list of [`OrderLineWire`], or the list itself.
    #[serde(default)]
    pub products: Option<serde_json::Value>,
    pub total_amount: Decimal,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// One entry of an order row's `products` list.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderLineWire {
    pub name: String,
    pub quantity: u32,
    pub price: Decimal,
    #[serde(default)]
    pub image: Option<String>,
}

/// An `order_items` row joined with its product name and image.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderItemRow {
    #[serde(default)]
    pub product_id: Option<ProductId>,
    pub name: String,
    pub quantity: u32,
    pub price: Decimal,
    #[serde(default)]
    pub image: Option<String>,
}

/// Response from `GET /api/orders/:id`.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderDetailResponse {
    pub order: OrderRow,
    #[serde(default)]
    pub items: Vec<OrderItemRow>,
}

/// `POST /api/orders` body.
#[derive(Debug, Clone, Serialize)]
pub struct PlaceOrderRequest {
    pub payment_method: PaymentMethod,
}

/// Response from `POST /api/orders`.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceOrderResponse {
    #[serde(with = "serde_util::string_or_number")]
    pub order_id: String,
    #[serde(default, with = "serde_util::count_or_zero")]
    pub cart_count: u32,
}
