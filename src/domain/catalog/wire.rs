//! Wire types for catalog responses.
//!
//! Products are serialized straight from database rows: `on_sale` is `0`/`1`,
//! `specs` is a JSON object whose values are strings or numbers, and optional
//! columns may be `null` or missing.

use crate::shared::{serde_util, Category, ProductId};
use rust_decimal::Decimal;
use serde::Deserialize;

/// A product as returned by `/api/products*`, `/api/deals` and `/api/wishlist`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductResponse {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    pub price: Decimal,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, with = "serde_util::int_bool")]
    pub on_sale: bool,
    #[serde(default)]
    pub specs: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(default)]
    pub stock: Option<u32>,
    #[serde(default)]
    pub rating: Option<Decimal>,
}
