//! Catalog domain: products, categories, deals, search.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::shared::{product_image_url, Category, ProductId};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Sale items are advertised against a list price this much higher.
pub const SALE_MARKUP: Decimal = Decimal::from_parts(12, 0, 0, false, 1);

/// Percentage shown on the sale badge.
pub const SALE_BADGE: &str = "20% OFF";

/// Card descriptions are cut to this many characters.
pub const DESCRIPTION_EXCERPT_CHARS: usize = 100;

/// Minimum trimmed query length that triggers a search request.
pub const MIN_SEARCH_CHARS: usize = 2;

// ─── Spec ────────────────────────────────────────────────────────────────────

/// One row of a product's specification table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spec {
    /// Upper-cased label, e.g. `"BATTERY LIFE"`.
    pub label: String,
    pub value: String,
}

// ─── Product ─────────────────────────────────────────────────────────────────

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    pub price: Decimal,
    pub description: String,
    pub image: Option<String>,
    pub on_sale: bool,
    /// Specification rows, sorted by key.
    pub specs: Vec<Spec>,
    pub stock: Option<u32>,
    pub rating: Option<Decimal>,
}

impl Product {
    pub fn image_url(&self) -> String {
        product_image_url(self.image.as_deref())
    }

    /// Crossed-out list price for sale items, rounded to whole rupees.
    pub fn original_price(&self) -> Option<Decimal> {
        if !self.on_sale {
            return None;
        }
        Some(
            (self.price * SALE_MARKUP)
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// Card description: at most [`DESCRIPTION_EXCERPT_CHARS`] characters,
    /// followed by `...` when it was cut.
    pub fn excerpt(&self) -> String {
        excerpt(&self.description, DESCRIPTION_EXCERPT_CHARS)
    }
}

fn excerpt(text: &str, max_chars: usize) -> String {
    let mut chars = text.char_indices();
    match chars.nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Whether a raw search box value is long enough to query.
pub fn is_searchable(query: &str) -> bool {
    query.trim().chars().count() >= MIN_SEARCH_CHARS
}
