//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw format the backend sends, so they can be used directly in wire types
//! without conversion overhead.

pub mod fmt;
pub mod serde_util;

pub use fmt::money::{format_rupees, rupees};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── ProductId ───────────────────────────────────────────────────────────────

/// Newtype for catalog product identifiers (database row ids on the backend).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(u64);

impl ProductId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl FromStr for ProductId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(ProductId)
    }
}

impl Serialize for ProductId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(self.0)
    }
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let id = u64::deserialize(deserializer)?;
        Ok(ProductId(id))
    }
}

// ─── Category ────────────────────────────────────────────────────────────────

/// Category shown when the storefront first loads.
pub const DEFAULT_CATEGORY: &str = "Smartphones";

/// Newtype for catalog category names (e.g. `"Smartphones"`, `"Laptops"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Category(String);

impl Category {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Serialize for Category {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Category(s))
    }
}

// ─── Utilities ───────────────────────────────────────────────────────────────

/// Public path of a product image, falling back to the default image when the
/// backend has no filename for the product.
pub fn product_image_url(image: Option<&str>) -> String {
    let filename = image
        .filter(|name| !name.trim().is_empty())
        .unwrap_or(crate::network::DEFAULT_PRODUCT_IMAGE);
    format!("{}/{}", crate::network::PRODUCT_IMAGE_PATH, filename)
}

/// Turns a wire field name into a label: the first `_` becomes a space.
///
/// `"full_name"` → `"full name"`, `"battery_life_hours"` → `"battery life_hours"`.
pub fn field_label(key: &str) -> String {
    key.replacen('_', " ", 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_serde() {
        let id: ProductId = serde_json::from_str("42").unwrap();
        assert_eq!(id, ProductId::new(42));
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");
    }

    #[test]
    fn test_product_id_from_str() {
        assert_eq!(" 7 ".parse::<ProductId>().unwrap(), ProductId::new(7));
        assert!("seven".parse::<ProductId>().is_err());
    }

    #[test]
    fn test_category_serde() {
        let c = Category::from("Laptops");
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "\"Laptops\"");
        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn test_product_image_url_fallback() {
        assert_eq!(
            product_image_url(Some("iphone15.png")),
            "/static/images/products/iphone15.png"
        );
        assert_eq!(product_image_url(None), "/static/images/products/default.png");
        assert_eq!(product_image_url(Some("")), "/static/images/products/default.png");
    }

    #[test]
    fn test_field_label_replaces_first_underscore_only() {
        assert_eq!(field_label("full_name"), "full name");
        assert_eq!(field_label("battery_life_hours"), "battery life_hours");
        assert_eq!(field_label("email"), "email");
    }
}
