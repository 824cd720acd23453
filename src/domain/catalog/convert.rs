//! Conversions from wire types to domain types for the catalog.

use super::wire::ProductResponse;
use super::{Product, Spec};
use crate::shared::field_label;

impl From<ProductResponse> for Product {
    fn from(p: ProductResponse) -> Self {
        let specs = p
            .specs
            .unwrap_or_default()
            .into_iter()
            .map(|(key, value)| Spec {
                label: field_label(&key).to_uppercase(),
                value: match value {
                    serde_json::Value::String(s) => s,
                    other => other.to_string(),
                },
            })
            .collect();

        Self {
            id: p.id,
            name: p.name,
            category: p.category,
            price: p.price,
            description: p.description.unwrap_or_default(),
            image: p.image,
            on_sale: p.on_sale,
            specs,
            stock: p.stock,
            rating: p.rating,
        }
    }
}
