//! Conversions from wire types to domain types for orders.

use super::wire::{OrderDetailResponse, OrderItemRow, OrderLineWire, OrderRow, PlaceOrderResponse};
use super::{Order, OrderLine, OrderStatus, PlacedOrder};
use crate::error::ValidationError;
use chrono::{DateTime, NaiveDateTime};
use serde_json::Value;

const SQLITE_TIMESTAMP: &str = "%Y-%m-%d %H:%M:%S";

impl TryFrom<OrderRow> for Order {
    type Error = ValidationError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        let order_id = display_id(&row);
        let lines = match row.products {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::String(encoded)) if encoded.trim().is_empty() => Vec::new(),
            Some(Value::String(encoded)) => serde_json::from_str::<Vec<OrderLineWire>>(&encoded)
                .map_err(|e| malformed(&order_id, e))?,
            Some(list) => {
                serde_json::from_value::<Vec<OrderLineWire>>(list).map_err(|e| malformed(&order_id, e))?
            }
        }
        .into_iter()
        .map(OrderLine::from)
        .collect();

        Ok(Self {
            id: row.id,
            order_id,
            status: row
                .status
                .as_deref()
                .map(OrderStatus::from)
                .unwrap_or(OrderStatus::Pending),
            lines,
            total_amount: row.total_amount,
            payment_method: row.payment_method,
            created_at: row.created_at.as_deref().and_then(parse_timestamp),
        })
    }
}

impl TryFrom<OrderDetailResponse> for Order {
    type Error = ValidationError;

    /// The joined `items` rows replace whatever the `products` column holds.
    fn try_from(detail: OrderDetailResponse) -> Result<Self, Self::Error> {
        let mut order = Order::try_from(detail.order)?;
        if !detail.items.is_empty() {
            order.lines = detail.items.into_iter().map(OrderLine::from).collect();
        }
        Ok(order)
    }
}

impl From<OrderLineWire> for OrderLine {
    fn from(line: OrderLineWire) -> Self {
        Self {
            name: line.name,
            quantity: line.quantity,
            price: line.price,
            image: line.image,
        }
    }
}

impl From<OrderItemRow> for OrderLine {
    fn from(item: OrderItemRow) -> Self {
        Self {
            name: item.name,
            quantity: item.quantity,
            price: item.price,
            image: item.image,
        }
    }
}

impl From<PlaceOrderResponse> for PlacedOrder {
    fn from(resp: PlaceOrderResponse) -> Self {
        Self {
            order_id: resp.order_id,
            cart_count: resp.cart_count,
        }
    }
}

fn display_id(row: &OrderRow) -> String {
    match &row.order_id {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => row.id.map(|id| id.to_string()).unwrap_or_default(),
    }
}

fn malformed(order_id: &str, err: serde_json::Error) -> ValidationError {
    ValidationError::MalformedOrder {
        order_id: order_id.to_string(),
        reason: err.to_string(),
    }
}

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, SQLITE_TIMESTAMP)
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.naive_utc()))
        .or_else(|| DateTime::parse_from_rfc2822(raw).ok().map(|dt| dt.naive_utc()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn row(json: &str) -> OrderRow {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_products_column_is_decoded() {
        let order = Order::try_from(row(
            r#"{"id": 3, "order_id": "ORD-3", "total_amount": 2598,
                "products": "[{\"name\": \"Mouse\", \"quantity\": 2, \"price\": 1299}]",
                "status": "Shipped", "created_at": "2024-03-01 10:15:00"}"#,
        ))
        .unwrap();

        assert_eq!(order.order_id, "ORD-3");
        assert_eq!(order.status, OrderStatus::Shipped);
        assert_eq!(order.lines.len(), 1);
        assert_eq!(order.lines[0].price, Decimal::new(1299, 0));
        assert_eq!(order.created_date().as_deref(), Some("01/03/2024"));
    }

    #[test]
    fn test_missing_display_id_uses_row_id() {
        let order =
            Order::try_from(row(r#"{"id": 9, "order_id": null, "total_amount": 10}"#)).unwrap();
        assert_eq!(order.order_id, "9");
        assert!(order.lines.is_empty());
        assert_eq!(order.status, OrderStatus::Pending);
    }

    #[test]
    fn test_malformed_products_column() {
        let err = Order::try_from(row(
            r#"{"id": 4, "order_id": 4, "total_amount": 10, "products": "not json"}"#,
        ))
        .unwrap_err();
        assert!(matches!(err, ValidationError::MalformedOrder { ref order_id, .. } if order_id == "4"));
    }

    #[test]
    fn test_detail_items_replace_lines() {
        let detail: OrderDetailResponse = serde_json::from_str(
            r#"{"order": {"id": 2, "total_amount": 500, "products": null},
                "items": [{"product_id": 7, "name": "Case", "quantity": 1, "price": 500}]}"#,
        )
        .unwrap();
        let order = Order::try_from(detail).unwrap();
        assert_eq!(order.lines[0].name, "Case");
    }

    #[test]
    fn test_rfc3339_timestamp() {
        assert!(parse_timestamp("2024-03-01T10:15:00Z").is_some());
        assert!(parse_timestamp("yesterday").is_none());
    }
}
