//! Order domain: placed orders, order lines, payment methods.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// ─── PaymentMethod ───────────────────────────────────────────────────────────

/// Payment options offered at checkout. Payment itself is simulated: the
/// method is only recorded on the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Card,
    Upi,
    #[serde(rename = "netbanking")]
    NetBanking,
    Cod,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::Card,
        PaymentMethod::Upi,
        PaymentMethod::NetBanking,
        PaymentMethod::Cod,
    ];

    /// Value sent to the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::Upi => "upi",
            PaymentMethod::NetBanking => "netbanking",
            PaymentMethod::Cod => "cod",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "Credit/Debit Card",
            PaymentMethod::Upi => "UPI",
            PaymentMethod::NetBanking => "Net Banking",
            PaymentMethod::Cod => "Cash on Delivery",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "card" => Ok(PaymentMethod::Card),
            "upi" => Ok(PaymentMethod::Upi),
            "netbanking" => Ok(PaymentMethod::NetBanking),
            "cod" => Ok(PaymentMethod::Cod),
            other => Err(format!("unknown payment method: {}", other)),
        }
    }
}

// ─── OrderStatus ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    /// Any status this SDK does not know, kept verbatim.
    Other(String),
}

impl OrderStatus {
    pub fn as_str(&self) -> &str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Other(s) => s,
        }
    }
}

impl From<&str> for OrderStatus {
    fn from(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => OrderStatus::Pending,
            "processing" => OrderStatus::Processing,
            "shipped" => OrderStatus::Shipped,
            "delivered" => OrderStatus::Delivered,
            "cancelled" | "canceled" => OrderStatus::Cancelled,
            _ => OrderStatus::Other(s.to_string()),
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Order ───────────────────────────────────────────────────────────────────

/// One product line of a placed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub name: String,
    pub quantity: u32,
    pub price: Decimal,
    pub image: Option<String>,
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Row id, used by `GET /api/orders/:id`.
    pub id: Option<u64>,
    /// Display id (`order_id` column, falling back to the row id).
    pub order_id: String,
    pub status: OrderStatus,
    pub lines: Vec<OrderLine>,
    pub total_amount: Decimal,
    pub payment_method: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}

impl Order {
    /// Creation date as `dd/mm/yyyy`.
    pub fn created_date(&self) -> Option<String> {
        self.created_at
            .map(|ts| ts.format(DISPLAY_DATE_FORMAT).to_string())
    }
}

const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

/// Result of placing an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedOrder {
    pub order_id: String,
    pub cart_count: u32,
}
