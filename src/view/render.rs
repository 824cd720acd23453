//! HTML fragments: askama templates and the view models that feed them.
//!
//! Every money field is formatted here, so templates only print strings.
//! Templates live in `templates/` and are auto-escaped.

use askama::Template;

use crate::domain::cart::{CartItem, CartTotals};
use crate::domain::catalog::{Product, Spec, SALE_BADGE};
use crate::domain::chat::ChatMessage;
use crate::domain::order::Order;
use crate::shared::rupees;

// ─── View models ─────────────────────────────────────────────────────────────

/// A product card, with its wishlist button state resolved at render time.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    pub id: u64,
    pub name: String,
    pub category: String,
    pub image_url: String,
    pub on_sale: bool,
    pub sale_badge: &'static str,
    pub price: String,
    pub has_original_price: bool,
    pub original_price: String,
    pub excerpt: String,
    pub in_wishlist: bool,
}

impl ProductCard {
    pub fn new(product: &Product, in_wishlist: bool) -> Self {
        let original_price = product.original_price();
        Self {
            id: product.id.get(),
            name: product.name.clone(),
            category: product.category.to_string(),
            image_url: product.image_url(),
            on_sale: product.on_sale,
            sale_badge: SALE_BADGE,
            price: rupees(&product.price),
            has_original_price: original_price.is_some(),
            original_price: original_price.map(|p| rupees(&p)).unwrap_or_default(),
            excerpt: product.excerpt(),
            in_wishlist,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub id: u64,
    pub name: String,
    pub category: String,
    pub price: String,
    pub image_url: String,
}

impl From<&Product> for SearchResult {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.get(),
            name: product.name.clone(),
            category: product.category.to_string(),
            price: rupees(&product.price),
            image_url: product.image_url(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub id: u64,
    pub name: String,
    pub category: String,
    pub image_url: String,
    pub price: String,
    pub quantity: u32,
    /// Quantity requested by the `-` button; 0 removes the line.
    pub decrease_to: i64,
    pub increase_to: i64,
    pub line_total: String,
}

impl From<&CartItem> for CartLine {
    fn from(item: &CartItem) -> Self {
        let quantity = i64::from(item.quantity);
        Self {
            id: item.product_id.get(),
            name: item.name.clone(),
            category: item.category.to_string(),
            image_url: item.image_url(),
            price: rupees(&item.price),
            quantity: item.quantity,
            decrease_to: quantity - 1,
            increase_to: quantity + 1,
            line_total: rupees(&item.line_total()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderLineView {
    pub name: String,
    pub quantity: u32,
    pub price: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderView {
    pub order_id: String,
    pub status: String,
    pub status_class: String,
    pub lines: Vec<OrderLineView>,
    pub total: String,
    pub date: String,
}

impl From<&Order> for OrderView {
    fn from(order: &Order) -> Self {
        Self {
            order_id: order.order_id.clone(),
            status: order.status.to_string(),
            status_class: order.status.as_str().to_lowercase().replace(' ', "-"),
            lines: order
                .lines
                .iter()
                .map(|line| OrderLineView {
                    name: line.name.clone(),
                    quantity: line.quantity,
                    price: rupees(&line.price),
                })
                .collect(),
            total: rupees(&order.total_amount),
            date: order.created_date().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatBubble {
    pub sender: &'static str,
    pub text: String,
}

impl From<&ChatMessage> for ChatBubble {
    fn from(message: &ChatMessage) -> Self {
        Self {
            sender: message.sender.as_str(),
            text: message.text.clone(),
        }
    }
}

/// An empty or failed state: an icon, a heading and an optional line of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub class: &'static str,
    pub icon: &'static str,
    pub title: String,
    pub detail: Option<String>,
}

impl Message {
    pub fn new(class: &'static str, icon: &'static str, title: impl Into<String>) -> Self {
        Self {
            class,
            icon,
            title: title.into(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

// ─── Templates ───────────────────────────────────────────────────────────────

#[derive(Template)]
#[template(path = "product_grid.html")]
pub struct ProductGridTemplate {
    pub cards: Vec<ProductCard>,
}

#[derive(Template)]
#[template(path = "search_results.html")]
pub struct SearchResultsTemplate {
    pub results: Vec<SearchResult>,
}

#[derive(Template)]
#[template(path = "cart_items.html")]
pub struct CartItemsTemplate {
    pub lines: Vec<CartLine>,
}

#[derive(Template)]
#[template(path = "cart_summary.html")]
pub struct CartSummaryTemplate {
    pub subtotal: String,
    pub shipping: String,
    pub total: String,
    pub checkout_enabled: bool,
}

impl CartSummaryTemplate {
    pub fn new(totals: &CartTotals, checkout_enabled: bool) -> Self {
        Self {
            subtotal: rupees(&totals.subtotal),
            shipping: rupees(&totals.shipping),
            total: rupees(&totals.total),
            checkout_enabled,
        }
    }
}

#[derive(Template)]
#[template(path = "product_detail.html")]
pub struct ProductDetailTemplate {
    pub card: ProductCard,
    pub description: String,
    pub specs: Vec<Spec>,
    pub has_stock: bool,
    pub stock: u32,
}

impl ProductDetailTemplate {
    pub fn new(product: &Product, in_wishlist: bool) -> Self {
        Self {
            card: ProductCard::new(product, in_wishlist),
            description: product.description.clone(),
            specs: product.specs.clone(),
            has_stock: product.stock.is_some(),
            stock: product.stock.unwrap_or_default(),
        }
    }
}

#[derive(Template)]
#[template(path = "orders.html")]
pub struct OrdersTemplate {
    pub orders: Vec<OrderView>,
}

#[derive(Template)]
#[template(path = "message.html")]
pub struct MessageTemplate {
    pub class: &'static str,
    pub icon: &'static str,
    pub title: String,
    pub has_detail: bool,
    pub detail: String,
}

impl From<&Message> for MessageTemplate {
    fn from(message: &Message) -> Self {
        Self {
            class: message.class,
            icon: message.icon,
            title: message.title.clone(),
            has_detail: message.detail.is_some(),
            detail: message.detail.clone().unwrap_or_default(),
        }
    }
}

#[derive(Template)]
#[template(path = "payment_summary.html")]
pub struct PaymentSummaryTemplate {
    pub total: String,
}

#[derive(Template)]
#[template(path = "chat_log.html")]
pub struct ChatLogTemplate {
    pub bubbles: Vec<ChatBubble>,
}

#[derive(Template)]
#[template(path = "notification.html")]
pub struct NotificationTemplate {
    pub kind: &'static str,
    pub icon: &'static str,
    pub message: String,
}
