//! Checkout and order history.

use super::{failure_message, Storefront};
use crate::domain::order::PaymentMethod;
use crate::error::ValidationError;
use crate::state::Channel;
use crate::view::render::Message;
use crate::view::{Modal, NotificationKind, Region, RegionContent};

impl Storefront {
    /// Open the payment modal with the total currently shown in the cart.
    pub async fn show_payment_modal(&self) {
        self.update_page(|p| {
            let total = p.displayed_cart_total();
            p.set_region(Region::PaymentSummary, RegionContent::PaymentSummary { total });
            p.show_modal(Modal::Payment);
        })
        .await;
    }

    pub async fn select_payment_method(&self, method: PaymentMethod) {
        self.update_page(|p| p.select_payment_method(method)).await;
    }

    /// Place an order with the selected payment method.
    pub async fn process_payment(&self) {
        let Some(method) = self.with_page(|p| p.selected_payment_method()).await else {
            let message = ValidationError::NoPaymentMethod.to_string();
            return self.notify(NotificationKind::Error, message).await;
        };

        let ticket = self.sequencer.issue(Channel::Cart);
        let result = self.with_loading(self.client.orders().place(method)).await;
        match result {
            Ok(placed) => {
                tracing::debug!(order_id = %placed.order_id, %method, "order placed");
                if self.sequencer.accept(ticket) {
                    let cart = self
                        .state
                        .update(|s| {
                            s.order_placed(placed.cart_count);
                            s.cart().clone()
                        })
                        .await;
                    self.update_page(|p| p.show_cart(&cart)).await;
                }
                self.update_page(|p| {
                    p.hide_modal(Modal::Payment);
                    p.hide_modal(Modal::Cart);
                })
                .await;
                self.sync_header().await;
                self.notify(
                    NotificationKind::Success,
                    format!("Order placed successfully! Order ID: {}", placed.order_id),
                )
                .await;
            }
            Err(e) => {
                let message = failure_message(&e, "Payment failed", "Payment failed. Please try again.");
                self.notify(NotificationKind::Error, message).await;
            }
        }
    }

    /// Render the order history into the orders modal.
    pub async fn load_orders(&self) {
        if !self.state.is_signed_in().await {
            return self.show_modal(Modal::Login).await;
        }

        let ticket = self.sequencer.issue(Channel::Orders);
        let result = self.client.orders().list().await;
        if !self.sequencer.accept(ticket) {
            return;
        }
        let content = match result {
            Ok(orders) if orders.is_empty() => RegionContent::Message(
                Message::new("no-orders", "box-open", "No orders yet")
                    .with_detail("Start shopping to see your orders here!"),
            ),
            Ok(orders) => RegionContent::Orders(orders),
            Err(e) => {
                tracing::error!(error = %e, "order history request failed");
                RegionContent::Message(
                    Message::new("no-orders", "exclamation-triangle", "Failed to load orders")
                        .with_detail("Please try again later"),
                )
            }
        };
        self.update_page(|p| p.set_region(Region::Orders, content)).await;
    }

    pub async fn open_orders(&self) {
        if !self.state.is_signed_in().await {
            return self.show_modal(Modal::Login).await;
        }
        self.show_modal(Modal::Orders).await;
        self.load_orders().await;
    }
}
