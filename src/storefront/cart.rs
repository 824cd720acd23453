//! Cart handlers.

use super::{failure_message, Storefront};
use crate::domain::cart::CartUpdate;
use crate::shared::ProductId;
use crate::state::{Channel, Ticket};
use crate::view::{Modal, NotificationKind};

impl Storefront {
    /// Add one unit. Anonymous shoppers are sent to the login modal and no
    /// request is made.
    pub async fn add_to_cart(&self, id: ProductId) {
        if !self.state.is_signed_in().await {
            return self.require_login("Please login to add items to cart").await;
        }

        let ticket = self.sequencer.issue(Channel::Cart);
        match self.client.cart().add(id).await {
            Ok(update) => {
                self.apply_cart_update(ticket, update).await;
                self.notify(NotificationKind::Success, "Added to cart!").await;
                if self.with_page(|p| p.is_open(Modal::Cart)).await {
                    self.load_cart_items().await;
                }
            }
            Err(e) => {
                let message = failure_message(&e, "Failed to add to cart", "Failed to add to cart");
                self.notify(NotificationKind::Error, message).await;
            }
        }
    }

    pub async fn remove_from_cart(&self, id: ProductId) {
        if !self.state.is_signed_in().await {
            return self
                .notify(NotificationKind::Error, "Please login to manage cart")
                .await;
        }

        let ticket = self.sequencer.issue(Channel::Cart);
        match self.client.cart().remove(id).await {
            Ok(update) => {
                self.apply_cart_update(ticket, update).await;
                self.notify(NotificationKind::Info, "Removed from cart").await;
            }
            Err(e) => {
                let message = failure_message(
                    &e,
                    "Failed to remove from cart",
                    "Failed to remove from cart",
                );
                self.notify(NotificationKind::Error, message).await;
            }
        }
    }

    /// Set a line's quantity. Below 1 this is exactly [`Self::remove_from_cart`].
    /// Ignored when anonymous.
    pub async fn update_cart_quantity(&self, id: ProductId, quantity: i64) {
        if !self.state.is_signed_in().await {
            return;
        }
        if quantity < 1 {
            return self.remove_from_cart(id).await;
        }

        let ticket = self.sequencer.issue(Channel::Cart);
        match self.client.cart().update_quantity(id, quantity).await {
            Ok(update) => {
                self.apply_cart_update(ticket, update).await;
                self.notify(NotificationKind::Success, "Cart updated").await;
            }
            Err(e) => {
                tracing::debug!(error = %e, product = %id, quantity, "quantity update failed");
                self.notify(NotificationKind::Error, "Failed to update quantity")
                    .await;
            }
        }
    }

    /// Empty the cart on the server.
    pub async fn clear_cart(&self) {
        if !self.state.is_signed_in().await {
            return self
                .notify(NotificationKind::Error, "Please login to manage cart")
                .await;
        }

        let ticket = self.sequencer.issue(Channel::Cart);
        match self.client.cart().clear().await {
            Ok(update) => {
                self.apply_cart_update(ticket, update).await;
                self.notify(NotificationKind::Info, "Cart cleared").await;
            }
            Err(e) => {
                let message = failure_message(&e, "Failed to clear cart", "Failed to clear cart");
                self.notify(NotificationKind::Error, message).await;
            }
        }
    }

    /// Fetch the cart and render it into the cart modal. The badge keeps the
    /// last count a mutation or the session probe reported.
    pub async fn load_cart_items(&self) {
        if !self.state.is_signed_in().await {
            return self.require_login("Please login to view cart").await;
        }

        let ticket = self.sequencer.issue(Channel::Cart);
        match self.client.cart().items().await {
            Ok(items) => {
                if !self.sequencer.accept(ticket) {
                    return;
                }
                let cart = self
                    .state
                    .update(|s| {
                        s.replace_cart(items);
                        s.cart().clone()
                    })
                    .await;
                self.update_page(|p| p.show_cart(&cart)).await;
            }
            Err(e) => {
                tracing::debug!(error = %e, "cart listing failed");
                self.notify(NotificationKind::Error, "Failed to load cart").await;
            }
        }
    }

    /// Open the cart modal with a fresh listing.
    pub async fn open_cart(&self) {
        if !self.state.is_signed_in().await {
            return self.require_login("Please login to view cart").await;
        }
        self.show_modal(Modal::Cart).await;
        self.load_cart_items().await;
    }

    async fn apply_cart_update(&self, ticket: Ticket, update: CartUpdate) {
        if !self.sequencer.accept(ticket) {
            return;
        }
        let replaced = self
            .state
            .update(|s| s.apply_cart_update(update).then(|| s.cart().clone()))
            .await;
        if let Some(cart) = replaced {
            self.update_page(|p| p.show_cart(&cart)).await;
        }
        self.sync_header().await;
    }
}
