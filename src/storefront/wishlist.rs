//! Wishlist handlers.
//!
//! Mutation results are applied as they resolve, count and heart button alike:
//! each response carries the server state after that mutation, so when two
//! toggles overlap the page ends on the one the server answered last. Listing
//! and membership snapshots never override a product touched after they were
//! requested (see [`crate::view::WishlistButtons`]).

use super::{failure_message, Storefront};
use crate::shared::ProductId;
use crate::state::Channel;
use crate::view::{Modal, NotificationKind, Region, RegionContent};

impl Storefront {
    pub async fn add_to_wishlist(&self, id: ProductId) {
        if !self.state.is_signed_in().await {
            return self
                .require_login("Please login to add items to wishlist")
                .await;
        }

        self.update_page(|p| p.buttons_mut().dispatched(id)).await;
        match self.client.wishlist().add(id).await {
            Ok(update) => {
                self.wishlist_mutated(id, true, update.wishlist_count)
                    .await;
                self.notify(NotificationKind::Success, "Added to wishlist!")
                    .await;
                self.refresh_open_wishlist().await;
            }
            Err(e) => {
                let message = failure_message(
                    &e,
                    "Failed to add to wishlist",
                    "Failed to add to wishlist",
                );
                self.notify(NotificationKind::Error, message).await;
            }
        }
    }

    pub async fn remove_from_wishlist(&self, id: ProductId) {
        if !self.state.is_signed_in().await {
            return self
                .notify(NotificationKind::Error, "Please login to manage wishlist")
                .await;
        }

        self.update_page(|p| p.buttons_mut().dispatched(id)).await;
        match self.client.wishlist().remove(id).await {
            Ok(update) => {
                self.wishlist_mutated(id, false, update.wishlist_count)
                    .await;
                self.notify(NotificationKind::Info, "Removed from wishlist")
                    .await;
                self.refresh_open_wishlist().await;
            }
            Err(e) => {
                let message = failure_message(
                    &e,
                    "Failed to remove from wishlist",
                    "Failed to remove from wishlist",
                );
                self.notify(NotificationKind::Error, message).await;
            }
        }
    }

    /// Heart button click: add or remove depending on what the button shows.
    pub async fn toggle_wishlist(&self, id: ProductId) {
        let saved = self.with_page(|p| p.buttons().is_in_wishlist(id)).await;
        if saved {
            self.remove_from_wishlist(id).await;
        } else {
            self.add_to_wishlist(id).await;
        }
    }

    /// Fetch the wishlist and render it as product cards, all marked saved.
    /// The badge keeps the last count a mutation or the session probe reported.
    pub async fn load_wishlist_items(&self) {
        if !self.state.is_signed_in().await {
            return self.require_login("Please login to view wishlist").await;
        }

        let ticket = self.sequencer.issue(Channel::Wishlist);
        let as_of = self.with_page(|p| p.buttons().clock()).await;
        match self.client.wishlist().list().await {
            Ok(products) => {
                if !self.sequencer.accept(ticket) {
                    return;
                }
                self.update_page(|p| {
                    p.set_wishlist_empty_visible(products.is_empty());
                    p.buttons_mut()
                        .mark_saved(products.iter().map(|product| product.id), as_of);
                    let content = if products.is_empty() {
                        RegionContent::Blank
                    } else {
                        RegionContent::Products(products)
                    };
                    p.set_region(Region::Wishlist, content);
                })
                .await;
            }
            Err(e) => {
                tracing::debug!(error = %e, "wishlist listing failed");
                self.notify(NotificationKind::Error, "Failed to load wishlist")
                    .await;
            }
        }
    }

    pub async fn open_wishlist(&self) {
        if !self.state.is_signed_in().await {
            return self.require_login("Please login to view wishlist").await;
        }
        self.show_modal(Modal::Wishlist).await;
        self.load_wishlist_items().await;
    }

    async fn wishlist_mutated(&self, id: ProductId, saved: bool, count: u32) {
        // Count and button change under one page lock, so overlapping results
        // land as pairs in resolution order.
        {
            let mut page = self.page.write().await;
            self.state.update(|s| s.set_wishlist_count(count)).await;
            page.buttons_mut().resolve(id, saved);
        }
        self.sync_header().await;
    }

    async fn refresh_open_wishlist(&self) {
        if self.with_page(|p| p.is_open(Modal::Wishlist)).await {
            self.load_wishlist_items().await;
        }
    }
}
