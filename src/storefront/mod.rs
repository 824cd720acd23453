//! Storefront: the event handlers behind the page.
//!
//! [`Storefront`] ties a [`StoreClient`], the session mirror ([`StateStore`]),
//! the page model ([`Page`]) and the request [`Sequencer`] together. Each
//! handler follows the same shape:
//!
//! 1. check the session mirror and validate input, without any request when
//!    that check fails;
//! 2. take a ticket on the handler's channel;
//! 3. call the API (no lock is held across the await);
//! 4. apply the result to the mirror and the page if the ticket is still
//!    current, and show a notification.
//!
//! Handlers never return errors: every failure becomes an error notification
//! and leaves the previously displayed state in place.
//!
//! ```rust,no_run
//! # async fn example() -> Result<(), techstore_sdk::error::StoreError> {
//! use techstore_sdk::prelude::*;
//!
//! let storefront = Storefront::new(StoreClient::builder().build()?);
//! storefront.page_loaded().await;
//! storefront.add_to_cart(ProductId::new(42)).await;
//! # Ok(())
//! # }
//! ```

mod cart;
mod catalog;
mod chat;
mod checkout;
pub mod events;
pub mod forms;
mod session;
mod wishlist;

pub use events::UiEvent;
pub use forms::{LoginForm, RegisterForm};

use std::future::Future;
use std::sync::Arc;

use async_lock::RwLock;

use crate::client::StoreClient;
use crate::domain::catalog::Product;
use crate::domain::wishlist::WishlistIds;
use crate::error::StoreError;
use crate::shared::{Category, DEFAULT_CATEGORY};
use crate::state::{SessionState, Sequencer, StateStore};
use crate::view::{Membership, Modal, NotificationKind, Page};

#[derive(Clone)]
pub struct Storefront {
    client: StoreClient,
    state: StateStore,
    page: Arc<RwLock<Page>>,
    sequencer: Arc<Sequencer>,
}

impl Storefront {
    pub fn new(client: StoreClient) -> Self {
        Self {
            client,
            state: StateStore::new(),
            page: Arc::new(RwLock::new(Page::new())),
            sequencer: Arc::new(Sequencer::new()),
        }
    }

    pub fn client(&self) -> &StoreClient {
        &self.client
    }

    pub fn state(&self) -> &StateStore {
        &self.state
    }

    pub fn sequencer(&self) -> &Sequencer {
        &self.sequencer
    }

    /// Read from the page.
    pub async fn with_page<R>(&self, f: impl FnOnce(&Page) -> R) -> R {
        let page = self.page.read().await;
        f(&page)
    }

    /// A copy of the page as it is now.
    pub async fn page(&self) -> Page {
        self.page.read().await.clone()
    }

    /// Initial load: session probe, deals, then the default category.
    pub async fn page_loaded(&self) {
        self.check_auth_status().await;
        self.load_deals_products().await;
        let category = Category::from(DEFAULT_CATEGORY);
        self.set_active_category(category.clone()).await;
        self.load_category_products(&category).await;
    }

    // ── Modals ───────────────────────────────────────────────────────────

    pub async fn show_modal(&self, modal: Modal) {
        self.update_page(|p| p.show_modal(modal)).await;
    }

    pub async fn hide_modal(&self, modal: Modal) {
        self.update_page(|p| p.hide_modal(modal)).await;
    }

    pub async fn switch_modal(&self, from: Modal, to: Modal) {
        self.update_page(|p| p.switch_modal(from, to)).await;
    }

    pub async fn toggle_user_dropdown(&self) {
        self.update_page(Page::toggle_user_dropdown).await;
    }

    // ── Helpers shared by the handlers ───────────────────────────────────

    pub(crate) async fn update_page<R>(&self, f: impl FnOnce(&mut Page) -> R) -> R {
        let mut page = self.page.write().await;
        f(&mut page)
    }

    pub(crate) async fn notify(&self, kind: NotificationKind, message: impl Into<String>) {
        let message = message.into();
        if kind == NotificationKind::Error {
            tracing::error!(%message, "handler failed");
        }
        self.update_page(|p| p.notify(kind, message)).await;
    }

    /// Anonymous shoppers get `message` and the login modal.
    pub(crate) async fn require_login(&self, message: &str) {
        self.notify(NotificationKind::Error, message).await;
        self.show_modal(Modal::Login).await;
    }

    /// Run `fut` with the loading overlay shown.
    pub(crate) async fn with_loading<F: Future>(&self, fut: F) -> F::Output {
        self.update_page(Page::begin_loading).await;
        let output = fut.await;
        self.update_page(Page::end_loading).await;
        output
    }

    /// Copy the user menu and badge counts from the mirror onto the page.
    pub(crate) async fn sync_header(&self) {
        let state: SessionState = self.state.snapshot().await;
        self.update_page(|p| {
            p.set_user(state.user());
            p.set_counts(state.cart_count(), state.wishlist_count());
        })
        .await;
    }

    /// Wishlist membership for one render pass: a single request when signed
    /// in and there is something to render, none otherwise.
    pub(crate) async fn wishlist_membership_for(&self, products: &[Product]) -> Membership {
        let as_of = self.with_page(|p| p.buttons().clock()).await;
        if products.is_empty() || !self.state.is_signed_in().await {
            return Membership {
                ids: WishlistIds::new(),
                as_of,
            };
        }
        let ids = match self.client.wishlist().ids().await {
            Ok(ids) => ids,
            Err(e) => {
                tracing::warn!(error = %e, "wishlist membership fetch failed, rendering cards as not saved");
                WishlistIds::new()
            }
        };
        Membership { ids, as_of }
    }
}

/// Notification text for a failed request: `transport_fallback` when no
/// response arrived, otherwise the server's `{error}` text or `fallback`.
pub(crate) fn failure_message(err: &StoreError, fallback: &str, transport_fallback: &str) -> String {
    if err.is_transport() {
        transport_fallback.to_string()
    } else {
        err.user_message(fallback)
    }
}
