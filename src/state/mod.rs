//! Session/state mirror: the client's copy of what the server last reported.
//!
//! [`SessionState`] is a plain value with one method per update point; nothing
//! else writes to it. [`StateStore`] shares one `SessionState` between
//! concurrently running handlers. Counts are never computed locally: they come
//! from server responses, or drop to zero when there is no session.

pub mod sequence;
#[cfg(feature = "http")]
mod store;

pub use sequence::{Channel, Sequencer, Ticket};
#[cfg(feature = "http")]
pub use store::StateStore;

use crate::auth::{ProfileUpdate, SignedIn, User};
use crate::domain::cart::{Cart, CartItem, CartUpdate};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    user: Option<User>,
    cart_count: u32,
    wishlist_count: u32,
    cart: Cart,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn cart_count(&self) -> u32 {
        self.cart_count
    }

    pub fn wishlist_count(&self) -> u32 {
        self.wishlist_count
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    // ── Update points ────────────────────────────────────────────────────

    /// Adopt a session reported by login, registration or the session probe.
    /// Any cart mirrored for a previous user is dropped.
    pub fn sign_in(&mut self, session: SignedIn) {
        let switching_user = self
            .user
            .as_ref()
            .map(|current| current.email != session.user.email)
            .unwrap_or(true);
        if switching_user {
            self.cart.clear();
        }
        self.user = Some(session.user);
        self.cart_count = session.cart_count;
        self.wishlist_count = session.wishlist_count;
    }

    /// Forget the session: no user, zero counts, empty cart.
    pub fn sign_out(&mut self) {
        self.user = None;
        self.cart_count = 0;
        self.wishlist_count = 0;
        self.cart.clear();
    }

    pub fn set_cart_count(&mut self, count: u32) {
        self.cart_count = count;
    }

    pub fn set_wishlist_count(&mut self, count: u32) {
        self.wishlist_count = count;
    }

    /// Replace the cart from a full listing.
    pub fn replace_cart(&mut self, items: Vec<CartItem>) {
        self.cart.replace_items(items);
    }

    /// Apply a cart mutation result. The count always updates; the contents
    /// update only when the response carried the full cart. Returns whether
    /// the contents were replaced.
    pub fn apply_cart_update(&mut self, update: CartUpdate) -> bool {
        self.cart_count = update.cart_count;
        match update.snapshot {
            Some(snapshot) => {
                self.cart.apply_snapshot(snapshot);
                true
            }
            None => false,
        }
    }

    /// An order emptied the server cart.
    pub fn order_placed(&mut self, cart_count: u32) {
        self.cart_count = cart_count;
        self.cart.clear();
    }

    /// Merge a saved profile form into the signed-in user. No-op when
    /// anonymous; returns whether a user was updated.
    pub fn merge_profile(&mut self, update: &ProfileUpdate) -> bool {
        match self.user.as_mut() {
            Some(user) => {
                user.merge_profile(update);
                true
            }
            None => false,
        }
    }
}
