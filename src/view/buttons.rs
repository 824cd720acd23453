//! Wishlist button index: product id → in-wishlist state.
//!
//! Every rendered card for a product reads its heart button from here, so a
//! flip after a wishlist mutation reaches every card at the next render.
//!
//! Mutation results are applied in the order they resolve: each carries the
//! server's state after that mutation, so the last one to arrive is the
//! freshest. Membership snapshots are older than any mutation touched after
//! they were requested, and skip those products.

use crate::domain::wishlist::WishlistIds;
use crate::shared::ProductId;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct ButtonState {
    in_wishlist: bool,
    /// Clock value of the last mutation dispatch or result for this product.
    touched: u64,
}

/// Wishlist membership fetched for one render pass, stamped with the button
/// clock at the moment it was requested.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Membership {
    pub ids: WishlistIds,
    pub as_of: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WishlistButtons {
    states: HashMap<ProductId, ButtonState>,
    clock: u64,
}

impl WishlistButtons {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_in_wishlist(&self, id: ProductId) -> bool {
        self.states
            .get(&id)
            .map(|s| s.in_wishlist)
            .unwrap_or(false)
    }

    /// Stamp for a membership request about to be sent.
    pub fn clock(&self) -> u64 {
        self.clock
    }

    /// Record the membership fetched for a render pass. Products touched by a
    /// mutation since the request went out keep their state.
    pub fn sync(&mut self, membership: &Membership, products: impl IntoIterator<Item = ProductId>) {
        for id in products {
            let state = self.states.entry(id).or_default();
            if state.touched <= membership.as_of {
                state.in_wishlist = membership.ids.contains(id);
            }
        }
    }

    /// Mark products as saved from a wishlist listing requested at `as_of`.
    pub fn mark_saved(&mut self, products: impl IntoIterator<Item = ProductId>, as_of: u64) {
        for id in products {
            let state = self.states.entry(id).or_default();
            if state.touched <= as_of {
                state.in_wishlist = true;
            }
        }
    }

    /// Note that a mutation for `id` is in flight.
    pub fn dispatched(&mut self, id: ProductId) {
        let stamp = self.tick();
        self.states.entry(id).or_default().touched = stamp;
    }

    /// Apply a mutation result as it resolves.
    pub fn resolve(&mut self, id: ProductId, in_wishlist: bool) {
        let stamp = self.tick();
        let state = self.states.entry(id).or_default();
        state.in_wishlist = in_wishlist;
        state.touched = stamp;
    }

    /// Every button back to "not saved" (sign-out).
    pub fn reset(&mut self) {
        self.states.clear();
    }

    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }
}
