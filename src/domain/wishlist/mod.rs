//! Wishlist domain: saved products and membership.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use crate::shared::ProductId;
use std::collections::HashSet;

/// Result of a wishlist mutation: the server's new count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WishlistUpdate {
    pub wishlist_count: u32,
}

impl From<wire::WishlistCountResponse> for WishlistUpdate {
    fn from(resp: wire::WishlistCountResponse) -> Self {
        Self {
            wishlist_count: resp.wishlist_count,
        }
    }
}

/// The set of product ids on the shopper's wishlist, fetched once per render
/// pass and shared by every card in it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WishlistIds(HashSet<ProductId>);

impl WishlistIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.0.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ProductId> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<ProductId> for WishlistIds {
    fn from_iter<I: IntoIterator<Item = ProductId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
