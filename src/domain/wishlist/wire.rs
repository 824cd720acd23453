//! Wire types for wishlist endpoints. `GET /api/wishlist` returns plain
//! product rows (see [`crate::domain::catalog::wire::ProductResponse`]).

use crate::shared::serde_util;
use serde::Deserialize;

/// Response from `POST /api/wishlist/add/:id` and `/remove/:id`.
#[derive(Debug, Clone, Deserialize)]
pub struct WishlistCountResponse {
    #[serde(default, with = "serde_util::count_or_zero")]
    pub wishlist_count: u32,
}
