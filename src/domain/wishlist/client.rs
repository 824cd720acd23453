//! Wishlist sub-client: list, membership, add, remove.

use crate::client::StoreClient;
use crate::domain::catalog::Product;
use crate::domain::wishlist::{WishlistIds, WishlistUpdate};
use crate::error::StoreError;
use crate::shared::ProductId;

/// Sub-client for wishlist operations.
pub struct WishlistClient<'a> {
    pub(crate) client: &'a StoreClient,
}

impl<'a> WishlistClient<'a> {
    /// Saved products. The server answers an empty list when signed out.
    pub async fn list(&self) -> Result<Vec<Product>, StoreError> {
        let products = self.client.http.get_wishlist().await?;
        Ok(products.into_iter().map(Product::from).collect())
    }

    /// Ids of the saved products, from a single `GET /api/wishlist`.
    pub async fn ids(&self) -> Result<WishlistIds, StoreError> {
        let products = self.client.http.get_wishlist().await?;
        Ok(products.into_iter().map(|p| p.id).collect())
    }

    pub async fn add(&self, id: ProductId) -> Result<WishlistUpdate, StoreError> {
        Ok(self.client.http.add_to_wishlist(id).await?.into())
    }

    pub async fn remove(&self, id: ProductId) -> Result<WishlistUpdate, StoreError> {
        Ok(self.client.http.remove_from_wishlist(id).await?.into())
    }
}
