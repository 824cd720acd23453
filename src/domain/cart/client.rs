//! Cart sub-client: list, add, remove, change quantity, clear.

use crate::client::StoreClient;
use crate::domain::cart::{CartItem, CartUpdate};
use crate::error::StoreError;
use crate::shared::ProductId;

/// Sub-client for cart operations. All calls need a signed-in session; the
/// server answers `401 {"error": "Please login first"}` otherwise.
pub struct CartClient<'a> {
    pub(crate) client: &'a StoreClient,
}

impl<'a> CartClient<'a> {
    pub async fn items(&self) -> Result<Vec<CartItem>, StoreError> {
        let items = self.client.http.get_cart().await?;
        Ok(items.into_iter().map(CartItem::from).collect())
    }

    /// Add one unit of a product. The response carries the count only.
    pub async fn add(&self, id: ProductId) -> Result<CartUpdate, StoreError> {
        Ok(self.client.http.add_to_cart(id).await?.into())
    }

    pub async fn remove(&self, id: ProductId) -> Result<CartUpdate, StoreError> {
        Ok(self.client.http.remove_from_cart(id).await?.into())
    }

    /// Set a line's quantity. Anything below 1 removes the line.
    pub async fn update_quantity(
        &self,
        id: ProductId,
        quantity: i64,
    ) -> Result<CartUpdate, StoreError> {
        if quantity < 1 {
            return self.remove(id).await;
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        Ok(self
            .client
            .http
            .update_cart_quantity(id, quantity)
            .await?
            .into())
    }

    pub async fn clear(&self) -> Result<CartUpdate, StoreError> {
        Ok(self.client.http.clear_cart().await?.into())
    }
}
