//! Orders sub-client: history, checkout, order detail.

use crate::client::StoreClient;
use crate::domain::order::wire::PlaceOrderRequest;
use crate::domain::order::{Order, PaymentMethod, PlacedOrder};
use crate::error::StoreError;

/// Sub-client for order operations.
pub struct Orders<'a> {
    pub(crate) client: &'a StoreClient,
}

impl<'a> Orders<'a> {
    /// Order history, newest first.
    pub async fn list(&self) -> Result<Vec<Order>, StoreError> {
        let rows = self.client.http.get_orders().await?;
        rows.into_iter()
            .map(|row| Order::try_from(row).map_err(StoreError::from))
            .collect()
    }

    /// Turn the current cart into an order. The server empties the cart.
    pub async fn place(&self, payment_method: PaymentMethod) -> Result<PlacedOrder, StoreError> {
        let request = PlaceOrderRequest { payment_method };
        Ok(self.client.http.place_order(&request).await?.into())
    }

    /// One order with its item rows.
    pub async fn get(&self, order_id: u64) -> Result<Order, StoreError> {
        let detail = self.client.http.get_order(order_id).await?;
        Ok(Order::try_from(detail)?)
    }
}
