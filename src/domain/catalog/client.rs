//! Catalog sub-client: products, categories, deals, search.

use crate::client::StoreClient;
use crate::domain::catalog::Product;
use crate::error::StoreError;
use crate::shared::{Category, ProductId};

/// Sub-client for catalog reads. Nothing is cached: every call hits the API.
pub struct Catalog<'a> {
    pub(crate) client: &'a StoreClient,
}

impl<'a> Catalog<'a> {
    /// Every product in the store.
    pub async fn all(&self) -> Result<Vec<Product>, StoreError> {
        let products = self.client.http.get_products().await?;
        Ok(products.into_iter().map(Product::from).collect())
    }

    /// One product by id.
    pub async fn get(&self, id: ProductId) -> Result<Product, StoreError> {
        Ok(self.client.http.get_product(id).await?.into())
    }

    pub async fn by_category(&self, category: &Category) -> Result<Vec<Product>, StoreError> {
        let products = self.client.http.get_category_products(category).await?;
        Ok(products.into_iter().map(Product::from).collect())
    }

    pub async fn deals(&self) -> Result<Vec<Product>, StoreError> {
        let products = self.client.http.get_deals().await?;
        Ok(products.into_iter().map(Product::from).collect())
    }

    /// Search by free text. The query is sent trimmed; callers gate on
    /// [`super::is_searchable`] before calling.
    pub async fn search(&self, query: &str) -> Result<Vec<Product>, StoreError> {
        let products = self.client.http.search_products(query.trim()).await?;
        Ok(products.into_iter().map(Product::from).collect())
    }
}
