//! Browsing handlers: deals, categories, product detail, search.

use super::Storefront;
use crate::domain::catalog::is_searchable;
use crate::error::StoreError;
use crate::shared::{Category, ProductId};
use crate::state::{Channel, Ticket};
use crate::view::render::Message;
use crate::view::{Modal, NotificationKind, Region, RegionContent};

impl Storefront {
    pub async fn load_deals_products(&self) {
        let ticket = self.sequencer.issue(Channel::Deals);
        let result = self.client.catalog().deals().await;
        let content = match result {
            Ok(products) if products.is_empty() => RegionContent::Message(
                Message::new("no-products", "box-open", "No deals available at the moment")
                    .with_detail("Check back soon for exciting offers!"),
            ),
            Ok(products) => RegionContent::Products(products),
            Err(e) => {
                tracing::error!(error = %e, "deals request failed");
                RegionContent::Message(
                    Message::new("no-products", "exclamation-triangle", "Failed to load deals")
                        .with_detail("Please try again later"),
                )
            }
        };
        self.render_products(ticket, Region::Deals, content).await;
    }

    pub async fn load_category_products(&self, category: &Category) {
        let ticket = self.sequencer.issue(Channel::Category);
        let result = self.client.catalog().by_category(category).await;
        let content = match result {
            Ok(products) if products.is_empty() => RegionContent::Message(
                Message::new(
                    "no-products",
                    "box-open",
                    format!("No products found in {}", category),
                )
                .with_detail("Check back soon for new arrivals!"),
            ),
            Ok(products) => RegionContent::Products(products),
            Err(e) => {
                tracing::error!(error = %e, %category, "category request failed");
                RegionContent::Message(
                    Message::new(
                        "no-products",
                        "exclamation-triangle",
                        format!("Failed to load {}", category),
                    )
                    .with_detail("Please try again later"),
                )
            }
        };
        self.render_products(ticket, Region::Category, content).await;
    }

    pub async fn set_active_category(&self, category: Category) {
        self.update_page(|p| p.set_active_category(category)).await;
    }

    /// Activate a category and load it.
    pub async fn select_category(&self, category: Category) {
        self.set_active_category(category.clone()).await;
        self.load_category_products(&category).await;
    }

    /// Fetch one product and open the detail modal.
    pub async fn show_product_modal(&self, id: ProductId) {
        let product = match self.client.catalog().get(id).await {
            Ok(product) => product,
            Err(StoreError::Http(e)) if e.status().is_some() => {
                tracing::debug!(error = %e, product = %id, "product lookup rejected");
                return self
                    .notify(NotificationKind::Error, "Product not found")
                    .await;
            }
            Err(e) => {
                tracing::debug!(error = %e, product = %id, "product lookup failed");
                return self
                    .notify(NotificationKind::Error, "Failed to load product details")
                    .await;
            }
        };

        let membership = self.wishlist_membership_for(std::slice::from_ref(&product)).await;
        self.update_page(|p| {
            p.buttons_mut().sync(&membership, [product.id]);
            p.set_region(Region::ProductDetail, RegionContent::ProductDetail(product));
            p.show_modal(Modal::Product);
        })
        .await;
    }

    /// Live search. Under two characters the panel is cleared and hidden and
    /// any search still in flight is dropped.
    pub async fn search_products(&self, input: &str) {
        let query = input.trim();
        if !is_searchable(query) {
            self.sequencer.invalidate(Channel::Search);
            self.update_page(|p| p.clear_search()).await;
            return;
        }

        let ticket = self.sequencer.issue(Channel::Search);
        let result = self.client.catalog().search(query).await;
        if !self.sequencer.accept(ticket) {
            return;
        }
        let content = match result {
            Ok(products) if products.is_empty() => RegionContent::Message(Message::new(
                "no-results",
                "search",
                format!("No products found for \"{}\"", query),
            )),
            Ok(products) => RegionContent::SearchResults(products),
            Err(e) => {
                tracing::error!(error = %e, %query, "search request failed");
                RegionContent::Message(Message::new(
                    "no-results",
                    "exclamation-triangle",
                    "Error searching products",
                ))
            }
        };
        self.update_page(|p| p.show_search_results(content)).await;
    }

    /// Render a product list with one shared wishlist membership lookup.
    async fn render_products(&self, ticket: Ticket, region: Region, content: RegionContent) {
        if !self.sequencer.accept(ticket) {
            return;
        }
        let membership = self.wishlist_membership_for(content.products()).await;
        if !self.sequencer.accept(ticket) {
            return;
        }
        let shown: Vec<ProductId> = content.products().iter().map(|product| product.id).collect();
        self.update_page(|p| {
            p.buttons_mut().sync(&membership, shown);
            p.set_region(region, content);
        })
        .await;
    }
}
