//! Low-level HTTP client: `StoreHttp`.
//!
//! One method per API endpoint. Returns wire types (conversion to domain types
//! happens in the sub-clients). Internal to the SDK: `StoreClient` wraps this.

use crate::auth::{
    AuthResponse, LoginRequest, LogoutResponse, ProfileUpdate, ProfileUpdateResponse,
    RegisterRequest, SessionCheckResponse,
};
use crate::domain::cart::wire::{
    CartCountResponse, CartItemResponse, CartSnapshotResponse, UpdateQuantityRequest,
};
use crate::domain::catalog::wire::ProductResponse;
use crate::domain::chat::wire::{ChatRequest, ChatResponse};
use crate::domain::order::wire::{
    OrderDetailResponse, OrderRow, PlaceOrderRequest, PlaceOrderResponse,
};
use crate::domain::wishlist::wire::WishlistCountResponse;
use crate::error::HttpError;
use crate::shared::{Category, ProductId};

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Low-level HTTP client for the TechStore REST API.
///
/// The session lives in a cookie: on native targets the client keeps its own
/// cookie jar, on wasm32 the browser's jar is used via credentialed fetches.
#[derive(Clone)]
pub struct StoreHttp {
    base_url: String,
    client: Client,
}

/// Body of a non-OK response that carries a message for the shopper.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl StoreHttp {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, HttpError> {
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder.cookie_store(true).pool_max_idle_per_host(10);
            if let Some(timeout) = timeout {
                builder = builder.timeout(timeout);
            }
        }
        #[cfg(target_arch = "wasm32")]
        let _ = timeout;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Auth ─────────────────────────────────────────────────────────────

    pub async fn check_session(&self) -> Result<SessionCheckResponse, HttpError> {
        self.get("/api/auth/check").await
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, HttpError> {
        self.post("/api/auth/login", Some(request)).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, HttpError> {
        self.post("/api/auth/register", Some(request)).await
    }

    pub async fn logout(&self) -> Result<LogoutResponse, HttpError> {
        self.get("/api/auth/logout").await
    }

    pub async fn update_profile(
        &self,
        update: &ProfileUpdate,
    ) -> Result<ProfileUpdateResponse, HttpError> {
        self.post("/api/auth/update-profile", Some(update)).await
    }

    // ── Catalog ──────────────────────────────────────────────────────────

    pub async fn get_products(&self) -> Result<Vec<ProductResponse>, HttpError> {
        self.get("/api/products").await
    }

    pub async fn get_product(&self, id: ProductId) -> Result<ProductResponse, HttpError> {
        self.get(&format!("/api/products/{}", id)).await
    }

    pub async fn get_category_products(
        &self,
        category: &Category,
    ) -> Result<Vec<ProductResponse>, HttpError> {
        let path = format!(
            "/api/products/category/{}",
            urlencoding::encode(category.as_str())
        );
        self.get(&path).await
    }

    pub async fn search_products(&self, query: &str) -> Result<Vec<ProductResponse>, HttpError> {
        let path = format!("/api/products/search?q={}", urlencoding::encode(query));
        self.get(&path).await
    }

    pub async fn get_deals(&self) -> Result<Vec<ProductResponse>, HttpError> {
        self.get("/api/deals").await
    }

    // ── Cart ─────────────────────────────────────────────────────────────

    pub async fn get_cart(&self) -> Result<Vec<CartItemResponse>, HttpError> {
        self.get("/api/cart").await
    }

    pub async fn add_to_cart(&self, id: ProductId) -> Result<CartCountResponse, HttpError> {
        self.post(&format!("/api/cart/add/{}", id), None::<&()>).await
    }

    pub async fn remove_from_cart(&self, id: ProductId) -> Result<CartSnapshotResponse, HttpError> {
        self.post(&format!("/api/cart/remove/{}", id), None::<&()>)
            .await
    }

    pub async fn update_cart_quantity(
        &self,
        id: ProductId,
        quantity: u32,
    ) -> Result<CartSnapshotResponse, HttpError> {
        let body = UpdateQuantityRequest { quantity };
        self.post(&format!("/api/cart/update/{}", id), Some(&body))
            .await
    }

    pub async fn clear_cart(&self) -> Result<CartSnapshotResponse, HttpError> {
        self.post("/api/cart/clear", None::<&()>).await
    }

    // ── Wishlist ─────────────────────────────────────────────────────────

    pub async fn get_wishlist(&self) -> Result<Vec<ProductResponse>, HttpError> {
        self.get("/api/wishlist").await
    }

    pub async fn add_to_wishlist(&self, id: ProductId) -> Result<WishlistCountResponse, HttpError> {
        self.post(&format!("/api/wishlist/add/{}", id), None::<&()>)
            .await
    }

    pub async fn remove_from_wishlist(
        &self,
        id: ProductId,
    ) -> Result<WishlistCountResponse, HttpError> {
        self.post(&format!("/api/wishlist/remove/{}", id), None::<&()>)
            .await
    }

    // ── Orders ───────────────────────────────────────────────────────────

    pub async fn get_orders(&self) -> Result<Vec<OrderRow>, HttpError> {
        self.get("/api/orders").await
    }

    pub async fn place_order(
        &self,
        request: &PlaceOrderRequest,
    ) -> Result<PlaceOrderResponse, HttpError> {
        self.post("/api/orders", Some(request)).await
    }

    pub async fn get_order(&self, order_id: u64) -> Result<OrderDetailResponse, HttpError> {
        self.get(&format!("/api/orders/{}", order_id)).await
    }

    // ── Chatbot ──────────────────────────────────────────────────────────

    pub async fn send_chat(&self, request: &ChatRequest) -> Result<ChatResponse, HttpError> {
        self.post("/api/chatbot", Some(request)).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, HttpError> {
        self.do_request(reqwest::Method::GET, path, None::<&()>)
            .await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, HttpError> {
        self.do_request(reqwest::Method::POST, path, body).await
    }

    async fn do_request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, HttpError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(method = %method, url = %url, "storefront request");

        let mut req = self
            .client
            .request(method, &url)
            .header(reqwest::header::ACCEPT, "application/json");

        #[cfg(target_arch = "wasm32")]
        {
            req = req.fetch_credentials_include();
        }

        if let Some(b) = body {
            req = req.json(b);
        }

        let resp = req.send().await?;
        let status = resp.status();
        let body_text = resp.text().await?;

        if status.is_success() {
            return serde_json::from_str(&body_text).map_err(|e| {
                tracing::debug!(url = %url, error = %e, "response body did not decode");
                HttpError::Decode(e.to_string())
            });
        }

        Err(error_from_body(status.as_u16(), body_text))
    }
}

/// Map a non-OK response to `Api` when it carries `{"error": "..."}`,
/// otherwise to `Status` with the raw body.
fn error_from_body(status: u16, body: String) -> HttpError {
    match serde_json::from_str::<ErrorBody>(&body) {
        Ok(parsed) => HttpError::Api {
            status,
            message: parsed.error,
        },
        Err(_) => HttpError::Status { status, body },
    }
}
