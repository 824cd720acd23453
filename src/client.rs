//! High-level client: `StoreClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use crate::auth::client::Auth;
use crate::domain::cart::client::CartClient;
use crate::domain::catalog::client::Catalog;
use crate::domain::chat::client::Chat;
use crate::domain::order::client::Orders;
use crate::domain::wishlist::client::WishlistClient;
use crate::error::StoreError;
use crate::http::StoreHttp;
use crate::network;

use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::auth::client::Auth as AuthClient;
pub use crate::domain::cart::client::CartClient as CartSubClient;
pub use crate::domain::catalog::client::Catalog as CatalogClient;
pub use crate::domain::chat::client::Chat as ChatClient;
pub use crate::domain::order::client::Orders as OrdersClient;
pub use crate::domain::wishlist::client::WishlistClient as WishlistSubClient;

/// The primary entry point for the TechStore SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.catalog()`, `client.cart()`, etc. Clones share the HTTP
/// connection pool and the session cookie.
#[derive(Clone)]
pub struct StoreClient {
    pub(crate) http: StoreHttp,
}

impl StoreClient {
    pub fn builder() -> StoreClientBuilder {
        StoreClientBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn auth(&self) -> Auth<'_> {
        Auth { client: self }
    }

    pub fn catalog(&self) -> Catalog<'_> {
        Catalog { client: self }
    }

    pub fn cart(&self) -> CartClient<'_> {
        CartClient { client: self }
    }

    pub fn wishlist(&self) -> WishlistClient<'_> {
        WishlistClient { client: self }
    }

    pub fn orders(&self) -> Orders<'_> {
        Orders { client: self }
    }

    pub fn chat(&self) -> Chat<'_> {
        Chat { client: self }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct StoreClientBuilder {
    base_url: String,
    timeout: Option<Duration>,
}

impl Default for StoreClientBuilder {
    fn default() -> Self {
        Self {
            base_url: network::DEFAULT_API_URL.to_string(),
            timeout: None,
        }
    }
}

impl StoreClientBuilder {
    /// Start from the environment: `TECHSTORE_API_URL` overrides the base URL
    /// and `TECHSTORE_TIMEOUT_SECS` sets a request timeout. Unset or
    /// unparsable values keep the defaults.
    pub fn from_env() -> Self {
        let mut builder = Self::default();
        if let Ok(url) = std::env::var(network::API_URL_ENV) {
            if !url.trim().is_empty() {
                builder.base_url = url.trim().to_string();
            }
        }
        if let Ok(raw) = std::env::var(network::TIMEOUT_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => builder.timeout = Some(Duration::from_secs(secs)),
                _ => tracing::warn!(value = %raw, "ignoring invalid {}", network::TIMEOUT_ENV),
            }
        }
        builder
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Per-request timeout. Requests have none unless one is set.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<StoreClient, StoreError> {
        Ok(StoreClient {
            http: StoreHttp::new(&self.base_url, self.timeout)?,
        })
    }
}
