//! # TechStore SDK
//!
//! A Rust SDK for the TechStore electronics storefront: a typed client for its
//! JSON API, a client-side mirror of the shopper's session, and an in-memory
//! page model rendered to HTML fragments.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core**: Shared newtypes and domain models (always available, WASM-safe)
//! 2. **Auth**: User and session types, login/registration/profile calls
//! 3. **HTTP API**: `StoreHttp`, one method per endpoint, cookie session
//! 4. **High-Level Client**: `StoreClient` with nested sub-clients
//! 5. **State + View**: session mirror, request sequencing and the page model
//! 6. **Storefront**: event handlers wiring the layers together
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use techstore_sdk::prelude::*;
//!
//! let client = StoreClient::builder()
//!     .base_url("http://127.0.0.1:5000")
//!     .build()?;
//!
//! let deals = client.catalog().deals().await?;
//! let session = client.auth().login("asha@example.com", "secret").await?;
//! client.cart().add(deals[0].id).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and helpers used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL and asset path constants.
pub mod network;

// ── Layer 2: Auth ────────────────────────────────────────────────────────────

/// Authentication: users, session probe, login/logout, profile.
pub mod auth;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// HTTP client for the storefront API.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `StoreClient`: the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Layer 5: State + View ────────────────────────────────────────────────────

/// Session mirror and request sequencing.
pub mod state;

/// Page model and HTML fragments.
pub mod view;

// ── Layer 6: Storefront ──────────────────────────────────────────────────────

/// Event handlers for the storefront page.
#[cfg(feature = "http")]
pub mod storefront;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{Category, ProductId};

    // Domain types
    pub use crate::domain::cart::{Cart, CartItem, CartTotals, CartUpdate};
    pub use crate::domain::catalog::{Product, Spec};
    pub use crate::domain::chat::{ChatMessage, Sender};
    pub use crate::domain::order::{Order, OrderLine, OrderStatus, PaymentMethod, PlacedOrder};
    pub use crate::domain::wishlist::{WishlistIds, WishlistUpdate};

    // Errors
    pub use crate::error::{AuthError, HttpError, StoreError, ValidationError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // Auth + User types
    pub use crate::auth::{ProfileUpdate, RegisterRequest, SignedIn, User};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        AuthClient, CartSubClient, CatalogClient, ChatClient, OrdersClient, StoreClient,
        StoreClientBuilder, WishlistSubClient,
    };

    // State containers
    pub use crate::state::{Channel, SessionState, Sequencer, Ticket};
    #[cfg(feature = "http")]
    pub use crate::state::StateStore;

    // View
    pub use crate::view::{Modal, NotificationKind, Page, Region, RegionContent};

    // Storefront
    #[cfg(feature = "http")]
    pub use crate::storefront::{LoginForm, RegisterForm, Storefront, UiEvent};
}
