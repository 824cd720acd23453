//! Authentication: session probe, login, registration, logout, profile.
//!
//! ## Session Model
//!
//! The backend keeps the session in a cookie.
//!
//! - **Wasm/Browser**: the browser owns the cookie; every request is sent with
//!   credentials included.
//! - **Native**: the HTTP client keeps a private cookie jar, so a login on one
//!   `StoreClient` authenticates every later call made through it (and its clones).
//!
//! The SDK never reads the cookie. Whether a shopper is signed in is answered
//! either by the server (`client.auth().check_session()`) or by the state mirror
//! in [`crate::state`], which is only ever written from server responses.

#[cfg(feature = "http")]
pub mod client;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shared::serde_util;

// ============================================================================
// User profile
// ============================================================================

/// The signed-in shopper as reported by the backend.
///
/// `id` is absent on the session probe (`/api/auth/check`) and present on
/// login/registration responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(alias = "full_name")]
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub pincode: String,
}

impl User {
    /// Overwrite the editable profile fields in place, keeping the id.
    pub fn merge_profile(&mut self, update: &ProfileUpdate) {
        self.name = update.full_name.clone();
        self.email = update.email.clone();
        self.phone = update.phone.clone();
        self.address = update.address.clone();
        self.pincode = update.pincode.clone();
    }
}

/// A successful sign-in: the user plus the counts the server reported with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedIn {
    pub user: User,
    pub cart_count: u32,
    pub wishlist_count: u32,
}

// ============================================================================
// Request bodies
// ============================================================================

/// `POST /api/auth/login` body. `identifier` is an email address or phone number.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub identifier: String,
    pub password: String,
}

/// `POST /api/auth/register` body.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub pincode: String,
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("identifier", &self.identifier)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("address", &self.address)
            .field("pincode", &self.pincode)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl RegisterRequest {
    /// Fields in the order they are validated and shown on the form.
    pub fn fields(&self) -> [(&'static str, &str); 6] {
        [
            ("full_name", self.full_name.as_str()),
            ("email", self.email.as_str()),
            ("phone", self.phone.as_str()),
            ("address", self.address.as_str()),
            ("pincode", self.pincode.as_str()),
            ("password", self.password.as_str()),
        ]
    }
}

/// `POST /api/auth/update-profile` body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub pincode: String,
}

impl From<&User> for ProfileUpdate {
    fn from(user: &User) -> Self {
        Self {
            full_name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            address: user.address.clone(),
            pincode: user.pincode.clone(),
        }
    }
}

// ============================================================================
// Wire types
// ============================================================================

/// Response from `GET /api/auth/check`.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionCheckResponse {
    #[serde(default)]
    pub logged_in: bool,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default, with = "serde_util::count_or_zero")]
    pub cart_count: u32,
    #[serde(default, with = "serde_util::count_or_zero")]
    pub wishlist_count: u32,
}

/// Response from login and registration.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    #[serde(default, with = "serde_util::count_or_zero")]
    pub cart_count: u32,
    #[serde(default, with = "serde_util::count_or_zero")]
    pub wishlist_count: u32,
}

impl From<AuthResponse> for SignedIn {
    fn from(resp: AuthResponse) -> Self {
        Self {
            user: resp.user,
            cart_count: resp.cart_count,
            wishlist_count: resp.wishlist_count,
        }
    }
}

/// Response from `GET /api/auth/logout`.
#[derive(Debug, Clone, Deserialize)]
pub struct LogoutResponse {
    #[serde(default)]
    pub success: bool,
}

/// Response from `POST /api/auth/update-profile`. The body is acknowledged,
/// not used: the client merges the submitted form into its own copy.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileUpdateResponse {
    #[serde(default)]
    pub success: Option<bool>,
}
