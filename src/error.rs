//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Render error: {0}")]
    Render(#[from] askama::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl StoreError {
    /// Text to show the shopper: validation text or the server's `{error}`
    /// message when there is one, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            StoreError::Validation(e) => e.to_string(),
            StoreError::Http(e) => e
                .server_message()
                .map(str::to_string)
                .unwrap_or_else(|| fallback.to_string()),
            _ => fallback.to_string(),
        }
    }

    /// Whether the request never produced an HTTP response.
    pub fn is_transport(&self) -> bool {
        matches!(self, StoreError::Http(e) if e.is_transport())
    }
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// Non-OK status with a structured `{"error": "..."}` body.
    #[error("Server error {status}: {message}")]
    Api { status: u16, message: String },

    /// Non-OK status without a structured body.
    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// OK status, but the body did not match the expected shape.
    #[error("Unexpected response body: {0}")]
    Decode(String),
}

impl HttpError {
    /// The server-supplied error text, if the response carried one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            HttpError::Api { message, .. } => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Api { status, .. } | HttpError::Status { status, .. } => Some(*status),
            #[cfg(feature = "http")]
            HttpError::Reqwest(e) => e.status().map(|s| s.as_u16()),
            HttpError::Decode(_) => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        match self {
            #[cfg(feature = "http")]
            HttpError::Reqwest(e) => !e.is_decode() && !e.is_status(),
            _ => false,
        }
    }
}

/// Authentication errors.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Server did not acknowledge logout")]
    LogoutRejected,
}

/// Client-side validation failures. The display text is what the shopper sees.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter email/phone and password")]
    MissingCredentials,

    #[error("Please fill in {0}")]
    MissingField(String),

    #[error("Please accept terms and conditions")]
    TermsNotAccepted,

    #[error("Please select a payment method")]
    NoPaymentMethod,

    #[error("Please enter your email or phone number")]
    MissingIdentifier,

    #[error("Please enter OTP and new password")]
    MissingResetFields,

    #[error("Malformed order {order_id}: {reason}")]
    MalformedOrder { order_id: String, reason: String },
}
