//! Auth sub-client: session probe, login, registration, logout, profile.

use crate::auth::{LoginRequest, ProfileUpdate, RegisterRequest, SignedIn};
use crate::client::StoreClient;
use crate::error::{AuthError, StoreError};

/// Sub-client for authentication operations.
pub struct Auth<'a> {
    pub(crate) client: &'a StoreClient,
}

impl<'a> Auth<'a> {
    /// Ask the server who is signed in.
    ///
    /// Returns `Ok(None)` when the server reports no session. Transport and
    /// status failures are returned as errors; callers that treat every failure
    /// as "anonymous" do so themselves.
    pub async fn check_session(&self) -> Result<Option<SignedIn>, StoreError> {
        let resp = self.client.http.check_session().await?;
        match (resp.logged_in, resp.user) {
            (true, Some(user)) => Ok(Some(SignedIn {
                user,
                cart_count: resp.cart_count,
                wishlist_count: resp.wishlist_count,
            })),
            _ => Ok(None),
        }
    }

    /// Sign in with an email address or phone number and a password. The
    /// session cookie is kept by the underlying HTTP client.
    pub async fn login(&self, identifier: &str, password: &str) -> Result<SignedIn, StoreError> {
        let request = LoginRequest {
            identifier: identifier.to_string(),
            password: password.to_string(),
        };
        Ok(self.client.http.login(&request).await?.into())
    }

    /// Create an account; the server signs the new user in.
    pub async fn register(&self, request: &RegisterRequest) -> Result<SignedIn, StoreError> {
        Ok(self.client.http.register(request).await?.into())
    }

    /// End the server session. Fails with [`AuthError::LogoutRejected`] when the
    /// server answers without acknowledging.
    pub async fn logout(&self) -> Result<(), StoreError> {
        let resp = self.client.http.logout().await?;
        if !resp.success {
            return Err(AuthError::LogoutRejected.into());
        }
        Ok(())
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<(), StoreError> {
        let _ = self.client.http.update_profile(update).await?;
        Ok(())
    }
}
