//! Session handlers: probe, login, registration, logout, profile, password reset.

use super::forms::{LoginForm, RegisterForm};
use super::{failure_message, Storefront};
use crate::auth::{ProfileUpdate, SignedIn};
use crate::domain::cart::Cart;
use crate::error::{StoreError, ValidationError};
use crate::state::SessionState;
use crate::view::{ForgotStep, Modal, NotificationKind};

impl Storefront {
    /// Ask the server who is signed in. Any failure counts as anonymous.
    pub async fn check_auth_status(&self) {
        match self.client.auth().check_session().await {
            Ok(Some(session)) => {
                self.state.update(|s| s.sign_in(session)).await;
            }
            Ok(None) => {
                self.state.update(SessionState::sign_out).await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "session probe failed, continuing as guest");
                self.state.update(SessionState::sign_out).await;
            }
        }
        self.sync_header().await;
    }

    pub async fn handle_login(&self, form: LoginForm) {
        let request = match form.validate() {
            Ok(request) => request,
            Err(e) => return self.notify(NotificationKind::Error, e.to_string()).await,
        };

        let result = self
            .with_loading(self.client.auth().login(&request.identifier, &request.password))
            .await;
        match result {
            Ok(session) => {
                self.signed_in(session, Modal::Login, "Login successful!").await;
            }
            Err(e) => {
                let message = failure_message(
                    &e,
                    "Login failed. Please check your credentials.",
                    "Login failed. Please try again.",
                );
                self.notify(NotificationKind::Error, message).await;
            }
        }
    }

    pub async fn handle_register(&self, form: RegisterForm) {
        let request = match form.validate() {
            Ok(request) => request,
            Err(e) => return self.notify(NotificationKind::Error, e.to_string()).await,
        };

        let result = self
            .with_loading(self.client.auth().register(&request))
            .await;
        match result {
            Ok(session) => {
                self.signed_in(session, Modal::Register, "Registration successful!")
                    .await;
            }
            Err(e) => {
                let message = failure_message(
                    &e,
                    "Registration failed",
                    "Registration failed. Please try again.",
                );
                self.notify(NotificationKind::Error, message).await;
            }
        }
    }

    async fn signed_in(&self, session: SignedIn, modal: Modal, message: &str) {
        tracing::debug!(email = %session.user.email, "signed in");
        self.state.update(|s| s.sign_in(session)).await;
        self.sync_header().await;
        self.hide_modal(modal).await;
        self.notify(NotificationKind::Success, message).await;
    }

    /// End the session. The mirror is cleared only once the server
    /// acknowledges; an unacknowledged logout changes nothing.
    pub async fn logout_user(&self) {
        match self.client.auth().logout().await {
            Ok(()) => {
                self.state.update(SessionState::sign_out).await;
                self.sync_header().await;
                self.update_page(|p| {
                    p.hide_modal(Modal::Cart);
                    p.hide_modal(Modal::Wishlist);
                    p.buttons_mut().reset();
                    p.show_cart(&Cart::new());
                })
                .await;
                self.notify(NotificationKind::Success, "Logged out successfully")
                    .await;
            }
            Err(StoreError::Auth(e)) => {
                tracing::warn!(error = %e, "logout not acknowledged");
            }
            Err(e) => {
                tracing::debug!(error = %e, "logout request failed");
                self.notify(NotificationKind::Error, "Logout failed").await;
            }
        }
    }

    // ── Profile ──────────────────────────────────────────────────────────

    /// Pre-fill the profile form from the session user and open it.
    pub async fn load_profile(&self) {
        let Some(user) = self.state.user().await else {
            return;
        };
        self.update_page(|p| {
            p.set_profile_form(ProfileUpdate::from(&user));
            p.show_modal(Modal::Profile);
        })
        .await;
    }

    pub async fn update_profile(&self, form: ProfileUpdate) {
        if !self.state.is_signed_in().await {
            return;
        }

        let result = self
            .with_loading(self.client.auth().update_profile(&form))
            .await;
        match result {
            Ok(()) => {
                self.state.update(|s| s.merge_profile(&form)).await;
                self.sync_header().await;
                self.update_page(|p| {
                    p.set_profile_form(form);
                    p.hide_modal(Modal::Profile);
                })
                .await;
                self.notify(NotificationKind::Success, "Profile updated successfully!")
                    .await;
            }
            Err(e) => {
                let message = failure_message(&e, "Failed to update profile", "Failed to update profile");
                self.notify(NotificationKind::Error, message).await;
            }
        }
    }

    // ── Forgot password (simulated, no requests) ─────────────────────────

    pub async fn send_forgot_password_otp(&self, identifier: &str) {
        if identifier.is_empty() {
            let message = ValidationError::MissingIdentifier.to_string();
            return self.notify(NotificationKind::Error, message).await;
        }
        self.update_page(|p| p.set_forgot_step(ForgotStep::EnterOtp))
            .await;
        self.notify(NotificationKind::Info, "OTP sent to your email/phone (demo only)")
            .await;
    }

    pub async fn reset_password(&self, otp: &str, new_password: &str) {
        if otp.is_empty() || new_password.is_empty() {
            let message = ValidationError::MissingResetFields.to_string();
            return self.notify(NotificationKind::Error, message).await;
        }
        self.hide_modal(Modal::ForgotPassword).await;
        self.notify(
            NotificationKind::Success,
            "Password reset successful! You can now login with your new password.",
        )
        .await;
    }
}
