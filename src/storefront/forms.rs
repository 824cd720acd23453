//! Form input as typed by the shopper, validated before any request.

use std::fmt;

use crate::auth::{LoginRequest, RegisterRequest};
use crate::error::ValidationError;
use crate::shared::field_label;

#[derive(Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub identifier: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(identifier: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            password: password.into(),
        }
    }

    /// Both fields must be non-empty. Values are sent as typed.
    pub fn validate(&self) -> Result<LoginRequest, ValidationError> {
        if self.identifier.is_empty() || self.password.is_empty() {
            return Err(ValidationError::MissingCredentials);
        }
        Ok(LoginRequest {
            identifier: self.identifier.clone(),
            password: self.password.clone(),
        })
    }
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("identifier", &self.identifier)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[derive(Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub pincode: String,
    pub password: String,
    pub terms_accepted: bool,
}

impl fmt::Debug for RegisterForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterForm")
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("address", &self.address)
            .field("pincode", &self.pincode)
            .field("password", &"[REDACTED]")
            .field("terms_accepted", &self.terms_accepted)
            .finish()
    }
}

impl RegisterForm {
    /// Every field must be non-blank after trimming, checked in form order;
    /// then the terms box must be ticked.
    pub fn validate(&self) -> Result<RegisterRequest, ValidationError> {
        let request = RegisterRequest {
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
            pincode: self.pincode.clone(),
            password: self.password.clone(),
        };
        if let Some((key, _)) = request
            .fields()
            .into_iter()
            .find(|(_, value)| value.trim().is_empty())
        {
            return Err(ValidationError::MissingField(field_label(key)));
        }
        if !self.terms_accepted {
            return Err(ValidationError::TermsNotAccepted);
        }
        Ok(request)
    }
}
