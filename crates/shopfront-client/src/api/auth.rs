//! Authentication operations.
//!
//! Login and registration hand back a bearer token that is written to
//! the session store; the guest token bootstraps anonymous carts before
//! any login happens.

use crate::api::MessageResponse;
use crate::{ApiClient, ApiError, Response};
use serde::{Deserialize, Serialize};
use shopfront_commerce::ids::UserId;

/// Login form payload.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Registration form payload.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Repeated password, validated server-side.
    pub password_confirmation: String,
}

/// Payload for completing a password reset.
///
/// `token` and `email` come from the reset link's query string; the new
/// password is confirmed server-side against its repetition.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ResetPasswordRequest {
    pub token: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

/// Response to login and registration.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    /// Bearer token; absent when e.g. email verification is pending.
    #[serde(default)]
    pub token: Option<String>,
    /// Human-readable outcome.
    #[serde(default)]
    pub message: Option<String>,
    /// Where to navigate next; the backend is inconsistent about the
    /// field name between the two endpoints.
    #[serde(default, alias = "returnUrl", alias = "redirectUrl")]
    pub return_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GuestTokenResponse {
    #[serde(default)]
    guest_token: Option<String>,
}

impl ApiClient {
    /// Log in and store the returned bearer token in the session.
    pub fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        let url = self.endpoints().login(self.locale());
        let response = self
            .send(self.post(url).json(credentials)?)?
            .error_for_status()?;
        let auth: AuthResponse = response.json()?;
        if let Some(ref token) = auth.token {
            self.session().set_auth_token(token);
        }
        Ok(auth)
    }

    /// Register a new account; a returned token logs the user straight in.
    pub fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        let url = self.endpoints().register(self.locale());
        let response = self
            .send(self.post(url).json(request)?)?
            .error_for_status()?;
        let auth: AuthResponse = response.json()?;
        if let Some(ref token) = auth.token {
            self.session().set_auth_token(token);
        }
        Ok(auth)
    }

    /// Log out.
    ///
    /// The local token is dropped whatever the backend says; a failed
    /// revocation must not leave the client half logged-in.
    pub fn logout(&self) -> Result<(), ApiError> {
        let url = self.endpoints().logout(self.locale());
        let result = self.send(self.post(url)).and_then(Response::error_for_status);
        self.session().clear_auth_token();
        result.map(|_| ())
    }

    /// Make sure a guest token exists, requesting one if needed.
    ///
    /// Anonymous cart operations require it; calling this when a token
    /// is already stored is a no-op.
    pub fn ensure_guest_token(&self) -> Result<(), ApiError> {
        if self.session().guest_token().is_some() {
            return Ok(());
        }
        let url = self.endpoints().guest_token(self.locale());
        let response = self.send(self.post(url))?.error_for_status()?;
        let body: GuestTokenResponse = response.json()?;
        match body.guest_token {
            Some(token) => {
                self.session().set_guest_token(&token);
                Ok(())
            }
            None => Err(ApiError::Parse(
                "guest token missing from response".to_string(),
            )),
        }
    }

    /// Request a password-reset email.
    pub fn forgot_password(&self, email: &str) -> Result<MessageResponse, ApiError> {
        let url = self.endpoints().forgot_password(self.locale());
        let response = self
            .send(self.post(url).json(&serde_json::json!({ "email": email }))?)?
            .error_for_status()?;
        response.json()
    }

    /// Complete a password reset started from the emailed link.
    pub fn reset_password(
        &self,
        request: &ResetPasswordRequest,
    ) -> Result<MessageResponse, ApiError> {
        let url = self.endpoints().reset_password(self.locale());
        let response = self
            .send(self.post(url).json(request)?)?
            .error_for_status()?;
        response.json()
    }

    /// Confirm an email address via the signed link from the
    /// verification mail.
    pub fn verify_email(&self, user: UserId, hash: &str) -> Result<MessageResponse, ApiError> {
        let url = self.endpoints().email_verify(self.locale(), user, hash);
        let response = self.send(self.get(url))?.error_for_status()?;
        response.json()
    }

    /// Ask the backend to send a fresh verification mail.
    pub fn resend_verification_email(&self) -> Result<MessageResponse, ApiError> {
        let url = self.endpoints().email_resend(self.locale());
        let response = self.send(self.post(url))?.error_for_status()?;
        response.json()
    }
}
