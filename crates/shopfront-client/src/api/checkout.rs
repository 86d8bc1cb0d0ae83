//! Checkout operations.
//!
//! Checkout creation validates shipping details locally, posts them, and
//! hands back the payment provider's client secret. Everything past that
//! handoff belongs to the payment provider, not this client.

use crate::{ApiClient, ApiError};
use serde::Deserialize;
use shopfront_commerce::checkout::ShippingDetails;

/// Response to checkout creation.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutResponse {
    /// Payment-intent client secret for the provider's payment form.
    #[serde(default)]
    pub client_secret: Option<String>,
    /// Human-readable outcome.
    #[serde(default)]
    pub message: Option<String>,
}

impl CheckoutResponse {
    /// The client secret, or an error when the backend omitted it;
    /// a checkout without one cannot proceed to payment.
    pub fn into_client_secret(self) -> Result<String, ApiError> {
        self.client_secret
            .ok_or_else(|| ApiError::Parse("client_secret missing from response".to_string()))
    }
}

impl ApiClient {
    /// Create a checkout for the current cart.
    pub fn create_checkout(&self, details: &ShippingDetails) -> Result<CheckoutResponse, ApiError> {
        details.validate()?;
        let url = self.endpoints().checkout(self.locale());
        let response = self
            .send(self.post(url).json(details)?)?
            .error_for_status()?;
        response.json()
    }
}
