//! Typed API operations, grouped by route family.
//!
//! Each submodule extends [`ApiClient`](crate::ApiClient) with the
//! operations of one route family and defines the request/response
//! shapes that family uses. Envelope variation ("`products` or `data`",
//! wrapped or bare objects) is absorbed here so callers only ever see
//! domain types.

mod auth;
mod cart;
mod checkout;
mod orders;
mod products;
mod reviews;

pub use auth::{AuthResponse, Credentials, RegisterRequest, ResetPasswordRequest};
pub use cart::AddToCartRequest;
pub use checkout::CheckoutResponse;
pub use products::ProductPage;

use serde::Deserialize;

/// The minimal acknowledgment body most mutating endpoints return.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    /// Human-readable confirmation, absent for bare 200s.
    #[serde(default)]
    pub message: Option<String>,
}
