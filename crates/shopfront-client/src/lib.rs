//! Typed commerce API client for the Shopfront storefront.
//!
//! Wraps every backend route in a typed operation: catalog browsing,
//! cart management, checkout, order history, authentication, and review
//! submission. The client owns request construction (locale-prefixed
//! URLs, bearer and guest-token headers from the injected session,
//! envelope-tolerant response decoding) while the actual I/O happens
//! behind the [`Transport`] trait supplied by the host.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use shopfront_client::{ApiClient, ClientConfig, MemorySession};
//!
//! let session = Arc::new(MemorySession::new());
//! let client = ApiClient::new(
//!     ClientConfig::from_env(),
//!     session.clone(),
//!     Arc::new(MyHttpTransport::new()),
//! );
//!
//! client.ensure_guest_token()?;
//! let product = client.product("linen-shirt")?;
//! let cart = client.cart()?;
//! ```

mod api;
mod config;
mod endpoints;
mod error;
mod locale;
mod request;
mod response;
mod session;

pub use api::{
    AddToCartRequest, AuthResponse, CheckoutResponse, Credentials, MessageResponse, ProductPage,
    RegisterRequest, ResetPasswordRequest,
};
pub use config::{ClientConfig, API_BASE_ENV, STORAGE_BASE_ENV};
pub use endpoints::Endpoints;
pub use error::ApiError;
pub use locale::Locale;
pub use request::{Method, Request, RequestBuilder};
pub use response::Response;
pub use session::{MemorySession, SessionStore};

use std::sync::Arc;

/// Executes built requests. The one seam between the client and real
/// I/O; hosts plug in their HTTP stack, tests plug in a stub.
pub trait Transport: Send + Sync {
    /// Execute a request and return the raw response.
    fn execute(&self, request: &Request) -> Result<Response, ApiError>;
}

/// The commerce API client.
///
/// Cheap to clone; all state lives behind `Arc`s.
#[derive(Clone)]
pub struct ApiClient {
    config: ClientConfig,
    endpoints: Endpoints,
    session: Arc<dyn SessionStore>,
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    /// Create a client from config, session store, and transport.
    pub fn new(
        config: ClientConfig,
        session: Arc<dyn SessionStore>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        let endpoints = Endpoints::new(config.api_base.clone());
        Self {
            config,
            endpoints,
            session,
            transport,
        }
    }

    /// The client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The route catalog.
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// The injected session store.
    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    /// The locale requests are made in.
    pub fn locale(&self) -> Locale {
        self.session.locale()
    }

    /// Absolute URL for a storage-relative media path.
    pub fn storage_url(&self, path: &str) -> String {
        self.config.storage_url(path)
    }

    pub(crate) fn get(&self, url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(Method::Get, url)
    }

    pub(crate) fn post(&self, url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(Method::Post, url)
    }

    pub(crate) fn put(&self, url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(Method::Put, url)
    }

    pub(crate) fn delete(&self, url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(Method::Delete, url)
    }

    /// Attach session credentials and execute.
    ///
    /// Both tokens ride along when present: the guest token identifies
    /// the anonymous cart, the bearer token the logged-in user. A 401
    /// with a guest token stored means the backend no longer honors it,
    /// so it is dropped before the response is handed back.
    pub(crate) fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let mut builder = builder
            .header_if_absent("Content-Type", "application/json")
            .header_if_absent("Accept", "application/json");
        if let Some(guest) = self.session.guest_token() {
            builder = builder.guest_token(guest);
        }
        if let Some(token) = self.session.auth_token() {
            builder = builder.bearer_auth(token);
        }

        let request = builder.build();
        let response = self.transport.execute(&request)?;

        if response.status == 401 && self.session.guest_token().is_some() {
            tracing::warn!(url = %request.url, "guest token rejected, removing it");
            self.session.clear_guest_token();
        }

        Ok(response)
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{stub_client, StubTransport};
    use super::*;

    #[test]
    fn test_send_attaches_default_headers() {
        let (client, transport, _session) = stub_client(StubTransport::new());
        client
            .send(client.get("https://shop.example.com/api/en/v1/cart"))
            .unwrap();

        let request = transport.request(0);
        assert_eq!(request.header("Content-Type"), Some("application/json"));
        assert_eq!(request.header("Accept"), Some("application/json"));
        assert_eq!(request.header("Authorization"), None);
        assert_eq!(request.header("X-Guest-Token"), None);
    }

    #[test]
    fn test_send_attaches_session_tokens() {
        let (client, transport, session) = stub_client(StubTransport::new());
        session.set_auth_token("user-token");
        session.set_guest_token("guest-token");

        client
            .send(client.get("https://shop.example.com/api/en/v1/orders"))
            .unwrap();

        let request = transport.request(0);
        assert_eq!(request.header("Authorization"), Some("Bearer user-token"));
        assert_eq!(request.header("X-Guest-Token"), Some("guest-token"));
    }

    #[test]
    fn test_unauthorized_drops_guest_token() {
        let (client, _transport, session) =
            stub_client(StubTransport::reply(401, r#"{"message": "Unauthenticated."}"#));
        session.set_guest_token("stale-guest");

        let response = client
            .send(client.get("https://shop.example.com/api/en/v1/cart"))
            .unwrap();

        assert_eq!(response.status, 401);
        assert!(session.guest_token().is_none());
    }

    #[test]
    fn test_unauthorized_keeps_auth_token() {
        // Only the guest token is dropped on 401; logout is explicit.
        let (client, _transport, session) = stub_client(StubTransport::reply(401, "{}"));
        session.set_auth_token("user-token");

        client
            .send(client.get("https://shop.example.com/api/en/v1/orders"))
            .unwrap();

        assert_eq!(session.auth_token().as_deref(), Some("user-token"));
    }

    #[test]
    fn test_locale_follows_session() {
        let (client, _transport, session) = stub_client(StubTransport::new());
        assert_eq!(client.locale(), Locale::En);
        session.set_locale(Locale::Uz);
        assert_eq!(client.locale(), Locale::Uz);
    }
}
