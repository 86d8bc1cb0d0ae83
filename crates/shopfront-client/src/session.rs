//! Session state shared across the client.
//!
//! The storefront keeps three pieces of process-wide state: the
//! authenticated user's token, the guest token issued for anonymous
//! carts, and the active locale. Rather than letting every call site
//! read and write a key-value store directly, all access goes through
//! one injected [`SessionStore`]; the domain crate never sees it.
//!
//! Semantics are read-on-demand, write-on-change: nothing is cached on
//! top of the store.

use crate::locale::Locale;
use std::collections::HashMap;
use std::sync::RwLock;

/// Storage key for the authenticated user's bearer token.
pub const AUTH_TOKEN_KEY: &str = "token";
/// Storage key for the anonymous guest token.
pub const GUEST_TOKEN_KEY: &str = "guest_token";
/// Storage key for the active locale.
pub const LOCALE_KEY: &str = "lang";

/// String key-value storage backing the session.
///
/// The in-memory [`MemorySession`] is the default; hosts with durable
/// storage (a browser's local storage, a config file) implement this
/// over it.
pub trait SessionStore: Send + Sync {
    /// Read a value.
    fn get(&self, key: &str) -> Option<String>;
    /// Write a value.
    fn set(&self, key: &str, value: &str);
    /// Remove a value.
    fn remove(&self, key: &str);

    /// The authenticated user's bearer token, if logged in.
    fn auth_token(&self) -> Option<String> {
        self.get(AUTH_TOKEN_KEY)
    }

    /// Store the bearer token after login.
    fn set_auth_token(&self, token: &str) {
        self.set(AUTH_TOKEN_KEY, token);
    }

    /// Drop the bearer token on logout.
    fn clear_auth_token(&self) {
        self.remove(AUTH_TOKEN_KEY);
    }

    /// The guest token, if one was issued.
    fn guest_token(&self) -> Option<String> {
        self.get(GUEST_TOKEN_KEY)
    }

    /// Store an issued guest token.
    fn set_guest_token(&self, token: &str) {
        self.set(GUEST_TOKEN_KEY, token);
    }

    /// Drop the guest token (e.g. after the backend rejected it).
    fn clear_guest_token(&self) {
        self.remove(GUEST_TOKEN_KEY);
    }

    /// The active locale, defaulting to English.
    fn locale(&self) -> Locale {
        self.get(LOCALE_KEY)
            .map(|raw| Locale::parse_or_default(&raw))
            .unwrap_or_default()
    }

    /// Change the active locale.
    fn set_locale(&self, locale: Locale) {
        self.set(LOCALE_KEY, locale.as_str());
    }
}

/// In-memory session store.
#[derive(Debug, Default)]
pub struct MemorySession {
    values: RwLock<HashMap<String, String>>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySession {
    fn get(&self, key: &str) -> Option<String> {
        self.values
            .read()
            .ok()
            .and_then(|values| values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.write() {
            values.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut values) = self.values.write() {
            values.remove(key);
        }
    }
}
