//! The backend's route catalog.
//!
//! Every route is locale-prefixed and versioned:
//! `{base}/{locale}/v1/...`. Keeping the URL builders in one place means
//! no call site ever concatenates paths by hand.

use crate::locale::Locale;
use shopfront_commerce::ids::UserId;

/// Locale-aware URL builders for the commerce API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    api_base: String,
}

impl Endpoints {
    /// Create the catalog for an API base URL.
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into().trim_end_matches('/').to_string(),
        }
    }

    fn v1(&self, locale: Locale, path: &str) -> String {
        format!("{}/{}/v1/{}", self.api_base, locale, path)
    }

    // ---------- Auth ----------

    pub fn register(&self, locale: Locale) -> String {
        self.v1(locale, "auth/register")
    }

    pub fn login(&self, locale: Locale) -> String {
        self.v1(locale, "auth/login")
    }

    pub fn logout(&self, locale: Locale) -> String {
        self.v1(locale, "auth/logout")
    }

    pub fn forgot_password(&self, locale: Locale) -> String {
        self.v1(locale, "auth/forgot-password")
    }

    pub fn reset_password(&self, locale: Locale) -> String {
        self.v1(locale, "auth/reset-password")
    }

    pub fn email_resend(&self, locale: Locale) -> String {
        self.v1(locale, "email/resend")
    }

    pub fn email_verify(&self, locale: Locale, user: UserId, hash: &str) -> String {
        self.v1(locale, &format!("email/verify/{}/{}", user, hash))
    }

    pub fn guest_token(&self, locale: Locale) -> String {
        self.v1(locale, "guest-token")
    }

    // ---------- Catalog ----------

    pub fn catalogs(&self, locale: Locale) -> String {
        self.v1(locale, "catalogs")
    }

    pub fn catalog(&self, locale: Locale, id: i64) -> String {
        self.v1(locale, &format!("catalogs/{}", id))
    }

    // ---------- Products ----------

    pub fn products(&self, locale: Locale) -> String {
        self.v1(locale, "products")
    }

    pub fn product(&self, locale: Locale, slug: &str) -> String {
        self.v1(locale, &format!("products/{}", slug))
    }

    pub fn recommendations(&self, locale: Locale) -> String {
        self.v1(locale, "recommendations")
    }

    // ---------- Cart / checkout / orders ----------

    pub fn cart(&self, locale: Locale) -> String {
        self.v1(locale, "cart")
    }

    pub fn checkout(&self, locale: Locale) -> String {
        self.v1(locale, "checkout")
    }

    pub fn orders(&self, locale: Locale) -> String {
        self.v1(locale, "orders")
    }

    // ---------- Reviews ----------

    pub fn reviews(&self, locale: Locale) -> String {
        self.v1(locale, "reviews")
    }
}
