//! Client configuration.

/// Environment variable for the API base URL.
pub const API_BASE_ENV: &str = "SHOPFRONT_API_BASE_URL";
/// Environment variable for the storage base URL.
pub const STORAGE_BASE_ENV: &str = "SHOPFRONT_STORAGE_BASE_URL";

const DEFAULT_API_BASE: &str = "http://localhost:8000/api";

/// Base URLs the client talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API base, e.g. `https://shop.example.com/api`.
    pub api_base: String,
    /// Storage base for media, e.g. `https://shop.example.com/storage`.
    pub storage_base: String,
}

impl ClientConfig {
    /// Build a config from an API base, deriving the storage base.
    ///
    /// The storage host is the API host with `/api` swapped for
    /// `/storage`, which is how the backend serves uploaded media.
    pub fn new(api_base: impl Into<String>) -> Self {
        let api_base = normalize(api_base.into());
        let storage_base = derive_storage_base(&api_base);
        Self {
            api_base,
            storage_base,
        }
    }

    /// Override the derived storage base.
    pub fn with_storage_base(mut self, storage_base: impl Into<String>) -> Self {
        self.storage_base = normalize(storage_base.into());
        self
    }

    /// Read configuration from the environment, with compiled defaults.
    pub fn from_env() -> Self {
        let api_base = std::env::var(API_BASE_ENV).unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        let config = Self::new(api_base);
        match std::env::var(STORAGE_BASE_ENV) {
            Ok(storage) => config.with_storage_base(storage),
            Err(_) => config,
        }
    }

    /// Absolute URL for a storage-relative media path.
    pub fn storage_url(&self, path: &str) -> String {
        format!("{}/{}", self.storage_base, path.trim_start_matches('/'))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

fn normalize(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

fn derive_storage_base(api_base: &str) -> String {
    match api_base.strip_suffix("/api") {
        Some(host) => format!("{}/storage", host),
        None => format!("{}/storage", api_base),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_base_derived_from_api_base() {
        let config = ClientConfig::new("https://shop.example.com/api");
        assert_eq!(config.storage_base, "https://shop.example.com/storage");
    }

    #[test]
    fn test_storage_url_joins_relative_paths() {
        let config = ClientConfig::new("https://shop.example.com/api/");
        assert_eq!(
            config.storage_url("products/shirt.jpg"),
            "https://shop.example.com/storage/products/shirt.jpg"
        );
        assert_eq!(
            config.storage_url("/products/shirt.jpg"),
            "https://shop.example.com/storage/products/shirt.jpg"
        );
    }

    #[test]
    fn test_explicit_storage_base() {
        let config = ClientConfig::new("https://shop.example.com/api")
            .with_storage_base("https://cdn.example.com/");
        assert_eq!(
            config.storage_url("a.jpg"),
            "https://cdn.example.com/a.jpg"
        );
    }
}
