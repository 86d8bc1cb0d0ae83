//! HTTP response handling.

use crate::ApiError;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashMap;

/// An HTTP response from the commerce API.
#[derive(Debug, Clone)]
pub struct Response {
    /// The HTTP status code.
    pub status: u16,
    /// The response headers.
    pub headers: HashMap<String, String>,
    /// The response body.
    pub body: Vec<u8>,
}

/// The error body shape the backend emits: a `message`, and for
/// validation failures an `errors` map of field name to messages.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    errors: Option<HashMap<String, Vec<String>>>,
}

impl Response {
    /// Create a new response.
    pub fn new(status: u16, headers: HashMap<String, String>, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Check if the response was successful (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Get the response body as text.
    pub fn text(&self) -> Result<String, ApiError> {
        String::from_utf8(self.body.clone())
            .map_err(|e| ApiError::Parse(format!("Invalid UTF-8: {}", e)))
    }

    /// Parse the response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_slice(&self.body).map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Get a header value.
    pub fn header(&self, key: &str) -> Option<&str> {
        // Case-insensitive header lookup
        let key_lower = key.to_lowercase();
        self.headers
            .iter()
            .find(|(k, _)| k.to_lowercase() == key_lower)
            .map(|(_, v)| v.as_str())
    }

    /// The human-readable error message in this response, if any.
    ///
    /// Prefers the backend's `message`; for validation failures without
    /// one, flattens the per-field `errors` map into newline-joined
    /// lines, the way the forms display them.
    pub fn api_message(&self) -> Option<String> {
        let parsed: ErrorBody = serde_json::from_slice(&self.body).ok()?;
        if let Some(message) = parsed.message {
            if !message.is_empty() {
                return Some(message);
            }
        }
        let errors = parsed.errors?;
        let mut fields: Vec<&String> = errors.keys().collect();
        fields.sort();
        let lines: Vec<String> = fields
            .into_iter()
            .flat_map(|field| errors[field].iter().cloned())
            .collect();
        if lines.is_empty() {
            None
        } else {
            Some(lines.join("\n"))
        }
    }

    /// Convert to a Result, turning non-2xx statuses into [`ApiError::Http`]
    /// carrying the backend's message when it sent one.
    pub fn error_for_status(self) -> Result<Self, ApiError> {
        if self.is_success() {
            return Ok(self);
        }
        let message = self
            .api_message()
            .or_else(|| self.text().ok().filter(|t| !t.is_empty()))
            .unwrap_or_else(|| "Unknown error".to_string());
        Err(ApiError::Http {
            status: self.status,
            message,
        })
    }
}
