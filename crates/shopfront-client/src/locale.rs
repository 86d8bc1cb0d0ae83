//! Supported locales.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The locales the backend serves, as URL path segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
    Uz,
    Hu,
}

impl Locale {
    /// The path segment for this locale.
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ru => "ru",
            Locale::Uz => "uz",
            Locale::Hu => "hu",
        }
    }

    /// Parse a stored locale string; unknown values fall back to English.
    pub fn parse_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "en" => Locale::En,
            "ru" => Locale::Ru,
            "uz" => Locale::Uz,
            "hu" => Locale::Hu,
            _ => Locale::En,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_locales() {
        assert_eq!(Locale::parse_or_default("hu"), Locale::Hu);
        assert_eq!(Locale::parse_or_default("RU"), Locale::Ru);
    }

    #[test]
    fn test_unknown_locale_falls_back_to_english() {
        assert_eq!(Locale::parse_or_default("fr"), Locale::En);
        assert_eq!(Locale::parse_or_default(""), Locale::En);
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Locale::Uz).unwrap(), r#""uz""#);
        let locale: Locale = serde_json::from_str(r#""hu""#).unwrap();
        assert_eq!(locale, Locale::Hu);
    }
}
