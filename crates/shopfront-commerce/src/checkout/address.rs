//! Shipping details collected by the checkout form.

use crate::error::StorefrontError;
use serde::{Serialize, Serializer};
use std::fmt;

/// A phone number split the way the form collects it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber {
    /// Dialing prefix including the plus sign, e.g. "+36".
    pub country_code: String,
    /// National number without the prefix.
    pub number: String,
}

impl PhoneNumber {
    pub fn new(country_code: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            country_code: country_code.into(),
            number: number.into(),
        }
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.country_code, self.number)
    }
}

/// Shipping details posted when creating a checkout.
///
/// Serializes to the exact payload the checkout endpoint expects:
/// `phone` as a single concatenated string, `save_address` as 0/1.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ShippingDetails {
    /// Recipient full name.
    pub recipient_name: String,
    /// Contact phone number.
    #[serde(serialize_with = "phone_as_string")]
    pub phone: PhoneNumber,
    /// Street address.
    pub address_line: String,
    /// City.
    pub city: String,
    /// Postal code.
    pub postal_code: String,
    /// Country name.
    pub country: String,
    /// Whether the backend should remember this address.
    #[serde(serialize_with = "bool_as_int")]
    pub save_address: bool,
}

impl ShippingDetails {
    /// Check that every required field is filled in.
    pub fn is_complete(&self) -> bool {
        !self.recipient_name.trim().is_empty()
            && !self.phone.number.trim().is_empty()
            && !self.address_line.trim().is_empty()
            && !self.city.trim().is_empty()
            && !self.postal_code.trim().is_empty()
            && !self.country.trim().is_empty()
    }

    /// Validate the details, naming the first missing field.
    pub fn validate(&self) -> Result<(), StorefrontError> {
        let missing = [
            ("recipient_name", &self.recipient_name),
            ("phone", &self.phone.number),
            ("address_line", &self.address_line),
            ("city", &self.city),
            ("postal_code", &self.postal_code),
            ("country", &self.country),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty());

        match missing {
            Some((field, _)) => Err(StorefrontError::Validation(format!(
                "{} is required",
                field
            ))),
            None => Ok(()),
        }
    }
}

fn phone_as_string<S: Serializer>(phone: &PhoneNumber, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&phone.to_string())
}

fn bool_as_int<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u8(u8::from(*value))
}
