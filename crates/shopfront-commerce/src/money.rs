//! Money type for prices and price modifiers.
//!
//! Uses cents-based integer representation to avoid floating-point
//! precision issues. The commerce API is loose about numeric encoding:
//! the same field may arrive as a decimal string (`"82.00"`), a bare
//! number, or `null`. All of those deserialize into the same cents value;
//! anything unparseable coerces to zero, since a wrong price display is
//! preferable to a failed page.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// A monetary value, stored in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Zero cents.
    pub const ZERO: Money = Money(0);

    /// Create a Money value from cents.
    pub fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money value from a decimal amount of major units.
    ///
    /// ```
    /// use shopfront_commerce::money::Money;
    /// assert_eq!(Money::from_major(49.99).cents(), 4999);
    /// ```
    pub fn from_major(amount: f64) -> Self {
        Self((amount * 100.0).round() as i64)
    }

    /// Get the amount in cents.
    pub fn cents(&self) -> i64 {
        self.0
    }

    /// Convert to a decimal amount of major units.
    pub fn to_major(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Clamp negative amounts to zero.
    ///
    /// A displayed price is never negative, even if a product carries
    /// negative modifiers larger than its base price.
    pub fn clamp_non_negative(self) -> Self {
        if self.0 < 0 {
            Money::ZERO
        } else {
            self
        }
    }

    /// Checked addition.
    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Checked multiplication by a scalar quantity.
    pub fn checked_mul(self, factor: i64) -> Option<Money> {
        self.0.checked_mul(factor).map(Money)
    }

    /// Parse a decimal string such as `"82.00"` or `"-3.5"`.
    ///
    /// Returns `None` for anything that is not a finite number.
    pub fn parse(s: &str) -> Option<Money> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return None;
        }
        let amount: f64 = trimmed.parse().ok()?;
        if !amount.is_finite() {
            return None;
        }
        Some(Money::from_major(amount))
    }

    /// Parse a decimal string, coercing malformed input to zero.
    pub fn parse_or_zero(s: &str) -> Money {
        Money::parse(s).unwrap_or(Money::ZERO)
    }

    /// Format as a display string with currency symbol (e.g. `"$82.00"`).
    pub fn display(&self) -> String {
        if self.0 < 0 {
            format!("-${}", Money(-self.0).display_amount())
        } else {
            format!("${}", self.display_amount())
        }
    }

    /// Format as a plain 2-fraction-digit decimal string (e.g. `"82.00"`).
    ///
    /// This is the encoding the backend emits and accepts.
    pub fn display_amount(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        format!("{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl Add for Money {
    type Output = Money;

    // Saturating: price display must never panic.
    fn add(self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Money) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money(self.0.saturating_sub(other.0))
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        Money(self.0.saturating_mul(factor))
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        Money(self.0.saturating_neg())
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.display_amount())
    }
}

struct MoneyVisitor;

impl<'de> Visitor<'de> for MoneyVisitor {
    type Value = Money;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a number, a decimal string, or null")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Money, E> {
        Ok(Money::from_major(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Money, E> {
        Ok(Money::from_major(v as f64))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Money, E> {
        if v.is_finite() {
            Ok(Money::from_major(v))
        } else {
            Ok(Money::ZERO)
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Money, E> {
        Ok(Money::parse_or_zero(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Money, E> {
        Ok(Money::ZERO)
    }

    fn visit_none<E: de::Error>(self) -> Result<Money, E> {
        Ok(Money::ZERO)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Money, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_bool<E: de::Error>(self, _v: bool) -> Result<Money, E> {
        Ok(Money::ZERO)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
        deserializer.deserialize_any(MoneyVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_major_rounds_to_cents() {
        assert_eq!(Money::from_major(49.99).cents(), 4999);
        assert_eq!(Money::from_major(100.0).cents(), 10000);
        assert_eq!(Money::from_major(0.005).cents(), 1);
    }

    #[test]
    fn test_parse_decimal_string() {
        assert_eq!(Money::parse("82.00"), Some(Money::from_cents(8200)));
        assert_eq!(Money::parse(" 5 "), Some(Money::from_cents(500)));
        assert_eq!(Money::parse("-3.5"), Some(Money::from_cents(-350)));
        assert_eq!(Money::parse("abc"), None);
        assert_eq!(Money::parse(""), None);
    }

    #[test]
    fn test_parse_or_zero_coerces_garbage() {
        assert_eq!(Money::parse_or_zero("not a price"), Money::ZERO);
        assert_eq!(Money::parse_or_zero("NaN"), Money::ZERO);
        assert_eq!(Money::parse_or_zero("12.34"), Money::from_cents(1234));
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(8200).display(), "$82.00");
        assert_eq!(Money::from_cents(105).display(), "$1.05");
        assert_eq!(Money::from_cents(-250).display(), "-$2.50");
    }

    #[test]
    fn test_display_amount() {
        assert_eq!(Money::from_cents(8200).display_amount(), "82.00");
        assert_eq!(Money::from_cents(5).display_amount(), "0.05");
    }

    #[test]
    fn test_deserialize_number() {
        let m: Money = serde_json::from_str("100").unwrap();
        assert_eq!(m.cents(), 10000);

        let m: Money = serde_json::from_str("19.99").unwrap();
        assert_eq!(m.cents(), 1999);
    }

    #[test]
    fn test_deserialize_string() {
        let m: Money = serde_json::from_str(r#""82.00""#).unwrap();
        assert_eq!(m.cents(), 8200);
    }

    #[test]
    fn test_deserialize_null_and_garbage_are_zero() {
        let m: Money = serde_json::from_str("null").unwrap();
        assert_eq!(m, Money::ZERO);

        let m: Money = serde_json::from_str(r#""oops""#).unwrap();
        assert_eq!(m, Money::ZERO);
    }

    #[test]
    fn test_serialize_as_decimal_string() {
        let json = serde_json::to_string(&Money::from_cents(8200)).unwrap();
        assert_eq!(json, r#""82.00""#);
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);
        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((b * 3).cents(), 1500);
        assert_eq!((-b).cents(), -500);
    }

    #[test]
    fn test_sum() {
        let total: Money = [100, 200, 300]
            .iter()
            .map(|c| Money::from_cents(*c))
            .sum();
        assert_eq!(total.cents(), 600);
    }

    #[test]
    fn test_clamp_non_negative() {
        assert_eq!(Money::from_cents(-50).clamp_non_negative(), Money::ZERO);
        assert_eq!(
            Money::from_cents(50).clamp_non_negative(),
            Money::from_cents(50)
        );
    }
}
