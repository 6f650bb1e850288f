//! # Price Module
//!
//! Provides the `Price` type for handling product prices safely.
//!
//! ## Why Integer Cents?
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                  │
//! │                                                              │
//! │  In floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004                           │
//! │                                                              │
//! │  OUR SOLUTION: Integer Cents                                 │
//! │    "12.50" is stored as 1250, compared as 1250,              │
//! │    and rendered back as exactly "12.50"                      │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Two prices are equal exactly when their cent counts are equal, which is
//! what the storage layer's equality finder relies on.
//!
//! ## Usage
//! ```rust
//! use shelf_core::price::Price;
//!
//! // Create from cents (preferred)
//! let price = Price::from_cents(1250); // 12.50
//!
//! // Parse from request input, tolerating quoting and padding
//! let same = Price::parse(" \"12.50\" ").unwrap();
//! assert_eq!(price, same);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DataValidationError;

// =============================================================================
// Price Type
// =============================================================================

/// A product price in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: matches the storage column type; negative values are
///   representable but never produced by the catalog
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Manual serde**: serializes as the exact decimal string (`"12.50"`),
///   never as a float
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(transparent))]
pub struct Price(i64);

impl Price {
    /// Creates a Price from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use shelf_core::price::Price;
    ///
    /// let price = Price::from_cents(1250); // Represents 12.50
    /// assert_eq!(price.cents(), 1250);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Price(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Parses a decimal string into a Price, normalizing request-style
    /// padding first.
    ///
    /// Accepted input is a plain decimal with at most two fractional digits,
    /// optionally wrapped in whitespace and/or surrounding single or double
    /// quotes: `12.22`, `"12.22"`, `' 12.22 '`. Anything else is a
    /// data-validation error.
    ///
    /// ## Example
    /// ```rust
    /// use shelf_core::price::Price;
    ///
    /// assert_eq!(Price::parse("12.22").unwrap().cents(), 1222);
    /// assert_eq!(Price::parse(" \"12.22\" ").unwrap().cents(), 1222);
    /// assert_eq!(Price::parse("5").unwrap().cents(), 500);
    /// assert!(Price::parse("twelve").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, DataValidationError> {
        let invalid = || DataValidationError::InvalidPrice(raw.to_string());

        // Strip whitespace padding and surrounding quoting, in either order.
        let cleaned = raw
            .trim()
            .trim_matches(|c| c == '"' || c == '\'')
            .trim();

        if cleaned.is_empty() {
            return Err(invalid());
        }

        let (sign, digits) = match cleaned.strip_prefix('-') {
            Some(rest) => (-1i64, rest),
            None => (1i64, cleaned),
        };

        let (major_part, minor_part) = match digits.split_once('.') {
            Some((major, minor)) => (major, Some(minor)),
            None => (digits, None),
        };

        if major_part.is_empty() || !major_part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let major: i64 = major_part.parse().map_err(|_| invalid())?;

        // At most two fractional digits; "12.5" means 12.50.
        let minor: i64 = match minor_part {
            None => 0,
            Some(m) if m.len() == 1 && m.bytes().all(|b| b.is_ascii_digit()) => {
                m.parse::<i64>().map_err(|_| invalid())? * 10
            }
            Some(m) if m.len() == 2 && m.bytes().all(|b| b.is_ascii_digit()) => {
                m.parse().map_err(|_| invalid())?
            }
            Some(_) => return Err(invalid()),
        };

        let cents = major
            .checked_mul(100)
            .and_then(|c| c.checked_add(minor))
            .and_then(|c| c.checked_mul(sign))
            .ok_or_else(invalid)?;

        Ok(Price(cents))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display renders the exact decimal value with two fractional digits.
///
/// This is also the wire representation used by `Product::serialize`.
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.minor())
    }
}

impl FromStr for Price {
    type Err = DataValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Price::parse(s)
    }
}

impl TryFrom<&str> for Price {
    type Error = DataValidationError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Price::parse(s)
    }
}

/// Serializes as the exact decimal string, e.g. `"12.50"`.
impl Serialize for Price {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Deserializes from a decimal string or a bare JSON number.
impl<'de> Deserialize<'de> for Price {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PriceVisitor;

        impl Visitor<'_> for PriceVisitor {
            type Value = Price;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a decimal string or number")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Price, E> {
                Price::parse(v).map_err(E::custom)
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Price, E> {
                Price::parse(&v.to_string()).map_err(E::custom)
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Price, E> {
                v.checked_mul(100)
                    .map(Price::from_cents)
                    .ok_or_else(|| E::custom("price out of range"))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Price, E> {
                i64::try_from(v)
                    .ok()
                    .and_then(|v| v.checked_mul(100))
                    .map(Price::from_cents)
                    .ok_or_else(|| E::custom("price out of range"))
            }
        }

        deserializer.deserialize_any(PriceVisitor)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let price = Price::from_cents(1250);
        assert_eq!(price.cents(), 1250);
        assert_eq!(price.major(), 12);
        assert_eq!(price.minor(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(Price::from_cents(1250).to_string(), "12.50");
        assert_eq!(Price::from_cents(500).to_string(), "5.00");
        assert_eq!(Price::from_cents(5).to_string(), "0.05");
        assert_eq!(Price::from_cents(-550).to_string(), "-5.50");
        assert_eq!(Price::from_cents(0).to_string(), "0.00");
    }

    #[test]
    fn test_parse_plain() {
        assert_eq!(Price::parse("12.22").unwrap().cents(), 1222);
        assert_eq!(Price::parse("12.5").unwrap().cents(), 1250);
        assert_eq!(Price::parse("12").unwrap().cents(), 1200);
        assert_eq!(Price::parse("0.99").unwrap().cents(), 99);
        assert_eq!(Price::parse("-3.10").unwrap().cents(), -310);
    }

    #[test]
    fn test_parse_normalizes_quoting_and_padding() {
        assert_eq!(Price::parse("\"12.22\"").unwrap().cents(), 1222);
        assert_eq!(Price::parse(" \"12.22\" ").unwrap().cents(), 1222);
        assert_eq!(Price::parse("'12.22'").unwrap().cents(), 1222);
        assert_eq!(Price::parse("  12.22  ").unwrap().cents(), 1222);
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        for bad in ["", "   ", "\"\"", "abc", "12.345", "12.", "1.2.3", "12,50", "--5"] {
            let err = Price::parse(bad).unwrap_err();
            assert!(
                matches!(err, DataValidationError::InvalidPrice(_)),
                "expected InvalidPrice for {bad:?}"
            );
        }
    }

    #[test]
    fn test_parse_round_trips_display() {
        for cents in [0, 5, 99, 100, 1222, 123_456] {
            let price = Price::from_cents(cents);
            assert_eq!(Price::parse(&price.to_string()).unwrap(), price);
        }
    }

    #[test]
    fn test_serde_as_decimal_string() {
        let price = Price::from_cents(1999);
        assert_eq!(serde_json::to_value(price).unwrap(), serde_json::json!("19.99"));

        let back: Price = serde_json::from_value(serde_json::json!("19.99")).unwrap();
        assert_eq!(back, price);

        // Bare numbers are accepted on input.
        let from_float: Price = serde_json::from_value(serde_json::json!(19.99)).unwrap();
        assert_eq!(from_float, price);
        let from_int: Price = serde_json::from_value(serde_json::json!(19)).unwrap();
        assert_eq!(from_int.cents(), 1900);
    }
}
