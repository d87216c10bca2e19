//! The share (point) type and its wire encoding.
//!
//! On the wire a share is `{"x": 3, "y": "1732"}`: the x-coordinate is a
//! plain integer, the y-coordinate a decimal string so that formats with
//! fixed-width numbers (JSON in JavaScript, for one) never round it.

use std::fmt;

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::error::SharingError;

/// A single point `(x, y)` on the secret polynomial.
///
/// `x` is the participant identifier (1-based, never 0). `y` is the
/// polynomial evaluated at `x`, a field element in `[0, p)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Share {
    /// Evaluation point.
    pub x: u64,
    /// Polynomial value at `x`.
    #[serde(with = "decimal")]
    pub y: BigUint,
}

impl Share {
    /// Builds a share from an x-coordinate and its polynomial value.
    pub fn new(x: u64, y: BigUint) -> Self {
        Self { x, y }
    }

    /// Builds a share from a decimal-encoded y value.
    pub fn from_decimal(x: u64, y: &str) -> Result<Self, SharingError> {
        Ok(Self {
            x,
            y: parse_decimal(y)?,
        })
    }
}

impl fmt::Display for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Parses a non-negative decimal integer. Leading `+`, signs, whitespace
/// inside the number and empty strings are rejected.
pub fn parse_decimal(s: &str) -> Result<BigUint, SharingError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SharingError::MalformedFieldElement(s.to_string()));
    }
    BigUint::parse_bytes(s.as_bytes(), 10)
        .ok_or_else(|| SharingError::MalformedFieldElement(s.to_string()))
}

/// Serde adapter encoding a `BigUint` as a base-10 string.
pub mod decimal {
    use num_bigint::BigUint;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_str_radix(10))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigUint, D::Error> {
        let s = String::deserialize(deserializer)?;
        super::parse_decimal(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_y_as_decimal_string() {
        let share = Share::new(3, BigUint::from(1732u32));
        let json = serde_json::to_string(&share).unwrap();
        assert_eq!(json, r#"{"x":3,"y":"1732"}"#);
    }

    #[test]
    fn large_y_survives_json() {
        let y = BigUint::parse_bytes(
            b"115792089237316195423570985008687907853269984665640564039457584007913129639747",
            10,
        )
        .unwrap();
        let share = Share::new(1, y);
        let json = serde_json::to_string(&share).unwrap();
        let back: Share = serde_json::from_str(&json).unwrap();
        assert_eq!(back, share);
    }

    #[test]
    fn rejects_malformed_y() {
        assert!(serde_json::from_str::<Share>(r#"{"x":1,"y":"-5"}"#).is_err());
        assert!(serde_json::from_str::<Share>(r#"{"x":1,"y":"0x10"}"#).is_err());
        assert!(serde_json::from_str::<Share>(r#"{"x":1,"y":""}"#).is_err());
        assert!(serde_json::from_str::<Share>(r#"{"x":1,"y":1400}"#).is_err());
    }

    #[test]
    fn from_decimal() {
        assert_eq!(
            Share::from_decimal(2, "1566").unwrap(),
            Share::new(2, BigUint::from(1566u32))
        );
        assert!(matches!(
            Share::from_decimal(2, "15 66"),
            Err(SharingError::MalformedFieldElement(_))
        ));
    }

    #[test]
    fn display() {
        assert_eq!(Share::new(1, BigUint::from(1400u32)).to_string(), "(1, 1400)");
    }
}
