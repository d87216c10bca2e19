//! Error types for field setup, share generation, and reconstruction.
//!
//! Every fallible operation in the crate returns a [`SharingError`]. The
//! variants fall into three groups: request validation (bad `t`/`n`),
//! arithmetic failures (inverting zero), and reconstruction input problems
//! (empty, zero or repeated x-coordinates, too few shares).

use thiserror::Error;

/// Errors that can occur while setting up the field or sharing a secret.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SharingError {
    /// The threshold is zero or exceeds the number of shares.
    #[error("t must be between 1 and n (got t={threshold}, n={total})")]
    InvalidThreshold {
        /// Requested threshold.
        threshold: usize,
        /// Requested share count.
        total: usize,
    },

    /// The share count is zero.
    #[error("share count must be at least 1, got {0}")]
    InvalidShareCount(usize),

    /// The share count exceeds the configured ceiling.
    #[error("cannot issue more than {max} shares, got {requested}")]
    TooManyShares {
        /// Requested share count.
        requested: usize,
        /// Configured maximum.
        max: usize,
    },

    /// A field element could not be parsed as a decimal integer.
    #[error("malformed field element: {0:?}")]
    MalformedFieldElement(String),

    /// Attempted to invert a value congruent to zero.
    #[error("division by zero: value has no inverse modulo p")]
    DivisionByZero,

    /// Reconstruction was invoked with an empty share set.
    #[error("points must be at least 1")]
    NoShares,

    /// A share used x = 0, which would be the secret itself.
    #[error("share x-coordinate must be positive")]
    ZeroCoordinate,

    /// Two shares carry the same x-coordinate.
    #[error("duplicate share x-coordinate: {x}")]
    DuplicateShare {
        /// The repeated coordinate.
        x: u64,
    },

    /// Fewer shares than the caller-declared threshold were supplied.
    #[error("need at least {required} shares for reconstruction, got {provided}")]
    InsufficientShares {
        /// Declared threshold.
        required: usize,
        /// Shares actually supplied.
        provided: usize,
    },

    /// The modulus is not usable as a field prime.
    #[error("invalid field prime: {0}")]
    InvalidPrime(String),
}

impl SharingError {
    /// Returns `true` for errors caused by well-formed but unacceptable
    /// request parameters, as opposed to unparseable input.
    pub fn is_validation(&self) -> bool {
        !matches!(
            self,
            SharingError::MalformedFieldElement(_) | SharingError::InvalidPrime(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_message_matches_wire_text() {
        let err = SharingError::InvalidThreshold {
            threshold: 4,
            total: 3,
        };
        assert!(err.to_string().starts_with("t must be between 1 and n"));
    }

    #[test]
    fn classification() {
        assert!(SharingError::DivisionByZero.is_validation());
        assert!(SharingError::DuplicateShare { x: 2 }.is_validation());
        assert!(!SharingError::MalformedFieldElement("abc".into()).is_validation());
        assert!(!SharingError::InvalidPrime("even".into()).is_validation());
    }
}
