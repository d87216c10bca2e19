//! Secret reconstruction by Lagrange interpolation at `x = 0`.
//!
//! For shares `(x_i, y_i)`:
//!
//! ```text
//! secret = Σ_i y_i · Π_{j≠i} (−x_j) · (Π_{j≠i} (x_i − x_j))^-1   (mod p)
//! ```
//!
//! The share set carries no record of the original threshold. Passing fewer
//! than `t` shares interpolates a lower-degree polynomial and returns a
//! wrong value without error, unless the caller states `t` through
//! [`reconstruct_with_threshold`].

use std::collections::HashSet;

use num_bigint::BigUint;
use num_traits::{One, Zero};

use super::share::Share;
use crate::error::SharingError;
use crate::field::{addmod, inverse, mulmod, negmod, submod, FieldPrime};

/// Recovers the secret from `shares`.
///
/// Rejects empty input, `x = 0`, and repeated x-coordinates before doing
/// any arithmetic.
pub fn reconstruct(shares: &[Share], field: &FieldPrime) -> Result<BigUint, SharingError> {
    validate_shares(shares)?;
    let secret = interpolate_at_zero(shares, field.modulus())?;
    tracing::debug!(shares = shares.len(), "secret reconstructed");
    Ok(secret)
}

/// Like [`reconstruct`], but also refuses fewer than `threshold` shares.
pub fn reconstruct_with_threshold(
    shares: &[Share],
    threshold: usize,
    field: &FieldPrime,
) -> Result<BigUint, SharingError> {
    if shares.len() < threshold {
        return Err(SharingError::InsufficientShares {
            required: threshold,
            provided: shares.len(),
        });
    }
    reconstruct(shares, field)
}

fn validate_shares(shares: &[Share]) -> Result<(), SharingError> {
    if shares.is_empty() {
        return Err(SharingError::NoShares);
    }

    let mut seen = HashSet::with_capacity(shares.len());
    for share in shares {
        if share.x == 0 {
            return Err(SharingError::ZeroCoordinate);
        }
        if !seen.insert(share.x) {
            return Err(SharingError::DuplicateShare { x: share.x });
        }
    }
    Ok(())
}

/// The raw interpolation step. Performs no share-set validation; a repeated
/// x (or two x values congruent mod p) surfaces as
/// [`SharingError::DivisionByZero`] from the inversion.
pub fn interpolate_at_zero(shares: &[Share], p: &BigUint) -> Result<BigUint, SharingError> {
    let mut secret = BigUint::zero();

    for (i, share_i) in shares.iter().enumerate() {
        let xi = BigUint::from(share_i.x);
        let mut numerator = BigUint::one();
        let mut denominator = BigUint::one();

        for (j, share_j) in shares.iter().enumerate() {
            if i == j {
                continue;
            }
            let xj = BigUint::from(share_j.x);
            numerator = mulmod(&numerator, &negmod(&xj, p), p);
            denominator = mulmod(&denominator, &submod(&xi, &xj, p), p);
        }

        let basis = mulmod(&numerator, &inverse(&denominator, p)?, p);
        secret = addmod(&secret, &mulmod(&share_i.y, &basis, p), p);
    }

    Ok(secret)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> FieldPrime {
        FieldPrime::new(BigUint::from(2089u32)).unwrap()
    }

    fn share(x: u64, y: u32) -> Share {
        Share::new(x, BigUint::from(y))
    }

    #[test]
    fn concrete_two_of_three() {
        let field = field();
        let secret = reconstruct(&[share(1, 1400), share(3, 1732)], &field).unwrap();
        assert_eq!(secret, BigUint::from(1234u32));

        let secret = reconstruct(&[share(3, 1732), share(2, 1566)], &field).unwrap();
        assert_eq!(secret, BigUint::from(1234u32));

        let secret =
            reconstruct(&[share(1, 1400), share(2, 1566), share(3, 1732)], &field).unwrap();
        assert_eq!(secret, BigUint::from(1234u32));
    }

    #[test]
    fn single_share_returns_its_y() {
        let secret = reconstruct(&[share(5, 77)], &field()).unwrap();
        assert_eq!(secret, BigUint::from(77u32));
    }

    #[test]
    fn too_few_shares_gives_wrong_value() {
        let secret = reconstruct(&[share(1, 1400)], &field()).unwrap();
        assert_ne!(secret, BigUint::from(1234u32));
    }

    #[test]
    fn duplicate_x_rejected() {
        let err = reconstruct(&[share(2, 1566), share(2, 1566)], &field()).unwrap_err();
        assert_eq!(err, SharingError::DuplicateShare { x: 2 });
    }

    #[test]
    fn raw_interpolation_fails_on_duplicate_x() {
        let p = BigUint::from(2089u32);
        let err = interpolate_at_zero(&[share(2, 1566), share(2, 10)], &p).unwrap_err();
        assert_eq!(err, SharingError::DivisionByZero);
    }

    #[test]
    fn congruent_x_is_division_by_zero() {
        let err = reconstruct(&[share(1, 1400), share(2090, 1400)], &field()).unwrap_err();
        assert_eq!(err, SharingError::DivisionByZero);
    }

    #[test]
    fn empty_and_zero_x_rejected() {
        assert_eq!(reconstruct(&[], &field()).unwrap_err(), SharingError::NoShares);
        assert_eq!(
            reconstruct(&[share(0, 1234), share(1, 1400)], &field()).unwrap_err(),
            SharingError::ZeroCoordinate
        );
    }

    #[test]
    fn threshold_enforced_when_known() {
        let field = field();
        assert_eq!(
            reconstruct_with_threshold(&[share(1, 1400)], 2, &field).unwrap_err(),
            SharingError::InsufficientShares {
                required: 2,
                provided: 1
            }
        );
        assert_eq!(
            reconstruct_with_threshold(&[share(1, 1400), share(2, 1566)], 2, &field).unwrap(),
            BigUint::from(1234u32)
        );
    }

    #[test]
    fn unreduced_y_values_are_normalized() {
        let secret =
            reconstruct(&[share(1, 1400 + 2089), share(3, 1732 + 2 * 2089)], &field()).unwrap();
        assert_eq!(secret, BigUint::from(1234u32));
    }
}
