//! Share generation: draw a polynomial, evaluate it at `x = 1..=n`.

use num_bigint::BigUint;
use num_traits::ToPrimitive;
use rand_core::CryptoRngCore;

use super::polynomial::{evaluate_point, Polynomial};
use super::share::Share;
use crate::error::SharingError;
use crate::field::FieldPrime;

/// Checks `1 <= threshold <= total < p`.
pub fn validate_parameters(
    threshold: usize,
    total: usize,
    field: &FieldPrime,
) -> Result<(), SharingError> {
    if total == 0 {
        return Err(SharingError::InvalidShareCount(total));
    }
    if threshold == 0 || threshold > total {
        return Err(SharingError::InvalidThreshold { threshold, total });
    }
    check_share_count(total, field.modulus())
}

/// GF(p) has only `p - 1` non-zero points. Past that, `x = p` evaluates to
/// the secret and `x = p + k` repeats `x = k`.
fn check_share_count(total: usize, p: &BigUint) -> Result<(), SharingError> {
    if BigUint::from(total) >= *p {
        let max = (p - 1u32).to_usize().unwrap_or(usize::MAX);
        return Err(SharingError::TooManyShares {
            requested: total,
            max,
        });
    }
    Ok(())
}

/// Evaluates `coefficients` at `x = 1..=n`, returning `n` shares in
/// ascending x order. `x = 0` is never used; that point is the secret.
///
/// Fails with [`SharingError::TooManyShares`] when `n >= p`.
pub fn evaluate(
    coefficients: &[BigUint],
    n: usize,
    p: &BigUint,
) -> Result<Vec<Share>, SharingError> {
    check_share_count(n, p)?;
    Ok((1..=n as u64)
        .map(|x| Share::new(x, evaluate_point(coefficients, x, p)))
        .collect())
}

/// Generates a fresh random secret and `total` shares of it, any
/// `threshold` of which reconstruct it. Coefficients come from the OS
/// entropy source.
pub fn generate(
    threshold: usize,
    total: usize,
    field: &FieldPrime,
) -> Result<(BigUint, Vec<Share>), SharingError> {
    generate_with_rng(threshold, total, field, &mut rand::rngs::OsRng)
}

/// [`generate`] with an explicit randomness source.
pub fn generate_with_rng(
    threshold: usize,
    total: usize,
    field: &FieldPrime,
    rng: &mut impl CryptoRngCore,
) -> Result<(BigUint, Vec<Share>), SharingError> {
    validate_parameters(threshold, total, field)?;

    let poly = Polynomial::random(threshold, field, rng)?;
    let shares = evaluate(poly.coefficients(), total, field.modulus())?;

    tracing::debug!(threshold, total, "generated shares for random secret");
    Ok((poly.secret().clone(), shares))
}

/// Splits a caller-supplied secret. The secret is reduced mod p first, so
/// values at or above the modulus do not round-trip.
pub fn split_secret(
    secret: &BigUint,
    threshold: usize,
    total: usize,
    field: &FieldPrime,
    rng: &mut impl CryptoRngCore,
) -> Result<Vec<Share>, SharingError> {
    validate_parameters(threshold, total, field)?;

    let poly = Polynomial::with_secret(secret, threshold, field, rng)?;
    let shares = evaluate(poly.coefficients(), total, field.modulus())?;

    tracing::debug!(threshold, total, "split supplied secret");
    Ok(shares)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn field() -> FieldPrime {
        FieldPrime::new(BigUint::from(2089u32)).unwrap()
    }

    #[test]
    fn concrete_linear_shares() {
        let coeffs = [1234u32, 166].map(BigUint::from);
        let shares = evaluate(&coeffs, 3, &BigUint::from(2089u32)).unwrap();
        assert_eq!(
            shares,
            vec![
                Share::new(1, BigUint::from(1400u32)),
                Share::new(2, BigUint::from(1566u32)),
                Share::new(3, BigUint::from(1732u32)),
            ]
        );
    }

    #[test]
    fn share_count_and_coordinates() {
        let field = field();
        let mut rng = StdRng::seed_from_u64(11);
        for (t, n) in [(1, 1), (1, 5), (3, 5), (5, 5), (10, 50)] {
            let (secret, shares) = generate_with_rng(t, n, &field, &mut rng).unwrap();
            assert!(field.contains(&secret));
            assert_eq!(shares.len(), n);
            for (i, share) in shares.iter().enumerate() {
                assert_eq!(share.x, i as u64 + 1);
                assert!(field.contains(&share.y));
            }
        }
    }

    #[test]
    fn threshold_one_copies_secret() {
        let field = field();
        let (secret, shares) = generate(1, 4, &field).unwrap();
        assert!(shares.iter().all(|s| s.y == secret));
    }

    #[test]
    fn parameter_validation() {
        let field = field();
        assert_eq!(
            generate(0, 3, &field).unwrap_err(),
            SharingError::InvalidThreshold {
                threshold: 0,
                total: 3
            }
        );
        assert_eq!(
            generate(4, 3, &field).unwrap_err(),
            SharingError::InvalidThreshold {
                threshold: 4,
                total: 3
            }
        );
        assert_eq!(
            generate(0, 0, &field).unwrap_err(),
            SharingError::InvalidShareCount(0)
        );
    }

    #[test]
    fn share_count_must_stay_below_modulus() {
        let field = FieldPrime::new(BigUint::from(11u32)).unwrap();
        let mut rng = StdRng::seed_from_u64(12);

        let too_many = SharingError::TooManyShares {
            requested: 11,
            max: 10,
        };
        assert_eq!(
            generate_with_rng(3, 11, &field, &mut rng).unwrap_err(),
            too_many
        );
        assert!(matches!(
            generate_with_rng(3, 12, &field, &mut rng),
            Err(SharingError::TooManyShares { requested: 12, max: 10 })
        ));
        assert!(split_secret(&BigUint::from(2u32), 2, 11, &field, &mut rng).is_err());
        assert!(evaluate(&[BigUint::from(2u32)], 11, field.modulus()).is_err());

        // n = p - 1 is the largest usable set: every x is non-zero mod p.
        let (secret, shares) = generate_with_rng(3, 10, &field, &mut rng).unwrap();
        assert!(shares.iter().all(|s| s.x % 11 != 0));
        let recovered = crate::sharing::reconstruct(&shares[7..], &field).unwrap();
        assert_eq!(recovered, secret);
    }

    #[test]
    fn split_secret_uses_given_constant() {
        let field = field();
        let mut rng = StdRng::seed_from_u64(3);
        let shares = split_secret(&BigUint::from(42u32), 1, 2, &field, &mut rng).unwrap();
        assert_eq!(shares[0].y, BigUint::from(42u32));
        assert_eq!(shares[1].y, BigUint::from(42u32));
    }

    #[test]
    fn deterministic_given_rng_seed() {
        let field = field();
        let a = generate_with_rng(3, 5, &field, &mut StdRng::seed_from_u64(99)).unwrap();
        let b = generate_with_rng(3, 5, &field, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(a, b);
    }
}
