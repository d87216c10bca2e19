//! Random secret-encoding polynomials.

use std::fmt;

use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand_core::CryptoRngCore;

use crate::error::SharingError;
use crate::field::{addmod, mulmod, FieldPrime};

/// A polynomial `c0 + c1·x + ... + c_{t-1}·x^{t-1}` over GF(p).
///
/// `c0` is the secret. The polynomial only exists while shares are being
/// produced; it is neither serializable nor printable.
#[derive(Clone, PartialEq, Eq)]
pub struct Polynomial {
    coefficients: Vec<BigUint>,
}

impl Polynomial {
    /// Draws all `threshold` coefficients uniformly from `[0, p)`. The first
    /// one becomes the secret.
    pub fn random(
        threshold: usize,
        field: &FieldPrime,
        rng: &mut impl CryptoRngCore,
    ) -> Result<Self, SharingError> {
        if threshold == 0 {
            return Err(SharingError::InvalidThreshold {
                threshold,
                total: 0,
            });
        }

        let coefficients = (0..threshold)
            .map(|_| field.random_element(rng))
            .collect();
        Ok(Self { coefficients })
    }

    /// Like [`Polynomial::random`] but with a caller-chosen constant term.
    pub fn with_secret(
        secret: &BigUint,
        threshold: usize,
        field: &FieldPrime,
        rng: &mut impl CryptoRngCore,
    ) -> Result<Self, SharingError> {
        let mut poly = Self::random(threshold, field, rng)?;
        poly.coefficients[0] = field.reduce(secret);
        Ok(poly)
    }

    /// Builds a polynomial from explicit coefficients, lowest degree first.
    pub fn from_coefficients(
        coefficients: Vec<BigUint>,
        field: &FieldPrime,
    ) -> Result<Self, SharingError> {
        if coefficients.is_empty() {
            return Err(SharingError::InvalidThreshold {
                threshold: 0,
                total: 0,
            });
        }
        let coefficients = coefficients.iter().map(|c| field.reduce(c)).collect();
        Ok(Self { coefficients })
    }

    /// The constant term.
    pub fn secret(&self) -> &BigUint {
        &self.coefficients[0]
    }

    /// Number of coefficients, i.e. the reconstruction threshold.
    pub fn threshold(&self) -> usize {
        self.coefficients.len()
    }

    /// All coefficients, lowest degree first.
    pub fn coefficients(&self) -> &[BigUint] {
        &self.coefficients
    }

    /// Evaluates the polynomial at `x`.
    pub fn evaluate_at(&self, x: u64, field: &FieldPrime) -> BigUint {
        evaluate_point(&self.coefficients, x, field.modulus())
    }
}

impl fmt::Debug for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Polynomial")
            .field("threshold", &self.coefficients.len())
            .finish_non_exhaustive()
    }
}

/// `Σ c_i · x^i mod p`, reducing after every term.
pub(crate) fn evaluate_point(coefficients: &[BigUint], x: u64, p: &BigUint) -> BigUint {
    let x = BigUint::from(x) % p;
    let mut acc = BigUint::zero();
    let mut power = BigUint::one() % p;

    for coeff in coefficients {
        acc = addmod(&acc, &mulmod(coeff, &power, p), p);
        power = mulmod(&power, &x, p);
    }

    acc
}
