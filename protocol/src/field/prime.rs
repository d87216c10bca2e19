//! # Field Prime
//!
//! The modulus `p` that defines GF(p). A node generates one at startup (or
//! loads a pinned one) and shares it read-only for its whole lifetime, so
//! every share it issues lives in the same field.
//!
//! Generation draws a random odd candidate with the top bit forced, sieves
//! it against [`SMALL_PRIMES`], then runs Miller–Rabin with random bases.
//! On failure it steps by 2 and tries again.

use std::fmt;
use std::str::FromStr;

use num_bigint::{BigUint, RandBigInt};
use num_traits::{One, ToPrimitive, Zero};
use rand_core::CryptoRngCore;

use super::arith::{mulmod, powmod};
use crate::config::{FieldConfig, MILLER_RABIN_ROUNDS, SMALL_PRIMES};
use crate::error::SharingError;

/// An odd prime modulus defining the finite field GF(p).
///
/// Construct with [`FieldPrime::generate`] or validate an existing value with
/// [`FieldPrime::new`]. There is no way to mutate the modulus afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPrime {
    modulus: BigUint,
}

impl FieldPrime {
    /// Validates `modulus` as a field prime.
    ///
    /// Rejects anything below 3, any even number, and any value failing
    /// Miller–Rabin.
    pub fn new(modulus: BigUint) -> Result<Self, SharingError> {
        if modulus < BigUint::from(3u32) {
            return Err(SharingError::InvalidPrime(format!(
                "modulus must be at least 3, got {}",
                modulus
            )));
        }
        if !modulus.bit(0) {
            return Err(SharingError::InvalidPrime("modulus must be odd".into()));
        }
        let mut rng = rand::rngs::OsRng;
        if !is_probable_prime(&modulus, MILLER_RABIN_ROUNDS, &mut rng) {
            return Err(SharingError::InvalidPrime(format!(
                "{} is not prime",
                modulus
            )));
        }
        Ok(Self { modulus })
    }

    /// Generates a random prime of exactly `config.prime_bits` bits.
    pub fn generate(
        config: &FieldConfig,
        rng: &mut impl CryptoRngCore,
    ) -> Result<Self, SharingError> {
        if config.prime_bits < 3 {
            return Err(SharingError::InvalidPrime(format!(
                "cannot generate a {}-bit odd prime",
                config.prime_bits
            )));
        }

        let modulus = generate_prime(config.prime_bits, config.miller_rabin_rounds, rng);
        tracing::debug!(bits = modulus.bits(), "field prime generated");
        Ok(Self { modulus })
    }

    /// Generates a prime using the OS entropy source.
    pub fn generate_default(config: &FieldConfig) -> Result<Self, SharingError> {
        Self::generate(config, &mut rand::rngs::OsRng)
    }

    /// The modulus as a big integer.
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Bit length of the modulus.
    pub fn bits(&self) -> u64 {
        self.modulus.bits()
    }

    /// Reduces an arbitrary integer into `[0, p)`.
    pub fn reduce(&self, value: &BigUint) -> BigUint {
        value % &self.modulus
    }

    /// Returns `true` if `value` is already a canonical field element.
    pub fn contains(&self, value: &BigUint) -> bool {
        value < &self.modulus
    }

    /// Largest number of shares the field can carry: the non-zero points
    /// `1..p`, saturating at `usize::MAX` for large moduli.
    pub fn max_share_count(&self) -> usize {
        (&self.modulus - 1u32).to_usize().unwrap_or(usize::MAX)
    }

    /// Draws a uniform field element from `[0, p)`.
    pub fn random_element(&self, rng: &mut impl CryptoRngCore) -> BigUint {
        rng.gen_biguint_below(&self.modulus)
    }
}

impl fmt::Display for FieldPrime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.modulus)
    }
}

impl FromStr for FieldPrime {
    type Err = SharingError;

    /// Parses and validates a decimal prime.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let modulus = BigUint::parse_bytes(s.trim().as_bytes(), 10)
            .ok_or_else(|| SharingError::MalformedFieldElement(s.to_string()))?;
        Self::new(modulus)
    }
}

// ---------------------------------------------------------------------------
// Primality
// ---------------------------------------------------------------------------

/// Miller–Rabin with `rounds` random bases, preceded by trial division.
pub fn is_probable_prime(n: &BigUint, rounds: usize, rng: &mut impl CryptoRngCore) -> bool {
    let two = BigUint::from(2u32);
    if n < &two {
        return false;
    }
    if n == &two {
        return true;
    }
    if !n.bit(0) {
        return false;
    }

    for &small in SMALL_PRIMES.iter() {
        let small = BigUint::from(small);
        if n == &small {
            return true;
        }
        if (n % &small).is_zero() {
            return false;
        }
    }

    // n - 1 = d * 2^s with d odd
    let n1 = n - 1u32;
    let s = n1.trailing_zeros().unwrap_or(0);
    let d = &n1 >> s;

    'witness: for _ in 0..rounds {
        let a = rng.gen_biguint_range(&two, &n1);
        let mut y = powmod(&a, &d, n);

        if y.is_one() || y == n1 {
            continue;
        }

        for _ in 1..s {
            y = mulmod(&y, &y, n);
            if y == n1 {
                continue 'witness;
            }
            if y.is_one() {
                return false;
            }
        }

        return false;
    }

    true
}

fn random_odd_candidate(bits: u64, rng: &mut impl CryptoRngCore) -> BigUint {
    let mut candidate = rng.gen_biguint(bits);
    candidate.set_bit(bits - 1, true);
    candidate.set_bit(0, true);
    candidate
}

fn generate_prime(bits: u64, rounds: usize, rng: &mut impl CryptoRngCore) -> BigUint {
    loop {
        let mut candidate = random_odd_candidate(bits, rng);

        // Walk odd numbers upward while we stay inside the bit length.
        while candidate.bits() == bits {
            if is_probable_prime(&candidate, rounds, rng) {
                return candidate;
            }
            candidate += 2u32;
        }
    }
}
