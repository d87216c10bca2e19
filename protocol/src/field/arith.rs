//! Modular arithmetic over arbitrary-precision unsigned integers.
//!
//! Every function returns a value normalized into `[0, p)`. Inputs may be
//! any size; they are reduced before use. The modulus must be non-zero.

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// `(a + b) mod p`.
pub fn addmod(a: &BigUint, b: &BigUint, p: &BigUint) -> BigUint {
    ((a % p) + (b % p)) % p
}

/// `(a - b) mod p`, folding negative differences back into the field.
pub fn submod(a: &BigUint, b: &BigUint, p: &BigUint) -> BigUint {
    let a = a % p;
    let b = b % p;
    if a >= b {
        a - b
    } else {
        p - (b - a)
    }
}

/// `(-a) mod p`.
pub fn negmod(a: &BigUint, p: &BigUint) -> BigUint {
    submod(&BigUint::zero(), a, p)
}

/// `(a * b) mod p`.
pub fn mulmod(a: &BigUint, b: &BigUint, p: &BigUint) -> BigUint {
    ((a % p) * (b % p)) % p
}

/// `base^exponent mod p` by binary exponentiation.
///
/// Walks the exponent from the least significant bit up. The running base
/// power is squared and reduced every step; the accumulator absorbs it
/// whenever the current bit is set.
pub fn powmod(base: &BigUint, exponent: &BigUint, p: &BigUint) -> BigUint {
    if p.is_one() {
        return BigUint::zero();
    }

    let mut acc = BigUint::one();
    let mut power = base % p;

    for i in 0..exponent.bits() {
        if exponent.bit(i) {
            acc = (acc * &power) % p;
        }
        power = (&power * &power) % p;
    }

    acc
}
