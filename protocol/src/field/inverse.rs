//! Multiplicative inverse via Fermat's little theorem.

use num_bigint::BigUint;
use num_traits::Zero;

use super::arith::powmod;
use crate::error::SharingError;

/// Returns `a^(p-2) mod p`, the inverse of `a` when `p` is prime.
///
/// Fails with [`SharingError::DivisionByZero`] when `a ≡ 0 (mod p)`. The
/// result is only meaningful for prime `p >= 3`.
pub fn inverse(a: &BigUint, p: &BigUint) -> Result<BigUint, SharingError> {
    let a = a % p;
    if a.is_zero() {
        return Err(SharingError::DivisionByZero);
    }
    let exponent = p - 2u32;
    Ok(powmod(&a, &exponent, p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::arith::mulmod;

    #[test]
    fn inverse_of_three_mod_eleven() {
        assert_eq!(
            inverse(&BigUint::from(3u32), &BigUint::from(11u32)).unwrap(),
            BigUint::from(4u32)
        );
    }

    #[test]
    fn every_nonzero_element_has_inverse() {
        let p = BigUint::from(2089u32);
        for a in 1..2089u32 {
            let a = BigUint::from(a);
            let inv = inverse(&a, &p).unwrap();
            assert_eq!(mulmod(&a, &inv, &p), BigUint::from(1u32));
        }
    }

    #[test]
    fn zero_and_multiples_of_p_are_rejected() {
        let p = BigUint::from(11u32);
        assert_eq!(inverse(&BigUint::zero(), &p), Err(SharingError::DivisionByZero));
        assert_eq!(
            inverse(&BigUint::from(22u32), &p),
            Err(SharingError::DivisionByZero)
        );
    }
}
