//! # Prime Field Arithmetic
//!
//! GF(p) for a large prime `p`, built on `num-bigint`. The layers:
//!
//! 1. **arith** — add/sub/mul/pow modulo `p`, always normalized into `[0, p)`.
//! 2. **inverse** — Fermat inverse `a^(p-2) mod p`, refusing to invert zero.
//! 3. **prime** — the [`FieldPrime`] modulus itself, generated once per
//!    process with Miller–Rabin and shared read-only afterwards.

pub mod arith;
pub mod inverse;
pub mod prime;

pub use arith::{addmod, mulmod, negmod, powmod, submod};
pub use inverse::inverse;
pub use prime::{is_probable_prime, FieldPrime};
