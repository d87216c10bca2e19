//! # Threshold Secret Sharing
//!
//! Shamir's scheme over GF(p). A secret is the constant term of a random
//! polynomial of degree `t - 1`; each share is that polynomial evaluated at
//! a distinct non-zero `x`. Any `t` shares pin the polynomial down and give
//! back the constant term by Lagrange interpolation. `t - 1` shares are
//! consistent with every possible secret.
//!
//! ## Security Model
//!
//! - All coefficients, the secret included, come from a CSPRNG
//!   (`OsRng` unless the caller injects another `CryptoRngCore`).
//! - Share x-coordinates are `1..=n`. `x = 0` is the secret and is refused
//!   on input.
//! - Reconstruction cannot tell on its own whether it got enough shares.
//!   Callers that know `t` should use [`reconstruct_with_threshold`].
//!
//! ## Usage
//!
//! ```
//! use num_bigint::BigUint;
//! use shamir_protocol::field::FieldPrime;
//! use shamir_protocol::sharing::{generate, reconstruct};
//!
//! let field = FieldPrime::new(BigUint::from(2089u32)).unwrap();
//! let (secret, shares) = generate(3, 5, &field).unwrap();
//!
//! let recovered = reconstruct(&shares[1..4], &field).unwrap();
//! assert_eq!(secret, recovered);
//! ```

pub mod polynomial;
pub mod reconstruct;
pub mod share;
pub mod split;

pub use polynomial::Polynomial;
pub use reconstruct::{interpolate_at_zero, reconstruct, reconstruct_with_threshold};
pub use share::{parse_decimal, Share};
pub use split::{evaluate, generate, generate_with_rng, split_secret, validate_parameters};
