// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # Shamir Protocol — Core Library
//!
//! Threshold secret sharing over a large prime field. A secret is split
//! into `n` shares; any `t` of them give it back exactly, fewer reveal
//! nothing about it.
//!
//! ## Architecture
//!
//! - **field** — GF(p): modular add/mul/pow, Fermat inverse, and the
//!   process-wide [`FieldPrime`] generated once with Miller–Rabin.
//! - **sharing** — random polynomials, share generation at `x = 1..=n`,
//!   and reconstruction by Lagrange interpolation at `x = 0`.
//! - **config** — prime size, primality-test strength, share limits.
//! - **error** — the single [`SharingError`] type every operation returns.
//!
//! ## Design Philosophy
//!
//! 1. The prime is a value, not a global. Construct it once, pass it in.
//! 2. Randomness comes from a CSPRNG, never from the clock.
//! 3. Bad share sets are errors, not wrong answers, wherever the shares
//!    themselves carry enough information to tell.

pub mod config;
pub mod error;
pub mod field;
pub mod sharing;

pub use config::FieldConfig;
pub use error::SharingError;
pub use field::FieldPrime;
pub use sharing::{generate, reconstruct, reconstruct_with_threshold, Share};
