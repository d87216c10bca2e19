//! # Field & Sharing Configuration
//!
//! Every tunable number in the sharing engine lives here. The prime size
//! and primality-test strength decide how hard the field is to brute force;
//! the share ceiling bounds how much CPU a single request may burn.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Prime Field Parameters
// ---------------------------------------------------------------------------

/// Default bit length of the field prime. A 256-bit modulus puts the secret
/// space well beyond brute-force reach.
pub const DEFAULT_PRIME_BITS: u64 = 256;

/// Smallest prime size the node accepts for a generated field. Explicitly
/// supplied primes may be smaller (tests use p = 2089), but a node asked to
/// generate its own field never goes below this.
pub const MIN_PRIME_BITS: u64 = 64;

/// Miller–Rabin rounds for candidate primes. Each round with a random base
/// cuts the false-positive probability by at least 4x, so 40 rounds leaves
/// it below 2^-80.
pub const MILLER_RABIN_ROUNDS: usize = 40;

/// Small odd primes used to discard candidates by trial division before
/// paying for Miller–Rabin.
pub const SMALL_PRIMES: [u32; 53] = [
    3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89,
    97, 101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181,
    191, 193, 197, 199, 211, 223, 227, 229, 233, 239, 241, 251,
];

// ---------------------------------------------------------------------------
// Sharing Limits
// ---------------------------------------------------------------------------

/// Default ceiling on the number of shares per generate request. Evaluation
/// cost grows with `t * n`, so an unbounded `n` is a cheap way to pin a core.
pub const DEFAULT_MAX_SHARES: usize = 1024;

// ---------------------------------------------------------------------------
// Node Defaults
// ---------------------------------------------------------------------------

/// Default HTTP API port, same as the original service.
pub const DEFAULT_API_PORT: u16 = 8080;

/// Default Prometheus metrics port.
pub const DEFAULT_METRICS_PORT: u16 = 9090;

/// Crate version, reported by the node's `/status` endpoint.
pub const PROTOCOL_VERSION: &str = env!("CARGO_PKG_VERSION");

// ---------------------------------------------------------------------------
// FieldConfig
// ---------------------------------------------------------------------------

/// Parameters for generating the process-wide field prime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Exact bit length of the generated prime.
    pub prime_bits: u64,
    /// Miller–Rabin rounds per candidate.
    pub miller_rabin_rounds: usize,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            prime_bits: DEFAULT_PRIME_BITS,
            miller_rabin_rounds: MILLER_RABIN_ROUNDS,
        }
    }
}

impl FieldConfig {
    /// Config with a custom prime size and the default test strength.
    pub fn with_bits(prime_bits: u64) -> Self {
        Self {
            prime_bits,
            ..Self::default()
        }
    }
}
