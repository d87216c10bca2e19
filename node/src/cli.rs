//! # CLI Interface
//!
//! Defines the command-line argument structure for `shamir-node` using
//! `clap` derive. Supports three subcommands: `run`, `prime`, and `version`.

use clap::{Parser, Subcommand};

use shamir_protocol::config::{
    DEFAULT_API_PORT, DEFAULT_MAX_SHARES, DEFAULT_METRICS_PORT, DEFAULT_PRIME_BITS,
};

use crate::logging::LogFormat;

/// Threshold secret sharing node.
///
/// Serves an HTTP API that splits freshly generated secrets into shares
/// and reconstructs secrets from shares, all over one prime field chosen
/// at startup.
#[derive(Parser, Debug)]
#[command(
    name = "shamir-node",
    about = "Threshold secret sharing node",
    version,
    propagate_version = true
)]
pub struct ShamirNodeCli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the node binary.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP API.
    Run(RunArgs),
    /// Generate a field prime and print it in decimal.
    Prime(PrimeArgs),
    /// Print version information and exit.
    Version,
}

/// Arguments for the `run` subcommand.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Port for the HTTP API.
    #[arg(long, short = 'p', env = "SHAMIR_PORT", default_value_t = DEFAULT_API_PORT)]
    pub port: u16,

    /// Port for the Prometheus metrics endpoint.
    #[arg(long, env = "SHAMIR_METRICS_PORT", default_value_t = DEFAULT_METRICS_PORT)]
    pub metrics_port: u16,

    /// Bit length of the prime generated at startup.
    #[arg(long, env = "SHAMIR_PRIME_BITS", default_value_t = DEFAULT_PRIME_BITS)]
    pub prime_bits: u64,

    /// Decimal field prime to use instead of generating one.
    ///
    /// Shares are only meaningful under the prime that produced them, so
    /// pin this to keep shares valid across restarts.
    #[arg(long, env = "SHAMIR_PRIME")]
    pub prime: Option<String>,

    /// Largest share count a single generate request may ask for.
    #[arg(long, env = "SHAMIR_MAX_SHARES", default_value_t = DEFAULT_MAX_SHARES)]
    pub max_shares: usize,

    /// Log output format: `pretty` or `json`.
    #[arg(long, env = "SHAMIR_LOG_FORMAT", default_value = "pretty")]
    pub log_format: String,
}

impl RunArgs {
    /// Parsed `--log-format`, falling back to pretty output.
    pub fn log_format(&self) -> LogFormat {
        LogFormat::from_str_lossy(&self.log_format)
    }
}

/// Arguments for the `prime` subcommand.
#[derive(Parser, Debug)]
pub struct PrimeArgs {
    /// Bit length of the prime.
    #[arg(long, short = 'b', default_value_t = DEFAULT_PRIME_BITS)]
    pub bits: u64,
}
