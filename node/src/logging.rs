//! # Structured Logging
//!
//! Initializes the `tracing` subscriber with configurable format (JSON or
//! pretty-printed) and environment-based filtering via `RUST_LOG`.
//!
//! All log output is written to stderr so that stdout stays clean for the
//! `prime` subcommand, whose output is meant to be piped.
//!
//! Secrets, coefficients and share y-values are never logged at any level.
//! The call sites only record counts and parameters, and the subscriber
//! additionally drops any event or span that declares one of
//! [`REDACTED_FIELDS`], whatever `RUST_LOG` says.

use tracing::Metadata;
use tracing_subscriber::{
    filter::filter_fn, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

/// Field names that must never reach a log sink.
pub const REDACTED_FIELDS: &[&str] = &["secret", "coefficients", "coefficient", "y", "points"];

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable, colored output. Suitable for local development.
    Pretty,
    /// Machine-parseable JSON lines. Suitable for production log aggregation.
    Json,
}

impl LogFormat {
    /// Parse a format string. Accepts "json" or "pretty" (case-insensitive).
    /// Returns `Pretty` for any unrecognized value.
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

/// `false` for callsites that declare a field in [`REDACTED_FIELDS`].
pub fn is_loggable(metadata: &Metadata<'_>) -> bool {
    let fields = metadata.fields();
    !REDACTED_FIELDS
        .iter()
        .any(|name| fields.field(*name).is_some())
}

/// Initialize the global tracing subscriber.
///
/// Call this exactly once, early in `main()`. Subsequent calls will panic.
///
/// `RUST_LOG` overrides `default_level` when set, e.g.
///
/// ```text
/// RUST_LOG=shamir_node=debug,shamir_protocol=debug,tower_http=info
/// ```
pub fn init_logging(default_level: &str, format: LogFormat) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    match format {
        LogFormat::Pretty => {
            let layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_fn(is_loggable));
            tracing_subscriber::registry()
                .with(env_filter)
                .with(layer)
                .init();
        }
        LogFormat::Json => {
            let layer = fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_filter(filter_fn(is_loggable));
            tracing_subscriber::registry()
                .with(env_filter)
                .with(layer)
                .init();
        }
    }

    tracing::info!(
        "logging initialized (format={:?}, redacting {:?})",
        format,
        REDACTED_FIELDS
    );
}
