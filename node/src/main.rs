// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # Shamir Node
//!
//! Entry point for the `shamir-node` binary. Parses CLI arguments, initializes
//! logging and metrics, fixes the field prime, and serves the HTTP API.
//!
//! The binary supports three subcommands:
//!
//! - `run`     — start the HTTP API
//! - `prime`   — generate a field prime and print it
//! - `version` — print build version information

mod api;
mod cli;
mod logging;
mod metrics;

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::sync::Arc;
use tokio::signal;

use shamir_protocol::config::MIN_PRIME_BITS;
use shamir_protocol::{FieldConfig, FieldPrime};

use cli::{Commands, ShamirNodeCli};
use logging::LogFormat;
use metrics::NodeMetrics;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = ShamirNodeCli::parse();

    match cli.command {
        Commands::Run(args) => run_node(args).await,
        Commands::Prime(args) => print_prime(args),
        Commands::Version => {
            print_version();
            Ok(())
        }
    }
}

/// Starts the node: API server and metrics endpoint.
async fn run_node(args: cli::RunArgs) -> Result<()> {
    logging::init_logging(
        "shamir_node=info,shamir_protocol=info,tower_http=debug",
        args.log_format(),
    );

    tracing::info!(
        port = args.port,
        metrics_port = args.metrics_port,
        max_shares = args.max_shares,
        "starting shamir-node"
    );

    // --- Field prime ---
    let field = match &args.prime {
        Some(decimal) => {
            let field: FieldPrime = decimal
                .parse()
                .context("--prime is not a usable field prime")?;
            if field.bits() < MIN_PRIME_BITS {
                tracing::warn!(
                    bits = field.bits(),
                    "pinned prime is smaller than {} bits; shares offer little secrecy",
                    MIN_PRIME_BITS
                );
            }
            tracing::info!(bits = field.bits(), "using pinned field prime");
            field
        }
        None => {
            if args.prime_bits < MIN_PRIME_BITS {
                bail!(
                    "--prime-bits must be at least {}, got {}",
                    MIN_PRIME_BITS,
                    args.prime_bits
                );
            }
            let config = FieldConfig::with_bits(args.prime_bits);
            let field = FieldPrime::generate_default(&config)
                .context("failed to generate field prime")?;
            tracing::info!(bits = field.bits(), "generated field prime");
            field
        }
    };

    let max_shares = args.max_shares.min(field.max_share_count());
    if max_shares < args.max_shares {
        tracing::warn!(
            requested = args.max_shares,
            effective = max_shares,
            "--max-shares exceeds the non-zero points of the field; capping"
        );
    }

    // --- Metrics ---
    let node_metrics = Arc::new(NodeMetrics::new().context("failed to register metrics")?);
    node_metrics.prime_bits.set(field.bits() as i64);

    // --- Application state ---
    let app_state = api::AppState {
        version: format!(
            "{} (protocol {})",
            env!("CARGO_PKG_VERSION"),
            shamir_protocol::config::PROTOCOL_VERSION,
        ),
        field: Arc::new(field),
        max_shares,
        metrics: Arc::clone(&node_metrics),
    };

    // --- API server ---
    let api_router = api::create_router(app_state);
    let api_addr = format!("0.0.0.0:{}", args.port);
    let api_listener = tokio::net::TcpListener::bind(&api_addr)
        .await
        .with_context(|| format!("failed to bind API listener on {}", api_addr))?;
    tracing::info!("API server listening on {}", api_addr);

    // --- Metrics server ---
    let metrics_router = axum::Router::new()
        .route("/metrics", axum::routing::get(metrics::metrics_handler))
        .with_state(Arc::clone(&node_metrics));
    let metrics_addr = format!("0.0.0.0:{}", args.metrics_port);
    let metrics_listener = tokio::net::TcpListener::bind(&metrics_addr)
        .await
        .with_context(|| format!("failed to bind metrics listener on {}", metrics_addr))?;
    tracing::info!("Metrics server listening on {}", metrics_addr);

    // --- Serve ---
    tokio::select! {
        res = axum::serve(api_listener, api_router) => {
            if let Err(e) = res {
                tracing::error!("API server error: {}", e);
            }
        }
        res = axum::serve(metrics_listener, metrics_router) => {
            if let Err(e) = res {
                tracing::error!("Metrics server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            tracing::info!("shutdown signal received, draining connections");
        }
    }

    tracing::info!("shamir-node stopped");
    Ok(())
}

/// Generates a prime of the requested size and writes it to stdout, so it
/// can be captured and passed back through `run --prime`.
fn print_prime(args: cli::PrimeArgs) -> Result<()> {
    logging::init_logging("shamir_node=info,shamir_protocol=debug", LogFormat::Pretty);

    let config = FieldConfig::with_bits(args.bits);
    let field = FieldPrime::generate_default(&config)
        .with_context(|| format!("failed to generate a {}-bit prime", args.bits))?;
    println!("{}", field);
    Ok(())
}

/// Prints version information to stdout.
fn print_version() {
    println!("shamir-node {}", env!("CARGO_PKG_VERSION"));
    println!("protocol    {}", shamir_protocol::config::PROTOCOL_VERSION);
    println!("rustc       {}", rustc_version());
}

/// Returns the Rust compiler version used to build this binary.
fn rustc_version() -> &'static str {
    option_env!("RUSTC_VERSION").unwrap_or("unknown")
}

/// Waits for SIGINT (Ctrl+C) or SIGTERM, whichever comes first.
///
/// On non-Unix platforms, only Ctrl+C is supported. If a handler cannot be
/// installed, that branch never resolves and the other one still works.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}
