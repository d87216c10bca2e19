//! # Prometheus Metrics
//!
//! Operational counters for the sharing API. Scraped by Prometheus at the
//! `/metrics` HTTP endpoint on the configured metrics port.
//!
//! All metrics are registered in a dedicated [`prometheus::Registry`] so they
//! do not collide with any default global registry consumers.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use prometheus::{Encoder, Histogram, HistogramOpts, IntCounter, IntGauge, Registry, TextEncoder};
use std::sync::Arc;

/// Holds all Prometheus metric handles for the node.
#[derive(Clone)]
pub struct NodeMetrics {
    /// Prometheus registry that owns all metrics below.
    registry: Registry,
    /// Successful generate requests.
    pub secrets_generated_total: IntCounter,
    /// Shares handed out across all generate requests.
    pub shares_issued_total: IntCounter,
    /// Successful reconstructions.
    pub reconstructions_total: IntCounter,
    /// Requests refused for invalid parameters or share sets.
    pub rejected_requests_total: IntCounter,
    /// Bit length of the field prime in use.
    pub prime_bits: IntGauge,
    /// Time spent in the sharing core per request, in seconds.
    pub operation_latency_seconds: Histogram,
}

impl NodeMetrics {
    /// Creates and registers all metrics. Call once at startup.
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new_custom(Some("shamir".into()), None)?;

        let secrets_generated_total = IntCounter::new(
            "secrets_generated_total",
            "Total number of secrets generated and split",
        )?;
        registry.register(Box::new(secrets_generated_total.clone()))?;

        let shares_issued_total =
            IntCounter::new("shares_issued_total", "Total number of shares issued")?;
        registry.register(Box::new(shares_issued_total.clone()))?;

        let reconstructions_total = IntCounter::new(
            "reconstructions_total",
            "Total number of successful secret reconstructions",
        )?;
        registry.register(Box::new(reconstructions_total.clone()))?;

        let rejected_requests_total = IntCounter::new(
            "rejected_requests_total",
            "Total number of requests rejected by validation",
        )?;
        registry.register(Box::new(rejected_requests_total.clone()))?;

        let prime_bits = IntGauge::new("prime_bits", "Bit length of the field prime")?;
        registry.register(Box::new(prime_bits.clone()))?;

        let operation_latency_seconds = Histogram::with_opts(
            HistogramOpts::new(
                "operation_latency_seconds",
                "Time spent generating or reconstructing, in seconds",
            )
            .buckets(vec![
                0.0001, 0.0005, 0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 1.0,
            ]),
        )?;
        registry.register(Box::new(operation_latency_seconds.clone()))?;

        Ok(Self {
            registry,
            secrets_generated_total,
            shares_issued_total,
            reconstructions_total,
            rejected_requests_total,
            prime_bits,
            operation_latency_seconds,
        })
    }

    /// Encodes all registered metrics into the Prometheus text exposition format.
    pub fn encode(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}

/// Shared metrics state passed to axum handlers.
pub type SharedMetrics = Arc<NodeMetrics>;

/// Axum handler that renders `/metrics` in Prometheus text format.
pub async fn metrics_handler(
    axum::extract::State(metrics): axum::extract::State<SharedMetrics>,
) -> impl IntoResponse {
    match metrics.encode() {
        Ok(body) => (
            StatusCode::OK,
            [("content-type", "text/plain; version=0.0.4; charset=utf-8")],
            body,
        )
            .into_response(),
        Err(e) => {
            tracing::error!("failed to encode metrics: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "metrics encoding failed").into_response()
        }
    }
}
