//! # REST API
//!
//! Builds the axum router that exposes the sharing engine over HTTP.
//! All endpoints share application state through axum's `State` extractor.
//!
//! ## Endpoints
//!
//! | Method | Path         | Description                                      |
//! |--------|--------------|--------------------------------------------------|
//! | GET    | `/health`    | Liveness probe                                   |
//! | GET    | `/status`    | Version, field size, limits                      |
//! | GET    | `/prime`     | The public field modulus, decimal                |
//! | POST   | `/generate`  | Form `t`, `n` → random secret and `n` shares     |
//! | POST   | `/decrypt`   | JSON shares (+ optional threshold) → secret      |
//!
//! Field elements travel as decimal strings; share x-coordinates as plain
//! integers. Malformed bodies get 400, well-formed but unacceptable
//! parameters get 422.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{FormRejection, JsonRejection},
        State,
    },
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use shamir_protocol::sharing::{self, Share};
use shamir_protocol::{FieldPrime, SharingError};

use crate::metrics::SharedMetrics;

// ---------------------------------------------------------------------------
// Application State
// ---------------------------------------------------------------------------

/// Shared application state available to all request handlers.
///
/// Cheap to clone, everything sits behind `Arc`. The field prime is fixed for
/// the life of the process and read without locking.
#[derive(Clone)]
pub struct AppState {
    /// The node's reported version string.
    pub version: String,
    /// The field every share lives in.
    pub field: Arc<FieldPrime>,
    /// Ceiling on `n` for generate and on the share count for decrypt.
    pub max_shares: usize,
    /// Reference to Prometheus metrics for in-handler recording.
    pub metrics: SharedMetrics,
}

// ---------------------------------------------------------------------------
// Router Construction
// ---------------------------------------------------------------------------

/// Builds the full axum [`Router`] with all API routes, CORS, and tracing.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_handler))
        .route("/status", get(status_handler))
        .route("/prime", get(prime_handler))
        .route("/generate", post(generate_handler))
        .route("/decrypt", post(decrypt_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Request / Response Types
// ---------------------------------------------------------------------------

/// Form body for `POST /generate`. Signed so that `t=-1` reaches
/// validation instead of failing to parse.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    /// Reconstruction threshold.
    pub t: i64,
    /// Number of shares to issue.
    pub n: i64,
}

/// Response payload for `POST /generate`.
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// The freshly generated secret, decimal.
    pub secret: String,
    /// `n` shares with x = 1..=n.
    pub points: Vec<Share>,
}

/// JSON body for `POST /decrypt`.
#[derive(Debug, Serialize, Deserialize)]
pub struct DecryptRequest {
    /// Shares to interpolate.
    pub points: Vec<Share>,
    /// The threshold the shares were issued with, if the caller kept it.
    /// When present, fewer points than this is an error instead of a
    /// silently wrong secret.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<usize>,
}

/// Response payload for `POST /decrypt`.
#[derive(Debug, Serialize, Deserialize)]
pub struct DecryptResponse {
    /// The reconstructed secret, decimal.
    pub decrypted_secret: String,
}

/// Response payload for `GET /status`.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Node software version.
    pub version: String,
    /// Bit length of the field prime.
    pub prime_bits: u64,
    /// Share-count ceiling per request.
    pub max_shares: usize,
    /// ISO-8601 timestamp of the response.
    pub timestamp: String,
}

/// Response payload for `GET /prime`.
#[derive(Debug, Serialize, Deserialize)]
pub struct PrimeResponse {
    /// The modulus, decimal.
    pub prime: String,
    /// Its bit length.
    pub bits: u64,
}

/// Generic error body returned by REST endpoints on failure.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable description of what was rejected.
    pub error: String,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

fn sharing_error_response(state: &AppState, err: &SharingError) -> Response {
    state.metrics.rejected_requests_total.inc();
    let status = if err.is_validation() {
        StatusCode::UNPROCESSABLE_ENTITY
    } else {
        StatusCode::BAD_REQUEST
    };
    error_response(status, err.to_string())
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Checks `1 <= t <= n <= max_shares` and converts to `usize`.
pub fn validate_generate(
    req: &GenerateRequest,
    max_shares: usize,
) -> Result<(usize, usize), SharingError> {
    if req.t <= 0 || req.n <= 0 || req.t > req.n {
        return Err(SharingError::InvalidThreshold {
            threshold: req.t.max(0) as usize,
            total: req.n.max(0) as usize,
        });
    }

    let (t, n) = (req.t as usize, req.n as usize);
    if n > max_shares {
        return Err(SharingError::TooManyShares {
            requested: n,
            max: max_shares,
        });
    }
    Ok((t, n))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// `GET /health` — returns 200 if the node is alive.
async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({ "status": "ok" })))
}

/// `GET /status` — returns node status summary.
async fn status_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(StatusResponse {
        version: state.version.clone(),
        prime_bits: state.field.bits(),
        max_shares: state.max_shares,
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// `GET /prime` — the field modulus. Public by construction; shares are
/// useless without it.
async fn prime_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(PrimeResponse {
        prime: state.field.to_string(),
        bits: state.field.bits(),
    })
}

/// `POST /generate` — creates a random secret and splits it into `n`
/// shares with threshold `t`.
async fn generate_handler(
    State(state): State<AppState>,
    form: Result<Form<GenerateRequest>, FormRejection>,
) -> Response {
    let Form(req) = match form {
        Ok(form) => form,
        Err(rejection) => return error_response(StatusCode::BAD_REQUEST, rejection.body_text()),
    };

    let (t, n) = match validate_generate(&req, state.max_shares) {
        Ok(params) => params,
        Err(e) => {
            tracing::debug!(t = req.t, n = req.n, "generate rejected: {}", e);
            return sharing_error_response(&state, &e);
        }
    };

    let field = Arc::clone(&state.field);
    let timer = state.metrics.operation_latency_seconds.start_timer();
    let result = tokio::task::spawn_blocking(move || sharing::generate(t, n, &field)).await;
    timer.observe_duration();

    match result {
        Ok(Ok((secret, points))) => {
            state.metrics.secrets_generated_total.inc();
            state.metrics.shares_issued_total.inc_by(points.len() as u64);
            tracing::info!(t, n, "secret generated and split");
            Json(GenerateResponse {
                secret: secret.to_str_radix(10),
                points,
            })
            .into_response()
        }
        Ok(Err(e)) => sharing_error_response(&state, &e),
        Err(e) => {
            tracing::error!("generate task failed: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "internal error")
        }
    }
}

/// `POST /decrypt` — reconstructs the secret from the supplied shares.
///
/// Without a `threshold` field this cannot tell whether enough shares were
/// sent; too few simply yields a different number.
async fn decrypt_handler(
    State(state): State<AppState>,
    body: Result<Json<DecryptRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(json) => json,
        Err(rejection) => return error_response(StatusCode::BAD_REQUEST, rejection.body_text()),
    };

    if req.points.is_empty() {
        return sharing_error_response(&state, &SharingError::NoShares);
    }
    if req.points.len() > state.max_shares {
        let err = SharingError::TooManyShares {
            requested: req.points.len(),
            max: state.max_shares,
        };
        return sharing_error_response(&state, &err);
    }

    let field = Arc::clone(&state.field);
    let provided = req.points.len();
    let timer = state.metrics.operation_latency_seconds.start_timer();
    let result = tokio::task::spawn_blocking(move || match req.threshold {
        Some(t) => sharing::reconstruct_with_threshold(&req.points, t, &field),
        None => sharing::reconstruct(&req.points, &field),
    })
    .await;
    timer.observe_duration();

    match result {
        Ok(Ok(secret)) => {
            state.metrics.reconstructions_total.inc();
            tracing::info!(shares = provided, "secret reconstructed");
            Json(DecryptResponse {
                decrypted_secret: secret.to_str_radix(10),
            })
            .into_response()
        }
        Ok(Err(e)) => {
            tracing::warn!(shares = provided, "reconstruction rejected: {}", e);
            sharing_error_response(&state, &e)
        }
        Err(e) => {
            tracing::error!("decrypt task failed: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "internal error")
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
