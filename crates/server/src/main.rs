// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::State as AxumState,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use stock_alloc_api::{ApiError, RunMode, RunRequest, RunSummary, run_allocation};
use stock_alloc_gateway::{GatewayConfig, ListStore, MemoryStore, RestStore};
use tracing::{error, info};

/// Stock Allocation Server - HTTP entry point for order allocation runs
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Serve demo fixtures from memory instead of the configured list store
    #[arg(long)]
    in_memory: bool,
}

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    /// The list store backend all runs go through.
    store: Arc<dyn ListStore>,
}

/// API request body for the allocation endpoints.
///
/// `commande_id` stays optional at the deserialization level so a
/// missing value maps to a 400, not a framework rejection.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct RunApiRequest {
    /// The order's business identifier.
    commande_id: Option<String>,
    /// Receiving site, used by the reception endpoint.
    site: Option<String>,
    /// Receiving building, used by the reception endpoint.
    batiment: Option<String>,
    /// Receiving slot, used by the reception endpoint.
    emplacement: Option<String>,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::MissingInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            ApiError::AuthenticationFailed { .. }
            | ApiError::GatewayFailure { .. }
            | ApiError::Internal { .. } => {
                error!(error = %err, "Allocation run failed");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: err.to_string(),
                }
            }
        }
    }
}

/// Runs allocation for the request body in the given mode.
async fn run(
    state: &AppState,
    body: RunApiRequest,
    mode: RunMode,
) -> Result<Json<RunSummary>, HttpError> {
    let Some(order_id) = body.commande_id else {
        return Err(HttpError::from(ApiError::MissingInput {
            field: String::from("commande_id"),
        }));
    };
    info!(order_id = %order_id, "Allocation run requested");

    let request: RunRequest = RunRequest {
        order_id,
        receiving_site: body.site,
        receiving_building: body.batiment,
        receiving_slot: body.emplacement,
    };
    let summary: RunSummary = run_allocation(state.store.as_ref(), &request, mode).await?;
    info!(
        order_id = %summary.order_id,
        status = %summary.status,
        shortage_count = summary.shortages.len(),
        "Allocation run completed"
    );
    Ok(Json(summary))
}

/// POST /commandes/verification - read-only availability check.
async fn handle_verification(
    AxumState(state): AxumState<AppState>,
    Json(body): Json<RunApiRequest>,
) -> Result<Json<RunSummary>, HttpError> {
    run(&state, body, RunMode::Verify).await
}

/// POST /commandes/validation - read-only check kept as a distinct
/// route for contract compatibility.
async fn handle_validation(
    AxumState(state): AxumState<AppState>,
    Json(body): Json<RunApiRequest>,
) -> Result<Json<RunSummary>, HttpError> {
    run(&state, body, RunMode::Verify).await
}

/// POST /commandes/reception - commits allocations and advances the
/// order.
async fn handle_reception(
    AxumState(state): AxumState<AppState>,
    Json(body): Json<RunApiRequest>,
) -> Result<Json<RunSummary>, HttpError> {
    run(&state, body, RunMode::Commit).await
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/commandes/verification", post(handle_verification))
        .route("/commandes/validation", post(handle_validation))
        .route("/commandes/reception", post(handle_reception))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Stock Allocation Server");

    // Pick the backend (in-memory fixtures or the configured REST store)
    let store: Arc<dyn ListStore> = if args.in_memory {
        info!("Using in-memory demo fixtures");
        Arc::new(MemoryStore::with_demo_fixtures())
    } else {
        let config: GatewayConfig = GatewayConfig::from_env()?;
        info!(base_url = %config.base_url, "Using REST list store");
        Arc::new(RestStore::new(config))
    };

    let app_state: AppState = AppState { store };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
