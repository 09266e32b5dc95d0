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
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use clap::Parser;
use guardia_api::{
    ApiError, GroupRotationRequest, InMemoryWorkerDirectory, ListGroupsResponse,
    RotationStateResponse, WorkerDirectory, WorkerRotationRequest, WorkerRotationResponse,
    get_group_rotation, get_worker_rotation, list_groups, translate_domain_error,
};
use guardia_domain::{Tz, parse_timezone, today_in};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use time::Date;
use tracing::{error, info};

/// Guardia Server - HTTP server for shift rotation states
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,

    /// IANA timezone used to decide what "today" is when no date is given
    #[arg(short, long, default_value = "Europe/Madrid")]
    timezone: String,

    /// Path to a JSON worker roster. If not provided, the worker directory is empty.
    #[arg(short, long)]
    roster: Option<String>,
}

/// Application state shared across handlers.
///
/// The worker directory is read-only, so it is shared without locking.
#[derive(Clone)]
struct AppState {
    /// Lookup of worker records.
    directory: Arc<dyn WorkerDirectory + Send + Sync>,
    /// Timezone that defines the current date.
    timezone: Tz,
}

impl AppState {
    /// Returns the current date in the configured timezone.
    fn today(&self) -> Result<Date, HttpError> {
        today_in(self.timezone)
            .map_err(translate_domain_error)
            .map_err(HttpError::from)
    }
}

/// Query parameters for a group's rotation.
#[derive(Debug, Deserialize)]
struct GroupRotationQuery {
    /// The group code.
    group: Option<String>,
    /// The date (`DD/MM/YYYY`).
    date: Option<String>,
}

/// Query parameters for a worker's rotation.
#[derive(Debug, Deserialize)]
struct WorkerRotationQuery {
    /// The date (`DD/MM/YYYY`).
    date: Option<String>,
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
#[derive(Debug)]
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
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: err.to_string(),
                }
            }
        }
    }
}

/// Handler for GET `/rotation` endpoint.
///
/// Resolves the rotation state of a group on a date.
async fn handle_get_rotation(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<GroupRotationQuery>,
) -> Result<Json<RotationStateResponse>, HttpError> {
    info!(group = ?query.group, date = ?query.date, "Handling get_rotation request");

    let request: GroupRotationRequest = GroupRotationRequest {
        group: query.group,
        date: query.date,
    };
    let response: RotationStateResponse = get_group_rotation(&request, app_state.today()?)?;

    Ok(Json(response))
}

/// Handler for GET `/workers/{worker_id}/rotation` endpoint.
///
/// Resolves the rotation state of a worker's group on a date.
async fn handle_get_worker_rotation(
    AxumState(app_state): AxumState<AppState>,
    Path(worker_id): Path<String>,
    Query(query): Query<WorkerRotationQuery>,
) -> Result<Json<WorkerRotationResponse>, HttpError> {
    info!(worker_id = %worker_id, date = ?query.date, "Handling get_worker_rotation request");

    let request: WorkerRotationRequest = WorkerRotationRequest {
        worker_id,
        date: query.date,
    };
    let response: WorkerRotationResponse =
        get_worker_rotation(app_state.directory.as_ref(), &request, app_state.today()?)?;

    Ok(Json(response))
}

/// Handler for GET `/groups` endpoint.
async fn handle_list_groups() -> Json<ListGroupsResponse> {
    info!("Handling list_groups request");
    Json(list_groups())
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/rotation", get(handle_get_rotation))
        .route(
            "/workers/{worker_id}/rotation",
            get(handle_get_worker_rotation),
        )
        .route("/groups", get(handle_list_groups))
        .with_state(app_state)
}

/// Loads the worker directory from a roster file, or an empty one.
fn load_directory(
    roster: Option<&str>,
) -> Result<InMemoryWorkerDirectory, Box<dyn std::error::Error>> {
    let Some(path) = roster else {
        info!("No roster given, worker directory is empty");
        return Ok(InMemoryWorkerDirectory::new());
    };

    let json: String = std::fs::read_to_string(path)?;
    let directory: InMemoryWorkerDirectory = InMemoryWorkerDirectory::from_json(&json)?;
    info!(path = %path, workers = directory.len(), "Loaded worker roster");

    Ok(directory)
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

    info!("Initializing Guardia Server");

    let timezone: Tz = parse_timezone(&args.timezone)?;
    info!(timezone = %timezone, "Using timezone for the current date");

    let app_state: AppState = AppState {
        directory: Arc::new(load_directory(args.roster.as_deref())?),
        timezone,
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
