//! HTTP server for the application intake API.
//!
//! # API Endpoints
//!
//! | Method | Path                                 | Description                   |
//! |--------|--------------------------------------|-------------------------------|
//! | GET    | `/health`                            | Health check                  |
//! | GET    | `/api/positions`                     | Open positions                |
//! | POST   | `/api/applications/submit`           | Submit an application         |
//! | GET    | `/api/applications/{trackingCode}`   | Status of an application      |

use axum::{
    extract::{DefaultBodyLimit, Multipart, Path, State},
    http::{header, Method, StatusCode},
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use ars_common::{open_positions, ApiResponse, ApplicationStatusView, Position, MAX_RESUME_BYTES};

use super::intake::{accept_draft, read_draft};
use super::types::SubmitResponse;
use crate::config::IntakeConfig;
use crate::error::{ServerError, ServerResult};
use crate::store::{ApplicationStore, ResumeSpool};

/// Room for the text fields and multipart framing on top of the résumé.
const FORM_OVERHEAD_BYTES: usize = 1024 * 1024;

/// Largest request body accepted on the submit route.
pub const MAX_BODY_BYTES: usize = MAX_RESUME_BYTES as usize + FORM_OVERHEAD_BYTES;

/// Shared state of the intake service.
pub struct AppState {
    pub store: ApplicationStore,
    pub spool: Option<ResumeSpool>,
}

impl AppState {
    pub fn new(config: &IntakeConfig) -> Self {
        Self {
            store: ApplicationStore::new(config.company_id.clone()),
            spool: config.resume_dir.as_ref().map(ResumeSpool::new),
        }
    }
}

/// Build the intake router.
pub fn router(state: Arc<AppState>) -> Router {
    // Permissive CORS: the web app is served from its own origin
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(health))
        .route("/health", get(health))
        .route("/api/positions", get(positions))
        .route(
            "/api/applications/submit",
            post(submit_application).layer(DefaultBodyLimit::max(MAX_BODY_BYTES)),
        )
        .route("/api/applications/{tracking_code}", get(application_status))
        .layer(cors)
        .with_state(state)
}

/// Serve on an already bound listener until the process stops.
pub async fn serve(listener: TcpListener, config: &IntakeConfig) -> std::io::Result<()> {
    let state = Arc::new(AppState::new(config));
    if let Some(spool) = &state.spool {
        log::info!("Saving resumes under {}", spool.dir().display());
    }
    axum::serve(listener, router(state)).await
}

/// Bind the configured port and serve.
pub async fn start_server(config: IntakeConfig) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;

    println!("🚀 Intake service running on http://localhost:{}", config.port);
    println!("   POST /api/applications/submit      - Submit an application");
    println!("   GET  /api/applications/{{code}}      - Application status");
    println!("   GET  /api/positions                - Open positions");
    println!("   GET  /health                       - Health check");
    println!();

    serve(listener, &config).await
}

/// Health check endpoint
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "ars-intake",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "submit": "POST /api/applications/submit",
            "status": "GET /api/applications/{trackingCode}",
            "positions": "GET /api/positions"
        }
    }))
}

async fn positions() -> Json<ApiResponse<Vec<Position>>> {
    Json(ApiResponse::ok(open_positions()))
}

/// Submit endpoint
async fn submit_application(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> ServerResult<(StatusCode, Json<SubmitResponse>)> {
    let draft = read_draft(multipart).await?;
    let form = accept_draft(&draft)?;

    let application = state.store.insert(&form).await;

    if let Some(spool) = &state.spool {
        if let Err(e) = spool.save(&application.id, form.resume_kind, &form.resume).await {
            state.store.remove(&application.id).await;
            return Err(ServerError::Storage(e));
        }
    }

    log::info!(
        "📄 Application {} received: {} for '{}' ({}, {} bytes)",
        application.id,
        application.candidate_name,
        application.position,
        form.resume.file_name,
        form.resume.bytes.len()
    );

    Ok((StatusCode::CREATED, Json(SubmitResponse::accepted(application.id))))
}

/// Status lookup endpoint
async fn application_status(
    State(state): State<Arc<AppState>>,
    Path(tracking_code): Path<String>,
) -> ServerResult<Json<ApiResponse<ApplicationStatusView>>> {
    let tracking_code = tracking_code.trim().to_string();
    let application = match state.store.get(&tracking_code).await {
        Some(application) => application,
        None => return Err(ServerError::NotFound(tracking_code)),
    };

    Ok(Json(ApiResponse::ok(ApplicationStatusView::from(&application))))
}
