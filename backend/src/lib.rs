//! # ARS Intake - application intake service
//!
//! Receives job applications posted by the AI Resume Scorer web app and
//! hands out tracking codes applicants can use to follow up.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐  multipart  ┌─────────────┐  validate  ┌─────────────┐
//! │  Web app /  │────────────▶│   Intake    │───────────▶│   Store +   │
//! │  ars submit │◀────────────│   (axum)    │            │   Spool     │
//! └─────────────┘ trackingCode└─────────────┘            └─────────────┘
//! ```
//!
//! Validation rules are shared with the clients through `ars_common`, so
//! the service rejects exactly what the form would have rejected.
//!
//! ## Modules
//!
//! - [`error`] - Service error types
//! - [`config`] - Environment configuration
//! - [`store`] - In-memory application store and résumé spool
//! - [`client`] - `reqwest` intake client used by the CLI
//! - [`api`] - HTTP API server

// Core modules
pub mod error;
pub mod config;

// Storage
pub mod store;

// Client
pub mod client;

// HTTP API
pub mod api;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{ConfigError, ServerError, ServerResult};

pub use config::{intake_url_from_env, IntakeConfig, DEFAULT_INTAKE_URL, DEFAULT_PORT};

pub use store::{new_tracking_code, ApplicationStore, ResumeSpool};

pub use client::HttpIntakeClient;

pub use api::types::SubmitResponse;

// Server
pub mod server {
    pub use crate::api::server::{router, serve, start_server, AppState};
}
