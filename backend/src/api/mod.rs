//! HTTP API module.
//!
//! The reference Application Intake Service: multipart submission, status
//! lookup and the open-position catalog.

pub mod intake;
pub mod server;
pub mod types;

pub use server::{router, serve, start_server, AppState, MAX_BODY_BYTES};
pub use types::*;
