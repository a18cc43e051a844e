//! Error types for the intake service and CLI.
//!
//! - [`ConfigError`] - environment configuration errors
//! - [`ServerError`] - request handling errors, rendered as JSON
//!
//! Client-side submission errors live in `ars_common::error`, since the
//! web app reports the same ones.

use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use ars_common::{ApiResponse, FileRejection};

// =============================================================================
// Configuration Errors
// =============================================================================

/// Errors while reading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Port is not a valid `u16`.
    #[error("ARS_PORT must be a valid port number, got '{0}'")]
    InvalidPort(String),
}

// =============================================================================
// Server Errors
// =============================================================================

/// Errors while handling an intake request.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Malformed or oversized multipart body.
    #[error("Multipart error: {0}")]
    Multipart(#[from] MultipartError),

    /// The résumé part is missing its bytes or failed the file checks.
    #[error("{0}")]
    InvalidResume(FileRejection),

    /// One or more fields failed validation.
    #[error("{0}")]
    Validation(String),

    /// Unknown tracking code.
    #[error("Application not found: {0}")]
    NotFound(String),

    /// Résumé spooling failed.
    #[error("Failed to store resume: {0}")]
    Storage(#[from] std::io::Error),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::Multipart(e) => e.status(),
            ServerError::InvalidResume(FileRejection::TooLarge { .. }) => StatusCode::PAYLOAD_TOO_LARGE,
            ServerError::InvalidResume(_) | ServerError::Validation(_) => StatusCode::BAD_REQUEST,
            ServerError::NotFound(_) => StatusCode::NOT_FOUND,
            ServerError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// What the caller can do about it.
    pub fn hint(&self) -> &'static str {
        match self {
            ServerError::Multipart(_) | ServerError::InvalidResume(_) | ServerError::Validation(_) => {
                "Please correct the application and submit again."
            }
            ServerError::NotFound(_) => "Check the tracking code and try again.",
            ServerError::Storage(_) => "Please try again later.",
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("Rejected request ({}): {}", status.as_u16(), self);
        }
        let body = ApiResponse::<()>::error(self.to_string()).with_message(self.hint());
        (status, Json(body)).into_response()
    }
}

/// Result type for request handlers.
pub type ServerResult<T> = Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let too_large = ServerError::InvalidResume(FileRejection::TooLarge { size: 6 << 20 });
        assert_eq!(too_large.status(), StatusCode::PAYLOAD_TOO_LARGE);

        let wrong_type = ServerError::InvalidResume(FileRejection::UnsupportedType {
            mime_type: "text/plain".into(),
        });
        assert_eq!(wrong_type.status(), StatusCode::BAD_REQUEST);
        assert_eq!(wrong_type.to_string(), "Please upload a PDF or DOCX file");

        assert_eq!(ServerError::NotFound("ARS-X".into()).status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_hints() {
        assert_eq!(
            ServerError::Validation("Phone is required".into()).hint(),
            "Please correct the application and submit again."
        );
        assert_eq!(
            ServerError::NotFound("ARS-X".into()).hint(),
            "Check the tracking code and try again."
        );
    }
}
