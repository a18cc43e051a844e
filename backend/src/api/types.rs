//! REST API types for the intake endpoints.
//!
//! Bodies use camelCase, matching the browser client. Errors and lookups
//! use the shared `ApiResponse` envelope; the submit response is flat so
//! `trackingCode` sits at the top level where clients look for it.

use serde::{Deserialize, Serialize};

/// Body of a successful `POST /api/applications/submit`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub success: bool,
    pub tracking_code: String,
    pub message: String,
}

impl SubmitResponse {
    pub fn accepted(tracking_code: impl Into<String>) -> Self {
        Self {
            success: true,
            tracking_code: tracking_code.into(),
            message: "Application received".to_string(),
        }
    }
}
