//! Application configuration.
//!
//! Centralized configuration for the web app. In development these are
//! hardcoded; a production build would inject them at compile time.

/// Intake service base URL.
///
/// The `ars serve` backend that receives applications.
pub const INTAKE_URL: &str = "http://localhost:3000";

/// Product name shown in the header, footer and page titles.
pub const APP_NAME: &str = "AI Resume Scorer";

/// `accept` attribute of the résumé file input.
///
/// Only a hint for the browser's picker; the controller still checks the
/// MIME type and size of whatever is selected.
pub const RESUME_ACCEPT: &str = ".pdf,.docx";
