//! # ARS Common - application intake domain
//!
//! Shared by the intake service, the CLI and the WebAssembly frontend, so
//! every side applies the same rules to an application.
//!
//! ## Workflow
//!
//! ```text
//! ┌──────────────┐  select_resume  ┌──────────────┐  begin_submit  ┌──────────────┐
//! │    Draft     │────────────────▶│  Validation  │───────────────▶│ IntakeClient │
//! │ (form state) │   set_field     │ (all fields) │                │  (multipart) │
//! └──────────────┘                 └──────────────┘                └──────┬───────┘
//!        ▲                                                                │ finish
//!        └──────── failure: draft kept ◀──────────┬──── success ──────────┘
//!                                                  ▼
//!                                         Submitted(tracking code)
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Workflow error types
//! - [`resume`] - Accepted résumé formats and the size limit
//! - [`draft`] - Draft and validated form
//! - [`validation`] - Field validation
//! - [`positions`] - Open positions
//! - [`submission`] - The submission state machine and client seam
//! - [`models`] - Product wire types
//! - [`format`] - Display helpers

// Core
pub mod error;
pub mod resume;
pub mod draft;
pub mod validation;
pub mod positions;

// Workflow
pub mod submission;

// Contracts & display
pub mod models;
pub mod format;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{FileRejection, FormLocked, IntakeError, SubmitBlocked, SubmitError};

pub use resume::{
    check_resume, ResumeKind, ResumeSource, ResumeUpload, DOCX_MIME, MAX_RESUME_BYTES, PDF_MIME,
};

pub use draft::{ApplicationDraft, ApplicationForm, Field, RESUME_PART};

pub use validation::{is_valid_email, validate_draft, ValidationErrors};

pub use positions::{is_open_position, open_position_titles, open_positions};

pub use submission::{
    FormState, IntakeClient, IntakeReceipt, SubmissionController, SubmissionOutcome,
    TrackingCode, TrackingOrigin, TRACKING_PREFIX,
};

pub use models::{
    ApiResponse, Application, ApplicationStatus, ApplicationStatusView, PaginatedResponse,
    Position, ScoreBreakdown,
};

pub use format::{format_date, format_file_size, format_megabytes, ScoreTier};
