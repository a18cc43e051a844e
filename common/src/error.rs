//! Error types for the application intake workflow.
//!
//! Every error here is local and correctable: none of them ends the
//! session, they only explain why an action was refused.
//!
//! - [`FileRejection`] - résumé refused at selection time
//! - [`FormLocked`] - edit attempted outside the `Editing` state
//! - [`SubmitBlocked`] - submit refused before any request was sent
//! - [`IntakeError`] - the intake request itself failed
//! - [`SubmitError`] - what [`crate::SubmissionController`] reports back

use thiserror::Error;

use crate::validation::ValidationErrors;

// =============================================================================
// Editing Errors
// =============================================================================

/// The form only accepts edits while it is in the `Editing` state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("The application form cannot be edited while it is {state}")]
pub struct FormLocked {
    /// Name of the state the form was in.
    pub state: &'static str,
}

/// Why a selected résumé was not attached.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileRejection {
    /// Neither PDF nor DOCX.
    #[error("Please upload a PDF or DOCX file")]
    UnsupportedType { mime_type: String },

    /// Larger than the 5 MiB limit.
    #[error("File size must be less than 5MB")]
    TooLarge { size: u64 },

    /// Selection arrived while the form was locked.
    #[error(transparent)]
    Locked(#[from] FormLocked),
}

// =============================================================================
// Submission Errors
// =============================================================================

/// Submit was refused synchronously; no request left the client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitBlocked {
    /// One or more fields (or the résumé) failed validation.
    #[error("{0}")]
    Invalid(ValidationErrors),

    /// A request for this draft is still outstanding.
    #[error("A submission is already in progress")]
    InFlight,

    /// The draft was already consumed by a successful submission.
    #[error("This application has already been submitted")]
    AlreadySubmitted,

    /// A response arrived while no submission was outstanding.
    #[error("No submission is in progress")]
    Idle,
}

/// Failure of the outbound intake request.
///
/// The controller does not distinguish between these: all of them end the
/// attempt the same way. They are kept apart for logging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntakeError {
    /// The request could not be built.
    #[error("Failed to build request: {0}")]
    Request(String),

    /// Network or transport failure.
    #[error("HTTP request failed: {0}")]
    Transport(String),

    /// The service answered with a non-success status.
    #[error("Server error ({0})")]
    Status(u16),

    /// 2xx answer whose body was not usable JSON.
    #[error("Failed to parse response: {0}")]
    MalformedResponse(String),
}

/// Result of driving a submission through the controller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Refused before sending.
    #[error(transparent)]
    Blocked(#[from] SubmitBlocked),

    /// Sent, but the attempt failed. The draft is kept for a retry.
    #[error("Failed to submit application. Please try again.")]
    Failed(#[source] IntakeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_message_hides_cause() {
        let err = SubmitError::Failed(IntakeError::Status(500));
        assert_eq!(err.to_string(), "Failed to submit application. Please try again.");

        let source = std::error::Error::source(&err).map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("Server error (500)"));
    }

    #[test]
    fn test_locked_converts_into_file_rejection() {
        let rejection: FileRejection = FormLocked { state: "submitting" }.into();
        assert!(rejection.to_string().contains("submitting"));
    }
}
