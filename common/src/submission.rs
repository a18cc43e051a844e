//! Submission workflow controller.
//!
//! Drives one application form through its lifecycle:
//!
//! ```text
//!            begin_submit            finish(Ok)
//!  Editing ───────────────▶ Submitting ───────────▶ Submitted
//!     ▲                         │                        │
//!     └──────── finish(Err) ────┘                        │
//!     └──────────────────────── reset ───────────────────┘
//! ```
//!
//! The state is a single tagged value, so "submitting" and "submitted" can
//! never hold at once, and a second request cannot be started while one is
//! outstanding: `begin_submit` only succeeds from `Editing`.
//!
//! The controller never performs I/O on its own. Callers either use
//! [`SubmissionController::submit`] with an [`IntakeClient`], or split the
//! call into [`SubmissionController::begin_submit`] and
//! [`SubmissionController::finish`] when the request has to run outside a
//! borrow of the controller (a spawned browser task, for instance).

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::draft::{ApplicationDraft, ApplicationForm, Field};
use crate::error::{FileRejection, FormLocked, IntakeError, SubmitBlocked, SubmitError};
use crate::resume::{check_resume, ResumeSource};

/// Prefix of every tracking code.
pub const TRACKING_PREFIX: &str = "ARS-";

// =============================================================================
// Outcome Types
// =============================================================================

/// Where a tracking code came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackingOrigin {
    /// Issued by the intake service. Authoritative.
    Issued,
    /// Synthesized locally because the service did not return one.
    Provisional,
}

/// Identifier the applicant keeps to check on their application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingCode {
    pub code: String,
    pub origin: TrackingOrigin,
}

impl TrackingCode {
    pub fn issued(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            origin: TrackingOrigin::Issued,
        }
    }

    /// `ARS-<epoch millis>` for the current time.
    ///
    /// Stand-in until the intake service always issues codes; it is not
    /// known to the service and cannot be looked up.
    pub fn provisional() -> Self {
        Self::provisional_at(chrono::Utc::now().timestamp_millis())
    }

    pub fn provisional_at(epoch_millis: i64) -> Self {
        Self {
            code: format!("{TRACKING_PREFIX}{epoch_millis}"),
            origin: TrackingOrigin::Provisional,
        }
    }

    pub fn is_provisional(&self) -> bool {
        self.origin == TrackingOrigin::Provisional
    }

    pub fn as_str(&self) -> &str {
        &self.code
    }
}

impl fmt::Display for TrackingCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

/// Recorded after a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionOutcome {
    pub tracking_code: TrackingCode,
}

/// What the intake service acknowledged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntakeReceipt {
    pub tracking_code: Option<String>,
}

impl IntakeReceipt {
    /// Read a 2xx response body.
    ///
    /// The body must be a JSON object. A non-empty string `trackingCode` is
    /// taken as issued, exactly as sent; absent, empty or non-string leaves
    /// it unset.
    pub fn from_json(body: &str) -> Result<Self, IntakeError> {
        let value: Value = serde_json::from_str(body)
            .map_err(|e| IntakeError::MalformedResponse(e.to_string()))?;

        let object = value.as_object().ok_or_else(|| {
            IntakeError::MalformedResponse("expected a JSON object".to_string())
        })?;

        let tracking_code = object
            .get("trackingCode")
            .and_then(Value::as_str)
            .filter(|code| !code.is_empty())
            .map(str::to_string);

        Ok(Self { tracking_code })
    }

    fn into_outcome(self) -> SubmissionOutcome {
        let tracking_code = match self.tracking_code {
            Some(code) => TrackingCode::issued(code),
            None => {
                log::warn!("Intake service returned no tracking code; using a provisional one");
                TrackingCode::provisional()
            }
        };
        SubmissionOutcome { tracking_code }
    }
}

// =============================================================================
// Intake Client Seam
// =============================================================================

/// Sends a validated application to the intake service.
///
/// One call is one request: no retries, no cancellation. Implementations map
/// every failure (transport, non-2xx, unreadable body) to an
/// [`IntakeError`].
#[allow(async_fn_in_trait)]
pub trait IntakeClient<F> {
    async fn submit(&self, form: &ApplicationForm<F>) -> Result<IntakeReceipt, IntakeError>;
}

// =============================================================================
// State Machine
// =============================================================================

/// Where the form is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState<F> {
    /// Accepting edits.
    Editing(ApplicationDraft<F>),
    /// Request outstanding. The draft is held so a failure can restore it.
    Submitting(ApplicationDraft<F>),
    /// Done; kept until the applicant starts another application.
    Submitted(SubmissionOutcome),
}

impl<F> FormState<F> {
    pub fn name(&self) -> &'static str {
        match self {
            FormState::Editing(_) => "editing",
            FormState::Submitting(_) => "submitting",
            FormState::Submitted(_) => "submitted",
        }
    }
}

impl<F> Default for FormState<F> {
    fn default() -> Self {
        FormState::Editing(ApplicationDraft::default())
    }
}

/// Owns the application form state and enforces its transitions.
#[derive(Debug, Clone)]
pub struct SubmissionController<F> {
    state: FormState<F>,
}

impl<F> Default for SubmissionController<F> {
    fn default() -> Self {
        Self {
            state: FormState::default(),
        }
    }
}

impl<F: ResumeSource + Clone> SubmissionController<F> {
    /// Start with an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FormState<F> {
        &self.state
    }

    /// Current draft, while one exists.
    pub fn draft(&self) -> Option<&ApplicationDraft<F>> {
        match &self.state {
            FormState::Editing(draft) | FormState::Submitting(draft) => Some(draft),
            FormState::Submitted(_) => None,
        }
    }

    pub fn outcome(&self) -> Option<&SubmissionOutcome> {
        match &self.state {
            FormState::Submitted(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Whether the submit affordance should be enabled.
    pub fn can_submit(&self) -> bool {
        matches!(self.state, FormState::Editing(_))
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, FormState::Submitting(_))
    }

    fn editing_mut(&mut self) -> Result<&mut ApplicationDraft<F>, FormLocked> {
        match &mut self.state {
            FormState::Editing(draft) => Ok(draft),
            other => Err(FormLocked { state: other.name() }),
        }
    }

    /// Update one text field.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> Result<(), FormLocked> {
        self.editing_mut()?.set_field(field, value);
        Ok(())
    }

    /// Check `file` and attach it, replacing any previous résumé.
    ///
    /// A rejected file is dropped and the current attachment is kept.
    pub fn select_resume(&mut self, file: F) -> Result<(), FileRejection> {
        let draft = self.editing_mut()?;
        if let Err(rejection) = check_resume(&file) {
            log::debug!("Rejected resume '{}': {}", file.file_name(), rejection);
            return Err(rejection);
        }
        log::debug!("Attached resume '{}' ({} bytes)", file.file_name(), file.size());
        draft.set_resume(file);
        Ok(())
    }

    /// Validate the draft and move to `Submitting`.
    ///
    /// Returns the form to send. On rejection nothing changes and no request
    /// should be made.
    pub fn begin_submit(&mut self) -> Result<ApplicationForm<F>, SubmitBlocked> {
        let form = match &self.state {
            FormState::Editing(draft) => {
                ApplicationForm::from_draft(draft).map_err(SubmitBlocked::Invalid)?
            }
            FormState::Submitting(_) => return Err(SubmitBlocked::InFlight),
            FormState::Submitted(_) => return Err(SubmitBlocked::AlreadySubmitted),
        };

        if let FormState::Editing(draft) = std::mem::take(&mut self.state) {
            self.state = FormState::Submitting(draft);
        }
        log::debug!("Submitting application for '{}'", form.position);
        Ok(form)
    }

    /// Apply the result of the request started by [`Self::begin_submit`].
    ///
    /// Success clears the draft and records the outcome. Failure of any kind
    /// puts the untouched draft back into `Editing`.
    pub fn finish(
        &mut self,
        result: Result<IntakeReceipt, IntakeError>,
    ) -> Result<SubmissionOutcome, SubmitError> {
        let draft = match std::mem::take(&mut self.state) {
            FormState::Submitting(draft) => draft,
            other => {
                self.state = other;
                return Err(SubmitBlocked::Idle.into());
            }
        };

        match result {
            Ok(receipt) => {
                let outcome = receipt.into_outcome();
                log::info!("Application submitted, tracking code {}", outcome.tracking_code);
                self.state = FormState::Submitted(outcome.clone());
                Ok(outcome)
            }
            Err(cause) => {
                log::warn!("Application submission failed: {}", cause);
                self.state = FormState::Editing(draft);
                Err(SubmitError::Failed(cause))
            }
        }
    }

    /// Validate, send through `client`, and apply the result.
    pub async fn submit<C>(&mut self, client: &C) -> Result<SubmissionOutcome, SubmitError>
    where
        C: IntakeClient<F>,
    {
        let form = self.begin_submit()?;
        let result = client.submit(&form).await;
        self.finish(result)
    }

    /// Leave `Submitted` for a fresh, empty draft.
    ///
    /// Only meaningful after a success; in other states it is ignored so a
    /// stray click cannot wipe a draft or an in-flight submission.
    pub fn reset(&mut self) {
        if let FormState::Submitted(_) = self.state {
            self.state = FormState::default();
        }
    }
}
