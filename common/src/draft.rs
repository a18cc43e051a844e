//! The in-progress application and its validated, ready-to-send form.

use crate::resume::{ResumeKind, ResumeSource};
use crate::validation::{validate_draft, ValidationErrors};

/// Text fields of the application form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Position,
    CandidateName,
    Email,
    Phone,
    LinkedIn,
    CoverLetter,
}

impl Field {
    /// Every field, in form order.
    pub const ALL: [Field; 6] = [
        Field::Position,
        Field::CandidateName,
        Field::Email,
        Field::Phone,
        Field::LinkedIn,
        Field::CoverLetter,
    ];

    /// Multipart part name.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Field::Position => "position",
            Field::CandidateName => "candidateName",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::LinkedIn => "linkedIn",
            Field::CoverLetter => "coverLetter",
        }
    }

    pub fn from_wire_name(name: &str) -> Option<Self> {
        Field::ALL.into_iter().find(|f| f.wire_name() == name)
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, Field::LinkedIn | Field::CoverLetter)
    }
}

/// Multipart part name of the résumé file.
pub const RESUME_PART: &str = "resume";

/// Application being filled in.
///
/// Text fields are stored exactly as typed. The résumé is only attached
/// through [`crate::SubmissionController::select_resume`] on the client, which
/// checks it first; [`ApplicationDraft::set_resume`] is for callers that
/// re-validate the whole draft anyway, like the intake service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationDraft<F> {
    pub candidate_name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub linked_in: String,
    pub cover_letter: String,
    resume: Option<F>,
}

impl<F> Default for ApplicationDraft<F> {
    fn default() -> Self {
        Self {
            candidate_name: String::new(),
            email: String::new(),
            phone: String::new(),
            position: String::new(),
            linked_in: String::new(),
            cover_letter: String::new(),
            resume: None,
        }
    }
}

impl<F> ApplicationDraft<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Position => &self.position,
            Field::CandidateName => &self.candidate_name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::LinkedIn => &self.linked_in,
            Field::CoverLetter => &self.cover_letter,
        }
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Position => &mut self.position,
            Field::CandidateName => &mut self.candidate_name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::LinkedIn => &mut self.linked_in,
            Field::CoverLetter => &mut self.cover_letter,
        };
        *slot = value.into();
    }

    pub fn resume(&self) -> Option<&F> {
        self.resume.as_ref()
    }

    /// Attach `file`, replacing any previous one, without checking it.
    pub fn set_resume(&mut self, file: F) {
        self.resume = Some(file);
    }

    /// True when nothing has been entered or attached.
    pub fn is_blank(&self) -> bool {
        self.resume.is_none() && Field::ALL.iter().all(|f| self.field(*f).is_empty())
    }
}

/// A draft that passed validation, ready to be sent to the intake service.
///
/// Text values are trimmed; optional fields are `None` when left empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationForm<F> {
    pub candidate_name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub linked_in: Option<String>,
    pub cover_letter: Option<String>,
    pub resume: F,
    pub resume_kind: ResumeKind,
}

impl<F: ResumeSource + Clone> ApplicationForm<F> {
    /// Validate `draft` and build the form from it.
    ///
    /// Reports every problem at once; see [`validate_draft`].
    pub fn from_draft(draft: &ApplicationDraft<F>) -> Result<Self, ValidationErrors> {
        let errors = validate_draft(draft);
        if !errors.is_empty() {
            return Err(errors);
        }

        let resume = draft
            .resume()
            .cloned()
            .ok_or_else(ValidationErrors::missing_resume)?;
        let resume_kind =
            ResumeKind::from_mime(resume.mime_type()).ok_or_else(ValidationErrors::missing_resume)?;

        let optional = |value: &str| {
            let value = value.trim();
            (!value.is_empty()).then(|| value.to_string())
        };

        Ok(Self {
            candidate_name: draft.candidate_name.trim().to_string(),
            email: draft.email.clone(),
            phone: draft.phone.trim().to_string(),
            position: draft.position.trim().to_string(),
            linked_in: optional(&draft.linked_in),
            cover_letter: optional(&draft.cover_letter),
            resume,
            resume_kind,
        })
    }
}

impl<F> ApplicationForm<F> {
    /// Text parts of the multipart body, in send order.
    ///
    /// Required fields are always present; `linkedIn` and `coverLetter`
    /// only when they have a value. The résumé part is sent first, under
    /// [`RESUME_PART`], by the client.
    pub fn text_parts(&self) -> Vec<(&'static str, &str)> {
        let mut parts = vec![
            (Field::CandidateName.wire_name(), self.candidate_name.as_str()),
            (Field::Email.wire_name(), self.email.as_str()),
            (Field::Phone.wire_name(), self.phone.as_str()),
            (Field::Position.wire_name(), self.position.as_str()),
        ];
        if let Some(linked_in) = &self.linked_in {
            parts.push((Field::LinkedIn.wire_name(), linked_in.as_str()));
        }
        if let Some(cover_letter) = &self.cover_letter {
            parts.push((Field::CoverLetter.wire_name(), cover_letter.as_str()));
        }
        parts
    }
}
