//! Field validation for application drafts.
//!
//! Validation never short-circuits: every field is checked and every
//! failing field gets its own message, so the form can show them all at
//! once. The result is a pure function of the draft, so repeating an
//! invalid submit reports the same errors every time.
//!
//! | Field         | Rule                                            |
//! |---------------|-------------------------------------------------|
//! | position      | required, one of the open positions             |
//! | candidateName | required                                        |
//! | email         | required, `local@domain.tld` shape              |
//! | phone         | required, free-form                             |
//! | resume        | attached, PDF or DOCX, at most 5 MiB            |
//!
//! Whitespace-only values count as empty.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;

use crate::draft::{ApplicationDraft, Field};
use crate::positions::is_open_position;
use crate::resume::{check_resume, ResumeSource};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").expect("Invalid email pattern")
});

const MISSING_RESUME: &str = "Please upload your resume";

/// Whether `email` has the accepted shape. Does not trim.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Field-scoped validation messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: BTreeMap<Field, &'static str>,
    resume: Option<String>,
}

impl ValidationErrors {
    pub(crate) fn missing_resume() -> Self {
        Self {
            fields: BTreeMap::new(),
            resume: Some(MISSING_RESUME.to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.resume.is_none()
    }

    /// Number of failing fields, résumé included.
    pub fn len(&self) -> usize {
        self.fields.len() + usize::from(self.resume.is_some())
    }

    /// Message for `field`, if it failed.
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.fields.get(&field).copied()
    }

    /// Message for the résumé, if it failed.
    pub fn resume(&self) -> Option<&str> {
        self.resume.as_deref()
    }

    /// Failing text fields in form order.
    pub fn fields(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.fields.iter().map(|(f, m)| (*f, *m))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self
            .fields
            .values()
            .copied()
            .chain(self.resume.as_deref())
            .collect();
        f.write_str(&messages.join("; "))
    }
}

/// Check every field of `draft`.
pub fn validate_draft<F: ResumeSource>(draft: &ApplicationDraft<F>) -> ValidationErrors {
    let mut fields = BTreeMap::new();

    let position = draft.position.trim();
    if position.is_empty() {
        fields.insert(Field::Position, "Position is required");
    } else if !is_open_position(position) {
        fields.insert(Field::Position, "Please select one of the open positions");
    }

    if draft.candidate_name.trim().is_empty() {
        fields.insert(Field::CandidateName, "Name is required");
    }

    if draft.email.trim().is_empty() {
        fields.insert(Field::Email, "Email is required");
    } else if !is_valid_email(&draft.email) {
        fields.insert(Field::Email, "Invalid email address");
    }

    if draft.phone.trim().is_empty() {
        fields.insert(Field::Phone, "Phone is required");
    }

    let resume = match draft.resume() {
        None => Some(MISSING_RESUME.to_string()),
        Some(file) => check_resume(file).err().map(|e| e.to_string()),
    };

    ValidationErrors { fields, resume }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::{ResumeUpload, DOCX_MIME, PDF_MIME};

    fn valid_draft() -> ApplicationDraft<ResumeUpload> {
        let mut draft = ApplicationDraft::new();
        draft.set_field(Field::CandidateName, "John Doe");
        draft.set_field(Field::Email, "john@example.com");
        draft.set_field(Field::Phone, "555-0123");
        draft.set_field(Field::Position, "Data Scientist");
        draft.set_resume(ResumeUpload::new("cv.pdf", PDF_MIME, vec![1, 2, 3]));
        draft
    }

    #[test]
    fn test_email_shapes() {
        for ok in [
            "john@example.com",
            "JOHN.DOE+jobs@Mail.Example.ORG",
            "a_b%c-d@sub-domain.io",
        ] {
            assert!(is_valid_email(ok), "{ok}");
        }
        for bad in [
            "not-an-email",
            "john@example",
            "john@example.c",
            "@example.com",
            "john doe@example.com",
            "john@exa mple.com",
            "john@example.c0m",
        ] {
            assert!(!is_valid_email(bad), "{bad}");
        }
    }

    #[test]
    fn test_valid_draft_has_no_errors() {
        assert!(validate_draft(&valid_draft()).is_empty());
    }

    #[test]
    fn test_empty_draft_reports_every_required_field() {
        let draft: ApplicationDraft<ResumeUpload> = ApplicationDraft::new();
        let errors = validate_draft(&draft);

        assert_eq!(errors.len(), 5);
        assert_eq!(errors.get(Field::Position), Some("Position is required"));
        assert_eq!(errors.get(Field::CandidateName), Some("Name is required"));
        assert_eq!(errors.get(Field::Email), Some("Email is required"));
        assert_eq!(errors.get(Field::Phone), Some("Phone is required"));
        assert_eq!(errors.resume(), Some("Please upload your resume"));
        assert_eq!(errors.get(Field::LinkedIn), None);
        assert_eq!(errors.get(Field::CoverLetter), None);
    }

    #[test]
    fn test_each_missing_field_reported_alone() {
        for field in [Field::Position, Field::CandidateName, Field::Email, Field::Phone] {
            let mut draft = valid_draft();
            draft.set_field(field, "   ");
            let errors = validate_draft(&draft);
            assert_eq!(errors.len(), 1, "{field:?}");
            assert!(errors.get(field).is_some());
        }
    }

    #[test]
    fn test_malformed_email_only_flags_email() {
        let mut draft = valid_draft();
        draft.set_field(Field::Email, "not-an-email");

        let errors = validate_draft(&draft);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Email), Some("Invalid email address"));
    }

    #[test]
    fn test_padded_email_is_invalid() {
        let mut draft = valid_draft();
        draft.set_field(Field::Email, " john@example.com ");

        let errors = validate_draft(&draft);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Email), Some("Invalid email address"));
    }

    #[test]
    fn test_unknown_position() {
        let mut draft = valid_draft();
        draft.set_field(Field::Position, "Astronaut");
        assert_eq!(
            validate_draft(&draft).get(Field::Position),
            Some("Please select one of the open positions")
        );
    }

    #[test]
    fn test_attached_resume_is_rechecked() {
        let mut draft = valid_draft();
        draft.set_resume(ResumeUpload::new("cv.txt", "text/plain", vec![1]));
        assert_eq!(validate_draft(&draft).resume(), Some("Please upload a PDF or DOCX file"));

        draft.set_resume(ResumeUpload::new("cv.docx", DOCX_MIME, vec![1]));
        assert!(validate_draft(&draft).is_empty());
    }

    #[test]
    fn test_repeated_validation_is_stable() {
        let mut draft = valid_draft();
        draft.set_field(Field::Phone, "");
        draft.set_field(Field::Email, "nope");

        let first = validate_draft(&draft);
        let second = validate_draft(&draft);
        assert_eq!(first, second);
        assert_eq!(first.to_string(), "Invalid email address; Phone is required");
    }
}
