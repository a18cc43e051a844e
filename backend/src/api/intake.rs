//! Reading an application out of a multipart request.
//!
//! The service trusts nothing the browser checked: the draft rebuilt here
//! goes through the same file checks and field validation as the client.

use axum::extract::Multipart;

use ars_common::{
    check_resume, ApplicationDraft, ApplicationForm, Field, ResumeUpload, RESUME_PART,
};

use crate::error::{ServerError, ServerResult};

/// Collect the parts of `multipart` into a draft.
///
/// Unknown parts are ignored. A repeated part replaces the earlier one.
pub async fn read_draft(mut multipart: Multipart) -> ServerResult<ApplicationDraft<ResumeUpload>> {
    let mut draft = ApplicationDraft::new();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or("").to_string();

        if name == RESUME_PART {
            let file_name = field.file_name().unwrap_or("resume").to_string();
            let mime_type = field.content_type().unwrap_or("").to_string();
            let bytes = field.bytes().await?.to_vec();
            draft.set_resume(ResumeUpload::new(file_name, mime_type, bytes));
            continue;
        }

        match Field::from_wire_name(&name) {
            Some(form_field) => {
                let value = field.text().await?;
                draft.set_field(form_field, value);
            }
            None => log::debug!("Ignoring unknown multipart field '{}'", name),
        }
    }

    Ok(draft)
}

/// Validate a received draft.
///
/// The résumé is checked first so an oversized or wrong-type file gets its
/// own status; field problems are reported together.
pub fn accept_draft(
    draft: &ApplicationDraft<ResumeUpload>,
) -> ServerResult<ApplicationForm<ResumeUpload>> {
    if let Some(resume) = draft.resume() {
        check_resume(resume).map_err(ServerError::InvalidResume)?;
    }

    ApplicationForm::from_draft(draft).map_err(|errors| ServerError::Validation(errors.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ars_common::{FileRejection, MAX_RESUME_BYTES, PDF_MIME};

    fn draft_with(resume: Option<ResumeUpload>) -> ApplicationDraft<ResumeUpload> {
        let mut draft = ApplicationDraft::new();
        draft.set_field(Field::CandidateName, "Jane Roe");
        draft.set_field(Field::Email, "jane@example.org");
        draft.set_field(Field::Phone, "+1-555-0199");
        draft.set_field(Field::Position, "Product Designer");
        if let Some(resume) = resume {
            draft.set_resume(resume);
        }
        draft
    }

    #[test]
    fn test_accepts_valid_draft() {
        let draft = draft_with(Some(ResumeUpload::new("cv.pdf", PDF_MIME, vec![1])));
        let form = accept_draft(&draft).unwrap();
        assert_eq!(form.position, "Product Designer");
    }

    #[test]
    fn test_oversized_resume_reported_before_fields() {
        let mut draft = draft_with(Some(ResumeUpload::new(
            "cv.pdf",
            PDF_MIME,
            vec![0; MAX_RESUME_BYTES as usize + 1],
        )));
        draft.set_field(Field::Email, "");

        match accept_draft(&draft) {
            Err(ServerError::InvalidResume(FileRejection::TooLarge { .. })) => {}
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_missing_resume_and_fields_reported_together() {
        let mut draft = draft_with(None);
        draft.set_field(Field::Phone, " ");

        match accept_draft(&draft) {
            Err(ServerError::Validation(message)) => {
                assert_eq!(message, "Phone is required; Please upload your resume");
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
