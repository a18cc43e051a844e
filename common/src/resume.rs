//! Résumé files: accepted formats, the size limit, and selection checks.

use serde::{Deserialize, Serialize};

use crate::error::FileRejection;

/// Largest accepted résumé, in bytes (5 MiB).
pub const MAX_RESUME_BYTES: u64 = 5 * 1024 * 1024;

/// MIME type of a PDF résumé.
pub const PDF_MIME: &str = "application/pdf";

/// MIME type of an Office Open XML word-processing résumé.
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Accepted résumé formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResumeKind {
    Pdf,
    Docx,
}

impl ResumeKind {
    /// Look up a format by its declared MIME type.
    pub fn from_mime(mime_type: &str) -> Option<Self> {
        match mime_type {
            PDF_MIME => Some(ResumeKind::Pdf),
            DOCX_MIME => Some(ResumeKind::Docx),
            _ => None,
        }
    }

    /// Guess a format from a file extension (case-insensitive, no dot).
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "pdf" => Some(ResumeKind::Pdf),
            "docx" => Some(ResumeKind::Docx),
            _ => None,
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ResumeKind::Pdf => PDF_MIME,
            ResumeKind::Docx => DOCX_MIME,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ResumeKind::Pdf => "pdf",
            ResumeKind::Docx => "docx",
        }
    }
}

/// A locally selected file, as seen by validation.
///
/// The browser hands us a `File` handle, the CLI and the intake service hold
/// bytes in memory. Both only need to expose what the checks look at.
pub trait ResumeSource {
    /// File name as selected by the user.
    fn file_name(&self) -> &str;

    /// Declared MIME type.
    fn mime_type(&self) -> &str;

    /// Size in bytes.
    fn size(&self) -> u64;
}

/// Check a candidate file before it is attached.
///
/// Type is checked before size, so a large file of the wrong type reports
/// the type problem.
pub fn check_resume<F: ResumeSource + ?Sized>(file: &F) -> Result<ResumeKind, FileRejection> {
    let kind = ResumeKind::from_mime(file.mime_type()).ok_or_else(|| {
        FileRejection::UnsupportedType {
            mime_type: file.mime_type().to_string(),
        }
    })?;

    if file.size() > MAX_RESUME_BYTES {
        return Err(FileRejection::TooLarge { size: file.size() });
    }

    Ok(kind)
}

/// In-memory résumé used by the CLI, the intake service and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeUpload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ResumeUpload {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }
}

impl ResumeSource for ResumeUpload {
    fn file_name(&self) -> &str {
        &self.file_name
    }

    fn mime_type(&self) -> &str {
        &self.mime_type
    }

    fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Metadata-only file so size limits can be tested without allocating.
    struct Stub {
        mime: &'static str,
        size: u64,
    }

    impl ResumeSource for Stub {
        fn file_name(&self) -> &str {
            "resume"
        }
        fn mime_type(&self) -> &str {
            self.mime
        }
        fn size(&self) -> u64 {
            self.size
        }
    }

    #[test]
    fn test_accepts_pdf_and_docx_up_to_limit() {
        let pdf = Stub { mime: PDF_MIME, size: 1024 * 1024 };
        assert_eq!(check_resume(&pdf), Ok(ResumeKind::Pdf));

        let docx = Stub { mime: DOCX_MIME, size: MAX_RESUME_BYTES };
        assert_eq!(check_resume(&docx), Ok(ResumeKind::Docx));
    }

    #[test]
    fn test_rejects_other_types() {
        for mime in ["text/plain", "application/msword", "image/png", ""] {
            let file = Stub { mime, size: 10 };
            assert!(matches!(
                check_resume(&file),
                Err(FileRejection::UnsupportedType { .. })
            ));
        }
    }

    #[test]
    fn test_rejects_oversized_even_with_valid_type() {
        let file = Stub { mime: PDF_MIME, size: MAX_RESUME_BYTES + 1 };
        assert_eq!(
            check_resume(&file),
            Err(FileRejection::TooLarge { size: MAX_RESUME_BYTES + 1 })
        );
    }

    #[test]
    fn test_type_checked_before_size() {
        let file = Stub { mime: "text/plain", size: 6 * 1024 * 1024 };
        assert!(matches!(
            check_resume(&file),
            Err(FileRejection::UnsupportedType { .. })
        ));
    }

    #[test]
    fn test_kind_from_extension() {
        assert_eq!(ResumeKind::from_extension("PDF"), Some(ResumeKind::Pdf));
        assert_eq!(ResumeKind::from_extension("docx"), Some(ResumeKind::Docx));
        assert_eq!(ResumeKind::from_extension("doc"), None);
    }
}
