//! Types used across the web app.
//!
//! # Categories
//!
//! - **File Types** - browser file handle adapted for the shared controller
//! - **Notice Types** - one-line feedback shown above the form

use web_sys::File;

use ars_common::ResumeSource;

// =============================================================================
// File Types
// =============================================================================

/// A résumé picked in the browser.
///
/// `File` getters return owned strings, so name and type are read once on
/// selection and cached.
#[derive(Clone, Debug)]
pub struct BrowserResume {
    file: File,
    name: String,
    mime_type: String,
    size: u64,
}

impl BrowserResume {
    pub fn file(&self) -> &File {
        &self.file
    }
}

impl From<File> for BrowserResume {
    fn from(file: File) -> Self {
        Self {
            name: file.name(),
            mime_type: file.type_(),
            size: file.size() as u64,
            file,
        }
    }
}

impl ResumeSource for BrowserResume {
    fn file_name(&self) -> &str {
        &self.name
    }

    fn mime_type(&self) -> &str {
        &self.mime_type
    }

    fn size(&self) -> u64 {
        self.size
    }
}

// =============================================================================
// Notice Types
// =============================================================================

/// Severity of a notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

impl NoticeLevel {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeLevel::Info => "notice notice-info",
            NoticeLevel::Error => "notice notice-error",
        }
    }
}

/// Feedback shown above the form, replaced by the next one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Info, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, message: message.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_classes() {
        assert_eq!(Notice::error("x").level.css_class(), "notice notice-error");
    }
}
