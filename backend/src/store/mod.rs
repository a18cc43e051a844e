//! Application Store - accepted applications keyed by tracking code
//!
//! Applications live in memory for the lifetime of the process. Résumé
//! bytes are not kept here; [`ResumeSpool`] writes them to disk when a
//! directory is configured.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tokio::sync::RwLock;
use uuid::Uuid;

use ars_common::{
    Application, ApplicationForm, ApplicationStatus, ResumeKind, ResumeUpload, TRACKING_PREFIX,
};

/// Number of hex characters after the `ARS-` prefix.
const CODE_HEX_LEN: usize = 8;

/// Fresh `ARS-XXXXXXXX` code (upper-case hex).
pub fn new_tracking_code() -> String {
    let hex = Uuid::new_v4().simple().to_string().to_uppercase();
    format!("{}{}", TRACKING_PREFIX, &hex[..CODE_HEX_LEN])
}

/// Relative location a résumé is recorded under.
pub fn resume_path(tracking_code: &str, kind: ResumeKind) -> String {
    format!("resumes/{}.{}", tracking_code, kind.extension())
}

/// In-memory application registry.
pub struct ApplicationStore {
    company_id: String,
    applications: RwLock<HashMap<String, Application>>,
}

impl ApplicationStore {
    pub fn new(company_id: impl Into<String>) -> Self {
        Self {
            company_id: company_id.into(),
            applications: RwLock::new(HashMap::new()),
        }
    }

    /// Record `form` under a new, unique tracking code.
    pub async fn insert(&self, form: &ApplicationForm<ResumeUpload>) -> Application {
        let mut applications = self.applications.write().await;

        let mut code = new_tracking_code();
        while applications.contains_key(&code) {
            code = new_tracking_code();
        }

        let now = chrono::Utc::now().to_rfc3339();
        let application = Application {
            id: code.clone(),
            candidate_name: form.candidate_name.clone(),
            email: form.email.clone(),
            phone: form.phone.clone(),
            linked_in: form.linked_in.clone(),
            position: form.position.clone(),
            resume_url: resume_path(&code, form.resume_kind),
            cover_letter: form.cover_letter.clone(),
            status: ApplicationStatus::New,
            ai_score: None,
            score_breakdown: None,
            created_at: now.clone(),
            updated_at: now,
            company_id: self.company_id.clone(),
        };

        applications.insert(code, application.clone());
        application
    }

    pub async fn get(&self, tracking_code: &str) -> Option<Application> {
        self.applications.read().await.get(tracking_code).cloned()
    }

    /// Remove an application, e.g. when its résumé could not be saved.
    pub async fn remove(&self, tracking_code: &str) -> Option<Application> {
        self.applications.write().await.remove(tracking_code)
    }

    pub async fn len(&self) -> usize {
        self.applications.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/// Writes accepted résumés under a directory.
pub struct ResumeSpool {
    dir: PathBuf,
}

impl ResumeSpool {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Save `resume` as `<dir>/<tracking code>.<ext>` and return the path.
    pub async fn save(
        &self,
        tracking_code: &str,
        kind: ResumeKind,
        resume: &ResumeUpload,
    ) -> std::io::Result<PathBuf> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let path = self.dir.join(format!("{}.{}", tracking_code, kind.extension()));
        tokio::fs::write(&path, &resume.bytes).await?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ars_common::{Field, ApplicationDraft, PDF_MIME};

    fn form() -> ApplicationForm<ResumeUpload> {
        let mut draft = ApplicationDraft::new();
        draft.set_field(Field::CandidateName, "John Doe");
        draft.set_field(Field::Email, "john@example.com");
        draft.set_field(Field::Phone, "555-0123");
        draft.set_field(Field::Position, "Data Scientist");
        draft.set_resume(ResumeUpload::new("cv.pdf", PDF_MIME, b"%PDF-1.7".to_vec()));
        ApplicationForm::from_draft(&draft).unwrap()
    }

    #[test]
    fn test_tracking_code_shape() {
        let code = new_tracking_code();
        assert_eq!(code.len(), TRACKING_PREFIX.len() + CODE_HEX_LEN);
        assert!(code.starts_with("ARS-"));
        assert!(code[4..].chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
    }

    #[tokio::test]
    async fn test_insert_and_lookup() {
        let store = ApplicationStore::new("acme");
        let first = store.insert(&form()).await;
        let second = store.insert(&form()).await;

        assert_ne!(first.id, second.id);
        assert_eq!(store.len().await, 2);

        let found = store.get(&first.id).await.unwrap();
        assert_eq!(found.status, ApplicationStatus::New);
        assert_eq!(found.company_id, "acme");
        assert_eq!(found.ai_score, None);
        assert_eq!(found.resume_url, format!("resumes/{}.pdf", first.id));

        assert!(store.get("ARS-00000000").await.is_none());
    }

    #[tokio::test]
    async fn test_spool_writes_resume() {
        let dir = tempfile::tempdir().unwrap();
        let spool = ResumeSpool::new(dir.path().join("nested"));
        let form = form();

        let path = spool.save("ARS-ABCDEF12", form.resume_kind, &form.resume).await.unwrap();
        assert_eq!(path.file_name().unwrap(), "ARS-ABCDEF12.pdf");
        assert_eq!(std::fs::read(&path).unwrap(), b"%PDF-1.7");
    }
}
