//! HTTP service for submitting applications to the intake backend.

use gloo_net::http::Request;
use web_sys::FormData;

use ars_common::{
    ApiResponse, ApplicationForm, ApplicationStatusView, IntakeClient, IntakeError, IntakeReceipt,
    ResumeSource, RESUME_PART,
};

use crate::types::BrowserResume;

/// Intake client backed by the browser's `fetch`.
#[derive(Clone, Debug)]
pub struct GlooIntakeClient {
    base_url: String,
}

impl GlooIntakeClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn submit_url(&self) -> String {
        format!("{}/api/applications/submit", self.base_url)
    }

    pub fn status_url(&self, tracking_code: &str) -> String {
        format!("{}/api/applications/{}", self.base_url, tracking_code.trim())
    }

    /// Build the multipart body: résumé first, then the text fields.
    fn form_data(form: &ApplicationForm<BrowserResume>) -> Result<FormData, IntakeError> {
        let form_data = FormData::new()
            .map_err(|e| IntakeError::Request(format!("Failed to create FormData: {:?}", e)))?;

        form_data
            .append_with_blob_and_filename(RESUME_PART, form.resume.file(), form.resume.file_name())
            .map_err(|e| IntakeError::Request(format!("Failed to append file: {:?}", e)))?;

        for (name, value) in form.text_parts() {
            form_data
                .append_with_str(name, value)
                .map_err(|e| IntakeError::Request(format!("Failed to append {}: {:?}", name, e)))?;
        }

        Ok(form_data)
    }

    /// Look up an application by tracking code.
    pub async fn application_status(
        &self,
        tracking_code: &str,
    ) -> Result<ApplicationStatusView, IntakeError> {
        let response = Request::get(&self.status_url(tracking_code))
            .send()
            .await
            .map_err(|e| IntakeError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(IntakeError::Status(response.status()));
        }

        let envelope = response
            .json::<ApiResponse<ApplicationStatusView>>()
            .await
            .map_err(|e| IntakeError::MalformedResponse(e.to_string()))?;

        envelope
            .data
            .ok_or_else(|| IntakeError::MalformedResponse("response has no data".to_string()))
    }
}

impl IntakeClient<BrowserResume> for GlooIntakeClient {
    async fn submit(
        &self,
        form: &ApplicationForm<BrowserResume>,
    ) -> Result<IntakeReceipt, IntakeError> {
        let request = Request::post(&self.submit_url())
            .body(Self::form_data(form)?)
            .map_err(|e| IntakeError::Request(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| IntakeError::Transport(e.to_string()))?;

        if !response.ok() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            log::warn!("Intake service error ({}): {}", response.status(), error_text);
            return Err(IntakeError::Status(response.status()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| IntakeError::Transport(e.to_string()))?;
        IntakeReceipt::from_json(&body)
    }
}
