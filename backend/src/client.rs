//! HTTP client for the intake service.
//!
//! Native counterpart of the browser client: the CLI and the integration
//! tests drive the shared `SubmissionController` through it.

use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;

use ars_common::{
    ApiResponse, ApplicationForm, ApplicationStatusView, IntakeClient, IntakeError, IntakeReceipt,
    Position, ResumeUpload, RESUME_PART,
};

/// Talks to an intake service at `base_url`.
#[derive(Clone)]
pub struct HttpIntakeClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpIntakeClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn submit_url(&self) -> String {
        format!("{}/api/applications/submit", self.base_url)
    }

    /// Look up the status of a submitted application.
    pub async fn application_status(
        &self,
        tracking_code: &str,
    ) -> Result<ApplicationStatusView, IntakeError> {
        let url = format!("{}/api/applications/{}", self.base_url, tracking_code.trim());
        self.get_envelope(&url).await
    }

    /// Fetch the open-position catalog.
    pub async fn positions(&self) -> Result<Vec<Position>, IntakeError> {
        let url = format!("{}/api/positions", self.base_url);
        self.get_envelope(&url).await
    }

    async fn get_envelope<T: DeserializeOwned>(&self, url: &str) -> Result<T, IntakeError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| IntakeError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(IntakeError::Status(response.status().as_u16()));
        }

        let envelope: ApiResponse<T> = response
            .json()
            .await
            .map_err(|e| IntakeError::MalformedResponse(e.to_string()))?;

        envelope.data.ok_or_else(|| {
            IntakeError::MalformedResponse(
                envelope.error.unwrap_or_else(|| "response has no data".to_string()),
            )
        })
    }

    fn multipart(form: &ApplicationForm<ResumeUpload>) -> Result<Form, IntakeError> {
        let resume = Part::bytes(form.resume.bytes.clone())
            .file_name(form.resume.file_name.clone())
            .mime_str(form.resume_kind.mime_type())
            .map_err(|e| IntakeError::Request(e.to_string()))?;

        let mut multipart = Form::new().part(RESUME_PART, resume);
        for (name, value) in form.text_parts() {
            multipart = multipart.text(name, value.to_string());
        }
        Ok(multipart)
    }
}

impl IntakeClient<ResumeUpload> for HttpIntakeClient {
    async fn submit(
        &self,
        form: &ApplicationForm<ResumeUpload>,
    ) -> Result<IntakeReceipt, IntakeError> {
        let multipart = Self::multipart(form)?;

        let response = self
            .http
            .post(self.submit_url())
            .multipart(multipart)
            .send()
            .await
            .map_err(|e| IntakeError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::debug!("Intake service answered {}: {}", status, body);
            return Err(IntakeError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| IntakeError::Transport(e.to_string()))?;
        IntakeReceipt::from_json(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_normalized() {
        let client = HttpIntakeClient::new("http://localhost:3000/");
        assert_eq!(client.base_url(), "http://localhost:3000");
        assert_eq!(client.submit_url(), "http://localhost:3000/api/applications/submit");
    }
}
