//! End-to-end submission tests.
//!
//! Each test binds an ephemeral port, serves either the real intake router
//! or a scripted stand-in, and submits through `HttpIntakeClient`.

use axum::{http::StatusCode, routing::post, Json, Router};
use reqwest::multipart::{Form, Part};
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::net::TcpListener;

use ars_common::{
    ApplicationStatus, Field, FormState, IntakeError, ResumeUpload, SubmissionController,
    SubmitBlocked, SubmitError, TrackingOrigin, MAX_RESUME_BYTES, PDF_MIME,
};
use ars_intake::{server::router, server::AppState, HttpIntakeClient, IntakeConfig};

async fn spawn(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn spawn_intake(config: IntakeConfig) -> String {
    spawn(router(Arc::new(AppState::new(&config)))).await
}

/// Stand-in intake service that answers every submission the same way.
async fn spawn_scripted(status: StatusCode, body: Value) -> String {
    let app = Router::new().route(
        "/api/applications/submit",
        post(move || {
            let body = body.clone();
            async move { (status, Json(body)) }
        }),
    );
    spawn(app).await
}

fn john_doe() -> SubmissionController<ResumeUpload> {
    let mut controller = SubmissionController::new();
    controller.set_field(Field::CandidateName, "John Doe").unwrap();
    controller.set_field(Field::Email, "john@example.com").unwrap();
    controller.set_field(Field::Phone, "555-0123").unwrap();
    controller.set_field(Field::Position, "Data Scientist").unwrap();
    controller
        .select_resume(ResumeUpload::new("john.pdf", PDF_MIME, vec![0x25; 1_000_000]))
        .unwrap();
    controller
}

#[tokio::test]
async fn test_issued_tracking_code_clears_draft() {
    let url = spawn_scripted(StatusCode::OK, json!({ "trackingCode": "ARS-9981" })).await;
    let client = HttpIntakeClient::new(url);
    let mut controller = john_doe();

    let outcome = controller.submit(&client).await.unwrap();

    assert_eq!(outcome.tracking_code.as_str(), "ARS-9981");
    assert_eq!(outcome.tracking_code.origin, TrackingOrigin::Issued);
    assert!(matches!(controller.state(), FormState::Submitted(_)));
    assert!(controller.draft().is_none());

    controller.reset();
    assert!(controller.draft().unwrap().is_blank());
}

#[tokio::test]
async fn test_missing_tracking_code_uses_timestamp() {
    let url = spawn_scripted(StatusCode::OK, json!({ "success": true })).await;
    let client = HttpIntakeClient::new(url);
    let mut controller = john_doe();

    let outcome = controller.submit(&client).await.unwrap();

    let code = outcome.tracking_code.as_str();
    let digits = code.strip_prefix("ARS-").unwrap();
    assert!(!digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()), "{code}");
    assert!(outcome.tracking_code.is_provisional());
}

#[tokio::test]
async fn test_server_error_keeps_draft_for_retry() {
    let url = spawn_scripted(StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": "boom" })).await;
    let client = HttpIntakeClient::new(url);
    let mut controller = john_doe();

    let err = controller.submit(&client).await.unwrap_err();

    assert_eq!(err, SubmitError::Failed(IntakeError::Status(500)));
    assert_eq!(err.to_string(), "Failed to submit application. Please try again.");
    assert!(controller.can_submit());
    let draft = controller.draft().unwrap();
    assert_eq!(draft.candidate_name, "John Doe");
    assert_eq!(draft.resume().unwrap().file_name, "john.pdf");
}

#[tokio::test]
async fn test_non_object_body_is_a_failure() {
    let url = spawn_scripted(StatusCode::OK, Value::Null).await;
    let client = HttpIntakeClient::new(url);
    let mut controller = john_doe();

    match controller.submit(&client).await {
        Err(SubmitError::Failed(IntakeError::MalformedResponse(_))) => {}
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(controller.draft().unwrap().candidate_name, "John Doe");
}

#[tokio::test]
async fn test_unreachable_service_is_a_failure() {
    // Bind then drop, so nothing listens on the port.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = HttpIntakeClient::new(format!("http://{}", addr));
    let mut controller = john_doe();

    match controller.submit(&client).await {
        Err(SubmitError::Failed(IntakeError::Transport(_))) => {}
        other => panic!("unexpected {other:?}"),
    }
    assert!(controller.can_submit());
}

#[tokio::test]
async fn test_real_service_round_trip() {
    let url = spawn_intake(IntakeConfig::default()).await;
    let client = HttpIntakeClient::new(url);
    let mut controller = john_doe();
    controller.set_field(Field::CoverLetter, "I like data.\nAnd science.").unwrap();

    let outcome = controller.submit(&client).await.unwrap();
    assert!(!outcome.tracking_code.is_provisional());
    assert!(outcome.tracking_code.as_str().starts_with("ARS-"));

    let view = client.application_status(outcome.tracking_code.as_str()).await.unwrap();
    assert_eq!(view.candidate_name, "John Doe");
    assert_eq!(view.position, "Data Scientist");
    assert_eq!(view.status, ApplicationStatus::New);
    assert_eq!(view.ai_score, None);
}

#[tokio::test]
async fn test_unknown_tracking_code_is_not_found() {
    let url = spawn_intake(IntakeConfig::default()).await;
    let client = HttpIntakeClient::new(url);

    assert_eq!(
        client.application_status("ARS-DEADBEEF").await.unwrap_err(),
        IntakeError::Status(404)
    );
}

#[tokio::test]
async fn test_positions_catalog() {
    let url = spawn_intake(IntakeConfig::default()).await;
    let positions = HttpIntakeClient::new(url).positions().await.unwrap();
    assert_eq!(positions.len(), 5);
    assert!(positions.iter().any(|p| p.title == "Senior Software Engineer"));
}

#[tokio::test]
async fn test_service_spools_resume() {
    let dir = tempfile::tempdir().unwrap();
    let url = spawn_intake(IntakeConfig::default().with_resume_dir(dir.path())).await;
    let client = HttpIntakeClient::new(url);
    let mut controller = john_doe();

    let outcome = controller.submit(&client).await.unwrap();

    let saved = dir.path().join(format!("{}.pdf", outcome.tracking_code));
    assert_eq!(std::fs::read(saved).unwrap().len(), 1_000_000);
}

#[tokio::test]
async fn test_client_blocks_invalid_email_before_sending() {
    let url = spawn_intake(IntakeConfig::default()).await;
    let client = HttpIntakeClient::new(url);
    let mut controller = john_doe();
    controller.set_field(Field::Email, "not-an-email").unwrap();

    match controller.submit(&client).await {
        Err(SubmitError::Blocked(SubmitBlocked::Invalid(errors))) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors.get(Field::Email), Some("Invalid email address"));
        }
        other => panic!("unexpected {other:?}"),
    }
}

// =============================================================================
// Server-side validation (raw multipart, bypassing the client checks)
// =============================================================================

fn raw_form(email: &str, resume: Part) -> Form {
    Form::new()
        .part("resume", resume)
        .text("candidateName", "John Doe")
        .text("email", email.to_string())
        .text("phone", "555-0123")
        .text("position", "Data Scientist")
}

async fn post_raw(url: &str, form: Form) -> (StatusCode, Value) {
    let response = reqwest::Client::new()
        .post(format!("{}/api/applications/submit", url))
        .multipart(form)
        .send()
        .await
        .unwrap();
    let status = StatusCode::from_u16(response.status().as_u16()).unwrap();
    (status, response.json().await.unwrap())
}

fn pdf_part(len: usize) -> Part {
    Part::bytes(vec![0x25; len])
        .file_name("cv.pdf")
        .mime_str(PDF_MIME)
        .unwrap()
}

#[tokio::test]
async fn test_service_rejects_invalid_email() {
    let url = spawn_intake(IntakeConfig::default()).await;
    let (status, body) = post_raw(&url, raw_form("not-an-email", pdf_part(100))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Invalid email address");
    assert_eq!(body["message"], "Please correct the application and submit again.");
}

#[tokio::test]
async fn test_service_rejects_wrong_file_type() {
    let url = spawn_intake(IntakeConfig::default()).await;
    let text = Part::bytes(b"hello".to_vec())
        .file_name("cv.txt")
        .mime_str("text/plain")
        .unwrap();
    let (status, body) = post_raw(&url, raw_form("john@example.com", text)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Please upload a PDF or DOCX file");
}

#[tokio::test]
async fn test_service_rejects_oversized_resume() {
    let url = spawn_intake(IntakeConfig::default()).await;
    let part = pdf_part(MAX_RESUME_BYTES as usize + 1);
    let (status, body) = post_raw(&url, raw_form("john@example.com", part)).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["error"], "File size must be less than 5MB");
}
