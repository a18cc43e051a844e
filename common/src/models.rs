//! Product types shared with the rest of the hiring product.
//!
//! These are wire contracts. Only [`Application`], [`ApplicationStatus`],
//! [`Position`] and [`ApiResponse`] are produced or consumed in this
//! repository; the scoring, dashboard and workflow types belong to services
//! that live elsewhere and are carried here so every client agrees on the
//! shape.
//!
//! Nothing in this repository computes a score. `ai_score` and
//! `score_breakdown` stay `None` until an analysis service fills them in.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Applications
// =============================================================================

/// A stored job application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: String,
    pub candidate_name: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_in: Option<String>,
    pub position: String,
    pub resume_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_letter: Option<String>,
    pub status: ApplicationStatus,
    #[serde(default)]
    pub ai_score: Option<f64>,
    #[serde(default)]
    pub score_breakdown: Option<ScoreBreakdown>,
    pub created_at: String,
    pub updated_at: String,
    pub company_id: String,
}

/// Review status of an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    #[default]
    New,
    Reviewed,
    InterviewScheduled,
    Rejected,
    Hired,
}

impl ApplicationStatus {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ApplicationStatus::New => "Received",
            ApplicationStatus::Reviewed => "Reviewed",
            ApplicationStatus::InterviewScheduled => "Interview scheduled",
            ApplicationStatus::Rejected => "Not selected",
            ApplicationStatus::Hired => "Hired",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-dimension scores from the analysis service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub overall: f64,
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
    pub culture: f64,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub red_flags: Vec<String>,
}

/// What an applicant may see when checking a tracking code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationStatusView {
    pub tracking_code: String,
    pub candidate_name: String,
    pub position: String,
    pub status: ApplicationStatus,
    #[serde(default)]
    pub ai_score: Option<f64>,
    pub submitted_at: String,
}

impl From<&Application> for ApplicationStatusView {
    fn from(app: &Application) -> Self {
        Self {
            tracking_code: app.id.clone(),
            candidate_name: app.candidate_name.clone(),
            position: app.position.clone(),
            status: app.status,
            ai_score: app.ai_score,
            submitted_at: app.created_at.clone(),
        }
    }
}

// =============================================================================
// Positions
// =============================================================================

/// An open (or closed) role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub id: String,
    pub title: String,
    pub department: String,
    pub is_active: bool,
}

// =============================================================================
// Analytics
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub total_applications: u64,
    pub average_score: f64,
    pub pending_review: u64,
    pub interviews_scheduled: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendData {
    pub date: String,
    pub applications: u64,
    pub avg_score: f64,
}

// =============================================================================
// Workflows
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    pub id: String,
    pub name: String,
    pub trigger: WorkflowTrigger,
    pub action: WorkflowAction,
    pub is_active: bool,
    pub triggered_count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerKind {
    ScoreThreshold,
    StatusChange,
}

/// Threshold values are numbers, status changes are strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TriggerValue {
    Number(f64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowTrigger {
    #[serde(rename = "type")]
    pub kind: TriggerKind,
    pub condition: String,
    pub value: TriggerValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Email,
    Slack,
    Webhook,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowAction {
    #[serde(rename = "type")]
    pub kind: ActionKind,
    #[serde(default)]
    pub config: serde_json::Map<String, serde_json::Value>,
}

// =============================================================================
// Queries & Envelopes
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ApplicationStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
}

/// Standard response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: None,
        }
    }

    pub fn error(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}
