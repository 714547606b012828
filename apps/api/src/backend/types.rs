//! Request and response bodies of the remote career backend.
//! Field names follow the backend's camelCase JSON.

use serde::{Deserialize, Serialize};

use crate::assessment::swipe::SwipeAnswers;
use crate::models::analysis::{ImageAttachment, TaskSubmission, UserContext};
use crate::models::user::User;

/// Career as the backend describes it. Mapped to `CareerPath` by the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendCareer {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub salary: String,
    #[serde(default)]
    pub stream: Option<String>,
    #[serde(default)]
    pub match_score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiInsight {
    pub insight: String,
    #[serde(default)]
    pub generated_at: String,
    /// Set by the backend when the insight text is canned rather than generated.
    #[serde(default)]
    pub fallback: bool,
}

#[derive(Debug, Serialize)]
pub struct AssessmentSubmission<'a> {
    pub answers: &'a SwipeAnswers,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentSubmitResponse {
    #[serde(default)]
    pub recommended_careers: Vec<BackendCareer>,
    #[serde(default)]
    pub ai_insights: Option<AiInsight>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CareerListResponse {
    #[serde(default)]
    pub careers: Vec<BackendCareer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionRequest {
    pub interest: String,
    pub subject: String,
    #[serde(alias = "class_level")]
    pub class_level: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SuggestionResponse {
    #[serde(default)]
    pub recommended_careers: Vec<BackendCareer>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthRequest {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// `{ success, token, user }` on success, `{ error }` otherwise.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Everything the career-task analysis endpoint receives as multipart form fields.
#[derive(Debug, Clone)]
pub struct CareerTaskAnalysis {
    pub career_title: String,
    pub tasks: Vec<TaskSubmission>,
    pub user_context: UserContext,
    pub image: Option<ImageAttachment>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGapRequest {
    pub target_career: String,
    pub current_skills: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkillGapResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub result: Option<SkillGapResult>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGapResult {
    pub readiness_score: f64,
    #[serde(default)]
    pub skill_gaps: Vec<RemoteSkillGap>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteSkillGap {
    pub skill: String,
    #[serde(default)]
    pub current_level: Option<f64>,
    #[serde(default)]
    pub required_level: Option<f64>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub resources: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateTaskRequest {
    pub career_title: String,
    pub task: TaskSubmission,
    pub user_answer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskEvaluation {
    pub feedback: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passed: Option<bool>,
    #[serde(default)]
    pub fallback: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplorationSummaryRequest {
    pub career_title: String,
    pub tasks: Vec<TaskSubmission>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplorationSummary {
    pub summary: String,
    #[serde(default)]
    pub fallback: bool,
}
