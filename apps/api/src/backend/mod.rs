//! Backend client: the single point of entry for all calls to the remote career backend.
//!
//! ARCHITECTURAL RULE: No other module may issue HTTP requests to the backend directly.
//! Handlers depend on the `CareerBackend` trait so tests can swap in a stub.
//!
//! Calls are made once. There is no retry; callers that have a fallback apply it themselves.
use async_trait::async_trait;
use reqwest::{multipart, Client, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::assessment::swipe::SwipeAnswers;
use crate::config::Config;
use crate::models::analysis::AnalysisResult;

pub mod types;

#[cfg(test)]
pub mod stub;

pub use types::*;

const ASSESSMENT_SUBMIT_PATH: &str = "/api/careers/assessment/submit";
const ALL_CAREERS_PATH: &str = "/api/careers/all";
const SUGGESTIONS_PATH: &str = "/api/careers/suggestions";
const VALIDATE_TASK_PATH: &str = "/api/careers/validate-task";
const EXPLORATION_SUMMARY_PATH: &str = "/api/careers/exploration-summary";
const LOGIN_PATH: &str = "/api/auth/login";
const REGISTER_PATH: &str = "/api/auth/register";
const CAREER_TASK_PATH: &str = "/api/analysis/career-task";
const SKILL_GAP_PATH: &str = "/api/analysis/skill-gap";

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The remote collaborator that scores assessments, generates insights and looks up O*NET data.
///
/// Carried in `AppState` as `Arc<dyn CareerBackend>`.
#[async_trait]
pub trait CareerBackend: Send + Sync {
    async fn submit_assessment(
        &self,
        answers: &SwipeAnswers,
    ) -> Result<AssessmentSubmitResponse, BackendError>;

    async fn all_careers(&self) -> Result<Vec<BackendCareer>, BackendError>;

    async fn suggestions(
        &self,
        request: &SuggestionRequest,
    ) -> Result<Vec<BackendCareer>, BackendError>;

    async fn login(&self, request: &AuthRequest) -> Result<AuthResponse, BackendError>;

    async fn register(&self, request: &AuthRequest) -> Result<AuthResponse, BackendError>;

    async fn analyse_career_task(
        &self,
        request: &CareerTaskAnalysis,
    ) -> Result<AnalysisResult, BackendError>;

    async fn skill_gap(&self, request: &SkillGapRequest)
        -> Result<SkillGapResponse, BackendError>;

    async fn validate_task(
        &self,
        request: &ValidateTaskRequest,
    ) -> Result<TaskEvaluation, BackendError>;

    async fn exploration_summary(
        &self,
        request: &ExplorationSummaryRequest,
    ) -> Result<ExplorationSummary, BackendError>;
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// reqwest-backed implementation of `CareerBackend`.
#[derive(Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
    auth_url: String,
}

impl BackendClient {
    pub fn new(config: &Config) -> Result<Self, BackendError> {
        Self::with_urls(
            config.backend_url.clone(),
            config.auth_url.clone(),
            config.request_timeout,
        )
    }

    pub fn with_urls(
        base_url: String,
        auth_url: String,
        timeout: std::time::Duration,
    ) -> Result<Self, BackendError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            base_url,
            auth_url,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, BackendError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {url}");
        let response = self.client.get(&url).send().await?;
        read_json(response).await
    }

    async fn post_json<B, T>(&self, base: &str, path: &str, body: &B) -> Result<T, BackendError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = format!("{base}{path}");
        debug!("POST {url}");
        let response = self.client.post(&url).json(body).send().await?;
        read_json(response).await
    }

    /// Auth endpoints answer `{ error }` with a 4xx status, and that body is the message
    /// shown to the user. Decode the body whatever the status; only an undecodable
    /// non-2xx body is an error.
    async fn post_auth(&self, path: &str, body: &AuthRequest) -> Result<AuthResponse, BackendError> {
        let url = format!("{}{}", self.auth_url, path);
        debug!("POST {url}");
        let response = self.client.post(&url).json(body).send().await?;
        let status = response.status();
        let text = response.text().await?;

        match serde_json::from_str::<AuthResponse>(&text) {
            Ok(parsed) => Ok(parsed),
            Err(_) if !status.is_success() => Err(BackendError::Api {
                status: status.as_u16(),
                message: format!("Request failed: {}", status.as_u16()),
            }),
            Err(e) => Err(BackendError::Parse(e)),
        }
    }
}

/// Decodes a successful response, or turns a non-2xx one into `BackendError::Api`
/// carrying the backend's `{ error }` message.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, BackendError> {
    let status = response.status();
    let text = response.text().await?;

    if !status.is_success() {
        return Err(BackendError::Api {
            status: status.as_u16(),
            message: error_message(status.as_u16(), &text),
        });
    }

    Ok(serde_json::from_str(&text)?)
}

fn error_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody { error: Some(msg) }) if !msg.is_empty() => msg,
        Ok(_) => format!("Request failed: {status}"),
        Err(_) => "Network error".to_string(),
    }
}

#[async_trait]
impl CareerBackend for BackendClient {
    async fn submit_assessment(
        &self,
        answers: &SwipeAnswers,
    ) -> Result<AssessmentSubmitResponse, BackendError> {
        self.post_json(
            &self.base_url,
            ASSESSMENT_SUBMIT_PATH,
            &AssessmentSubmission { answers },
        )
        .await
    }

    async fn all_careers(&self) -> Result<Vec<BackendCareer>, BackendError> {
        let response: CareerListResponse = self.get_json(ALL_CAREERS_PATH).await?;
        Ok(response.careers)
    }

    async fn suggestions(
        &self,
        request: &SuggestionRequest,
    ) -> Result<Vec<BackendCareer>, BackendError> {
        let response: SuggestionResponse = self
            .post_json(&self.base_url, SUGGESTIONS_PATH, request)
            .await?;
        Ok(response.recommended_careers)
    }

    async fn login(&self, request: &AuthRequest) -> Result<AuthResponse, BackendError> {
        self.post_auth(LOGIN_PATH, request).await
    }

    async fn register(&self, request: &AuthRequest) -> Result<AuthResponse, BackendError> {
        self.post_auth(REGISTER_PATH, request).await
    }

    async fn analyse_career_task(
        &self,
        request: &CareerTaskAnalysis,
    ) -> Result<AnalysisResult, BackendError> {
        let mut form = multipart::Form::new()
            .text("careerTitle", request.career_title.clone())
            .text("tasks", serde_json::to_string(&request.tasks)?)
            .text("userContext", serde_json::to_string(&request.user_context)?);

        if let Some(image) = &request.image {
            let part = multipart::Part::bytes(image.bytes.to_vec())
                .file_name(image.file_name.clone())
                .mime_str(&image.content_type)?;
            form = form.part("image", part);
        }

        let url = format!("{}{}", self.base_url, CAREER_TASK_PATH);
        debug!(
            "POST {url} (tasks={}, image={})",
            request.tasks.len(),
            request.image.is_some()
        );
        let response = self.client.post(&url).multipart(form).send().await?;
        read_json(response).await
    }

    async fn skill_gap(
        &self,
        request: &SkillGapRequest,
    ) -> Result<SkillGapResponse, BackendError> {
        self.post_json(&self.base_url, SKILL_GAP_PATH, request).await
    }

    async fn validate_task(
        &self,
        request: &ValidateTaskRequest,
    ) -> Result<TaskEvaluation, BackendError> {
        self.post_json(&self.base_url, VALIDATE_TASK_PATH, request)
            .await
    }

    async fn exploration_summary(
        &self,
        request: &ExplorationSummaryRequest,
    ) -> Result<ExplorationSummary, BackendError> {
        self.post_json(&self.base_url, EXPLORATION_SUMMARY_PATH, request)
            .await
    }
}
