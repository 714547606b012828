//! In-process `CareerBackend` for handler tests. Either answers with canned data or
//! fails every call as an unreachable backend would.

use std::sync::Mutex;

use async_trait::async_trait;

use super::*;
use crate::models::analysis::CareerAnalysis;
use crate::models::user::{User, UserId};

#[derive(Default)]
pub struct StubBackend {
    pub offline: bool,
    pub careers: Vec<BackendCareer>,
    /// Every multipart analysis request seen, for assertions.
    pub analysed: Mutex<Vec<CareerTaskAnalysis>>,
    /// Every register request seen, for assertions.
    pub registered: Mutex<Vec<AuthRequest>>,
    /// When set, login and register answer with this body instead of the canned ones.
    pub auth_reply: Option<AuthResponse>,
}

impl StubBackend {
    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Default::default()
        }
    }

    pub fn online(careers: Vec<BackendCareer>) -> Self {
        Self {
            careers,
            ..Default::default()
        }
    }

    pub fn with_auth_reply(mut self, reply: AuthResponse) -> Self {
        self.auth_reply = Some(reply);
        self
    }

    fn check(&self) -> Result<(), BackendError> {
        if self.offline {
            Err(BackendError::Api {
                status: 503,
                message: "Service Unavailable".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

pub fn backend_career(name: &str, stream: &str, score: Option<f64>) -> BackendCareer {
    BackendCareer {
        id: None,
        name: name.to_string(),
        description: format!("{name} description"),
        skills: vec!["Communication".to_string()],
        education: "Bachelor's".to_string(),
        salary: "₹5L - ₹10L".to_string(),
        stream: Some(stream.to_string()),
        match_score: score,
    }
}

#[async_trait]
impl CareerBackend for StubBackend {
    async fn submit_assessment(
        &self,
        _answers: &SwipeAnswers,
    ) -> Result<AssessmentSubmitResponse, BackendError> {
        self.check()?;
        Ok(AssessmentSubmitResponse {
            recommended_careers: self.careers.clone(),
            ai_insights: Some(AiInsight {
                insight: "You thrive on variety".to_string(),
                generated_at: "2024-05-01T10:00:00Z".to_string(),
                fallback: false,
            }),
        })
    }

    async fn all_careers(&self) -> Result<Vec<BackendCareer>, BackendError> {
        self.check()?;
        Ok(self.careers.clone())
    }

    async fn suggestions(
        &self,
        _request: &SuggestionRequest,
    ) -> Result<Vec<BackendCareer>, BackendError> {
        self.check()?;
        Ok(self.careers.clone())
    }

    async fn login(&self, request: &AuthRequest) -> Result<AuthResponse, BackendError> {
        self.check()?;
        if let Some(reply) = &self.auth_reply {
            return Ok(reply.clone());
        }
        if request.password != "correct-horse" {
            return Ok(AuthResponse {
                error: Some("Invalid email or password".to_string()),
                ..Default::default()
            });
        }
        Ok(AuthResponse {
            success: true,
            token: Some("token-123".to_string()),
            user: Some(User {
                id: UserId::Number(1),
                name: "Asha".to_string(),
                email: request.email.clone(),
                extra: Default::default(),
            }),
            error: None,
        })
    }

    async fn register(&self, request: &AuthRequest) -> Result<AuthResponse, BackendError> {
        self.check()?;
        self.registered
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(request.clone());
        if let Some(reply) = &self.auth_reply {
            return Ok(reply.clone());
        }
        Ok(AuthResponse {
            success: true,
            token: Some("token-new".to_string()),
            user: Some(User {
                id: UserId::Number(2),
                name: request.name.clone().unwrap_or_default(),
                email: request.email.clone(),
                extra: Default::default(),
            }),
            error: None,
        })
    }

    async fn analyse_career_task(
        &self,
        request: &CareerTaskAnalysis,
    ) -> Result<AnalysisResult, BackendError> {
        self.check()?;
        self.analysed
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(request.clone());
        Ok(AnalysisResult {
            analysis: CareerAnalysis {
                fit_score: 72.0,
                fit_label: "Good Fit".to_string(),
                headline: format!("You could enjoy being a {}", request.career_title),
                strengths: vec!["Creativity".to_string()],
                growth_areas: vec!["Consistency".to_string()],
                personality_insights: "Hands-on learner".to_string(),
                recommendation: "Keep experimenting".to_string(),
                alternative_careers: vec!["Content Creator".to_string()],
                motivational_message: "Great start!".to_string(),
            },
            onet_data: None,
        })
    }

    async fn skill_gap(
        &self,
        request: &SkillGapRequest,
    ) -> Result<SkillGapResponse, BackendError> {
        self.check()?;
        Ok(SkillGapResponse {
            success: true,
            result: Some(SkillGapResult {
                readiness_score: 40.0 + request.current_skills.len() as f64 * 10.0,
                skill_gaps: vec![RemoteSkillGap {
                    skill: "Statistics".to_string(),
                    current_level: Some(2.0),
                    required_level: Some(8.0),
                    priority: Some("High".to_string()),
                    resources: vec![],
                }],
            }),
            error: None,
        })
    }

    async fn validate_task(
        &self,
        request: &ValidateTaskRequest,
    ) -> Result<TaskEvaluation, BackendError> {
        self.check()?;
        Ok(TaskEvaluation {
            feedback: format!("Nice work on '{}'", request.task.title),
            score: Some(80),
            passed: Some(true),
            fallback: false,
        })
    }

    async fn exploration_summary(
        &self,
        request: &ExplorationSummaryRequest,
    ) -> Result<ExplorationSummary, BackendError> {
        self.check()?;
        Ok(ExplorationSummary {
            summary: format!("You explored {} tasks", request.tasks.len()),
            fallback: false,
        })
    }
}
