use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::assessment::scoring::{resolve_results, AssessmentOutcome};
use crate::assessment::swipe::{SwipeChoice, SwipeSession, SwipeSessionView};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    pub choice: SwipeChoice,
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Assessment {id} not found"))
}

/// POST /api/v1/assessment
pub async fn handle_start(State(state): State<AppState>) -> (StatusCode, Json<SwipeSessionView>) {
    let session = SwipeSession::new();
    let view = session.view();
    state.assessments.insert(session.id, session).await;
    info!(assessment_id = %view.id, "Assessment started");
    (StatusCode::CREATED, Json(view))
}

/// GET /api/v1/assessment/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SwipeSessionView>, AppError> {
    let sessions = state.assessments.read().await;
    let session = sessions.get(&id).ok_or_else(|| not_found(id))?;
    Ok(Json(session.view()))
}

/// POST /api/v1/assessment/:id/answer
pub async fn handle_answer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<AnswerRequest>,
) -> Result<Json<SwipeSessionView>, AppError> {
    let mut sessions = state.assessments.write().await;
    let session = sessions.get_mut(&id).ok_or_else(|| not_found(id))?;
    session.answer(req.choice)?;
    Ok(Json(session.view()))
}

/// POST /api/v1/assessment/:id/results
///
/// Only a completed session can be submitted. The answers are copied out so the
/// session lock is not held across the backend call.
pub async fn handle_results(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AssessmentOutcome>, AppError> {
    let answers = {
        let sessions = state.assessments.read().await;
        let session = sessions.get(&id).ok_or_else(|| not_found(id))?;
        session.completed_answers()?.clone()
    };

    let outcome = resolve_results(state.backend.as_ref(), &answers).await;
    info!(
        assessment_id = %id,
        careers = outcome.careers.len(),
        fallback = outcome.fallback,
        "Assessment results ready"
    );

    // The session may have expired or been deleted while the backend was answering.
    if let Some(session) = state.assessments.write().await.get_mut(&id) {
        session.record_results(outcome.careers.clone());
    }
    Ok(Json(outcome))
}

/// DELETE /api/v1/assessment/:id
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.assessments.remove(&id).await.ok_or_else(|| not_found(id))?;
    Ok(StatusCode::NO_CONTENT)
}
