use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::analysis::skill_gap::SkillGapForm;
use crate::analysis::tryout::{
    fallback_evaluation, fallback_summary, FitBand, TaskUpdate, TryOutSession, TryOutView,
};
use crate::backend::{
    ExplorationSummary, ExplorationSummaryRequest, SkillGapResult, TaskEvaluation,
    ValidateTaskRequest,
};
use crate::errors::AppError;
use crate::models::analysis::{AnalysisResult, CareerTask, ImageAttachment, UserContext};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Either a catalog `career_id`, or an explicit `career_title` with its `tasks`.
#[derive(Debug, Deserialize)]
pub struct CreateTryOutRequest {
    #[serde(default)]
    pub career_id: Option<String>,
    #[serde(default)]
    pub career_title: Option<String>,
    #[serde(default)]
    pub tasks: Vec<CareerTask>,
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub fit_band: FitBand,
    pub result: AnalysisResult,
}

#[derive(Debug, Default, Deserialize)]
pub struct ValidateRequest {
    /// Overrides the answer stored on the task.
    #[serde(default)]
    pub user_answer: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Try-out session {id} not found"))
}

/// Runs `f` against the session under the write lock and returns the updated view.
async fn with_session<F>(state: &AppState, id: Uuid, f: F) -> Result<TryOutView, AppError>
where
    F: FnOnce(&mut TryOutSession) -> Result<(), AppError>,
{
    let mut sessions = state.tryouts.write().await;
    let session = sessions.get_mut(&id).ok_or_else(|| not_found(id))?;
    f(session)?;
    Ok(session.view())
}

async fn read_image(mut multipart: Multipart) -> Result<ImageAttachment, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid upload: {e}")))?
    {
        if field.name() != Some("image") {
            continue;
        }
        let file_name = field.file_name().unwrap_or("upload").to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Invalid upload: {e}")))?;
        return Ok(ImageAttachment {
            file_name,
            content_type,
            bytes,
        });
    }
    Err(AppError::Validation("Missing 'image' field".to_string()))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/tryout
pub async fn handle_create(
    State(state): State<AppState>,
    Json(req): Json<CreateTryOutRequest>,
) -> Result<(StatusCode, Json<TryOutView>), AppError> {
    let session = match (req.career_id.as_deref(), req.career_title.as_deref()) {
        (Some(career_id), _) => {
            let career = state
                .resolve_career(career_id)
                .await
                .ok_or_else(|| AppError::NotFound(format!("Career {career_id} not found")))?;
            TryOutSession::for_career(&career)?
        }
        (None, Some(title)) => TryOutSession::custom(title, req.tasks)?,
        (None, None) => {
            return Err(AppError::Validation(
                "career_id or career_title is required".to_string(),
            ))
        }
    };

    let view = session.view();
    state.tryouts.insert(session.id, session).await;
    info!(tryout_id = %view.id, career = %view.career_title, "Try-out started");
    Ok((StatusCode::CREATED, Json(view)))
}

/// GET /api/v1/tryout/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TryOutView>, AppError> {
    let sessions = state.tryouts.read().await;
    let session = sessions.get(&id).ok_or_else(|| not_found(id))?;
    Ok(Json(session.view()))
}

/// DELETE /api/v1/tryout/:id
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.tryouts.remove(&id).await.ok_or_else(|| not_found(id))?;
    info!(tryout_id = %id, "Try-out discarded");
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /api/v1/tryout/:id/tasks/:task_id
pub async fn handle_update_task(
    State(state): State<AppState>,
    Path((id, task_id)): Path<(Uuid, String)>,
    Json(update): Json<TaskUpdate>,
) -> Result<Json<TryOutView>, AppError> {
    let view = with_session(&state, id, |s| Ok(s.update_task(&task_id, update)?)).await?;
    Ok(Json(view))
}

/// PUT /api/v1/tryout/:id/context
pub async fn handle_set_context(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(context): Json<UserContext>,
) -> Result<Json<TryOutView>, AppError> {
    let view = with_session(&state, id, |s| {
        s.set_user_context(context);
        Ok(())
    })
    .await?;
    Ok(Json(view))
}

/// POST /api/v1/tryout/:id/tasks/:task_id/image (multipart, field `image`)
pub async fn handle_attach_image(
    State(state): State<AppState>,
    Path((id, task_id)): Path<(Uuid, String)>,
    multipart: Multipart,
) -> Result<Json<TryOutView>, AppError> {
    let image = read_image(multipart).await?;
    debug!(
        "Attaching {} ({:.1} KB) to task {task_id}",
        image.file_name,
        image.size_kb()
    );
    let view = with_session(&state, id, |s| Ok(s.attach_image(&task_id, image)?)).await?;
    Ok(Json(view))
}

/// DELETE /api/v1/tryout/:id/tasks/:task_id/image
pub async fn handle_remove_image(
    State(state): State<AppState>,
    Path((id, task_id)): Path<(Uuid, String)>,
) -> Result<Json<TryOutView>, AppError> {
    let view = with_session(&state, id, |s| {
        s.remove_image(&task_id)?;
        Ok(())
    })
    .await?;
    Ok(Json(view))
}

/// POST /api/v1/tryout/:id/analyse
///
/// No fallback: a failed analysis is reported to the caller.
pub async fn handle_analyse(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let request = {
        let sessions = state.tryouts.read().await;
        sessions.get(&id).ok_or_else(|| not_found(id))?.analysis_request()
    };

    info!(
        tryout_id = %id,
        tasks = request.tasks.len(),
        has_image = request.image.is_some(),
        "Submitting career analysis"
    );
    let result = state.backend.analyse_career_task(&request).await?;
    Ok(Json(AnalysisResponse {
        fit_band: FitBand::from_score(result.analysis.fit_score),
        result,
    }))
}

/// POST /api/v1/tryout/:id/tasks/:task_id/validate
pub async fn handle_validate_task(
    State(state): State<AppState>,
    Path((id, task_id)): Path<(Uuid, String)>,
    body: Option<Json<ValidateRequest>>,
) -> Result<Json<TaskEvaluation>, AppError> {
    let (career_title, task) = {
        let sessions = state.tryouts.read().await;
        let session = sessions.get(&id).ok_or_else(|| not_found(id))?;
        (session.career_title.clone(), session.submission(&task_id)?)
    };
    let user_answer = body
        .and_then(|Json(b)| b.user_answer)
        .unwrap_or_else(|| task.user_answer.clone());

    let request = ValidateTaskRequest {
        career_title,
        task,
        user_answer,
    };
    match state.backend.validate_task(&request).await {
        Ok(evaluation) => Ok(Json(evaluation)),
        Err(e) => {
            warn!("Error validating task {task_id}: {e}");
            Ok(Json(fallback_evaluation(&request.task)))
        }
    }
}

/// POST /api/v1/tryout/:id/summary
pub async fn handle_summary(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ExplorationSummary>, AppError> {
    let (request, fallback) = {
        let sessions = state.tryouts.read().await;
        let session = sessions.get(&id).ok_or_else(|| not_found(id))?;
        let request = ExplorationSummaryRequest {
            career_title: session.career_title.clone(),
            tasks: session.submissions(),
        };
        (request, fallback_summary(session))
    };

    match state.backend.exploration_summary(&request).await {
        Ok(summary) => Ok(Json(summary)),
        Err(e) => {
            warn!("Error fetching exploration summary: {e}");
            Ok(Json(fallback))
        }
    }
}

/// POST /api/v1/skill-gap
pub async fn handle_skill_gap(
    State(state): State<AppState>,
    Json(form): Json<SkillGapForm>,
) -> Result<Json<SkillGapResult>, AppError> {
    let request = form
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let response = state.backend.skill_gap(&request).await?;
    match response.result {
        Some(result) if response.success => Ok(Json(result)),
        _ => Err(AppError::Backend(
            response
                .error
                .unwrap_or_else(|| "Skill gap analysis failed".to_string()),
        )),
    }
}
