//! Axum route handlers for the catalog views.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::analysis::skill_gap::generate_skill_gaps;
use crate::backend::SuggestionRequest;
use crate::catalog::explorer::{categories, filter_careers, ExplorerFilter};
use crate::catalog::internships::search_internships;
use crate::catalog::mapping::{from_backend, local_suggestions};
use crate::catalog::market::{career_roadmap, market_insights, MarketInsights};
use crate::catalog::resources::search_library;
use crate::catalog::{career_paths, career_tasks, learning_resources};
use crate::errors::AppError;
use crate::models::analysis::CareerTask;
use crate::models::career::{
    CareerPath, Internship, LearningResource, LibraryResource, RoadmapPhase, SkillGap,
};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct CareerListResponse {
    pub count: usize,
    pub careers: Vec<CareerPath>,
}

#[derive(Debug, Serialize)]
pub struct CareerDetailResponse {
    pub career: CareerPath,
    pub resources: Vec<LearningResource>,
    pub tasks: Vec<CareerTask>,
}

/// Careers sourced from the backend, or the built-in list when it could not be reached.
#[derive(Debug, Serialize)]
pub struct RemoteCareersResponse {
    pub careers: Vec<CareerPath>,
    pub fallback: bool,
}

#[derive(Debug, Serialize)]
pub struct LearningPathResponse {
    pub career: CareerPath,
    pub resources: Vec<LearningResource>,
    pub tasks: Vec<CareerTask>,
    pub skills: Vec<String>,
    pub skill_gaps: Vec<SkillGap>,
    pub roadmap: Vec<RoadmapPhase>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/careers?q=&category=&demand=
pub async fn handle_list_careers(Query(filter): Query<ExplorerFilter>) -> Json<CareerListResponse> {
    let careers: Vec<CareerPath> = filter_careers(career_paths(), &filter)
        .into_iter()
        .cloned()
        .collect();
    Json(CareerListResponse {
        count: careers.len(),
        careers,
    })
}

/// GET /api/v1/careers/categories
pub async fn handle_categories() -> Json<Vec<String>> {
    Json(categories(career_paths()))
}

/// GET /api/v1/careers/:id
pub async fn handle_get_career(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CareerDetailResponse>, AppError> {
    let career = state
        .resolve_career(&id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Career {id} not found")))?;
    Ok(Json(CareerDetailResponse {
        career,
        resources: learning_resources(&id).to_vec(),
        tasks: career_tasks(&id).to_vec(),
    }))
}

/// GET /api/v1/careers/remote
///
/// Full career list from the backend. An unreachable backend or an empty list
/// falls back to the built-in catalog.
pub async fn handle_remote_careers(State(state): State<AppState>) -> Json<RemoteCareersResponse> {
    match state.backend.all_careers().await {
        Ok(careers) if !careers.is_empty() => Json(RemoteCareersResponse {
            careers: careers.iter().map(from_backend).collect(),
            fallback: false,
        }),
        Ok(_) => Json(RemoteCareersResponse {
            careers: career_paths().to_vec(),
            fallback: true,
        }),
        Err(e) => {
            warn!("Error fetching all careers: {e}");
            Json(RemoteCareersResponse {
                careers: career_paths().to_vec(),
                fallback: true,
            })
        }
    }
}

/// POST /api/v1/careers/suggestions
pub async fn handle_suggestions(
    State(state): State<AppState>,
    Json(request): Json<SuggestionRequest>,
) -> Json<RemoteCareersResponse> {
    let response = match state.backend.suggestions(&request).await {
        Ok(careers) if !careers.is_empty() => RemoteCareersResponse {
            careers: careers.iter().map(from_backend).collect(),
            fallback: false,
        },
        Ok(_) => RemoteCareersResponse {
            careers: local_suggestions(&request),
            fallback: true,
        },
        Err(e) => {
            warn!("Error fetching career suggestions: {e}");
            RemoteCareersResponse {
                careers: local_suggestions(&request),
                fallback: true,
            }
        }
    };
    Json(response)
}

/// GET /api/v1/learning/:career_id
///
/// Accepts catalog careers and careers recommended by a live assessment. Careers
/// without curated resources or tasks get empty lists.
pub async fn handle_learning_path(
    State(state): State<AppState>,
    Path(career_id): Path<String>,
) -> Result<Json<LearningPathResponse>, AppError> {
    let career = state
        .resolve_career(&career_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Career {career_id} not found")))?;

    let skill_gaps = generate_skill_gaps(&career, &mut rand::thread_rng());

    Ok(Json(LearningPathResponse {
        resources: learning_resources(&career_id).to_vec(),
        tasks: career_tasks(&career_id).to_vec(),
        skills: career.required_skills.clone(),
        skill_gaps,
        roadmap: career_roadmap(),
        career,
    }))
}

/// GET /api/v1/market
pub async fn handle_market() -> Json<MarketInsights> {
    Json(market_insights())
}

/// GET /api/v1/internships?q=
pub async fn handle_internships(Query(query): Query<SearchQuery>) -> Json<Vec<Internship>> {
    Json(search_internships(query.q.as_deref()))
}

/// GET /api/v1/resources?q=&category=
pub async fn handle_resources(Query(query): Query<SearchQuery>) -> Json<Vec<LibraryResource>> {
    Json(search_library(query.q.as_deref(), query.category.as_deref()))
}
