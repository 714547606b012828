pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, patch, post, put},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::analysis::tryout::MAX_IMAGE_BYTES;
use crate::assessment::handlers as assessment;
use crate::auth::handlers as auth;
use crate::catalog::handlers as catalog;
use crate::state::AppState;

/// Room for the multipart framing around a maximum-size image.
const UPLOAD_BODY_LIMIT: usize = MAX_IMAGE_BYTES + 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Catalog
        .route("/api/v1/careers", get(catalog::handle_list_careers))
        .route("/api/v1/careers/categories", get(catalog::handle_categories))
        .route("/api/v1/careers/remote", get(catalog::handle_remote_careers))
        .route("/api/v1/careers/suggestions", post(catalog::handle_suggestions))
        .route("/api/v1/careers/:id", get(catalog::handle_get_career))
        .route("/api/v1/learning/:career_id", get(catalog::handle_learning_path))
        .route("/api/v1/market", get(catalog::handle_market))
        .route("/api/v1/internships", get(catalog::handle_internships))
        .route("/api/v1/resources", get(catalog::handle_resources))
        // Swipe assessment
        .route("/api/v1/assessment", post(assessment::handle_start))
        .route(
            "/api/v1/assessment/:id",
            get(assessment::handle_get).delete(assessment::handle_delete),
        )
        .route("/api/v1/assessment/:id/answer", post(assessment::handle_answer))
        .route("/api/v1/assessment/:id/results", post(assessment::handle_results))
        // Auth
        .route("/api/v1/auth/login", post(auth::handle_login))
        .route("/api/v1/auth/register", post(auth::handle_register))
        .route(
            "/api/v1/auth/session",
            get(auth::handle_get_session).delete(auth::handle_logout),
        )
        // Try this career out
        .route("/api/v1/tryout", post(analysis::handle_create))
        .route(
            "/api/v1/tryout/:id",
            get(analysis::handle_get).delete(analysis::handle_delete),
        )
        .route("/api/v1/tryout/:id/context", put(analysis::handle_set_context))
        .route(
            "/api/v1/tryout/:id/tasks/:task_id",
            patch(analysis::handle_update_task),
        )
        .route(
            "/api/v1/tryout/:id/tasks/:task_id/image",
            post(analysis::handle_attach_image)
                .delete(analysis::handle_remove_image)
                .layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT)),
        )
        .route(
            "/api/v1/tryout/:id/tasks/:task_id/validate",
            post(analysis::handle_validate_task),
        )
        .route("/api/v1/tryout/:id/analyse", post(analysis::handle_analyse))
        .route("/api/v1/tryout/:id/summary", post(analysis::handle_summary))
        // Skill gap
        .route("/api/v1/skill-gap", post(analysis::handle_skill_gap))
        .with_state(state)
}
