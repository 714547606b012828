use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use tracing::{info, warn};

use crate::auth::session::{AuthSession, SessionStoreError};
use crate::auth::validation::{AuthForm, AuthMode};
use crate::backend::AuthResponse;
use crate::errors::AppError;
use crate::models::user::User;
use crate::state::AppState;

pub const DEFAULT_AUTH_ERROR: &str = "Something went wrong";
pub const CONNECTION_ERROR: &str = "Cannot connect to server. Try again.";

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

impl From<Option<AuthSession>> for SessionResponse {
    fn from(session: Option<AuthSession>) -> Self {
        match session {
            Some(s) => Self {
                authenticated: true,
                token: Some(s.token),
                user: Some(s.user),
            },
            None => Self {
                authenticated: false,
                token: None,
                user: None,
            },
        }
    }
}

/// Session-file writes touch the disk, so they run off the async workers.
async fn run_blocking<F>(f: F) -> Result<(), AppError>
where
    F: FnOnce() -> Result<(), SessionStoreError> + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| AppError::Internal(e.into()))??;
    Ok(())
}

async fn authenticate(state: &AppState, mode: AuthMode, form: AuthForm) -> Result<AuthSession, AppError> {
    let request = form
        .validate(mode)
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let result = match mode {
        AuthMode::Login => state.backend.login(&request).await,
        AuthMode::Signup => state.backend.register(&request).await,
    };
    let response = result.map_err(|e| {
        warn!("Auth request failed: {e}");
        AppError::Backend(CONNECTION_ERROR.to_string())
    })?;

    match response {
        AuthResponse {
            success: true,
            token: Some(token),
            user: Some(user),
            ..
        } => {
            let session = AuthSession { token, user };
            let store = state.auth_session.clone();
            let saved = session.clone();
            run_blocking(move || store.save_session(&saved)).await?;
            info!(user_id = %session.user.id, "Signed in ({mode:?})");
            Ok(session)
        }
        rejected => Err(AppError::AuthRejected(
            rejected
                .error
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| DEFAULT_AUTH_ERROR.to_string()),
        )),
    }
}

/// POST /api/v1/auth/login
pub async fn handle_login(
    State(state): State<AppState>,
    Json(form): Json<AuthForm>,
) -> Result<Json<SessionResponse>, AppError> {
    let session = authenticate(&state, AuthMode::Login, form).await?;
    Ok(Json(Some(session).into()))
}

/// POST /api/v1/auth/register
pub async fn handle_register(
    State(state): State<AppState>,
    Json(form): Json<AuthForm>,
) -> Result<(StatusCode, Json<SessionResponse>), AppError> {
    let session = authenticate(&state, AuthMode::Signup, form).await?;
    Ok((StatusCode::CREATED, Json(Some(session).into())))
}

/// GET /api/v1/auth/session
pub async fn handle_get_session(State(state): State<AppState>) -> Json<SessionResponse> {
    Json(state.auth_session.session().into())
}

/// DELETE /api/v1/auth/session
pub async fn handle_logout(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    let store = state.auth_session.clone();
    run_blocking(move || store.clear()).await?;
    info!("Signed out");
    Ok(StatusCode::NO_CONTENT)
}
