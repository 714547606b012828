mod analysis;
mod assessment;
mod auth;
mod backend;
mod catalog;
mod config;
mod errors;
mod models;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::auth::session::SessionStore;
use crate::backend::BackendClient;
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

const SWEEP_INTERVAL_SECS: u64 = 60;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Career Compass v{}", env!("CARGO_PKG_VERSION"));

    let backend = BackendClient::new(&config)?;
    info!(
        "Backend client initialized (careers: {}, auth: {}, timeout: {:?})",
        config.backend_url, config.auth_url, config.request_timeout
    );

    let sessions = SessionStore::open(&config.session_file)?;
    info!("Session store at {}", config.session_file.display());

    let state = AppState::new(Arc::new(backend), sessions, config.session_ttl);
    spawn_session_sweeper(state.clone());

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Periodically drops expired assessment and try-out sessions, so idle ones do not
/// wait for the next insert to be evicted.
fn spawn_session_sweeper(state: AppState) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(SWEEP_INTERVAL_SECS));
        loop {
            interval.tick().await;
            let evicted = state.assessments.evict_expired().await + state.tryouts.evict_expired().await;
            if evicted > 0 {
                debug!("Session sweep evicted {evicted} sessions");
            }
        }
    });
}
