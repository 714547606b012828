use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_BACKEND_URL: &str = "https://career-compass-backend-nzny.onrender.com";
const DEFAULT_AUTH_URL: &str = "https://career-compass-backend-1-1fnz.onrender.com";
const DEFAULT_SESSION_FILE: &str = ".compass/session.json";

/// Application configuration loaded from environment variables.
/// Every variable has a default, so a bare `compass` invocation talks to the hosted backend.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL for careers, assessment and analysis endpoints.
    pub backend_url: String,
    /// Base URL for `/api/auth/*`. The hosted deployment splits auth onto its own instance.
    pub auth_url: String,
    pub session_file: PathBuf,
    pub request_timeout: Duration,
    /// Age after which in-memory assessment and try-out sessions are dropped.
    pub session_ttl: chrono::Duration,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let request_timeout_secs = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "60".to_string())
            .parse::<u64>()
            .context("REQUEST_TIMEOUT_SECS must be a whole number of seconds")?;

        let session_ttl_mins = std::env::var("SESSION_TTL_MINS")
            .unwrap_or_else(|_| "120".to_string())
            .parse::<i64>()
            .context("SESSION_TTL_MINS must be a whole number of minutes")?;

        Ok(Config {
            backend_url: url_env("BACKEND_URL", DEFAULT_BACKEND_URL),
            auth_url: url_env("AUTH_URL", DEFAULT_AUTH_URL),
            session_file: std::env::var("SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_SESSION_FILE)),
            request_timeout: Duration::from_secs(request_timeout_secs),
            session_ttl: chrono::Duration::minutes(session_ttl_mins),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Reads a base URL from `key`, falling back to `default`. Trailing slashes are trimmed
/// so endpoint paths join cleanly.
fn url_env(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
        .trim_end_matches('/')
        .to_string()
}
