use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;
use uuid::Uuid;

use crate::analysis::tryout::TryOutSession;
use crate::assessment::swipe::SwipeSession;
use crate::auth::session::SessionStore;
use crate::backend::CareerBackend;
use crate::catalog::find_career;
use crate::models::career::CareerPath;

/// Anything kept in a `SessionMap`; its age decides eviction.
pub trait Expiring {
    fn created_at(&self) -> DateTime<Utc>;
}

impl Expiring for SwipeSession {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Expiring for TryOutSession {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// In-memory sessions keyed by id. Last write wins. Entries older than the TTL are
/// dropped on every insert and by the periodic sweep in `main`.
pub struct SessionMap<T> {
    inner: RwLock<HashMap<Uuid, T>>,
    ttl: Duration,
}

impl<T: Expiring> SessionMap<T> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, HashMap<Uuid, T>> {
        self.inner.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, HashMap<Uuid, T>> {
        self.inner.write().await
    }

    pub async fn insert(&self, id: Uuid, value: T) {
        let mut map = self.inner.write().await;
        evict_older_than(&mut map, Utc::now() - self.ttl);
        map.insert(id, value);
    }

    pub async fn remove(&self, id: &Uuid) -> Option<T> {
        self.inner.write().await.remove(id)
    }

    /// Drops expired entries and returns how many went.
    pub async fn evict_expired(&self) -> usize {
        let mut map = self.inner.write().await;
        evict_older_than(&mut map, Utc::now() - self.ttl)
    }
}

fn evict_older_than<T: Expiring>(map: &mut HashMap<Uuid, T>, cutoff: DateTime<Utc>) -> usize {
    let before = map.len();
    map.retain(|_, v| v.created_at() >= cutoff);
    let evicted = before - map.len();
    if evicted > 0 {
        debug!("Evicted {evicted} expired sessions");
    }
    evicted
}

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Remote career/auth backend. `BackendClient` in production, a stub in tests.
    pub backend: Arc<dyn CareerBackend>,
    pub auth_session: Arc<SessionStore>,
    pub assessments: Arc<SessionMap<SwipeSession>>,
    pub tryouts: Arc<SessionMap<TryOutSession>>,
}

impl AppState {
    pub fn new(backend: Arc<dyn CareerBackend>, auth_session: SessionStore, session_ttl: Duration) -> Self {
        Self {
            backend,
            auth_session: Arc::new(auth_session),
            assessments: Arc::new(SessionMap::new(session_ttl)),
            tryouts: Arc::new(SessionMap::new(session_ttl)),
        }
    }

    /// A catalog career, or one recommended by a live assessment session.
    pub async fn resolve_career(&self, career_id: &str) -> Option<CareerPath> {
        if let Some(career) = find_career(career_id) {
            return Some(career.clone());
        }
        self.assessments
            .read()
            .await
            .values()
            .find_map(|s| s.recommended_career(career_id).cloned())
    }
}
