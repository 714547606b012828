//! File-backed key/value session store.
//!
//! Holds two keys: `cc_token` (the auth token) and `cc_user` (the signed-in user,
//! JSON-encoded). The whole map is rewritten on every change through a temp file in the
//! same directory followed by an atomic rename, so a crash never leaves a torn file.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use serde::Serialize;
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::user::User;

pub const TOKEN_KEY: &str = "cc_token";
pub const USER_KEY: &str = "cc_user";

#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("Session file I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("Session file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The signed-in user and their token.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthSession {
    pub token: String,
    pub user: User,
}

#[derive(Debug)]
pub struct SessionStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl SessionStore {
    /// Opens the store at `path`, loading any existing entries. A missing file is an
    /// empty store; the file is only created on the first write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SessionStoreError> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) if raw.trim().is_empty() => BTreeMap::new(),
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        debug!("Session store opened at {} ({} keys)", path.display(), entries.len());
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    #[cfg(test)]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<String, String>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }

    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    #[cfg(test)]
    pub fn set(&self, key: &str, value: String) -> Result<(), SessionStoreError> {
        let mut entries = self.lock();
        entries.insert(key.to_string(), value);
        self.flush(&entries)
    }

    /// Stores the token and user together in a single write.
    pub fn save_session(&self, session: &AuthSession) -> Result<(), SessionStoreError> {
        let user = serde_json::to_string(&session.user)?;
        let mut entries = self.lock();
        entries.insert(TOKEN_KEY.to_string(), session.token.clone());
        entries.insert(USER_KEY.to_string(), user);
        self.flush(&entries)
    }

    /// The current session, if both keys are present and the user decodes.
    pub fn session(&self) -> Option<AuthSession> {
        let entries = self.lock();
        let token = entries.get(TOKEN_KEY)?.clone();
        let user = match serde_json::from_str(entries.get(USER_KEY)?) {
            Ok(user) => user,
            Err(e) => {
                warn!("Ignoring undecodable {USER_KEY}: {e}");
                return None;
            }
        };
        Some(AuthSession { token, user })
    }

    /// Logs out: removes both keys.
    pub fn clear(&self) -> Result<(), SessionStoreError> {
        let mut entries = self.lock();
        let removed_token = entries.remove(TOKEN_KEY).is_some();
        let removed_user = entries.remove(USER_KEY).is_some();
        if removed_token || removed_user {
            self.flush(&entries)?;
        }
        Ok(())
    }

    fn flush(&self, entries: &BTreeMap<String, String>) -> Result<(), SessionStoreError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(serde_json::to_string_pretty(entries)?.as_bytes())?;
        tmp.flush()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::UserId;
    use tempfile::tempdir;

    fn asha() -> AuthSession {
        AuthSession {
            token: "token-123".to_string(),
            user: User {
                id: UserId::Number(1),
                name: "Asha".to_string(),
                email: "asha@example.com".to_string(),
                extra: Default::default(),
            },
        }
    }

    #[test]
    fn test_missing_file_is_empty_store() {
        let dir = tempdir().unwrap();
        let store = SessionStore::open(dir.path().join("session.json")).unwrap();
        assert!(store.session().is_none());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_session_survives_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/session.json");

        let store = SessionStore::open(&path).unwrap();
        store.save_session(&asha()).unwrap();
        drop(store);

        let reopened = SessionStore::open(&path).unwrap();
        assert_eq!(reopened.session(), Some(asha()));
        assert_eq!(reopened.get(TOKEN_KEY).as_deref(), Some("token-123"));
    }

    #[test]
    fn test_user_is_stored_as_json_string() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        let store = SessionStore::open(&path).unwrap();
        store.save_session(&asha()).unwrap();

        let raw: BTreeMap<String, String> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let user: User = serde_json::from_str(&raw[USER_KEY]).unwrap();
        assert_eq!(user.name, "Asha");
    }

    #[test]
    fn test_clear_removes_both_keys_and_keeps_others() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        let store = SessionStore::open(&path).unwrap();
        store.save_session(&asha()).unwrap();
        store.set("theme", "dark".to_string()).unwrap();

        store.clear().unwrap();

        let reopened = SessionStore::open(&path).unwrap();
        assert!(reopened.session().is_none());
        assert!(reopened.get(TOKEN_KEY).is_none());
        assert!(reopened.get(USER_KEY).is_none());
        assert_eq!(reopened.get("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_token_without_user_is_no_session() {
        let dir = tempdir().unwrap();
        let store = SessionStore::open(dir.path().join("session.json")).unwrap();
        store.set(TOKEN_KEY, "orphan".to_string()).unwrap();
        assert!(store.session().is_none());
    }

    #[test]
    fn test_corrupt_file_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{not json").unwrap();
        assert!(matches!(
            SessionStore::open(&path),
            Err(SessionStoreError::Parse(_))
        ));
    }
}
