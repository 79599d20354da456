//! The logged-in session: in-memory state shared with the HTTP client and a
//! JSON file that keeps it between runs.

use std::path::{Path, PathBuf};
use log::warn;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use shopdesk_domain::auth::{AuthSession, SessionStore};
use shopdesk_domain::DomainError;

/// Current session, shared between the auth service and every resource client.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    inner: Arc<RwLock<Option<AuthSession>>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self, session: AuthSession) {
        *self.write() = Some(session);
    }

    pub fn clear(&self) {
        *self.write() = None;
    }

    pub fn token(&self) -> Option<String> {
        self.read().as_ref().map(|s| s.token.clone())
    }

    pub fn username(&self) -> Option<String> {
        self.read().as_ref().and_then(|s| s.username.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    // A poisoned lock still holds a whole Option; keep using it.
    fn read(&self) -> RwLockReadGuard<'_, Option<AuthSession>> {
        self.inner.read().unwrap_or_else(|poisoned| {
            warn!("Session lock poisoned, recovering");
            poisoned.into_inner()
        })
    }

    fn write(&self) -> RwLockWriteGuard<'_, Option<AuthSession>> {
        self.inner.write().unwrap_or_else(|poisoned| {
            warn!("Session lock poisoned, recovering");
            poisoned.into_inner()
        })
    }
}

/// Session persisted as a small JSON file.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<AuthSession>, DomainError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            DomainError::Infrastructure(format!("Failed to read session file: {e}"))
        })?;
        let session: AuthSession = serde_json::from_str(&content)
            .map_err(|e| DomainError::Serialization(format!("Corrupt session file: {e}")))?;

        Ok(Some(session).filter(|s| !s.token.is_empty()))
    }

    fn save(&self, session: &AuthSession) -> Result<(), DomainError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DomainError::Infrastructure(format!("Failed to create session directory: {e}"))
            })?;
        }

        let content = serde_json::to_string(session)
            .map_err(|e| DomainError::Serialization(e.to_string()))?;
        std::fs::write(&self.path, content).map_err(|e| {
            DomainError::Infrastructure(format!("Failed to write session file: {e}"))
        })
    }

    fn clear(&self) -> Result<(), DomainError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(DomainError::Infrastructure(format!(
                "Failed to remove session file: {e}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn session() -> AuthSession {
        AuthSession {
            token: "jwt-token".to_string(),
            username: Some("admin".to_string()),
        }
    }

    #[test]
    fn test_state_begin_and_clear() {
        let state = SessionState::new();
        assert!(!state.is_authenticated());

        state.begin(session());
        let shared = state.clone();
        assert_eq!(shared.token().as_deref(), Some("jwt-token"));
        assert_eq!(shared.username().as_deref(), Some("admin"));

        shared.clear();
        assert!(!state.is_authenticated());
        assert!(state.username().is_none());
    }

    #[test]
    fn test_state_survives_poisoned_lock() {
        let state = SessionState::new();
        let poisoner = state.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.inner.write().unwrap();
            panic!("writer panicked while holding the session lock");
        })
        .join();
        assert!(state.inner.is_poisoned());

        state.begin(session());
        assert_eq!(state.token().as_deref(), Some("jwt-token"));
        assert!(state.is_authenticated());

        state.clear();
        assert!(!state.is_authenticated());
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(dir.path().join("nested").join("session.json"));

        assert_eq!(store.load().unwrap(), None);

        store.save(&session()).unwrap();
        assert_eq!(store.load().unwrap(), Some(session()));

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
        // clearing twice is fine
        store.clear().unwrap();
    }

    #[test]
    fn test_file_store_rejects_garbage() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = FileSessionStore::new(&path).load().unwrap_err();
        assert!(matches!(err, DomainError::Serialization(_)));
    }
}
