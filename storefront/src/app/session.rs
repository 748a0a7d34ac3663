//! # Session Persistence
//!
//! Keeps the bearer token and the user's role between runs, the way a
//! browser keeps them in local storage.

use crate::core::error::{AppError, Result};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use shared::UserRole;
use std::path::{Path, PathBuf};

/// What survives a restart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoredSession {
    pub token: String,
    #[serde(default)]
    pub role: UserRole,
}

/// Storage backend for [`StoredSession`].
pub trait SessionStore: Send + Sync {
    /// The stored session, if any. Unreadable data counts as no session.
    fn load(&self) -> Option<StoredSession>;

    fn save(&self, session: &StoredSession) -> Result<()>;

    /// Forget the stored session. Clearing an empty store succeeds.
    fn clear(&self) -> Result<()>;
}

/// JSON file store used by the CLI.
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
    fn load(&self) -> Option<StoredSession> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to read session file");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Ignoring malformed session file");
                None
            }
        }
    }

    fn save(&self, session: &StoredSession) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| AppError::State(format!("Failed to create {}: {}", parent.display(), e)))?;
        }

        let json = serde_json::to_string_pretty(session)
            .map_err(|e| AppError::State(format!("Failed to encode session: {}", e)))?;
        std::fs::write(&self.path, json)
            .map_err(|e| AppError::State(format!("Failed to write {}: {}", self.path.display(), e)))?;

        tracing::debug!(path = %self.path.display(), "Session saved");
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::State(format!(
                "Failed to remove {}: {}",
                self.path.display(),
                e
            ))),
        }
    }
}

/// In-memory store for tests and one-shot runs.
#[derive(Default)]
pub struct MemorySessionStore {
    inner: RwLock<Option<StoredSession>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with a session.
    pub fn with_session(session: StoredSession) -> Self {
        Self {
            inner: RwLock::new(Some(session)),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<StoredSession> {
        self.inner.read().clone()
    }

    fn save(&self, session: &StoredSession) -> Result<()> {
        *self.inner.write() = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.inner.write() = None;
        Ok(())
    }
}
