// src/session.rs
//! Persisted session state - the CLI analogue of the token/email pair the
//! browser client kept in localStorage

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    pub token: Option<String>,
    pub email: Option<String>,
}

impl Session {
    pub fn authenticated(token: String, email: String) -> Self {
        Self {
            token: Some(token),
            email: Some(email),
        }
    }

    /// All data-loading API calls are gated on this.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Loads and stores the session file across invocations.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    /// A missing file is simply a logged-out session.
    pub async fn load(&self) -> Result<Session> {
        if !self.path.exists() {
            return Ok(Session::default());
        }

        let content = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read session file: {}", self.path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Malformed session file: {}", self.path.display()))
    }

    pub async fn save(&self, session: &Session) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(session).context("Failed to serialize session")?;
        tokio::fs::write(&self.path, content)
            .await
            .with_context(|| format!("Failed to write session file: {}", self.path.display()))
    }

    /// Logout: remove the file entirely.
    pub async fn clear(&self) -> Result<()> {
        if self.path.exists() {
            tokio::fs::remove_file(&self.path)
                .await
                .with_context(|| format!("Failed to remove session file: {}", self.path.display()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_load_round_trip() {
        let tmp = tempfile::tempdir().unwrap();
        let store = SessionStore::new(&tmp.path().join("session.toml"));

        let session = Session::authenticated("tok-123".to_string(), "me@example.com".to_string());
        store.save(&session).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded.token.as_deref(), Some("tok-123"));
        assert_eq!(loaded.email.as_deref(), Some("me@example.com"));
        assert!(loaded.is_authenticated());
    }

    #[tokio::test]
    async fn test_missing_file_is_logged_out() {
        let tmp = tempfile::tempdir().unwrap();
        let store = SessionStore::new(&tmp.path().join("nope.toml"));

        let session = store.load().await.unwrap();
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_clear_removes_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("session.toml");
        let store = SessionStore::new(&path);

        store
            .save(&Session::authenticated("t".to_string(), "e".to_string()))
            .await
            .unwrap();
        assert!(path.exists());

        store.clear().await.unwrap();
        assert!(!path.exists());

        // Clearing an already-cleared session is fine.
        store.clear().await.unwrap();
    }
}
