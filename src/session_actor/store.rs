//! Session persistence.
//!
//! The authenticated identity (never the password) survives restarts through
//! a [`SessionStore`]: one serialized record under one well-known location,
//! written on login/register, cleared on logout, read back at startup.
//! Products and transactions are deliberately not persisted; they reset
//! every process start.

use async_trait::async_trait;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::warn;

use crate::model::Identity;

/// Where the current identity is parked between processes.
///
/// Injected into the session actor as its context, so the state machine
/// stays independent of the storage choice.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Persist the identity, replacing any previous record.
    async fn save(&self, identity: &Identity) -> io::Result<()>;

    /// Load the persisted identity, if any. An unreadable record is cleared
    /// and reported as absent rather than failing startup.
    async fn load(&self) -> io::Result<Option<Identity>>;

    /// Remove the persisted record. Removing an absent record is fine.
    async fn clear(&self) -> io::Result<()>;
}

/// File-backed store: one JSON document at a fixed path.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn save(&self, identity: &Identity) -> io::Result<()> {
        let json = serde_json::to_vec_pretty(identity).map_err(io::Error::other)?;
        tokio::fs::write(&self.path, json).await
    }

    async fn load(&self) -> io::Result<Option<Identity>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e),
        };
        match serde_json::from_slice(&bytes) {
            Ok(identity) => Ok(Some(identity)),
            Err(e) => {
                warn!(error = %e, path = %self.path.display(), "Discarding unreadable session record");
                self.clear().await?;
                Ok(None)
            }
        }
    }

    async fn clear(&self) -> io::Result<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

/// In-memory store for tests and demos.
#[derive(Default)]
pub struct MemorySessionStore {
    slot: Mutex<Option<Identity>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn save(&self, identity: &Identity) -> io::Result<()> {
        *self.slot.lock().unwrap() = Some(identity.clone());
        Ok(())
    }

    async fn load(&self) -> io::Result<Option<Identity>> {
        Ok(self.slot.lock().unwrap().clone())
    }

    async fn clear(&self) -> io::Result<()> {
        *self.slot.lock().unwrap() = None;
        Ok(())
    }
}
