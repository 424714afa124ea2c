// src/watch/paths.rs

use std::path::PathBuf;
use std::sync::{Arc, RwLock};

/// Source of the directory to watch. Read once per session, at registration.
pub trait PathProvider: Send + Sync {
    fn watched_path(&self) -> Option<PathBuf>;
}

/// Shared, settable watched-directory value.
///
/// Clones share the same slot: the console changes it, the supervisor reads
/// it when registering a new session.
#[derive(Debug, Clone, Default)]
pub struct WatchedPath {
    inner: Arc<RwLock<Option<PathBuf>>>,
}

impl WatchedPath {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(path)),
        }
    }

    pub fn set(&self, path: impl Into<PathBuf>) {
        if let Ok(mut guard) = self.inner.write() {
            *guard = Some(path.into());
        }
    }

    pub fn get(&self) -> Option<PathBuf> {
        self.inner.read().ok().and_then(|guard| guard.clone())
    }
}

impl PathProvider for WatchedPath {
    fn watched_path(&self) -> Option<PathBuf> {
        self.get()
    }
}
