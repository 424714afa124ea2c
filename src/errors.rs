// src/errors.rs

//! Crate-wide error type and result alias.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClipincError {
    /// The directory could not be registered with the notification source.
    /// Fatal for the session; never retried.
    #[error("Could not watch {path:?}: {reason}")]
    Registration { path: PathBuf, reason: String },

    /// The notification source failed while waiting for events.
    #[error("Notification source failed: {0}")]
    NotificationSource(String),

    /// The clipboard could not be read or written.
    #[error("Clipboard unavailable: {0}")]
    BufferAccess(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ClipincError {
    pub fn registration(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        ClipincError::Registration {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, ClipincError>;
