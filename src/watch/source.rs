// src/watch/source.rs

//! Notification source abstraction.
//!
//! The watch loop never touches `notify` directly. It registers a directory
//! with a [`NotificationSource`] and then drives the returned
//! [`WatchHandle`]: wait for a batch, process it, re-arm, repeat.
//! Tests provide a fake source that delivers scripted batches.

use std::future::Future;
use std::path::Path;
use std::pin::Pin;

use crate::errors::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchEventKind {
    Created,
    Other,
}

/// One filesystem notification: what happened, and to which name.
///
/// `name` is a single path component, never a full path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchEvent {
    pub kind: WatchEventKind,
    pub name: String,
}

impl WatchEvent {
    pub fn created(name: impl Into<String>) -> Self {
        Self {
            kind: WatchEventKind::Created,
            name: name.into(),
        }
    }

    pub fn other(name: impl Into<String>) -> Self {
        Self {
            kind: WatchEventKind::Other,
            name: name.into(),
        }
    }
}

/// Boxed future returned by [`WatchHandle::next_batch`].
pub type BatchFuture<'a> = Pin<Box<dyn Future<Output = Result<Vec<WatchEvent>>> + Send + 'a>>;

/// A registered directory. Owned by exactly one watch loop.
pub trait WatchHandle: Send {
    /// Wait for the next batch of notifications.
    ///
    /// This is the loop's only suspension point. An empty batch means the
    /// source has nothing more to deliver; `rearm` will then report the
    /// handle as invalid.
    fn next_batch(&mut self) -> BatchFuture<'_>;

    /// Prepare for the next wait. `false` means the handle is no longer valid
    /// (directory removed, source closed) and the loop must stop.
    fn rearm(&mut self) -> bool;

    /// Release the underlying registration. Must be idempotent.
    fn close(&mut self);
}

/// Something a directory can be registered with for creation notifications.
pub trait NotificationSource: Send + Sync {
    fn register(&self, dir: &Path) -> Result<Box<dyn WatchHandle>>;
}
