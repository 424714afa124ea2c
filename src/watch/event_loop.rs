// src/watch/event_loop.rs

//! The watch loop: one registered directory, one session.
//!
//! ```text
//! Idle --register--> Registered --run--> WaitingForEvents
//!                                         |        ^
//!                                         v        |
//!                                      ProcessingBatch
//!                                         |
//!                                         v
//!                                     Terminated
//! ```
//!
//! Registration happens synchronously in [`WatchLoop::register`] so that a
//! missing or inaccessible directory is reported to the caller instead of
//! disappearing inside a spawned task.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info};

use crate::buffer::TextBuffer;
use crate::errors::{ClipincError, Result};
use crate::format::status_lines;
use crate::types::LoopExit;
use crate::watch::LoopOptions;
use crate::watch::batch::{handle_event, EventOutcome};
use crate::watch::cancel::CancelSignal;
use crate::watch::paths::PathProvider;
use crate::watch::source::{NotificationSource, WatchEvent, WatchHandle};

pub struct WatchLoop;

impl WatchLoop {
    /// Read the watched path once and register it with `source`.
    pub fn register(
        paths: &dyn PathProvider,
        source: &dyn NotificationSource,
        buffer: Arc<dyn TextBuffer>,
        options: Arc<LoopOptions>,
    ) -> Result<RegisteredLoop> {
        let dir = paths
            .watched_path()
            .ok_or_else(|| ClipincError::registration("", "no directory configured"))?;

        let handle = source.register(&dir)?;

        Ok(RegisteredLoop {
            dir,
            session: SessionGuard { handle },
            buffer,
            options,
        })
    }
}

/// A loop whose directory is registered but which is not yet waiting.
pub struct RegisteredLoop {
    dir: PathBuf,
    session: SessionGuard,
    buffer: Arc<dyn TextBuffer>,
    options: Arc<LoopOptions>,
}

impl std::fmt::Debug for RegisteredLoop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisteredLoop")
            .field("dir", &self.dir)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl RegisteredLoop {
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Wait for batches and process them until cancelled, until the handle
    /// becomes invalid, or until the source fails.
    ///
    /// The handle is closed on every exit path, including when the task
    /// running this future is aborted.
    pub async fn run(self, mut cancel: CancelSignal) -> Result<LoopExit> {
        let RegisteredLoop {
            dir,
            mut session,
            buffer,
            options,
        } = self;

        info!(dir = ?dir, "watch loop started");
        println!("Watching {} for changes...\n", dir.display());

        loop {
            let batch = tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    info!(dir = ?dir, "watch loop cancelled while waiting");
                    return Ok(LoopExit::Cancelled);
                }
                batch = session.handle.next_batch() => batch?,
            };

            debug!(events = batch.len(), "processing notification batch");

            for event in batch {
                if cancel.is_cancelled() {
                    info!(dir = ?dir, "watch loop cancelled; dropping rest of batch");
                    return Ok(LoopExit::Cancelled);
                }
                process_event(event, &buffer, &options).await?;
            }

            if !session.handle.rearm() {
                info!(dir = ?dir, "watch handle no longer valid; stopping");
                return Ok(LoopExit::Invalidated);
            }
        }
    }
}

/// Clipboard utilities are blocking processes, so each event is handled on
/// the blocking pool.
async fn process_event(
    event: WatchEvent,
    buffer: &Arc<dyn TextBuffer>,
    options: &Arc<LoopOptions>,
) -> Result<()> {
    let buffer = Arc::clone(buffer);
    let options = Arc::clone(options);

    let outcome =
        tokio::task::spawn_blocking(move || handle_event(&event, buffer.as_ref(), &options))
            .await
            .map_err(|e| ClipincError::Other(anyhow::Error::from(e)))?;

    if let EventOutcome::Updated {
        original,
        candidate,
    } = outcome
    {
        info!(file = %original, clipboard = %candidate, "clipboard updated");
        println!("{}", status_lines(&original, &candidate));
    }

    Ok(())
}

/// Owns the session handle and closes it when dropped.
struct SessionGuard {
    handle: Box<dyn WatchHandle>,
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        self.handle.close();
        debug!("watch session closed");
    }
}
