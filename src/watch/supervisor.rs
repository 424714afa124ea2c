// src/watch/supervisor.rs

//! Single-slot owner of the active watch loop.
//!
//! There is never more than one session: `start` cancels and joins the
//! previous loop (releasing its handle) before registering the next one, and
//! the whole transition runs under one async mutex so two transitions cannot
//! interleave.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::buffer::TextBuffer;
use crate::errors::Result;
use crate::types::LoopExit;
use crate::watch::LoopOptions;
use crate::watch::cancel::{cancel_pair, CancelHandle};
use crate::watch::event_loop::WatchLoop;
use crate::watch::paths::WatchedPath;
use crate::watch::source::NotificationSource;

/// Default upper bound for a loop to stop after cancellation.
pub const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_millis(800);

/// Internal handle for the running loop task.
struct ActiveSession {
    dir: PathBuf,
    cancel: CancelHandle,
    handle: JoinHandle<Result<LoopExit>>,
}

pub struct WatchSupervisor {
    paths: WatchedPath,
    source: Arc<dyn NotificationSource>,
    buffer: Arc<dyn TextBuffer>,
    options: Arc<LoopOptions>,
    shutdown_timeout: Duration,
    slot: Mutex<Option<ActiveSession>>,
}

impl std::fmt::Debug for WatchSupervisor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatchSupervisor")
            .field("paths", &self.paths)
            .field("options", &self.options)
            .field("shutdown_timeout", &self.shutdown_timeout)
            .finish_non_exhaustive()
    }
}

impl WatchSupervisor {
    pub fn new(
        paths: WatchedPath,
        source: Arc<dyn NotificationSource>,
        buffer: Arc<dyn TextBuffer>,
        options: LoopOptions,
    ) -> Self {
        Self {
            paths,
            source,
            buffer,
            options: Arc::new(options),
            shutdown_timeout: DEFAULT_SHUTDOWN_TIMEOUT,
            slot: Mutex::new(None),
        }
    }

    pub fn with_shutdown_timeout(mut self, timeout: Duration) -> Self {
        self.shutdown_timeout = timeout;
        self
    }

    pub fn paths(&self) -> &WatchedPath {
        &self.paths
    }

    /// Stop any running loop, then register the current watched path and
    /// spawn a fresh loop for it.
    ///
    /// Registration errors are returned as-is and never retried; in that case
    /// no loop is running afterwards.
    pub async fn start(&self) -> Result<PathBuf> {
        let mut slot = self.slot.lock().await;

        if let Some(previous) = slot.take() {
            self.stop_session(previous).await;
        }

        let registered = WatchLoop::register(
            &self.paths,
            self.source.as_ref(),
            Arc::clone(&self.buffer),
            Arc::clone(&self.options),
        )?;
        let dir = registered.dir().to_path_buf();

        let (cancel, signal) = cancel_pair();
        let task_dir = dir.clone();
        let handle = tokio::spawn(async move {
            let res = registered.run(signal).await;
            match &res {
                Ok(exit) => info!(dir = ?task_dir, ?exit, "watch loop finished"),
                Err(err) => error!(dir = ?task_dir, error = %err, "watch loop failed"),
            }
            res
        });

        *slot = Some(ActiveSession {
            dir: dir.clone(),
            cancel,
            handle,
        });

        Ok(dir)
    }

    /// Point the supervisor at `dir` and restart the loop there.
    pub async fn change_directory(&self, dir: impl Into<PathBuf>) -> Result<PathBuf> {
        self.paths.set(dir);
        self.start().await
    }

    /// Cancel and join the running loop, if any. Returns whether there was one.
    pub async fn cancel(&self) -> bool {
        let mut slot = self.slot.lock().await;
        match slot.take() {
            Some(session) => {
                self.stop_session(session).await;
                true
            }
            None => false,
        }
    }

    /// Stop watching before the process exits.
    pub async fn shutdown(&self) {
        if self.cancel().await {
            info!("watch loop stopped");
        }
    }

    /// Whether a loop is currently running.
    pub async fn is_active(&self) -> bool {
        self.slot
            .lock()
            .await
            .as_ref()
            .is_some_and(|s| !s.handle.is_finished())
    }

    /// Directory of the running loop, if any.
    pub async fn active_dir(&self) -> Option<PathBuf> {
        self.slot
            .lock()
            .await
            .as_ref()
            .filter(|s| !s.handle.is_finished())
            .map(|s| s.dir.clone())
    }

    async fn stop_session(&self, session: ActiveSession) {
        let ActiveSession {
            dir,
            cancel,
            mut handle,
        } = session;

        cancel.cancel();

        match tokio::time::timeout(self.shutdown_timeout, &mut handle).await {
            Ok(Ok(Ok(exit))) => debug!(dir = ?dir, ?exit, "previous watch loop stopped"),
            Ok(Ok(Err(err))) => {
                debug!(dir = ?dir, error = %err, "previous watch loop had already failed")
            }
            Ok(Err(join_err)) => warn!(dir = ?dir, error = %join_err, "watch loop task panicked"),
            Err(_) => {
                warn!(
                    dir = ?dir,
                    timeout_ms = self.shutdown_timeout.as_millis() as u64,
                    "watch loop did not stop in time; aborting"
                );
                handle.abort();
                // Awaiting the aborted task drops its session guard.
                let _ = handle.await;
            }
        }
    }
}
