// src/watch/notify_source.rs

use std::path::{Path, PathBuf};

use notify::event::{ModifyKind, RenameMode};
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::errors::{ClipincError, Result};
use crate::watch::source::{BatchFuture, NotificationSource, WatchEvent, WatchEventKind, WatchHandle};

/// Production notification source backed by `notify`'s recommended watcher.
///
/// The directory is watched non-recursively. A file renamed into the
/// directory counts as created, since browsers finish downloads that way.
#[derive(Debug, Clone, Default)]
pub struct NotifySource;

impl NotifySource {
    pub fn new() -> Self {
        Self
    }
}

impl NotificationSource for NotifySource {
    fn register(&self, dir: &Path) -> Result<Box<dyn WatchHandle>> {
        if !dir.is_dir() {
            return Err(ClipincError::registration(dir, "directory does not exist"));
        }
        // Canonicalize once so we have a stable base path.
        let dir = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());

        // Channel from the blocking notify callback into the async world.
        let (event_tx, event_rx) = mpsc::unbounded_channel::<notify::Result<Event>>();

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| {
                // The receiver is gone once the handle is closed; late events
                // are simply dropped.
                let _ = event_tx.send(res);
            },
            Config::default(),
        )
        .map_err(|e| ClipincError::registration(&dir, e))?;

        watcher
            .watch(&dir, RecursiveMode::NonRecursive)
            .map_err(|e| ClipincError::registration(&dir, e))?;

        info!(dir = ?dir, "registered directory with file watcher");

        Ok(Box::new(NotifyHandle {
            dir,
            watcher: Some(watcher),
            event_rx,
            source_closed: false,
            pending_error: None,
        }))
    }
}

struct NotifyHandle {
    dir: PathBuf,
    watcher: Option<RecommendedWatcher>,
    event_rx: mpsc::UnboundedReceiver<notify::Result<Event>>,
    source_closed: bool,
    /// Source error seen after some events of the same wake-up; reported by
    /// the next `next_batch`.
    pending_error: Option<ClipincError>,
}

impl NotifyHandle {
    async fn wait_for_batch(&mut self) -> Result<Vec<WatchEvent>> {
        if let Some(err) = self.pending_error.take() {
            return Err(err);
        }
        if self.watcher.is_none() {
            return Ok(Vec::new());
        }

        let first = match self.event_rx.recv().await {
            Some(res) => res,
            None => {
                self.source_closed = true;
                return Ok(Vec::new());
            }
        };

        // Everything already queued belongs to the same wake-up.
        let mut queued = vec![first];
        while let Ok(res) = self.event_rx.try_recv() {
            queued.push(res);
        }

        let (batch, err) = collect_batch(queued);
        match err {
            Some(err) if batch.is_empty() => return Err(err),
            Some(err) => {
                debug!(dir = ?self.dir, error = %err, "source error deferred until batch is processed");
                self.pending_error = Some(err);
            }
            None => {}
        }

        debug!(dir = ?self.dir, events = batch.len(), "notification batch received");
        Ok(batch)
    }
}

impl WatchHandle for NotifyHandle {
    fn next_batch(&mut self) -> BatchFuture<'_> {
        Box::pin(self.wait_for_batch())
    }

    fn rearm(&mut self) -> bool {
        self.watcher.is_some() && !self.source_closed && self.dir.is_dir()
    }

    fn close(&mut self) {
        if let Some(mut watcher) = self.watcher.take() {
            let _ = watcher.unwatch(&self.dir);
            self.event_rx.close();
            debug!(dir = ?self.dir, "file watcher released");
        }
    }
}

impl Drop for NotifyHandle {
    fn drop(&mut self) {
        self.close();
    }
}

/// Translate queued results in order, stopping at the first error.
///
/// Events that arrived before the error are returned with it, so they are
/// still processed; anything queued after the error is dropped.
pub fn collect_batch(
    results: impl IntoIterator<Item = notify::Result<Event>>,
) -> (Vec<WatchEvent>, Option<ClipincError>) {
    let mut batch = Vec::new();
    for res in results {
        match res {
            Ok(event) => batch.extend(translate_event(&event)),
            Err(e) => return (batch, Some(ClipincError::NotificationSource(e.to_string()))),
        }
    }
    (batch, None)
}

/// Turn one `notify` event into zero or more watch events, one per path.
pub fn translate_event(event: &Event) -> Vec<WatchEvent> {
    let kind = match event.kind {
        EventKind::Create(_) => WatchEventKind::Created,
        EventKind::Modify(ModifyKind::Name(RenameMode::To)) => WatchEventKind::Created,
        EventKind::Modify(ModifyKind::Name(RenameMode::Both)) => {
            // paths = [from, to]; only the destination is new.
            return event
                .paths
                .get(1)
                .and_then(|p| file_name(p))
                .map(WatchEvent::created)
                .into_iter()
                .collect();
        }
        _ => WatchEventKind::Other,
    };

    event
        .paths
        .iter()
        .filter_map(|p| file_name(p))
        .map(|name| WatchEvent { kind, name })
        .collect()
}

fn file_name(path: &Path) -> Option<String> {
    path.file_name().map(|n| n.to_string_lossy().into_owned())
}
