// src/watch/batch.rs

//! Per-notification decision logic.
//!
//! Synchronous and free of channels or tasks, so it can be tested with a
//! [`MemoryBuffer`](crate::buffer::MemoryBuffer) alone. The async loop in
//! [`event_loop`](crate::watch::event_loop) feeds it one event at a time.

use tracing::{debug, warn};

use crate::buffer::TextBuffer;
use crate::filename::increment_with;
use crate::watch::source::{WatchEvent, WatchEventKind};
use crate::watch::LoopOptions;

/// What happened to a single notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    /// Name ends with a partial-download suffix; dropped.
    PartialDownload,
    /// Not a creation; dropped.
    Ignored,
    /// The clipboard already holds the incremented name.
    Duplicate,
    /// The clipboard was set to `candidate`.
    Updated { original: String, candidate: String },
    /// The clipboard could not be read or written; event skipped.
    BufferUnavailable,
}

/// Decide what to do with one notification and update the clipboard if
/// needed.
///
/// Notification sources sometimes report one physical creation twice. The
/// equality check against the current clipboard text is what suppresses the
/// second write; notifications are never counted.
pub fn handle_event(
    event: &WatchEvent,
    buffer: &dyn TextBuffer,
    options: &LoopOptions,
) -> EventOutcome {
    if options.is_partial_download(&event.name) {
        debug!(name = %event.name, "skipping partial download");
        return EventOutcome::PartialDownload;
    }

    if event.kind != WatchEventKind::Created {
        return EventOutcome::Ignored;
    }

    let outcome = increment_with(&event.name, options.extension_mode);
    if outcome.is_suffixed() {
        debug!(name = %event.name, "no number in filename; added \" (1)\"");
    }
    let candidate = outcome.into_string();

    match buffer.get_text() {
        Ok(Some(current)) if current == candidate => {
            debug!(name = %event.name, %candidate, "clipboard already up to date");
            return EventOutcome::Duplicate;
        }
        Ok(_) => {}
        Err(err) => {
            warn!(name = %event.name, error = %err, "could not read clipboard; skipping event");
            return EventOutcome::BufferUnavailable;
        }
    }

    if let Err(err) = buffer.set_text(&candidate) {
        warn!(name = %event.name, error = %err, "could not set clipboard; skipping event");
        return EventOutcome::BufferUnavailable;
    }

    EventOutcome::Updated {
        original: event.name.clone(),
        candidate,
    }
}
