// src/watch/mod.rs

//! Directory watching and clipboard updates.
//!
//! This module is responsible for:
//! - Abstracting the notification source ([`source`]) and its `notify`
//!   implementation ([`notify_source`]).
//! - Deciding, per notification, whether the clipboard needs to change
//!   ([`batch`]).
//! - The async watch loop with cooperative cancellation ([`event_loop`],
//!   [`cancel`]).
//! - Keeping at most one loop alive at a time ([`supervisor`]).
//!
//! It does **not** know about the console or the CLI; it only turns
//! creation notifications into clipboard writes.

pub mod batch;
pub mod cancel;
pub mod event_loop;
pub mod notify_source;
pub mod paths;
pub mod source;
pub mod supervisor;

pub use batch::{handle_event, EventOutcome};
pub use cancel::{cancel_pair, CancelHandle, CancelSignal};
pub use event_loop::{RegisteredLoop, WatchLoop};
pub use notify_source::NotifySource;
pub use paths::{PathProvider, WatchedPath};
pub use source::{NotificationSource, WatchEvent, WatchEventKind, WatchHandle};
pub use supervisor::{WatchSupervisor, DEFAULT_SHUTDOWN_TIMEOUT};

use crate::types::ExtensionMode;

/// Suffix browsers give to files that are still downloading.
pub const CRDOWNLOAD_SUFFIX: &str = ".crdownload";

/// Per-event filtering and transform options shared by every loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoopOptions {
    /// Names ending in any of these never update the clipboard.
    pub partial_suffixes: Vec<String>,
    pub extension_mode: ExtensionMode,
}

impl Default for LoopOptions {
    fn default() -> Self {
        Self {
            partial_suffixes: vec![CRDOWNLOAD_SUFFIX.to_string()],
            extension_mode: ExtensionMode::default(),
        }
    }
}

impl LoopOptions {
    pub fn is_partial_download(&self, name: &str) -> bool {
        self.partial_suffixes.iter().any(|s| name.ends_with(s.as_str()))
    }
}
