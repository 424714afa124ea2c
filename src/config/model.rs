// src/config/model.rs

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::types::ExtensionMode;
use crate::watch::{LoopOptions, CRDOWNLOAD_SUFFIX};

/// Configuration as read from TOML, before validation.
///
/// ```toml
/// [watch]
/// directory = "/home/me/Downloads"
/// partial_suffixes = [".crdownload", ".part"]
/// extension_mode = "all"
/// shutdown_timeout_ms = 800
///
/// [clipboard]
/// read_command = ["xsel", "--clipboard", "--output"]
/// write_command = ["xsel", "--clipboard", "--input"]
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfigFile {
    #[serde(default)]
    pub watch: WatchSection,

    #[serde(default)]
    pub clipboard: ClipboardSection,
}

/// `[clipboard]` section. Both commands or neither; without them the
/// platform's clipboard utility is used.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClipboardSection {
    pub read_command: Option<Vec<String>>,
    pub write_command: Option<Vec<String>>,
}

/// `[watch]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WatchSection {
    /// Directory to watch. `--dir` on the command line wins over this.
    #[serde(default)]
    pub directory: Option<PathBuf>,

    /// Filenames ending in any of these are treated as unfinished downloads.
    #[serde(default = "default_partial_suffixes")]
    pub partial_suffixes: Vec<String>,

    /// `"all"` (default) or `"last"`.
    #[serde(default)]
    pub extension_mode: ExtensionMode,

    /// How long to wait for a cancelled watch loop before aborting it.
    #[serde(default = "default_shutdown_timeout_ms")]
    pub shutdown_timeout_ms: u64,
}

fn default_partial_suffixes() -> Vec<String> {
    vec![CRDOWNLOAD_SUFFIX.to_string()]
}

fn default_shutdown_timeout_ms() -> u64 {
    800
}

impl Default for WatchSection {
    fn default() -> Self {
        Self {
            directory: None,
            partial_suffixes: default_partial_suffixes(),
            extension_mode: ExtensionMode::default(),
            shutdown_timeout_ms: default_shutdown_timeout_ms(),
        }
    }
}

/// Validated configuration. Only constructed through `TryFrom<RawConfigFile>`.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    watch: WatchSection,
    clipboard: ClipboardSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(raw: RawConfigFile) -> Self {
        Self {
            watch: raw.watch,
            clipboard: raw.clipboard,
        }
    }

    /// Configured `(read, write)` clipboard commands, if any.
    pub fn clipboard_commands(&self) -> Option<(&[String], &[String])> {
        match (&self.clipboard.read_command, &self.clipboard.write_command) {
            (Some(read), Some(write)) => Some((read.as_slice(), write.as_slice())),
            _ => None,
        }
    }

    pub fn directory(&self) -> Option<&PathBuf> {
        self.watch.directory.as_ref()
    }

    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_millis(self.watch.shutdown_timeout_ms)
    }

    pub fn loop_options(&self) -> LoopOptions {
        LoopOptions {
            partial_suffixes: self.watch.partial_suffixes.clone(),
            extension_mode: self.watch.extension_mode,
        }
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self::new_unchecked(RawConfigFile::default())
    }
}
