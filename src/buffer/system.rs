// src/buffer/system.rs

//! System clipboard through the platform's clipboard utilities.
//!
//! - macOS: `pbpaste` / `pbcopy`
//! - Windows: PowerShell `Get-Clipboard` / `Set-Clipboard`
//! - Wayland: `wl-paste` / `wl-copy`
//! - X11: `xclip -selection clipboard`
//!
//! Other setups configure their own read and write commands.

use std::io::Write;
use std::process::{Command, Stdio};

use tracing::debug;

use super::TextBuffer;
use crate::errors::{ClipincError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Backend {
    MacOs,
    Windows,
    Wayland,
    X11,
    Custom {
        read: Vec<String>,
        write: Vec<String>,
    },
}

#[derive(Debug, Clone)]
pub struct SystemClipboard {
    backend: Backend,
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClipboard {
    pub fn new() -> Self {
        let backend = if cfg!(target_os = "macos") {
            Backend::MacOs
        } else if cfg!(windows) {
            Backend::Windows
        } else if std::env::var_os("WAYLAND_DISPLAY").is_some() {
            Backend::Wayland
        } else {
            Backend::X11
        };
        debug!(?backend, "selected clipboard backend");
        Self { backend }
    }

    /// Use explicit commands, each given as program followed by arguments.
    /// The read command prints the clipboard text; the write command reads
    /// the new text from stdin.
    pub fn with_commands(read: Vec<String>, write: Vec<String>) -> Result<Self> {
        if read.is_empty() || write.is_empty() {
            return Err(ClipincError::ConfigError(
                "clipboard commands must name a program".to_string(),
            ));
        }
        Ok(Self {
            backend: Backend::Custom { read, write },
        })
    }

    fn read_command(&self) -> Command {
        match &self.backend {
            Backend::MacOs => Command::new("pbpaste"),
            Backend::Windows => {
                let mut c = Command::new("powershell");
                c.args(["-NoProfile", "-Command", "Get-Clipboard -Raw"]);
                c
            }
            Backend::Wayland => {
                let mut c = Command::new("wl-paste");
                c.arg("--no-newline");
                c
            }
            Backend::X11 => {
                let mut c = Command::new("xclip");
                c.args(["-selection", "clipboard", "-o"]);
                c
            }
            Backend::Custom { read, .. } => command_line(read),
        }
    }

    fn write_command(&self) -> Command {
        match &self.backend {
            Backend::MacOs => Command::new("pbcopy"),
            Backend::Windows => {
                let mut c = Command::new("powershell");
                c.args([
                    "-NoProfile",
                    "-Command",
                    "Set-Clipboard -Value ([Console]::In.ReadToEnd())",
                ]);
                c
            }
            Backend::Wayland => Command::new("wl-copy"),
            Backend::X11 => {
                let mut c = Command::new("xclip");
                c.args(["-selection", "clipboard", "-i"]);
                c
            }
            Backend::Custom { write, .. } => command_line(write),
        }
    }
}

fn command_line(parts: &[String]) -> Command {
    // `with_commands` rejects empty command lines.
    let (program, args) = parts.split_first().map_or(("", &[][..]), |(p, a)| (p.as_str(), a));
    let mut c = Command::new(program);
    c.args(args);
    c
}

impl TextBuffer for SystemClipboard {
    fn get_text(&self) -> Result<Option<String>> {
        let output = self
            .read_command()
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .map_err(|e| ClipincError::BufferAccess(format!("reading clipboard: {e}")))?;

        // The paste utilities exit non-zero when the clipboard holds no text.
        if !output.status.success() {
            return Ok(None);
        }

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        if matches!(self.backend, Backend::Windows) && text.ends_with("\r\n") {
            text.truncate(text.len() - 2);
        }

        if text.is_empty() { Ok(None) } else { Ok(Some(text)) }
    }

    fn set_text(&self, text: &str) -> Result<()> {
        // The copy utilities may fork to keep serving the selection, so
        // stdout/stderr must not be pipes we wait on.
        let mut child = self
            .write_command()
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| ClipincError::BufferAccess(format!("writing clipboard: {e}")))?;

        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };

        if let Err(e) = written {
            // The utility quit early (no display, bad arguments). Reap it so
            // it does not linger as a zombie.
            let _ = child.kill();
            let _ = child.wait();
            return Err(ClipincError::BufferAccess(format!("writing clipboard: {e}")));
        }

        let status = child
            .wait()
            .map_err(|e| ClipincError::BufferAccess(format!("writing clipboard: {e}")))?;

        if !status.success() {
            return Err(ClipincError::BufferAccess(format!(
                "clipboard utility exited with {status}"
            )));
        }

        Ok(())
    }
}
