// src/directory.rs

//! Directory helpers used by the console and at startup.

use std::fs;
use std::path::Path;

use anyhow::Context;
use tokio::process::Command;
use tracing::{debug, info};

use crate::errors::Result;

pub fn directory_exists(path: &Path) -> bool {
    path.is_dir()
}

/// Create `path` and any missing parents.
pub fn create_directory(path: &Path) -> Result<()> {
    fs::create_dir_all(path).with_context(|| format!("creating directory {:?}", path))?;
    info!(?path, "created directory");
    Ok(())
}

/// Open `path` in the platform's file manager.
pub async fn open_in_file_manager(path: &Path) -> Result<()> {
    let program = if cfg!(windows) {
        "explorer"
    } else if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    };

    let status = Command::new(program)
        .arg(path)
        .status()
        .await
        .with_context(|| format!("running {program} for {:?}", path))?;

    // explorer.exe reports 1 even when the window opened fine.
    debug!(program, ?path, code = status.code(), "file manager exited");
    Ok(())
}
