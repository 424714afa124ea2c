// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{ClipincError, Result};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = ClipincError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_partial_suffixes(cfg)?;
    validate_shutdown_timeout(cfg)?;
    validate_clipboard_commands(cfg)?;
    Ok(())
}

fn validate_partial_suffixes(cfg: &RawConfigFile) -> Result<()> {
    if let Some(idx) = cfg.watch.partial_suffixes.iter().position(|s| s.is_empty()) {
        // An empty suffix would match every filename.
        return Err(ClipincError::ConfigError(format!(
            "[watch].partial_suffixes[{idx}] must not be empty"
        )));
    }
    Ok(())
}

fn validate_shutdown_timeout(cfg: &RawConfigFile) -> Result<()> {
    if cfg.watch.shutdown_timeout_ms == 0 {
        return Err(ClipincError::ConfigError(
            "[watch].shutdown_timeout_ms must be >= 1 (got 0)".to_string(),
        ));
    }
    Ok(())
}

fn validate_clipboard_commands(cfg: &RawConfigFile) -> Result<()> {
    let clipboard = &cfg.clipboard;
    match (&clipboard.read_command, &clipboard.write_command) {
        (None, None) => Ok(()),
        (Some(read), Some(write)) => {
            for (key, cmd) in [("read_command", read), ("write_command", write)] {
                if cmd.first().is_none_or(|program| program.trim().is_empty()) {
                    return Err(ClipincError::ConfigError(format!(
                        "[clipboard].{key} must start with a program name"
                    )));
                }
            }
            Ok(())
        }
        _ => Err(ClipincError::ConfigError(
            "[clipboard].read_command and write_command must be set together".to_string(),
        )),
    }
}
