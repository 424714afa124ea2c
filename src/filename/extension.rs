// src/filename/extension.rs

//! Extension stripping.
//!
//! A `.` at offset 0 never starts an extension, so dotfiles keep their
//! leading dot: `.gitignore.temp.old` -> `.gitignore`.

use crate::types::ExtensionMode;

/// Remove every extension: truncate at the first `.` that is not the
/// first character.
pub fn remove_extensions(filename: &str) -> &str {
    match filename.char_indices().skip(1).find(|&(_, c)| c == '.') {
        Some((idx, _)) => &filename[..idx],
        None => filename,
    }
}

/// Remove only the final extension, if its `.` is not the first character.
pub fn remove_last_extension(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(idx) if idx > 0 => &filename[..idx],
        _ => filename,
    }
}

pub fn strip(filename: &str, mode: ExtensionMode) -> &str {
    match mode {
        ExtensionMode::All => remove_extensions(filename),
        ExtensionMode::Last => remove_last_extension(filename),
    }
}
