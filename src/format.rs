// src/format.rs

//! Console echo formatting.

pub const NEW_FILE_PREFIX: &str = "New file is created: ";
pub const CLIPBOARD_SET_PREFIX: &str = "Clipboard is set to: ";

/// `"- "` repeated `length` times, followed by a newline.
pub fn create_divider(length: usize) -> String {
    let mut divider = "- ".repeat(length);
    divider.push('\n');
    divider
}

/// Status block printed after the clipboard was updated: a divider about half
/// as wide as the first line, a blank line, then the original name and the
/// new content.
pub fn status_lines(filename: &str, clipboard_text: &str) -> String {
    let width = (NEW_FILE_PREFIX.chars().count() + filename.chars().count()) / 2;
    format!(
        "{}\n{NEW_FILE_PREFIX}{filename}\n{CLIPBOARD_SET_PREFIX}{clipboard_text}\n",
        create_divider(width)
    )
}

pub fn start_banner() -> String {
    [
        "- - - - - - - - - - - - - - - - - - - - - - - - - - -",
        "- - - - - - - - Clipboard Incrementor - - - - - - - -",
        "- - - - - - - - - - - - - - - - - - - - - - - - - - -",
        "- - - - Type 'help' to see available commands - - - -",
        "- - - - - - - - - - - - - - - - - - - - - - - - - - -",
        "",
    ]
    .join("\n")
}
