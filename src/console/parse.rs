// src/console/parse.rs

use std::sync::LazyLock;

use regex::Regex;

/// A bare word, or a double-quoted string that may contain spaces.
static ARG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[^\s"']+|"([^"]*)""#).expect("static regex is valid"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    /// Print the watched directory.
    Directory,
    /// Watch another directory; prompts for it when no argument was given.
    Change(Option<String>),
    /// Open the watched directory in the file manager.
    Open,
    Exit,
    Unknown(String),
}

/// Split on whitespace, keeping double-quoted parts together.
///
/// `change "C:/my name/Test Folder"` -> `["change", "C:/my name/Test Folder"]`
pub fn split_args(input: &str) -> Vec<String> {
    ARG.captures_iter(input)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(0)))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Parse one console line. `None` for blank input.
pub fn parse_command(line: &str) -> Option<Command> {
    let mut parts = split_args(line).into_iter();
    let word = parts.next()?.to_lowercase();

    let command = match word.as_str() {
        "help" | "?" => Command::Help,
        "dir" | "directory" => Command::Directory,
        "change" | "cd" => Command::Change(parts.next()),
        "open" => Command::Open,
        "exit" | "stop" | "quit" => Command::Exit,
        _ => Command::Unknown(word),
    };
    Some(command)
}

pub const HELP_TEXT: &str = "\
Available commands:
  help                 Show this list
  dir, directory       Show the directory being watched
  change [path]        Watch another directory (quote paths with spaces)
  open                 Open the watched directory in the file manager
  exit, stop, quit     Stop the application
";
