use std::str::FromStr;
use serde::Deserialize;

/// How much of a filename counts as "extension" before incrementing.
///
/// - `All`: strip everything from the first `.` that is not the leading
///   character (`a.min.css` -> `a`). This is the default.
/// - `Last`: strip only the final extension (`a.min.css` -> `a.min`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtensionMode {
    All,
    Last,
}

impl Default for ExtensionMode {
    fn default() -> Self {
        ExtensionMode::All
    }
}

impl FromStr for ExtensionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(ExtensionMode::All),
            "last" => Ok(ExtensionMode::Last),
            other => Err(format!(
                "invalid extension_mode: {other} (expected \"all\" or \"last\")"
            )),
        }
    }
}

/// Why a watch loop stopped without an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    /// Cancellation was requested (console command, directory change, Ctrl-C).
    Cancelled,
    /// The watch handle could not be re-armed (directory removed, source closed).
    Invalidated,
}
