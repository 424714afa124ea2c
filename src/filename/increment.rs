// src/filename/increment.rs

use tracing::debug;

use crate::filename::extension;
use crate::filename::number::{find_last_number, increment_digits};
use crate::types::ExtensionMode;

/// Suffix appended when there is no number to increment.
pub const NO_NUMBER_SUFFIX: &str = " (1)";

/// Result of incrementing a filename.
///
/// Both variants carry the new name; the tag only records which rule
/// produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncrementOutcome {
    /// The last number in the name was incremented.
    Incremented(String),
    /// No number was found, so `" (1)"` was appended.
    Suffixed(String),
}

impl IncrementOutcome {
    pub fn as_str(&self) -> &str {
        match self {
            IncrementOutcome::Incremented(s) | IncrementOutcome::Suffixed(s) => s,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            IncrementOutcome::Incremented(s) | IncrementOutcome::Suffixed(s) => s,
        }
    }

    pub fn is_suffixed(&self) -> bool {
        matches!(self, IncrementOutcome::Suffixed(_))
    }
}

/// Strip all extensions and increment the last number.
///
/// `"Cool Car (09).jpg"` -> `"Cool Car (10)"`, `"file.txt"` -> `"file (1)"`.
pub fn increment(filename: &str) -> String {
    increment_with(filename, ExtensionMode::All).into_string()
}

pub fn increment_with(filename: &str, mode: ExtensionMode) -> IncrementOutcome {
    increment_last_number(extension::strip(filename, mode))
}

/// Increment the last number of a name whose extensions are already removed.
pub fn increment_last_number(name: &str) -> IncrementOutcome {
    let Some(number) = find_last_number(name) else {
        debug!(name, "no number in filename; appending suffix");
        return suffixed(name);
    };

    let unpadded = number.unpadded();
    let Some(incremented) = increment_digits(unpadded) else {
        debug!(name, digits = number.digits, "could not increment number; appending suffix");
        return suffixed(name);
    };

    let mut zeros = number.leading_zeros;
    if zeros > 0 && (incremented.len() > unpadded.len() || number.is_all_zeros()) {
        zeros -= 1;
    }

    let mut out = String::with_capacity(name.len() + 1);
    out.push_str(&name[..number.start]);
    out.extend(std::iter::repeat_n('0', zeros));
    out.push_str(&incremented);
    out.push_str(&name[number.end..]);

    IncrementOutcome::Incremented(out)
}

fn suffixed(name: &str) -> IncrementOutcome {
    IncrementOutcome::Suffixed(format!("{name}{NO_NUMBER_SUFFIX}"))
}
