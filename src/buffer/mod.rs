// src/buffer/mod.rs

//! Text buffer (clipboard) access.
//!
//! The watch loop only talks to a [`TextBuffer`]. Production uses
//! [`SystemClipboard`]; tests and `--no-clipboard` runs use [`MemoryBuffer`].

use std::fmt::Debug;

use crate::errors::Result;

pub mod memory;
pub mod system;

pub use memory::MemoryBuffer;
pub use system::SystemClipboard;

/// Abstract clipboard interface.
pub trait TextBuffer: Send + Sync + Debug {
    /// Current text content, or `None` if the buffer holds no text.
    fn get_text(&self) -> Result<Option<String>>;

    /// Replace the buffer content with `text`.
    fn set_text(&self, text: &str) -> Result<()>;
}
