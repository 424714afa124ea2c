// src/buffer/memory.rs

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use super::TextBuffer;
use crate::errors::{ClipincError, Result};

#[derive(Debug, Default)]
struct MemoryState {
    text: Option<String>,
    writes: Vec<String>,
}

/// In-process text buffer.
///
/// Clones share the same content, so a test can keep one clone and hand
/// another to the watch loop. Every successful `set_text` is also recorded.
#[derive(Debug, Clone, Default)]
pub struct MemoryBuffer {
    state: Arc<Mutex<MemoryState>>,
    unavailable: Arc<AtomicBool>,
}

impl MemoryBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        let buffer = Self::new();
        if let Ok(mut state) = buffer.state.lock() {
            state.text = Some(text.into());
        }
        buffer
    }

    /// Every text written through `set_text`, oldest first.
    pub fn writes(&self) -> Vec<String> {
        self.lock().map(|s| s.writes.clone()).unwrap_or_default()
    }

    pub fn text(&self) -> Option<String> {
        self.lock().ok().and_then(|s| s.text.clone())
    }

    /// Make every read and write fail until switched back.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn lock(&self) -> Result<MutexGuard<'_, MemoryState>> {
        self.state
            .lock()
            .map_err(|_| ClipincError::BufferAccess("memory buffer lock poisoned".to_string()))
    }

    fn check_available(&self) -> Result<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(ClipincError::BufferAccess(
                "memory buffer marked unavailable".to_string(),
            ));
        }
        Ok(())
    }
}

impl TextBuffer for MemoryBuffer {
    fn get_text(&self) -> Result<Option<String>> {
        self.check_available()?;
        Ok(self.lock()?.text.clone())
    }

    fn set_text(&self, text: &str) -> Result<()> {
        self.check_available()?;
        let mut state = self.lock()?;
        state.text = Some(text.to_string());
        state.writes.push(text.to_string());
        Ok(())
    }
}
