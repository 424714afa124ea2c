use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;

use clipinc::errors::{ClipincError, Result};
use clipinc::watch::source::BatchFuture;
use clipinc::watch::{NotificationSource, WatchEvent, WatchHandle};

enum Delivery {
    Events(Vec<WatchEvent>),
    Error(String),
}

#[derive(Default)]
struct FakeState {
    registered: Vec<PathBuf>,
    open: usize,
    max_open: usize,
    closed: usize,
    rearms: usize,
    invalid: bool,
    fail_registration: bool,
    sender: Option<mpsc::UnboundedSender<Delivery>>,
}

/// A notification source driven by the test.
///
/// - `push` delivers one batch to the most recently registered handle.
/// - `set_valid(false)` makes the next `rearm` report an invalid handle.
/// - Counters record registrations, closes and re-arms so tests can assert
///   that handles are released and wait for a batch to be fully processed.
#[derive(Clone, Default)]
pub struct FakeSource {
    state: Arc<Mutex<FakeState>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver a batch. Returns `false` if no handle is registered.
    pub fn push(&self, events: Vec<WatchEvent>) -> bool {
        self.deliver(Delivery::Events(events))
    }

    /// Make the next wait fail with a notification-source error.
    pub fn push_error(&self, message: &str) -> bool {
        self.deliver(Delivery::Error(message.to_string()))
    }

    pub fn set_valid(&self, valid: bool) {
        self.state.lock().unwrap().invalid = !valid;
    }

    pub fn fail_registration(&self, fail: bool) {
        self.state.lock().unwrap().fail_registration = fail;
    }

    pub fn registered(&self) -> Vec<PathBuf> {
        self.state.lock().unwrap().registered.clone()
    }

    pub fn open_handles(&self) -> usize {
        self.state.lock().unwrap().open
    }

    /// Highest number of simultaneously open handles ever observed.
    pub fn max_open_handles(&self) -> usize {
        self.state.lock().unwrap().max_open
    }

    pub fn closed_handles(&self) -> usize {
        self.state.lock().unwrap().closed
    }

    /// Number of `rearm` calls, i.e. fully processed batches.
    pub fn rearms(&self) -> usize {
        self.state.lock().unwrap().rearms
    }

    fn deliver(&self, delivery: Delivery) -> bool {
        let state = self.state.lock().unwrap();
        match &state.sender {
            Some(tx) => tx.send(delivery).is_ok(),
            None => false,
        }
    }
}

impl NotificationSource for FakeSource {
    fn register(&self, dir: &Path) -> Result<Box<dyn WatchHandle>> {
        let mut state = self.state.lock().unwrap();
        if state.fail_registration {
            return Err(ClipincError::registration(dir, "fake registration failure"));
        }

        let (tx, rx) = mpsc::unbounded_channel();
        state.sender = Some(tx);
        state.registered.push(dir.to_path_buf());
        state.open += 1;
        state.max_open = state.max_open.max(state.open);

        Ok(Box::new(FakeHandle {
            rx,
            state: Arc::clone(&self.state),
            closed: false,
        }))
    }
}

struct FakeHandle {
    rx: mpsc::UnboundedReceiver<Delivery>,
    state: Arc<Mutex<FakeState>>,
    closed: bool,
}

impl WatchHandle for FakeHandle {
    fn next_batch(&mut self) -> BatchFuture<'_> {
        Box::pin(async move {
            match self.rx.recv().await {
                Some(Delivery::Events(events)) => Ok(events),
                Some(Delivery::Error(message)) => Err(ClipincError::NotificationSource(message)),
                // Sender replaced by a newer registration: nothing will ever
                // arrive again, so block until cancelled.
                None => std::future::pending().await,
            }
        })
    }

    fn rearm(&mut self) -> bool {
        let mut state = self.state.lock().unwrap();
        state.rearms += 1;
        !state.invalid
    }

    fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        let mut state = self.state.lock().unwrap();
        state.open -= 1;
        state.closed += 1;
    }
}
