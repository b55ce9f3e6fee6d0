//! Recording collaborators for testing.
//!
//! Capture navigation and notification calls so tests can assert on the
//! side effects the session core drives.
//!
//! # Panics
//!
//! Methods may panic if internal locks are poisoned (test code only).

use std::sync::Mutex;

use crate::ports::{Navigator, Notifier};

/// Navigator that records every requested path.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    paths: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    /// Creates a new empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded paths in request order.
    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().expect("paths lock poisoned").clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.paths
            .lock()
            .expect("paths lock poisoned")
            .push(path.to_string());
    }
}

/// Notifier that records every error message.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    /// Creates a new empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded messages in notification order.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().expect("messages lock poisoned").clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify_error(&self, message: &str) {
        self.messages
            .lock()
            .expect("messages lock poisoned")
            .push(message.to_string());
    }
}
