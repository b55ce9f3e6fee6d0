//! Tracing-backed collaborators for headless embeddings.
//!
//! A host without a UI shell (integration harnesses, scripted drivers)
//! still needs the collaborator ports wired; these adapters route the
//! calls to `tracing` instead.

use crate::ports::{Navigator, Notifier};

/// Navigator that logs navigation requests.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNavigator;

impl Navigator for TracingNavigator {
    fn navigate(&self, path: &str) {
        tracing::info!(path, "navigation requested");
    }
}

/// Notifier that logs user-facing error messages.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify_error(&self, message: &str) {
        tracing::error!(message, "user notification raised");
    }
}
