//! Adapters - Implementations of the ports.
//!
//! The real identity provider and the UI shell live outside this crate;
//! the adapters here back the ports for tests and headless embeddings.

pub mod identity;
pub mod ui;

pub use identity::InMemoryIdentityProvider;
pub use ui::{RecordingNavigator, RecordingNotifier, TracingNavigator, TracingNotifier};
