//! Adapters for the navigation and notification collaborator ports.

mod logging;
mod recording;

pub use logging::{TracingNavigator, TracingNotifier};
pub use recording::{RecordingNavigator, RecordingNotifier};
