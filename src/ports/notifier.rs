//! Notification collaborator port.

/// Surfaces transient user-facing messages.
///
/// The session core raises notifications only for conditions the user
/// must see: an expired session and a malformed account profile. Routine
/// operation failures (a cancelled popup) are logged, not surfaced, since
/// the caller can simply retry.
pub trait Notifier: Send + Sync {
    /// Shows an error message to the user.
    fn notify_error(&self, message: &str);
}
