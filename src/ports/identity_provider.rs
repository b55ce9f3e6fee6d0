//! Identity provider port.
//!
//! The identity provider is an external authentication backend consumed
//! as an opaque capability: it drives its own interactive sign-in UI,
//! owns the account records, and pushes account-state changes on its own
//! schedule. This port is the entire surface the session core sees.
//!
//! # Contract
//!
//! Implementations must:
//! - Resolve `sign_in_interactive` with `Ok(None)` when the provider
//!   completes without an account (degenerate case), and reject with a
//!   [`ProviderError`] on cancellation or network failure
//! - Return anonymous accounts from `sign_in_anonymous` with no display
//!   name pre-set
//! - Persist `set_display_name` onto the account record, so that later
//!   push events for the same session observe the stored name
//! - Deliver push events in order on the subscription channel, and stop
//!   delivering once the receiver is dropped

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::domain::foundation::UserId;
use crate::domain::identity::{AuthStateChange, ProviderError, RawIdentity};

/// Receiving end of the provider's account-state push channel.
///
/// Dropping the receiver is the unsubscribe: the provider observes the
/// closed channel and releases the registration. The session core holds
/// exactly one of these for its lifetime.
pub type AuthStateEvents = mpsc::UnboundedReceiver<AuthStateChange>;

/// Capability interface over the external identity provider.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Runs the provider's interactive (popup-driven) sign-in.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(raw))` - sign-in completed with an account record
    /// * `Ok(None)` - sign-in completed without an account
    /// * `Err(_)` - cancelled popup, network failure, provider rejection
    async fn sign_in_interactive(&self) -> Result<Option<RawIdentity>, ProviderError>;

    /// Establishes an anonymous account.
    ///
    /// The returned record has no display name pre-set; the caller is
    /// responsible for persisting one via [`set_display_name`].
    ///
    /// [`set_display_name`]: IdentityProvider::set_display_name
    async fn sign_in_anonymous(&self) -> Result<RawIdentity, ProviderError>;

    /// Persists a display name onto the given account record.
    async fn set_display_name(&self, id: &UserId, name: &str) -> Result<(), ProviderError>;

    /// Terminates the provider-side session.
    async fn sign_out(&self) -> Result<(), ProviderError>;

    /// Registers for account-state change pushes.
    ///
    /// Events arrive for the lifetime of the returned receiver,
    /// independent of any explicit operation call.
    fn subscribe(&self) -> AuthStateEvents;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_provider_trait_is_object_safe_and_send_sync() {
        fn _assert_trait_object(_: &dyn IdentityProvider) {}
        fn _assert_arc_send_sync<T: Send + Sync + ?Sized>() {}
        _assert_arc_send_sync::<std::sync::Arc<dyn IdentityProvider>>();
    }
}
