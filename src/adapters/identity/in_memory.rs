//! In-memory identity provider for testing and headless embedding.
//!
//! Scriptable implementation of the `IdentityProvider` port: tests
//! configure what the sign-in operations return, force errors, and emit
//! account-state pushes on demand. `set_display_name` persists onto the
//! stored account record, so a later push for the same session observes
//! the stored name, matching the real provider's behavior.
//!
//! # Panics
//!
//! Methods may panic if internal locks are poisoned. This is acceptable
//! for test code but this adapter should NOT back a production build.
//!
//! # Example
//!
//! ```ignore
//! let provider = Arc::new(
//!     InMemoryIdentityProvider::new().with_interactive_identity(RawIdentity {
//!         provider_id: "u1".to_string(),
//!         display_name: Some("Jane Doe".to_string()),
//!         photo_url: None,
//!         is_anonymous: false,
//!     }),
//! );
//!
//! let raw = provider.sign_in_interactive().await?.unwrap();
//! provider.push_no_account(); // simulate session expiry
//! ```

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::domain::foundation::UserId;
use crate::domain::identity::{AuthStateChange, ProviderError, RawIdentity};
use crate::ports::{AuthStateEvents, IdentityProvider};

/// Scripted result for interactive sign-in.
#[derive(Debug, Clone, Default)]
enum InteractiveScript {
    /// Resolve with the given account record.
    Identity(RawIdentity),
    /// Resolve without an account (provider degenerate case).
    #[default]
    NoIdentity,
}

/// In-memory identity provider.
#[derive(Debug, Default)]
pub struct InMemoryIdentityProvider {
    /// What `sign_in_interactive` resolves with.
    interactive: Mutex<InteractiveScript>,
    /// Template record for anonymous sign-in; minted fresh when absent.
    anonymous: Mutex<Option<RawIdentity>>,
    /// Optional error returned by every operation (for error testing).
    force_error: Mutex<Option<ProviderError>>,
    /// Provider-side account records, keyed by provider id.
    accounts: Mutex<HashMap<String, RawIdentity>>,
    /// Provider id of the active account, if any.
    active: Mutex<Option<String>>,
    /// Registered push subscribers.
    subscribers: Mutex<Vec<mpsc::UnboundedSender<AuthStateChange>>>,
    /// Recorded `set_display_name` calls as (provider id, name) pairs.
    display_name_calls: Mutex<Vec<(String, String)>>,
    sign_out_calls: AtomicUsize,
}

impl InMemoryIdentityProvider {
    /// Creates a provider whose interactive sign-in resolves without an
    /// account and whose anonymous sign-in mints fresh records.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts interactive sign-in to resolve with the given record.
    pub fn with_interactive_identity(self, raw: RawIdentity) -> Self {
        *self.interactive.lock().expect("interactive lock poisoned") =
            InteractiveScript::Identity(raw);
        self
    }

    /// Scripts interactive sign-in to resolve without an account.
    pub fn with_interactive_no_identity(self) -> Self {
        *self.interactive.lock().expect("interactive lock poisoned") =
            InteractiveScript::NoIdentity;
        self
    }

    /// Scripts anonymous sign-in to resolve with the given record.
    pub fn with_anonymous_identity(self, raw: RawIdentity) -> Self {
        *self.anonymous.lock().expect("anonymous lock poisoned") = Some(raw);
        self
    }

    /// Forces every operation to fail with the given error.
    pub fn with_error(self, error: ProviderError) -> Self {
        *self.force_error.lock().expect("force_error lock poisoned") = Some(error);
        self
    }

    /// Forces every operation to fail with the given error, at runtime.
    pub fn force_error(&self, error: ProviderError) {
        *self.force_error.lock().expect("force_error lock poisoned") = Some(error);
    }

    /// Clears the forced error and returns to normal operation.
    pub fn clear_error(&self) {
        *self.force_error.lock().expect("force_error lock poisoned") = None;
    }

    /// Re-scripts interactive sign-in at runtime.
    pub fn script_interactive_identity(&self, raw: RawIdentity) {
        *self.interactive.lock().expect("interactive lock poisoned") =
            InteractiveScript::Identity(raw);
    }

    /// Re-scripts interactive sign-in to resolve without an account.
    pub fn script_interactive_no_identity(&self) {
        *self.interactive.lock().expect("interactive lock poisoned") =
            InteractiveScript::NoIdentity;
    }

    /// Emits an account push carrying the given record to all subscribers.
    pub fn push_account(&self, raw: RawIdentity) {
        self.broadcast(AuthStateChange::Account(raw));
    }

    /// Emits a no-active-account push to all subscribers.
    pub fn push_no_account(&self) {
        self.broadcast(AuthStateChange::NoAccount);
    }

    /// Emits a push carrying the active account's stored record.
    ///
    /// Reflects any display name persisted via `set_display_name` since
    /// the account was established.
    ///
    /// # Panics
    ///
    /// Panics if no account is active.
    pub fn push_active_account(&self) {
        let active = self
            .active
            .lock()
            .expect("active lock poisoned")
            .clone()
            .expect("push_active_account: no active account");
        let raw = self
            .accounts
            .lock()
            .expect("accounts lock poisoned")
            .get(&active)
            .cloned()
            .expect("push_active_account: active account has no record");
        self.push_account(raw);
    }

    // === Test Helpers ===

    /// Returns recorded `set_display_name` calls as (provider id, name).
    pub fn display_name_calls(&self) -> Vec<(String, String)> {
        self.display_name_calls
            .lock()
            .expect("display_name_calls lock poisoned")
            .clone()
    }

    /// Returns how many times `sign_out` was invoked.
    pub fn sign_out_count(&self) -> usize {
        self.sign_out_calls.load(Ordering::SeqCst)
    }

    /// Returns the number of live push subscriptions.
    pub fn subscriber_count(&self) -> usize {
        let mut subscribers = self.subscribers.lock().expect("subscribers lock poisoned");
        subscribers.retain(|tx| !tx.is_closed());
        subscribers.len()
    }

    fn broadcast(&self, change: AuthStateChange) {
        let mut subscribers = self.subscribers.lock().expect("subscribers lock poisoned");
        subscribers.retain(|tx| tx.send(change.clone()).is_ok());
    }

    fn forced_error(&self) -> Option<ProviderError> {
        self.force_error
            .lock()
            .expect("force_error lock poisoned")
            .clone()
    }

    fn establish(&self, raw: RawIdentity) {
        let id = raw.provider_id.clone();
        self.accounts
            .lock()
            .expect("accounts lock poisoned")
            .insert(id.clone(), raw);
        *self.active.lock().expect("active lock poisoned") = Some(id);
    }
}

#[async_trait]
impl IdentityProvider for InMemoryIdentityProvider {
    async fn sign_in_interactive(&self) -> Result<Option<RawIdentity>, ProviderError> {
        if let Some(error) = self.forced_error() {
            return Err(error);
        }

        match self.interactive.lock().expect("interactive lock poisoned").clone() {
            InteractiveScript::Identity(raw) => {
                self.establish(raw.clone());
                Ok(Some(raw))
            }
            InteractiveScript::NoIdentity => Ok(None),
        }
    }

    async fn sign_in_anonymous(&self) -> Result<RawIdentity, ProviderError> {
        if let Some(error) = self.forced_error() {
            return Err(error);
        }

        let raw = self
            .anonymous
            .lock()
            .expect("anonymous lock poisoned")
            .clone()
            .unwrap_or_else(|| RawIdentity {
                provider_id: format!("anon-{}", Uuid::new_v4()),
                display_name: None,
                photo_url: None,
                is_anonymous: true,
            });
        self.establish(raw.clone());
        Ok(raw)
    }

    async fn set_display_name(&self, id: &UserId, name: &str) -> Result<(), ProviderError> {
        if let Some(error) = self.forced_error() {
            return Err(error);
        }

        self.display_name_calls
            .lock()
            .expect("display_name_calls lock poisoned")
            .push((id.as_str().to_string(), name.to_string()));

        let mut accounts = self.accounts.lock().expect("accounts lock poisoned");
        match accounts.get_mut(id.as_str()) {
            Some(raw) => {
                raw.display_name = Some(name.to_string());
                Ok(())
            }
            None => Err(ProviderError::rejected(format!("no account {}", id))),
        }
    }

    async fn sign_out(&self) -> Result<(), ProviderError> {
        self.sign_out_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(error) = self.forced_error() {
            return Err(error);
        }

        *self.active.lock().expect("active lock poisoned") = None;
        Ok(())
    }

    fn subscribe(&self) -> AuthStateEvents {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers
            .lock()
            .expect("subscribers lock poisoned")
            .push(tx);
        rx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> RawIdentity {
        RawIdentity {
            provider_id: "u1".to_string(),
            display_name: Some("Jane Doe".to_string()),
            photo_url: None,
            is_anonymous: false,
        }
    }

    #[tokio::test]
    async fn interactive_resolves_without_account_by_default() {
        let provider = InMemoryIdentityProvider::new();
        assert_eq!(provider.sign_in_interactive().await.unwrap(), None);
    }

    #[tokio::test]
    async fn interactive_resolves_with_scripted_identity() {
        let provider = InMemoryIdentityProvider::new().with_interactive_identity(jane());
        let raw = provider.sign_in_interactive().await.unwrap().unwrap();
        assert_eq!(raw.provider_id, "u1");
    }

    #[tokio::test]
    async fn anonymous_mints_record_without_display_name() {
        let provider = InMemoryIdentityProvider::new();
        let raw = provider.sign_in_anonymous().await.unwrap();

        assert!(raw.provider_id.starts_with("anon-"));
        assert_eq!(raw.display_name, None);
        assert!(raw.is_anonymous);
    }

    #[tokio::test]
    async fn forced_error_fails_every_operation() {
        let provider =
            InMemoryIdentityProvider::new().with_error(ProviderError::unavailable("down"));

        assert!(provider.sign_in_interactive().await.is_err());
        assert!(provider.sign_in_anonymous().await.is_err());
        assert!(provider.sign_out().await.is_err());

        provider.clear_error();
        assert!(provider.sign_in_interactive().await.is_ok());
    }

    #[tokio::test]
    async fn set_display_name_persists_onto_stored_record() {
        let provider = InMemoryIdentityProvider::new();
        let raw = provider.sign_in_anonymous().await.unwrap();
        let id = UserId::new(raw.provider_id.clone()).unwrap();

        provider.set_display_name(&id, "Bob").await.unwrap();

        let mut events = provider.subscribe();
        provider.push_active_account();
        match events.try_recv().unwrap() {
            AuthStateChange::Account(pushed) => {
                assert_eq!(pushed.display_name.as_deref(), Some("Bob"));
            }
            other => panic!("expected account push, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn set_display_name_rejects_unknown_account() {
        let provider = InMemoryIdentityProvider::new();
        let id = UserId::new("ghost").unwrap();
        assert!(provider.set_display_name(&id, "Bob").await.is_err());
    }

    #[tokio::test]
    async fn pushes_reach_all_subscribers() {
        let provider = InMemoryIdentityProvider::new();
        let mut first = provider.subscribe();
        let mut second = provider.subscribe();

        provider.push_no_account();

        assert_eq!(first.try_recv().unwrap(), AuthStateChange::NoAccount);
        assert_eq!(second.try_recv().unwrap(), AuthStateChange::NoAccount);
    }

    #[tokio::test]
    async fn dropped_subscriber_is_released() {
        let provider = InMemoryIdentityProvider::new();
        let events = provider.subscribe();
        assert_eq!(provider.subscriber_count(), 1);

        drop(events);
        provider.push_no_account();
        assert_eq!(provider.subscriber_count(), 0);
    }

    #[tokio::test]
    async fn sign_out_count_tracks_calls() {
        let provider = InMemoryIdentityProvider::new();
        provider.sign_out().await.unwrap();
        provider.sign_out().await.unwrap();
        assert_eq!(provider.sign_out_count(), 2);
    }
}
