//! SessionManager - the identity and session synchronization core.
//!
//! Owns the single current-user slot, exposes the sign-in/sign-out
//! operations, and reconciles local state against the provider's push
//! channel. Everything else in the application reads the slot through
//! read-only snapshots and never mutates session state directly.
//!
//! # Concurrency
//!
//! The push subscription is drained by one spawned task; explicit
//! operations run on their callers' tasks. Their arrival order is not
//! coordinated, so every write to the slot is a wholesale replacement
//! (last writer wins) and no torn state is observable. The subscription
//! is established exactly once at startup and released exactly once at
//! shutdown; results that resolve after shutdown are not applied.
//!
//! # Failure semantics
//!
//! Provider failures never propagate to callers as errors: operations
//! log and return an absent result, and callers test the returned value.
//! The only user-facing notifications raised here are the session-expiry
//! and malformed-profile notices, both driven by push events.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::domain::foundation::{StateMachine, UserId};
use crate::domain::identity::{
    AuthStateChange, DisplayName, RawIdentity, SessionPhase, SessionUser,
};
use crate::ports::{IdentityProvider, Navigator, Notifier};

use super::routes;

/// Notice raised when the provider reports no active account.
pub const SESSION_EXPIRED_NOTICE: &str = "Your session has expired";

/// Notice raised when a pushed account record fails validation.
pub const MALFORMED_PROFILE_NOTICE: &str =
    "It looks like your account is missing a display name or photo";

/// The identity and session synchronization core.
///
/// Construct with [`SessionManager::start`] inside a tokio runtime. The
/// push listener is torn down on [`shutdown`](SessionManager::shutdown)
/// or drop.
pub struct SessionManager {
    inner: Arc<SessionInner>,
    listener: JoinHandle<()>,
}

struct SessionInner {
    provider: Arc<dyn IdentityProvider>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
    current: watch::Sender<Option<SessionUser>>,
    phase: watch::Sender<SessionPhase>,
    closed: AtomicBool,
}

impl SessionManager {
    /// Starts the manager and subscribes to the provider push channel.
    ///
    /// Must be called within a tokio runtime: the push listener runs as
    /// a spawned task until shutdown.
    pub fn start(
        provider: Arc<dyn IdentityProvider>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let (current, _) = watch::channel(None);
        let (phase, _) = watch::channel(SessionPhase::LoggedOut);

        let mut events = provider.subscribe();
        let inner = Arc::new(SessionInner {
            provider,
            navigator,
            notifier,
            current,
            phase,
            closed: AtomicBool::new(false),
        });

        let listener = tokio::spawn({
            let inner = Arc::clone(&inner);
            async move {
                while let Some(change) = events.recv().await {
                    inner.apply_auth_change(change);
                }
                tracing::debug!("account-state push channel closed");
            }
        });

        Self { inner, listener }
    }

    /// Runs the provider's interactive sign-in and establishes the
    /// session on success.
    ///
    /// Returns `None` on provider failure, on a sign-in that completes
    /// without an account, and on a malformed account record; all three
    /// are logged and leave the current session untouched. Callers test
    /// the returned value and may retry.
    pub async fn sign_in_interactive(&self) -> Option<SessionUser> {
        match self.inner.provider.sign_in_interactive().await {
            Ok(Some(raw)) => match SessionUser::from_provider(&raw) {
                Ok(user) => self.inner.establish(user),
                Err(err) => {
                    tracing::warn!(error = %err, "interactive sign-in returned a malformed account");
                    None
                }
            },
            Ok(None) => {
                tracing::debug!("interactive sign-in completed without an account");
                None
            }
            Err(err) => {
                tracing::warn!(error = %err, "interactive sign-in failed");
                None
            }
        }
    }

    /// Establishes an anonymous session under the supplied display name.
    ///
    /// The provider does not furnish a name for anonymous accounts, so
    /// the supplied one is persisted onto the account record before the
    /// session is established; later push events for the same session
    /// observe it. Failure handling mirrors
    /// [`sign_in_interactive`](SessionManager::sign_in_interactive).
    pub async fn sign_in_anonymous(&self, display_name: DisplayName) -> Option<SessionUser> {
        let raw = match self.inner.provider.sign_in_anonymous().await {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!(error = %err, "anonymous sign-in failed");
                return None;
            }
        };

        let id = match UserId::new(raw.provider_id.clone()) {
            Ok(id) => id,
            Err(err) => {
                tracing::warn!(error = %err, "anonymous account record has no provider id");
                return None;
            }
        };

        if let Err(err) = self
            .inner
            .provider
            .set_display_name(&id, display_name.as_str())
            .await
        {
            tracing::warn!(error = %err, "failed to persist anonymous display name");
            return None;
        }

        let raw = RawIdentity {
            display_name: Some(display_name.into_inner()),
            ..raw
        };
        match SessionUser::from_provider(&raw) {
            Ok(user) => self.inner.establish(user),
            Err(err) => {
                tracing::warn!(error = %err, "anonymous sign-in produced a malformed account");
                None
            }
        }
    }

    /// Signs out at the provider and clears the local session.
    ///
    /// The local slot is cleared even when the provider call fails; the
    /// failure is logged, not surfaced, since the local effect is the
    /// meaningful outcome for the UI.
    pub async fn sign_out(&self) {
        if let Err(err) = self.inner.provider.sign_out().await {
            tracing::warn!(error = %err, "provider sign-out failed; clearing local session anyway");
        }
        self.inner.clear();
    }

    /// Returns a snapshot of the current user, if a session is active.
    pub fn current_user(&self) -> Option<SessionUser> {
        self.inner.current.borrow().clone()
    }

    /// Returns a reactive handle on the current-user slot.
    ///
    /// Consumers await changes; they cannot write through the handle.
    pub fn watch_user(&self) -> watch::Receiver<Option<SessionUser>> {
        self.inner.current.subscribe()
    }

    /// Returns the current session phase.
    pub fn phase(&self) -> SessionPhase {
        *self.inner.phase.borrow()
    }

    /// Returns a reactive handle on the session phase.
    pub fn watch_phase(&self) -> watch::Receiver<SessionPhase> {
        self.inner.phase.subscribe()
    }

    /// Tears down the push subscription and freezes session state.
    ///
    /// Idempotent. In-flight operation results resolving after shutdown
    /// are discarded rather than applied.
    pub fn shutdown(&self) {
        if self.inner.closed.swap(true, Ordering::AcqRel) {
            return;
        }
        self.listener.abort();
        tracing::debug!("session manager shut down");
    }
}

impl Drop for SessionManager {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl SessionInner {
    /// Replaces the slot with a validated user. Returns the stored user,
    /// or `None` when the manager has already shut down.
    fn establish(&self, user: SessionUser) -> Option<SessionUser> {
        if self.closed.load(Ordering::Acquire) {
            tracing::debug!(user = %user.id, "discarding sign-in result after shutdown");
            return None;
        }
        self.current.send_replace(Some(user.clone()));
        self.set_phase(SessionPhase::LoggedIn);
        Some(user)
    }

    /// Clears the slot.
    fn clear(&self) {
        if self.closed.load(Ordering::Acquire) {
            return;
        }
        self.current.send_replace(None);
        self.set_phase(SessionPhase::LoggedOut);
    }

    /// Flags a malformed push without touching the slot.
    fn degrade(&self) {
        if self.closed.load(Ordering::Acquire) {
            return;
        }
        self.set_phase(SessionPhase::Degraded);
    }

    fn set_phase(&self, next: SessionPhase) {
        let prev = *self.phase.borrow();
        if prev == next {
            return;
        }
        match prev.transition_to(next) {
            Ok(next) => {
                self.phase.send_replace(next);
            }
            Err(err) => tracing::error!(error = %err, "session phase transition rejected"),
        }
    }

    fn apply_auth_change(&self, change: AuthStateChange) {
        match change {
            AuthStateChange::Account(raw) => match SessionUser::from_provider(&raw) {
                Ok(user) => {
                    tracing::debug!(user = %user.id, "account-state push established user");
                    self.establish(user);
                }
                Err(err) => {
                    tracing::warn!(error = %err, "account-state push carried a malformed record");
                    self.notifier.notify_error(MALFORMED_PROFILE_NOTICE);
                    self.degrade();
                }
            },
            AuthStateChange::NoAccount => {
                tracing::debug!("account-state push reported no active account");
                self.clear();
                self.notifier.notify_error(SESSION_EXPIRED_NOTICE);
                self.navigator.navigate(routes::LANDING);
            }
        }
    }
}
