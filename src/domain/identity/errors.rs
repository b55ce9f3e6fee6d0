//! Identity and provider error taxonomy.

use thiserror::Error;

/// Validation failures on a provider-sourced account record.
///
/// These are recoverable: the record is ignored (or flagged) and the
/// session keeps whatever state it had.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityError {
    /// The account has no display name configured. The application's
    /// identity model requires a human-readable name for presentation.
    #[error("Account record has no display name")]
    MissingDisplayName,

    /// The account record carries an empty provider id.
    #[error("Account record has an empty provider id")]
    MissingProviderId,
}

/// Failures surfaced by the identity provider gateway.
///
/// All of these are recovered locally by the session core: the operation
/// that hit them logs the failure and reports an absent result to its
/// caller rather than propagating.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// The user dismissed the provider's sign-in popup.
    #[error("Sign-in was cancelled")]
    Cancelled,

    /// The provider could not be reached (network failure, timeout).
    #[error("Identity provider unreachable: {0}")]
    Unavailable(String),

    /// The provider rejected the operation.
    #[error("Identity provider rejected the operation: {0}")]
    Rejected(String),
}

impl ProviderError {
    /// Creates an unreachable-provider error with a message.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    /// Creates a rejected-operation error with a message.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected(message.into())
    }

    /// Returns true if this is a transient error that may succeed on retry.
    pub fn is_transient(&self) -> bool {
        matches!(self, ProviderError::Unavailable(_))
    }
}
