//! Application-level user view-model.
//!
//! [`SessionUser`] is the only identity representation exposed to the
//! rest of the application. It is derived from a provider record through
//! a validating constructor and is immutable once built: a new identity
//! event produces a wholesale replacement, never an in-place patch.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{UserId, ValidationError};

use super::{IdentityError, RawIdentity};

/// Image reference used when an account has no profile photo.
pub const DEFAULT_AVATAR: &str = "/assets/user.svg";

/// Display name supplied by a caller at anonymous sign-in.
///
/// The provider does not furnish a name for anonymous accounts, so the
/// caller must. Constructing one from empty input is a contract violation
/// and fails immediately; screens validate their forms before calling in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayName(String);

impl DisplayName {
    /// Creates a new DisplayName, returning error if empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::empty_field("display_name"));
        }
        Ok(Self(name))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the value, returning the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for DisplayName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated user view-model for the current session.
///
/// Invariants:
/// - `id` is the provider's account id, verbatim and non-empty
/// - `name` is non-empty
/// - `avatar` is non-empty, falling back to [`DEFAULT_AVATAR`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Provider-assigned account id.
    pub id: UserId,

    /// Human-readable name shown in room headers and vote cards.
    pub name: String,

    /// Profile image reference.
    pub avatar: String,

    /// Whether this session was established through anonymous sign-in.
    pub is_anonymous: bool,
}

impl SessionUser {
    /// Derives a view-model from a provider account record.
    ///
    /// Fails with [`IdentityError::MissingDisplayName`] when the record
    /// has no (or an empty) display name: by the time a record reaches
    /// this constructor the name must be present, whether configured on
    /// the account or persisted onto it at anonymous sign-in.
    ///
    /// # Errors
    ///
    /// * `IdentityError::MissingProviderId` - empty `provider_id`
    /// * `IdentityError::MissingDisplayName` - absent or empty name
    pub fn from_provider(raw: &RawIdentity) -> Result<Self, IdentityError> {
        let id = UserId::new(raw.provider_id.clone())
            .map_err(|_| IdentityError::MissingProviderId)?;

        let name = match raw.display_name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => return Err(IdentityError::MissingDisplayName),
        };

        let avatar = raw
            .photo_url
            .clone()
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_AVATAR.to_string());

        Ok(Self {
            id,
            name,
            avatar,
            is_anonymous: raw.is_anonymous,
        })
    }
}
