//! Identity domain - provider records and the session view-model.
//!
//! The flow through this module is one-way: a [`RawIdentity`] arrives
//! from the provider (via an operation result or a push event), passes
//! the validating [`SessionUser::from_provider`] constructor, and the
//! resulting view-model replaces the session slot wholesale.

mod errors;
mod phase;
mod raw;
mod session_user;

pub use errors::{IdentityError, ProviderError};
pub use phase::SessionPhase;
pub use raw::{AuthStateChange, RawIdentity};
pub use session_user::{DisplayName, SessionUser, DEFAULT_AVATAR};
