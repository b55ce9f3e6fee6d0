//! Client route paths.
//!
//! The routing table itself lives in the UI shell; these are the targets
//! the session core and the entry flows ask the navigator for. The
//! landing path is part of the session-expiry contract.

use crate::domain::foundation::{RoomCode, RoomName};

/// Landing page, where expired sessions are sent back to.
pub const LANDING: &str = "/";

/// Dashboard for signed-in (non-anonymous) users.
pub const DASHBOARD: &str = "/dashboard";

/// Path of the poker room a participant joins.
pub fn poker_room(code: &RoomCode) -> String {
    format!("/poker/{}", code)
}

/// Path of a newly created room, entered as its administrator.
pub fn admin_room(name: &RoomName) -> String {
    format!("/admin/poker/{}", name)
}
