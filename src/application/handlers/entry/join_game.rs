//! JoinGameHandler - entry flow for joining an existing room as a guest.

use std::sync::Arc;

use crate::application::{routes, SessionManager};
use crate::domain::foundation::RoomCode;
use crate::domain::identity::{DisplayName, SessionUser};
use crate::ports::{Navigator, Notifier};

/// Notice raised when the guest session could not be established.
pub const JOIN_ROOM_FAILED_NOTICE: &str = "Could not join the room";

/// Command to join a room under a guest name.
#[derive(Debug, Clone)]
pub struct JoinGameCommand {
    pub display_name: DisplayName,
    pub room_code: RoomCode,
}

/// Handler for the join-game entry action.
///
/// Establishes an anonymous session under the supplied name, then
/// navigates into the room. When the session cannot be established the
/// user is told the room could not be joined; the session state is left
/// untouched.
pub struct JoinGameHandler {
    session: Arc<SessionManager>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
}

impl JoinGameHandler {
    pub fn new(
        session: Arc<SessionManager>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            session,
            navigator,
            notifier,
        }
    }

    /// Runs the flow. Returns the guest user when the room was entered.
    pub async fn handle(&self, cmd: JoinGameCommand) -> Option<SessionUser> {
        match self.session.sign_in_anonymous(cmd.display_name).await {
            Some(user) => {
                self.navigator.navigate(&routes::poker_room(&cmd.room_code));
                Some(user)
            }
            None => {
                self.notifier.notify_error(JOIN_ROOM_FAILED_NOTICE);
                None
            }
        }
    }
}
