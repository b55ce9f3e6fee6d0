//! CreateGameHandler - entry flow for starting a new game.
//!
//! An already signed-in, non-anonymous user goes straight to the
//! dashboard. Anyone else (signed out, or holding an anonymous guest
//! session) runs interactive sign-in first and only proceeds on success.

use std::sync::Arc;

use crate::application::{routes, SessionManager};
use crate::domain::identity::SessionUser;
use crate::ports::Navigator;

/// Handler for the create-game entry action.
pub struct CreateGameHandler {
    session: Arc<SessionManager>,
    navigator: Arc<dyn Navigator>,
}

impl CreateGameHandler {
    pub fn new(session: Arc<SessionManager>, navigator: Arc<dyn Navigator>) -> Self {
        Self { session, navigator }
    }

    /// Runs the flow. Returns the session user when the dashboard was
    /// reached, `None` when sign-in did not complete.
    pub async fn handle(&self) -> Option<SessionUser> {
        if let Some(user) = self.session.current_user() {
            if !user.is_anonymous {
                self.navigator.navigate(routes::DASHBOARD);
                return Some(user);
            }
        }

        match self.session.sign_in_interactive().await {
            Some(user) => {
                self.navigator.navigate(routes::DASHBOARD);
                Some(user)
            }
            None => None,
        }
    }
}
