//! CreateRoomHandler - takes a freshly named room to its admin page.
//!
//! Room creation itself is a navigation concern on this side of the
//! system: the room comes into existence when its administrator lands on
//! the admin page. Voting-system selection stays with the dialog.

use std::sync::Arc;

use crate::application::routes;
use crate::domain::foundation::RoomName;
use crate::ports::Navigator;

/// Command to create a room.
#[derive(Debug, Clone)]
pub struct CreateRoomCommand {
    pub name: RoomName,
}

/// Handler for the create-room dialog submission.
pub struct CreateRoomHandler {
    navigator: Arc<dyn Navigator>,
}

impl CreateRoomHandler {
    pub fn new(navigator: Arc<dyn Navigator>) -> Self {
        Self { navigator }
    }

    /// Navigates to the admin page of the named room.
    pub fn handle(&self, cmd: CreateRoomCommand) {
        self.navigator.navigate(&routes::admin_room(&cmd.name));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::RecordingNavigator;

    #[test]
    fn navigates_to_admin_page_of_new_room() {
        let navigator = Arc::new(RecordingNavigator::new());
        let handler = CreateRoomHandler::new(navigator.clone());

        handler.handle(CreateRoomCommand {
            name: RoomName::new("sprint 1").unwrap(),
        });

        assert_eq!(navigator.paths(), vec!["/admin/poker/sprint 1"]);
    }
}
