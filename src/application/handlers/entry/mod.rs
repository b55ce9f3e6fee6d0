//! Entry flows driven by the landing page.

mod create_game;
mod join_game;

pub use create_game::CreateGameHandler;
pub use join_game::{JoinGameCommand, JoinGameHandler, JOIN_ROOM_FAILED_NOTICE};
