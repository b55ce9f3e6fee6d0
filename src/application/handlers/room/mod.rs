//! Room flows driven by the dashboard.

mod create_room;

pub use create_room::{CreateRoomCommand, CreateRoomHandler};
