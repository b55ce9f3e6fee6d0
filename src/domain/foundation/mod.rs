//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects and error types that form the vocabulary
//! of the planning poker domain.

mod errors;
mod ids;
mod state_machine;

pub use errors::ValidationError;
pub use ids::{RoomCode, RoomName, UserId};
pub use state_machine::StateMachine;
