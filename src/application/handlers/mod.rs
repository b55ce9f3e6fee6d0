//! Screen-driven flows, one handler per user action.

pub mod entry;
pub mod room;
