//! Planning Poker - client session core for estimation rooms.
//!
//! This crate implements the identity and session synchronization core
//! of the planning poker client: sign-in flows against an external
//! identity provider, continuous reconciliation with provider-pushed
//! account state, and the navigation/notification side effects those
//! transitions drive.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
