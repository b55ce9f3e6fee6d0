//! Adapters for the identity provider port.

mod in_memory;

pub use in_memory::InMemoryIdentityProvider;
