//! Session adapters - implementations of the SessionStore port.
//!
//! - `tower_sessions::Session` for live requests
//! - `InMemorySessionStore` for tests

mod memory;
mod tower_session;

pub use memory::InMemorySessionStore;
