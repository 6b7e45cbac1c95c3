//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - In-memory account store and transfer workflow (local backend)
//! - HTTP wallet server client (remote backend)
//! - `settings.json` for preferences and the saved session
//! - Routing wrappers that pick local or remote per call

pub mod configurable;
pub mod fake_auth;
pub mod http;
pub mod local_authorize;
pub mod memory;
pub mod network_auth;
pub mod network_authorize;
pub mod network_wallet;
pub mod settings;

#[cfg(test)]
pub mod mock_server;
