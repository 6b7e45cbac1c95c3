//! Port definitions (hexagonal architecture)
//!
//! Ports define the interfaces for external dependencies. The core domain
//! depends only on these traits, not on concrete implementations. Each port
//! has a local implementation and, where the wallet server offers one, a
//! network implementation; the configurable adapters route between them.

mod auth;
mod authorize;
mod balance;
mod preferences;
mod wallet;

pub use auth::{AuthRemoteDataSource, AuthStorage};
pub use authorize::AuthorizeService;
pub use balance::BalanceStore;
pub use preferences::{AppPreferences, UserPreferences};
pub use wallet::WalletRepository;
