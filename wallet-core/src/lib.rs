//! Wallet Core - business logic for the demo payment wallet
//!
//! This crate implements the core domain logic following hexagonal architecture:
//!
//! - **domain**: Core entities (Account, Contact, Session, etc.)
//! - **ports**: Trait definitions for backends (WalletRepository, AuthorizeService)
//! - **services**: Use cases (login, home, transfer, event log)
//! - **adapters**: Concrete implementations (in-memory, HTTP, settings.json)

pub mod adapters;
pub mod config;
pub mod domain;
pub mod log_migrations;
pub mod ports;
pub mod services;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use adapters::configurable::{
    ConfigurableAuthRemoteDataSource, ConfigurableAuthorizeService, ConfigurableWalletRepository,
};
use adapters::fake_auth::FakeAuthRemoteDataSource;
use adapters::http::WalletHttpClient;
use adapters::local_authorize::LocalAuthorizeService;
use adapters::memory::{InMemoryAccountStore, InMemoryWalletRepository};
use adapters::network_auth::NetworkAuthRemoteDataSource;
use adapters::network_authorize::NetworkAuthorizeService;
use adapters::network_wallet::NetworkWalletRepository;
use adapters::settings::SettingsStore;
use services::*;

// Re-export commonly used types at crate root
pub use domain::money::{format_brl, parse_amount_input};
pub use domain::result::{Error, OperationResult, Result};
pub use domain::{
    Account, AccountSummary, Contact, NetworkConfig, Session, ThemeMode, TransferReceipt, User,
};
pub use ports::{AppPreferences, AuthStorage, AuthorizeService, UserPreferences, WalletRepository};

/// Main context for wallet operations
///
/// Wires the settings-backed preferences and session, the in-memory local
/// backend, the HTTP remote backend and the routing between them.
pub struct WalletContext {
    wallet_dir: PathBuf,
    pub settings: Arc<SettingsStore>,
    pub store: Arc<InMemoryAccountStore>,
    pub wallet: Arc<dyn WalletRepository>,
    pub authorize_service: Arc<dyn AuthorizeService>,
    pub auth_service: AuthService,
    pub home_service: HomeService,
    pub transfer_service: TransferService,
}

impl WalletContext {
    /// Create a wallet context over a wallet directory
    pub fn new(wallet_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(wallet_dir)?;

        let settings = Arc::new(SettingsStore::new(wallet_dir));
        let preferences: Arc<dyn AppPreferences> = settings.clone();
        let auth_storage: Arc<dyn AuthStorage> = settings.clone();
        let store = Arc::new(InMemoryAccountStore::seeded());

        let authorize_service: Arc<dyn AuthorizeService> =
            Arc::new(ConfigurableAuthorizeService::new(
                Arc::new(LocalAuthorizeService::new()),
                Arc::new(NetworkAuthorizeService::new(Arc::clone(&preferences))),
                Arc::clone(&preferences),
            ));

        let wallet: Arc<dyn WalletRepository> = Arc::new(ConfigurableWalletRepository::new(
            Arc::new(InMemoryWalletRepository::new(
                Arc::clone(&store),
                Arc::clone(&authorize_service),
                Arc::clone(&auth_storage),
            )),
            Arc::new(NetworkWalletRepository::new(
                Arc::clone(&preferences),
                Arc::clone(&auth_storage),
                Arc::clone(&authorize_service),
            )),
            Arc::clone(&preferences),
        ));

        let auth_remote = Arc::new(ConfigurableAuthRemoteDataSource::new(
            Arc::new(FakeAuthRemoteDataSource::new()),
            Arc::new(NetworkAuthRemoteDataSource::new(Arc::clone(&preferences))),
            Arc::clone(&preferences),
        ));

        let auth_service = AuthService::new(auth_remote, Arc::clone(&auth_storage), settings.clone());
        let home_service = HomeService::new(
            Arc::clone(&wallet),
            Arc::clone(&auth_storage),
            Arc::clone(&preferences),
        );
        let transfer_service = TransferService::new(Arc::clone(&wallet), auth_storage);

        Ok(Self {
            wallet_dir: wallet_dir.to_path_buf(),
            settings,
            store,
            wallet,
            authorize_service,
            auth_service,
            home_service,
            transfer_service,
        })
    }

    pub fn wallet_dir(&self) -> &Path {
        &self.wallet_dir
    }

    pub fn network_config(&self) -> Result<NetworkConfig> {
        self.settings.network_config()
    }

    /// Switch between the local and the remote backend
    pub fn set_use_remote(&self, use_remote: bool) -> Result<NetworkConfig> {
        self.settings.set_use_remote_server(use_remote)
    }

    /// Point the remote backend at another server
    pub fn set_base_url(&self, base_url: &str) -> Result<NetworkConfig> {
        let url = WalletHttpClient::parse_base_url(base_url)?;
        self.settings.set_base_url(url.as_str())
    }

    /// Theme of the logged-in user, or the global one when logged out
    pub fn theme(&self) -> Result<ThemeMode> {
        let session = self.auth_service.current_session()?;
        self.settings
            .theme_for_user(session.as_ref().map(|s| s.user.id.as_str()))
    }

    pub fn set_theme(&self, mode: ThemeMode) -> Result<()> {
        let session = self.auth_service.current_session()?;
        self.settings
            .set_theme_for_user(session.as_ref().map(|s| s.user.id.as_str()), mode)
    }
}
