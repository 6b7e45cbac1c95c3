//! Backend routing
//!
//! Each wrapper holds a local and a remote delegate and picks one on every
//! call from the current network config. The choice is never cached, so
//! flipping `use_remote_server` affects the very next call.

use std::sync::Arc;

use crate::domain::result::Result;
use crate::domain::{AccountSummary, AuthorizationDecision, Contact, Session};
use crate::ports::{AppPreferences, AuthRemoteDataSource, AuthorizeService, WalletRepository};

/// Local/remote pair plus the preferences deciding between them
struct Route<T: ?Sized> {
    local: Arc<T>,
    remote: Arc<T>,
    preferences: Arc<dyn AppPreferences>,
}

impl<T: ?Sized> Route<T> {
    fn current(&self) -> Result<&T> {
        if self.preferences.network_config()?.use_remote_server {
            Ok(self.remote.as_ref())
        } else {
            Ok(self.local.as_ref())
        }
    }
}

pub struct ConfigurableWalletRepository {
    route: Route<dyn WalletRepository>,
}

impl ConfigurableWalletRepository {
    pub fn new(
        local: Arc<dyn WalletRepository>,
        remote: Arc<dyn WalletRepository>,
        preferences: Arc<dyn AppPreferences>,
    ) -> Self {
        Self {
            route: Route {
                local,
                remote,
                preferences,
            },
        }
    }
}

impl WalletRepository for ConfigurableWalletRepository {
    fn get_account_summary(&self) -> Result<AccountSummary> {
        self.route.current()?.get_account_summary()
    }

    fn get_contacts(&self) -> Result<Vec<Contact>> {
        self.route.current()?.get_contacts()
    }

    fn transfer(&self, to_contact_id: &str, amount_in_cents: i64) -> Result<AccountSummary> {
        self.route.current()?.transfer(to_contact_id, amount_in_cents)
    }
}

pub struct ConfigurableAuthorizeService {
    route: Route<dyn AuthorizeService>,
}

impl ConfigurableAuthorizeService {
    pub fn new(
        local: Arc<dyn AuthorizeService>,
        remote: Arc<dyn AuthorizeService>,
        preferences: Arc<dyn AppPreferences>,
    ) -> Self {
        Self {
            route: Route {
                local,
                remote,
                preferences,
            },
        }
    }
}

impl AuthorizeService for ConfigurableAuthorizeService {
    fn authorize_transfer(&self, amount_in_cents: i64) -> Result<AuthorizationDecision> {
        self.route.current()?.authorize_transfer(amount_in_cents)
    }
}

pub struct ConfigurableAuthRemoteDataSource {
    route: Route<dyn AuthRemoteDataSource>,
}

impl ConfigurableAuthRemoteDataSource {
    pub fn new(
        local: Arc<dyn AuthRemoteDataSource>,
        remote: Arc<dyn AuthRemoteDataSource>,
        preferences: Arc<dyn AppPreferences>,
    ) -> Self {
        Self {
            route: Route {
                local,
                remote,
                preferences,
            },
        }
    }
}

impl AuthRemoteDataSource for ConfigurableAuthRemoteDataSource {
    fn login(&self, email: &str, password: &str) -> Result<Session> {
        self.route.current()?.login(email, password)
    }
}
