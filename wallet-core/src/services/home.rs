//! Home service - everything the start screen shows in one call

use std::sync::Arc;

use serde::Serialize;

use crate::domain::result::{Error, Result};
use crate::domain::{AccountSummary, Contact, User};
use crate::ports::{AppPreferences, AuthStorage, WalletRepository};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeView {
    pub user: User,
    pub summary: AccountSummary,
    pub contacts: Vec<Contact>,
    /// `local` or `remote`
    pub backend: String,
}

pub struct HomeService {
    wallet: Arc<dyn WalletRepository>,
    auth_storage: Arc<dyn AuthStorage>,
    preferences: Arc<dyn AppPreferences>,
}

impl HomeService {
    pub fn new(
        wallet: Arc<dyn WalletRepository>,
        auth_storage: Arc<dyn AuthStorage>,
        preferences: Arc<dyn AppPreferences>,
    ) -> Self {
        Self {
            wallet,
            auth_storage,
            preferences,
        }
    }

    pub fn load(&self) -> Result<HomeView> {
        let session = self
            .auth_storage
            .load_session()?
            .ok_or(Error::SessionExpired)?;
        let backend = self.preferences.network_config()?.backend_name().to_string();
        let summary = self.wallet.get_account_summary()?;
        let contacts = self.wallet.get_contacts()?;

        Ok(HomeView {
            user: session.user,
            summary,
            contacts,
            backend,
        })
    }
}
