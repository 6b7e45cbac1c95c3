//! In-memory adapters
//!
//! The local backend: seeded accounts held in an explicit store object, the
//! transfer workflow running against it, and memory-only session and
//! preference stores for tests and offline use.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::result::{Error, Result};
use crate::domain::{Account, AccountSummary, Contact, NetworkConfig, Session, ThemeMode};
use crate::ports::{
    AppPreferences, AuthStorage, AuthorizeService, BalanceStore, UserPreferences, WalletRepository,
};

/// Accounts every local store starts with
///
/// Same fixtures as the mock wallet server: user `1` is the demo login.
pub fn seed_accounts() -> Vec<Account> {
    vec![
        Account::new("acc1", "1", "Usuário Exemplo", "0001-1", 100_000),
        Account::new("acc2", "2", "Alice", "0001-2", 50_000),
        Account::new("acc3", "3", "Bob", "0001-3", 75_000),
        Account::new("acc4", "4", "Carol", "0001-4", 25_000),
    ]
}

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>> {
    mutex
        .lock()
        .map_err(|e| Error::Other(format!("Lock poisoned: {}", e)))
}

/// Account store owned by the local wallet repository
///
/// All reads and writes go through one mutex, so a transfer's debit and
/// credit are applied together.
#[derive(Debug)]
pub struct InMemoryAccountStore {
    accounts: Mutex<Vec<Account>>,
}

impl InMemoryAccountStore {
    pub fn new(accounts: Vec<Account>) -> Self {
        Self {
            accounts: Mutex::new(accounts),
        }
    }

    /// Store seeded with the demo fixtures
    pub fn seeded() -> Self {
        Self::new(seed_accounts())
    }

    /// Snapshot of every account
    pub fn accounts(&self) -> Result<Vec<Account>> {
        Ok(lock(&self.accounts)?.clone())
    }

    pub fn find_by_id(&self, account_id: &str) -> Result<Option<Account>> {
        Ok(lock(&self.accounts)?
            .iter()
            .find(|a| a.id == account_id)
            .cloned())
    }

    pub fn find_by_owner(&self, user_id: &str) -> Result<Option<Account>> {
        Ok(lock(&self.accounts)?
            .iter()
            .find(|a| a.owner_user_id == user_id)
            .cloned())
    }

    /// Debit `from`, credit `to`, return the new balance of `from`
    ///
    /// Fails with `InsufficientBalance` without touching either account
    /// when `from` cannot cover the amount.
    pub fn apply_transfer(&self, from_id: &str, to_id: &str, amount_in_cents: i64) -> Result<i64> {
        let mut accounts = lock(&self.accounts)?;

        let from_idx = accounts
            .iter()
            .position(|a| a.id == from_id)
            .ok_or_else(|| Error::not_found(format!("account {}", from_id)))?;
        let to_idx = accounts
            .iter()
            .position(|a| a.id == to_id)
            .ok_or(Error::InvalidContact)?;

        if from_idx == to_idx {
            return Err(Error::SelfTransfer);
        }
        if amount_in_cents > accounts[from_idx].balance_in_cents {
            return Err(Error::InsufficientBalance);
        }

        let credited = accounts[to_idx]
            .balance_in_cents
            .checked_add(amount_in_cents)
            .ok_or_else(|| Error::Other("balance overflow".to_string()))?;

        accounts[from_idx].balance_in_cents -= amount_in_cents;
        accounts[to_idx].balance_in_cents = credited;

        Ok(accounts[from_idx].balance_in_cents)
    }
}

impl Default for InMemoryAccountStore {
    fn default() -> Self {
        Self::seeded()
    }
}

impl BalanceStore for InMemoryAccountStore {
    fn load_balance(&self, account_id: &str) -> Result<Option<i64>> {
        Ok(self.find_by_id(account_id)?.map(|a| a.balance_in_cents))
    }

    fn save_balance(&self, account_id: &str, balance_in_cents: i64) -> Result<()> {
        if balance_in_cents < 0 {
            return Err(Error::validation("balance cannot be negative"));
        }
        let mut accounts = lock(&self.accounts)?;
        let account = accounts
            .iter_mut()
            .find(|a| a.id == account_id)
            .ok_or_else(|| Error::not_found(format!("account {}", account_id)))?;
        account.balance_in_cents = balance_in_cents;
        Ok(())
    }
}

/// Local wallet: the transfer workflow against an in-memory store
pub struct InMemoryWalletRepository {
    store: Arc<InMemoryAccountStore>,
    authorize_service: Arc<dyn AuthorizeService>,
    auth_storage: Arc<dyn AuthStorage>,
}

impl InMemoryWalletRepository {
    pub fn new(
        store: Arc<InMemoryAccountStore>,
        authorize_service: Arc<dyn AuthorizeService>,
        auth_storage: Arc<dyn AuthStorage>,
    ) -> Self {
        Self {
            store,
            authorize_service,
            auth_storage,
        }
    }

    /// The store backing this repository
    pub fn store(&self) -> &Arc<InMemoryAccountStore> {
        &self.store
    }

    fn current_user_account(&self) -> Result<Account> {
        let session = self
            .auth_storage
            .load_session()?
            .ok_or(Error::SessionExpired)?;
        self.store
            .find_by_owner(&session.user.id)?
            .ok_or_else(|| Error::not_found(format!("account for user {}", session.user.id)))
    }
}

impl WalletRepository for InMemoryWalletRepository {
    fn get_account_summary(&self) -> Result<AccountSummary> {
        let account = self.current_user_account()?;
        Ok(AccountSummary::new(account.balance_in_cents))
    }

    fn get_contacts(&self) -> Result<Vec<Contact>> {
        let payer = self.current_user_account()?;
        Ok(self
            .store
            .accounts()?
            .iter()
            .filter(|a| a.owner_user_id != payer.owner_user_id)
            .map(Account::to_contact)
            .collect())
    }

    fn transfer(&self, to_contact_id: &str, amount_in_cents: i64) -> Result<AccountSummary> {
        if amount_in_cents <= 0 {
            return Err(Error::InvalidAmount);
        }

        let payer = self.current_user_account()?;
        if to_contact_id == Contact::self_id(&payer.owner_user_id) {
            return Err(Error::SelfTransfer);
        }
        let payee = self
            .store
            .find_by_id(to_contact_id)?
            .ok_or(Error::InvalidContact)?;
        if payee.owner_user_id == payer.owner_user_id {
            return Err(Error::SelfTransfer);
        }

        let decision = self.authorize_service.authorize_transfer(amount_in_cents)?;
        if !decision.authorized {
            return Err(Error::not_authorized(decision.reason));
        }

        let new_balance = self
            .store
            .apply_transfer(&payer.id, &payee.id, amount_in_cents)?;
        Ok(AccountSummary::new(new_balance))
    }
}

/// Session store that lives only as long as the process
#[derive(Debug, Default)]
pub struct InMemoryAuthStorage {
    session: Mutex<Option<Session>>,
}

impl InMemoryAuthStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            session: Mutex::new(Some(session)),
        }
    }
}

impl AuthStorage for InMemoryAuthStorage {
    fn save_session(&self, session: &Session) -> Result<()> {
        *lock(&self.session)? = Some(session.clone());
        Ok(())
    }

    fn load_session(&self) -> Result<Option<Session>> {
        Ok(lock(&self.session)?.clone())
    }

    fn clear_session(&self) -> Result<()> {
        *lock(&self.session)? = None;
        Ok(())
    }
}

#[derive(Debug, Default)]
struct PreferenceState {
    network: NetworkConfig,
    themes: HashMap<String, ThemeMode>,
    last_logged_email: Option<String>,
}

/// Preferences kept in memory
#[derive(Debug, Default)]
pub struct InMemoryPreferences {
    state: Mutex<PreferenceState>,
}

impl InMemoryPreferences {
    pub fn new(network: NetworkConfig) -> Self {
        Self {
            state: Mutex::new(PreferenceState {
                network,
                ..PreferenceState::default()
            }),
        }
    }
}

impl AppPreferences for InMemoryPreferences {
    fn network_config(&self) -> Result<NetworkConfig> {
        Ok(lock(&self.state)?.network.clone())
    }

    fn set_network_config(&self, config: &NetworkConfig) -> Result<()> {
        lock(&self.state)?.network = config.clone();
        Ok(())
    }
}

impl UserPreferences for InMemoryPreferences {
    fn theme_for_user(&self, user_id: Option<&str>) -> Result<ThemeMode> {
        let key = crate::config::Config::theme_key(user_id);
        Ok(lock(&self.state)?
            .themes
            .get(&key)
            .copied()
            .unwrap_or_default())
    }

    fn set_theme_for_user(&self, user_id: Option<&str>, mode: ThemeMode) -> Result<()> {
        let key = crate::config::Config::theme_key(user_id);
        lock(&self.state)?.themes.insert(key, mode);
        Ok(())
    }

    fn last_logged_email(&self) -> Result<Option<String>> {
        Ok(lock(&self.state)?.last_logged_email.clone())
    }

    fn set_last_logged_email(&self, email: Option<&str>) -> Result<()> {
        lock(&self.state)?.last_logged_email = email.map(str::to_string);
        Ok(())
    }
}
