//! Balance store port

use crate::domain::result::Result;

/// Holds the current balance for each account
pub trait BalanceStore: Send + Sync {
    /// Balance of an account, `None` if the account is unknown
    fn load_balance(&self, account_id: &str) -> Result<Option<i64>>;

    /// Overwrite the balance of a known account
    fn save_balance(&self, account_id: &str, balance_in_cents: i64) -> Result<()>;
}
