//! Wallet repository port - balance, contacts and transfers

use crate::domain::result::Result;
use crate::domain::{AccountSummary, Contact};

/// Wallet operations for the current session's account
///
/// Implementations resolve "who is transferring" from the session store,
/// so none of these methods take a user id.
pub trait WalletRepository: Send + Sync {
    /// Current balance of the logged in user's account
    fn get_account_summary(&self) -> Result<AccountSummary>;

    /// Accounts the user can transfer to
    fn get_contacts(&self) -> Result<Vec<Contact>>;

    /// Move `amount_in_cents` to the contact's account
    ///
    /// Checks run in a fixed order and stop at the first failure: amount,
    /// destination, authorization, balance. On any failure no balance
    /// changes. On success returns the payer's new balance.
    fn transfer(&self, to_contact_id: &str, amount_in_cents: i64) -> Result<AccountSummary>;
}
