//! Transfer service - confirm a transfer from user input
//!
//! Cheap checks run here before any backend call; the repository repeats
//! them and owns authorization and the balance check.

use std::sync::Arc;

use crate::domain::result::{Error, Result};
use crate::domain::{Contact, TransferReceipt};
use crate::ports::{AuthStorage, WalletRepository};

pub struct TransferService {
    wallet: Arc<dyn WalletRepository>,
    auth_storage: Arc<dyn AuthStorage>,
}

impl TransferService {
    pub fn new(wallet: Arc<dyn WalletRepository>, auth_storage: Arc<dyn AuthStorage>) -> Self {
        Self {
            wallet,
            auth_storage,
        }
    }

    /// Find a contact by id or account number
    pub fn find_contact(&self, query: &str) -> Result<Option<Contact>> {
        let query = query.trim();
        Ok(self
            .wallet
            .get_contacts()?
            .into_iter()
            .find(|c| c.id == query || c.account_number == query))
    }

    fn unlisted_contact(&self, id: &str, amount_in_cents: i64) -> Result<Contact> {
        self.wallet.transfer(id, amount_in_cents)?;
        // Both backends list every account but the payer's, so a transfer
        // to an unlisted id never commits
        Err(Error::InvalidContact)
    }

    pub fn confirm(&self, contact: &str, amount_in_cents: i64) -> Result<TransferReceipt> {
        if amount_in_cents <= 0 {
            return Err(Error::InvalidAmount);
        }
        let session = self
            .auth_storage
            .load_session()?
            .ok_or(Error::SessionExpired)?;
        let contact = match self.find_contact(contact)? {
            Some(found) => found,
            // Contact lists leave out the payer's own account; the
            // repository tells that apart from an unknown id
            None => self.unlisted_contact(contact.trim(), amount_in_cents)?,
        };
        if contact.is_owned_by(&session.user.id) {
            return Err(Error::SelfTransfer);
        }

        let summary = self.wallet.transfer(&contact.id, amount_in_cents)?;
        Ok(TransferReceipt {
            contact,
            amount_in_cents,
            new_balance_in_cents: summary.balance_in_cents,
        })
    }
}
