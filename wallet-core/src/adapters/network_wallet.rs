//! Remote wallet repository
//!
//! Runs the same checks as the local workflow, in the same order, using the
//! server for contacts, balance and the final balance mutation.

use std::sync::Arc;

use serde::Deserialize;

use super::http::WalletHttpClient;
use crate::domain::result::{Error, Result, CONNECT_FAILED};
use crate::domain::{AccountSummary, Contact, Session, TransferRequest};
use crate::ports::{AppPreferences, AuthStorage, AuthorizeService, WalletRepository};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BalanceResponse {
    balance_in_cents: i64,
}

/// Wallet backed by the HTTP wallet server
pub struct NetworkWalletRepository {
    preferences: Arc<dyn AppPreferences>,
    auth_storage: Arc<dyn AuthStorage>,
    authorize_service: Arc<dyn AuthorizeService>,
}

impl NetworkWalletRepository {
    pub fn new(
        preferences: Arc<dyn AppPreferences>,
        auth_storage: Arc<dyn AuthStorage>,
        authorize_service: Arc<dyn AuthorizeService>,
    ) -> Self {
        Self {
            preferences,
            auth_storage,
            authorize_service,
        }
    }

    fn session(&self) -> Result<Session> {
        self.auth_storage.load_session()?.ok_or(Error::SessionExpired)
    }

    fn client(&self) -> Result<WalletHttpClient> {
        let config = self.preferences.network_config()?;
        WalletHttpClient::new(&config.base_url)
    }

    fn fetch_summary(&self, client: &WalletHttpClient, user_id: &str) -> Result<AccountSummary> {
        let response: BalanceResponse =
            client.get_json("wallet/summary", &[("userId", user_id)])?;
        Ok(AccountSummary::new(response.balance_in_cents))
    }

    fn fetch_contacts(&self, client: &WalletHttpClient, user_id: &str) -> Result<Vec<Contact>> {
        client.get_json("wallet/contacts", &[("userId", user_id)])
    }

    /// Classify a destination missing from the contact list.
    ///
    /// The list leaves out the payer's own account, so an unlisted id is
    /// either unknown or the payer's. The server checks the destination
    /// before the amount, so a zero-amount request tells the two apart
    /// without moving money.
    fn classify_unlisted(
        &self,
        client: &WalletHttpClient,
        user_id: &str,
        to_contact_id: &str,
    ) -> Error {
        let check: Result<BalanceResponse> = client.post_json(
            "wallet/transfer",
            &TransferRequest {
                user_id: user_id.to_string(),
                to_contact_id: to_contact_id.to_string(),
                amount_in_cents: 0,
            },
        );
        match check {
            Err(Error::SelfTransfer) => Error::SelfTransfer,
            Err(Error::Transport(msg)) if msg == CONNECT_FAILED => Error::Transport(msg),
            _ => Error::InvalidContact,
        }
    }
}

impl WalletRepository for NetworkWalletRepository {
    fn get_account_summary(&self) -> Result<AccountSummary> {
        let session = self.session()?;
        let client = self.client()?;
        self.fetch_summary(&client, &session.user.id)
    }

    fn get_contacts(&self) -> Result<Vec<Contact>> {
        let session = self.session()?;
        let client = self.client()?;
        let mut contacts = vec![Contact::self_contact(&session.user)];
        contacts.extend(self.fetch_contacts(&client, &session.user.id)?);
        Ok(contacts)
    }

    fn transfer(&self, to_contact_id: &str, amount_in_cents: i64) -> Result<AccountSummary> {
        if amount_in_cents <= 0 {
            return Err(Error::InvalidAmount);
        }

        let session = self.session()?;
        let user_id = session.user.id.as_str();
        if to_contact_id == Contact::self_id(user_id) {
            return Err(Error::SelfTransfer);
        }

        let client = self.client()?;
        let payee = match self
            .fetch_contacts(&client, user_id)?
            .into_iter()
            .find(|c| c.id == to_contact_id)
        {
            Some(payee) => payee,
            None => return Err(self.classify_unlisted(&client, user_id, to_contact_id)),
        };
        if payee.is_owned_by(user_id) {
            return Err(Error::SelfTransfer);
        }

        let decision = self.authorize_service.authorize_transfer(amount_in_cents)?;
        if !decision.authorized {
            return Err(Error::not_authorized(decision.reason));
        }

        let summary = self.fetch_summary(&client, user_id)?;
        if amount_in_cents > summary.balance_in_cents {
            return Err(Error::InsufficientBalance);
        }

        let response: BalanceResponse = client.post_json(
            "wallet/transfer",
            &TransferRequest {
                user_id: user_id.to_string(),
                to_contact_id: to_contact_id.to_string(),
                amount_in_cents,
            },
        )?;
        Ok(AccountSummary::new(response.balance_in_cents))
    }
}
