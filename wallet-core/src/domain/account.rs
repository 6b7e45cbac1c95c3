//! Account domain model

use serde::{Deserialize, Serialize};

use super::Contact;

/// A balance-holding account tied to one user
///
/// Balances are integer minor units (cents).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub owner_user_id: String,
    pub owner_name: String,
    pub account_number: String,
    pub balance_in_cents: i64,
}

impl Account {
    pub fn new(
        id: impl Into<String>,
        owner_user_id: impl Into<String>,
        owner_name: impl Into<String>,
        account_number: impl Into<String>,
        balance_in_cents: i64,
    ) -> Self {
        Self {
            id: id.into(),
            owner_user_id: owner_user_id.into(),
            owner_name: owner_name.into(),
            account_number: account_number.into(),
            balance_in_cents,
        }
    }

    /// Public-facing view of this account, usable as a transfer destination
    pub fn to_contact(&self) -> Contact {
        Contact {
            id: self.id.clone(),
            owner_user_id: self.owner_user_id.clone(),
            name: self.owner_name.clone(),
            account_number: self.account_number.clone(),
        }
    }
}

/// Balance snapshot returned by summary queries and successful transfers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    pub balance_in_cents: i64,
}

impl AccountSummary {
    pub fn new(balance_in_cents: i64) -> Self {
        Self { balance_in_cents }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_contact() {
        let account = Account::new("acc2", "2", "Alice", "0001-2", 50_000);
        let contact = account.to_contact();
        assert_eq!(contact.id, "acc2");
        assert_eq!(contact.owner_user_id, "2");
        assert_eq!(contact.name, "Alice");
        assert_eq!(contact.account_number, "0001-2");
    }

    #[test]
    fn test_summary_serializes_camel_case() {
        let json = serde_json::to_string(&AccountSummary::new(97_500)).unwrap();
        assert_eq!(json, r#"{"balanceInCents":97500}"#);
    }
}
