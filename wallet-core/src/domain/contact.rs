//! Contact domain model

use serde::{Deserialize, Serialize};

use super::User;

/// Account number shown for the synthetic self contact
pub const SELF_ACCOUNT_NUMBER: &str = "0000-0";

/// A transfer destination: another account's public-facing info
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: String,
    pub owner_user_id: String,
    pub name: String,
    pub account_number: String,
}

impl Contact {
    /// The contact representing the logged in user's own account
    ///
    /// The remote contact list starts with it so the user can see (and is
    /// refused when picking) their own account.
    pub fn self_contact(user: &User) -> Self {
        Self {
            id: Self::self_id(&user.id),
            owner_user_id: user.id.clone(),
            name: user.name.clone(),
            account_number: SELF_ACCOUNT_NUMBER.to_string(),
        }
    }

    /// Identifier of the self contact for a user
    pub fn self_id(user_id: &str) -> String {
        format!("self-{}", user_id)
    }

    /// Whether this contact belongs to the given user
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.owner_user_id == user_id
    }
}
