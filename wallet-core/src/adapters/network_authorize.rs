//! Remote authorization check (`POST /authorize`)

use std::sync::Arc;

use serde::Serialize;

use super::http::WalletHttpClient;
use crate::domain::result::Result;
use crate::domain::AuthorizationDecision;
use crate::ports::{AppPreferences, AuthorizeService};

#[derive(Debug, Serialize)]
struct AuthorizeRequest {
    value: i64,
}

/// Asks the wallet server's fraud/compliance endpoint
pub struct NetworkAuthorizeService {
    preferences: Arc<dyn AppPreferences>,
}

impl NetworkAuthorizeService {
    pub fn new(preferences: Arc<dyn AppPreferences>) -> Self {
        Self { preferences }
    }
}

impl AuthorizeService for NetworkAuthorizeService {
    fn authorize_transfer(&self, amount_in_cents: i64) -> Result<AuthorizationDecision> {
        let config = self.preferences.network_config()?;
        let client = WalletHttpClient::new(&config.base_url)?;
        client.post_json(
            "authorize",
            &AuthorizeRequest {
                value: amount_in_cents,
            },
        )
    }
}
