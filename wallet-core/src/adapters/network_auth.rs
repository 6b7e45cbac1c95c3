//! Remote login (`POST /auth/login`)

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::http::WalletHttpClient;
use crate::domain::result::Result;
use crate::domain::{Session, User};
use crate::ports::{AppPreferences, AuthRemoteDataSource};

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: String,
    user: User,
}

/// Logs in against the wallet server
pub struct NetworkAuthRemoteDataSource {
    preferences: Arc<dyn AppPreferences>,
}

impl NetworkAuthRemoteDataSource {
    pub fn new(preferences: Arc<dyn AppPreferences>) -> Self {
        Self { preferences }
    }
}

impl AuthRemoteDataSource for NetworkAuthRemoteDataSource {
    fn login(&self, email: &str, password: &str) -> Result<Session> {
        let config = self.preferences.network_config()?;
        let client = WalletHttpClient::new(&config.base_url)?;
        let response: LoginResponse =
            client.post_json("auth/login", &LoginRequest { email, password })?;
        Ok(Session::new(response.token, response.user))
    }
}
