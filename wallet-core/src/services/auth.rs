//! Auth service - login, logout and the current session

use std::sync::Arc;

use crate::domain::result::{Error, Result};
use crate::domain::Session;
use crate::ports::{AuthRemoteDataSource, AuthStorage, UserPreferences};

pub struct AuthService {
    remote: Arc<dyn AuthRemoteDataSource>,
    storage: Arc<dyn AuthStorage>,
    user_preferences: Arc<dyn UserPreferences>,
}

impl AuthService {
    pub fn new(
        remote: Arc<dyn AuthRemoteDataSource>,
        storage: Arc<dyn AuthStorage>,
        user_preferences: Arc<dyn UserPreferences>,
    ) -> Self {
        Self {
            remote,
            storage,
            user_preferences,
        }
    }

    /// Exchange credentials for a session and keep it
    ///
    /// On success the user's email is remembered for the next login prompt.
    pub fn login(&self, email: &str, password: &str) -> Result<Session> {
        let email = email.trim();
        if email.is_empty() || password.trim().is_empty() {
            return Err(Error::validation("Email and password are required"));
        }

        let session = self.remote.login(email, password)?;
        self.storage.save_session(&session)?;
        self.user_preferences
            .set_last_logged_email(Some(&session.user.email))?;
        Ok(session)
    }

    pub fn logout(&self) -> Result<()> {
        self.storage.clear_session()
    }

    pub fn current_session(&self) -> Result<Option<Session>> {
        self.storage.load_session()
    }

    /// Email to prefill on the login prompt
    pub fn last_logged_email(&self) -> Result<Option<String>> {
        self.user_preferences.last_logged_email()
    }
}
