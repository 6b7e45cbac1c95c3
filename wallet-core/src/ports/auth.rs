//! Session ports - login and session persistence

use crate::domain::result::Result;
use crate::domain::Session;

/// Exchanges credentials for a session
pub trait AuthRemoteDataSource: Send + Sync {
    fn login(&self, email: &str, password: &str) -> Result<Session>;
}

/// Keeps the current session between calls
pub trait AuthStorage: Send + Sync {
    fn save_session(&self, session: &Session) -> Result<()>;

    fn load_session(&self) -> Result<Option<Session>>;

    fn clear_session(&self) -> Result<()>;
}
