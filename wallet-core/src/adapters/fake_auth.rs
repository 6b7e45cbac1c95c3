//! Fixture login used by the local backend

use crate::domain::result::{Error, Result};
use crate::domain::{Session, User};
use crate::ports::AuthRemoteDataSource;

pub const DEMO_EMAIL: &str = "user@example.com";
pub const DEMO_PASSWORD: &str = "123456";

/// Accepts only the demo credentials and logs in as user `1`
#[derive(Debug, Default, Clone, Copy)]
pub struct FakeAuthRemoteDataSource;

impl FakeAuthRemoteDataSource {
    pub fn new() -> Self {
        Self
    }
}

impl AuthRemoteDataSource for FakeAuthRemoteDataSource {
    fn login(&self, email: &str, password: &str) -> Result<Session> {
        if email == DEMO_EMAIL && password == DEMO_PASSWORD {
            let user = User::new("1", "Usuário Exemplo", email);
            Ok(Session::new(format!("fake-token-{}", user.id), user))
        } else {
            Err(Error::InvalidCredentials)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_login() {
        let session = FakeAuthRemoteDataSource::new()
            .login(DEMO_EMAIL, DEMO_PASSWORD)
            .unwrap();
        assert_eq!(session.user.id, "1");
        assert_eq!(session.user.email, DEMO_EMAIL);
        assert!(session.token.starts_with("fake-token-"));
    }

    #[test]
    fn test_wrong_password() {
        let result = FakeAuthRemoteDataSource::new().login(DEMO_EMAIL, "nope");
        assert!(matches!(result, Err(Error::InvalidCredentials)));
    }
}
