//! User and session domain models

use serde::{Deserialize, Serialize};

/// Represents an authenticated user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }
}

/// An authenticated session: who is transferring
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

impl Session {
    pub fn new(token: impl Into<String>, user: User) -> Self {
        Self {
            token: token.into(),
            user,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let user = User::new("1", "Usuário Exemplo", "user@example.com");
        assert_eq!(user.id, "1");
        assert_eq!(user.email, "user@example.com");
    }

    #[test]
    fn test_session_roundtrip_shape() {
        let session = Session::new("fake-token-1", User::new("1", "Ana", "ana@example.com"));
        let value = serde_json::to_value(&session).unwrap();
        assert_eq!(value["token"], "fake-token-1");
        assert_eq!(value["user"]["name"], "Ana");
    }
}
