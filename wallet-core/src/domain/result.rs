//! Result and error types for the core library

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message used when a transfer is refused by the authorization check
pub const NOT_ALLOWED_REASON: &str = "operation not allowed";

/// Core library error type
///
/// The first seven variants are the transfer failure taxonomy. Every one of
/// them is recoverable: callers show `user_message()` and may offer a retry.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid amount")]
    InvalidAmount,

    #[error("Invalid contact")]
    InvalidContact,

    #[error("Payer and payee cannot be the same account")]
    SelfTransfer,

    #[error("Not authorized: {0}")]
    NotAuthorized(String),

    #[error("Insufficient balance")]
    InsufficientBalance,

    #[error("Session expired")]
    SessionExpired,

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Authorization denial, falling back to the default reason
    pub fn not_authorized(reason: Option<String>) -> Self {
        Self::NotAuthorized(
            reason
                .filter(|r| !r.trim().is_empty())
                .unwrap_or_else(|| NOT_ALLOWED_REASON.to_string()),
        )
    }

    /// Classify a message returned by the wallet server
    ///
    /// The mock server answers in Portuguese, newer builds in English, so
    /// both spellings are recognised. Unknown messages become `Transport`
    /// carrying the server text.
    pub fn from_server_message(message: &str) -> Self {
        let lower = message.to_lowercase();

        if lower.contains("saldo insuficiente") || lower.contains("insufficient") {
            Self::InsufficientBalance
        } else if lower.contains("payer e payee") || lower.contains("payer equals payee") {
            Self::SelfTransfer
        } else if lower.contains(NOT_ALLOWED_REASON) {
            Self::NotAuthorized(NOT_ALLOWED_REASON.to_string())
        } else if lower.contains("contato inválido") || lower.contains("invalid contact") {
            Self::InvalidContact
        } else if lower.contains("valor inválido") || lower.contains("invalid amount") {
            Self::InvalidAmount
        } else if lower.contains("credenciais") || lower.contains("invalid credentials") {
            Self::InvalidCredentials
        } else if lower.contains("sessão expirada") || lower.contains("session expired") {
            Self::SessionExpired
        } else {
            Self::Transport(message.to_string())
        }
    }

    /// Text shown to the user for this error
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidAmount => "Invalid amount".to_string(),
            Self::InvalidContact => "Invalid contact".to_string(),
            Self::SelfTransfer => "You cannot transfer to yourself".to_string(),
            Self::NotAuthorized(reason) if reason == NOT_ALLOWED_REASON => {
                "Transfer blocked by security policy (amount R$ 403,00)".to_string()
            }
            Self::NotAuthorized(reason) => format!("Transfer not authorized: {}", reason),
            Self::InsufficientBalance => "Insufficient balance".to_string(),
            Self::SessionExpired => "Session expired, please log in again".to_string(),
            Self::InvalidCredentials => "Invalid credentials".to_string(),
            Self::Validation(msg) => msg.clone(),
            Self::Transport(msg) if msg == CONNECT_FAILED => {
                "Could not reach the server. Check your connection and try again.".to_string()
            }
            _ => "Unexpected error, please try again.".to_string(),
        }
    }

    /// Whether offering a retry makes sense
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::SessionExpired)
    }
}

/// Transport message used when the server cannot be reached at all
pub const CONNECT_FAILED: &str = "unable to connect to the wallet server";

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;

/// Operation result with optional context (for JSON output)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
    pub context: Option<HashMap<String, serde_json::Value>>,
}

impl<T> OperationResult<T> {
    /// Create a successful result
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            context: None,
        }
    }

    /// Create a failed result
    pub fn fail(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            context: None,
        }
    }

    /// Attach context to the result
    pub fn with_context(mut self, context: HashMap<String, serde_json::Value>) -> Self {
        self.context = Some(context);
        self
    }
}

impl<T> From<Result<T>> for OperationResult<T> {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(e) => Self::fail(e.user_message()),
        }
    }
}
