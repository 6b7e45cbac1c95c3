//! Local authorization rule
//!
//! Stands in for the fraud/compliance service: one fixed amount is always
//! refused, everything else is allowed.

use crate::domain::result::{Result, NOT_ALLOWED_REASON};
use crate::domain::AuthorizationDecision;
use crate::ports::AuthorizeService;

/// Amount refused by the authorization fixture (R$ 403,00)
pub const BLOCKED_AMOUNT_IN_CENTS: i64 = 40_300;

/// Deterministic authorization check used by the local backend
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalAuthorizeService;

impl LocalAuthorizeService {
    pub fn new() -> Self {
        Self
    }
}

impl AuthorizeService for LocalAuthorizeService {
    fn authorize_transfer(&self, amount_in_cents: i64) -> Result<AuthorizationDecision> {
        if amount_in_cents == BLOCKED_AMOUNT_IN_CENTS {
            Ok(AuthorizationDecision::deny(NOT_ALLOWED_REASON))
        } else {
            Ok(AuthorizationDecision::allow())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocked_amount_is_denied() {
        let decision = LocalAuthorizeService::new()
            .authorize_transfer(BLOCKED_AMOUNT_IN_CENTS)
            .unwrap();
        assert!(!decision.authorized);
        assert_eq!(decision.reason.as_deref(), Some(NOT_ALLOWED_REASON));
    }

    #[test]
    fn test_other_amounts_are_allowed() {
        let service = LocalAuthorizeService::new();
        for amount in [1, 2_500, 40_299, 40_301, 4_030_000] {
            assert!(service.authorize_transfer(amount).unwrap().authorized);
        }
    }
}
