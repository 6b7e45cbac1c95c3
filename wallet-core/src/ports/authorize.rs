//! Authorization port - allow/deny a transfer by amount

use crate::domain::result::Result;
use crate::domain::AuthorizationDecision;

/// External authorization check gating a transfer
///
/// The decision is keyed on the amount only, not on the parties.
/// `Err` means the check itself could not run; a refusal is
/// `Ok(AuthorizationDecision { authorized: false, .. })`.
pub trait AuthorizeService: Send + Sync {
    fn authorize_transfer(&self, amount_in_cents: i64) -> Result<AuthorizationDecision>;
}
