//! Core domain entities
//!
//! All business entities are defined here. These are pure data structures
//! with validation logic - no I/O or external dependencies.

mod account;
mod contact;
pub mod money;
pub mod preferences;
pub mod result;
mod transfer;
mod user;

pub use account::{Account, AccountSummary};
pub use contact::{Contact, SELF_ACCOUNT_NUMBER};
pub use preferences::{NetworkConfig, ThemeMode};
pub use transfer::{AuthorizationDecision, TransferReceipt, TransferRequest};
pub use user::{Session, User};
