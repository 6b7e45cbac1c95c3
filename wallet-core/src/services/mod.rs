//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic and port interactions. Each service
//! focuses on one use case.

mod auth;
mod home;
pub mod logging;
mod transfer;

pub use auth::AuthService;
pub use home::{HomeService, HomeView};
pub use logging::{EntryPoint, LogEntry, LogEvent, LoggingService};
pub use transfer::TransferService;
