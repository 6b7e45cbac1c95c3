//! CLI command implementations

pub mod contacts;
pub mod login;
pub mod logs;
pub mod settings;
pub mod status;
pub mod theme;
pub mod transfer;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use wallet_core::services::{EntryPoint, LogEvent, LoggingService};
use wallet_core::WalletContext;

use crate::output;

/// Get the logging service for CLI operations
///
/// Returns None if logging fails to initialize (shouldn't block operations)
pub fn get_logger() -> Option<LoggingService> {
    let wallet_dir = get_wallet_dir().ok()?;
    std::fs::create_dir_all(&wallet_dir).ok()?;
    LoggingService::new(&wallet_dir, EntryPoint::Cli, env!("CARGO_PKG_VERSION")).ok()
}

/// Log an event, ignoring any errors (logging should never break the app)
pub fn log_event(logger: &Option<LoggingService>, event: LogEvent) {
    if let Some(l) = logger {
        let _ = l.log(event);
    }
}

/// Get the wallet directory from environment or default
pub fn get_wallet_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("WALLET_DIR") {
        return Ok(PathBuf::from(dir));
    }
    dirs::home_dir()
        .map(|home| home.join(".wallet"))
        .ok_or_else(|| anyhow!("Could not find home directory, set WALLET_DIR"))
}

pub fn get_context() -> Result<WalletContext> {
    let wallet_dir = get_wallet_dir()?;
    WalletContext::new(&wallet_dir)
        .with_context(|| format!("Failed to initialize wallet in {:?}", wallet_dir))
}

/// Run `f`, showing a spinner while a remote call may be slow
///
/// The spinner is only drawn for the remote backend on an interactive
/// terminal, so JSON and piped output stay clean.
pub fn with_spinner<T>(ctx: &WalletContext, message: &str, f: impl FnOnce() -> T) -> T {
    let remote = ctx
        .network_config()
        .map(|c| c.use_remote_server)
        .unwrap_or(false);
    if !remote || !atty::is(atty::Stream::Stdout) {
        return f();
    }

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    let result = f();
    pb.finish_and_clear();
    result
}

/// Print a failed command for the user
///
/// Wallet errors show their friendly text; retryable ones get a hint.
pub fn report_error(error: &anyhow::Error) {
    match error.downcast_ref::<wallet_core::Error>() {
        Some(e) => {
            output::error(&e.user_message());
            if e.is_retryable() {
                output::warning("You can try again.");
            }
        }
        None => output::error(&format!("{:#}", error)),
    }
}
