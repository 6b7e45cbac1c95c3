//! Login and logout commands

use anyhow::Result;
use colored::Colorize;
use dialoguer::{Input, Password};
use wallet_core::services::{LogEvent, LoggingService};
use wallet_core::OperationResult;

use super::{get_context, log_event, with_spinner};
use crate::output;

/// Password from --password flag, WALLET_PASSWORD env var, or prompt
fn get_password_or_prompt(password_flag: Option<String>) -> Result<String> {
    if let Some(p) = password_flag {
        return Ok(p);
    }
    if let Ok(p) = std::env::var("WALLET_PASSWORD") {
        return Ok(p);
    }
    let p = Password::new().with_prompt("Password").interact()?;
    Ok(p)
}

pub fn run(
    logger: &Option<LoggingService>,
    email: Option<String>,
    password: Option<String>,
    json: bool,
) -> Result<()> {
    let ctx = get_context()?;
    let backend = ctx.network_config()?.backend_name();

    let email = match email {
        Some(e) => e,
        None => {
            let mut input = Input::<String>::new().with_prompt("Email");
            if let Some(last) = ctx.auth_service.last_logged_email()? {
                input = input.default(last);
            }
            input.interact_text()?
        }
    };
    let password = get_password_or_prompt(password)?;

    let result = with_spinner(&ctx, "Logging in...", || {
        ctx.auth_service.login(&email, &password)
    });

    match result {
        Ok(session) => {
            log_event(
                logger,
                LogEvent::new("login_succeeded")
                    .with_command("login")
                    .with_backend(backend),
            );
            if json {
                println!("{}", serde_json::to_string_pretty(&OperationResult::ok(&session.user))?);
            } else {
                output::success(&format!("Logged in as {}", session.user.name.bold()));
            }
            Ok(())
        }
        Err(e) => {
            log_event(
                logger,
                LogEvent::new("login_failed")
                    .with_command("login")
                    .with_backend(backend)
                    .with_error(e.to_string()),
            );
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&OperationResult::<()>::fail(e.user_message()))?
                );
            }
            Err(e.into())
        }
    }
}

pub fn run_logout() -> Result<()> {
    let ctx = get_context()?;
    if ctx.auth_service.current_session()?.is_none() {
        output::info("Not logged in.");
        return Ok(());
    }
    ctx.auth_service.logout()?;
    output::success("Logged out");
    Ok(())
}
