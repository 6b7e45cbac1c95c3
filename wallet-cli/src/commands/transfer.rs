//! Transfer command - send money to a contact

use std::collections::HashMap;

use anyhow::Result;
use dialoguer::Confirm;
use serde_json::json;
use wallet_core::services::{LogEvent, LoggingService};
use wallet_core::{format_brl, parse_amount_input, OperationResult};

use super::{get_context, log_event, with_spinner};
use crate::output;

pub fn run(
    logger: &Option<LoggingService>,
    contact: &str,
    amount: &str,
    yes: bool,
    json: bool,
) -> Result<()> {
    let ctx = get_context()?;
    let backend = ctx.network_config()?.backend_name();
    let amount_in_cents = parse_amount_input(amount)?;

    // Only prompt on a terminal, and only for a contact we can name
    if !yes && !json && atty::is(atty::Stream::Stdin) && amount_in_cents > 0 {
        if let Ok(Some(found)) = ctx.transfer_service.find_contact(contact) {
            let prompt = format!(
                "Send {} to {} ({})?",
                format_brl(amount_in_cents),
                found.name,
                found.account_number
            );
            if !Confirm::new().with_prompt(prompt).default(true).interact()? {
                println!("Cancelled.");
                return Ok(());
            }
        }
    }

    let result = with_spinner(&ctx, "Sending transfer...", || {
        ctx.transfer_service.confirm(contact, amount_in_cents)
    });

    match result {
        Ok(receipt) => {
            log_event(
                logger,
                LogEvent::new("transfer_succeeded")
                    .with_command("transfer")
                    .with_backend(backend),
            );
            if json {
                let context = HashMap::from([("backend".to_string(), json!(backend))]);
                let result = OperationResult::ok(&receipt).with_context(context);
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                output::success(&format!(
                    "Sent {} to {} ({})",
                    format_brl(receipt.amount_in_cents),
                    receipt.contact.name,
                    receipt.contact.account_number
                ));
                println!("New balance: {}", output::money(receipt.new_balance_in_cents));
            }
            Ok(())
        }
        Err(e) => {
            log_event(
                logger,
                LogEvent::new("transfer_failed")
                    .with_command("transfer")
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
