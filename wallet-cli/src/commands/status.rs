//! Status command - user, balance and backend

use anyhow::Result;
use colored::Colorize;
use serde_json::json;

use super::{get_context, with_spinner};
use crate::output;

pub fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let network = ctx.network_config()?;
    let home = with_spinner(&ctx, "Loading account...", || ctx.home_service.load())?;

    if json {
        let value = json!({
            "user": home.user,
            "balanceInCents": home.summary.balance_in_cents,
            "backend": home.backend,
            "baseUrl": network.base_url,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("{}", "Wallet Status".bold());
    println!();

    let mut table = output::create_table();
    table.add_row(vec!["User".to_string(), home.user.name.clone()]);
    table.add_row(vec!["Email".to_string(), home.user.email.clone()]);
    table.add_row(vec!["Balance".to_string(), output::money(home.summary.balance_in_cents)]);
    table.add_row(vec!["Backend".to_string(), home.backend.clone()]);
    if network.use_remote_server {
        table.add_row(vec!["Server".to_string(), network.base_url.clone()]);
    }
    println!("{}", table);

    Ok(())
}
