//! Contacts command - who money can be sent to

use anyhow::Result;

use super::{get_context, with_spinner};
use crate::output;
use wallet_core::WalletRepository;

pub fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let contacts = with_spinner(&ctx, "Loading contacts...", || ctx.wallet.get_contacts())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&contacts)?);
        return Ok(());
    }

    if contacts.is_empty() {
        println!("No contacts found.");
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["ID", "Name", "Account"]);
    for contact in &contacts {
        table.add_row(vec![
            contact.id.as_str(),
            contact.name.as_str(),
            contact.account_number.as_str(),
        ]);
    }
    println!("{}", table);

    Ok(())
}
