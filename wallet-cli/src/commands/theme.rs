//! Theme command

use anyhow::{anyhow, Result};
use wallet_core::ThemeMode;

use super::get_context;
use crate::output;

pub fn run(mode: Option<String>) -> Result<()> {
    let ctx = get_context()?;

    match mode {
        None => println!("{}", ctx.theme()?),
        Some(mode) => {
            let mode: ThemeMode = mode.parse().map_err(|e: String| anyhow!(e))?;
            ctx.set_theme(mode)?;
            output::success(&format!("Theme set to {}", mode));
        }
    }

    Ok(())
}
