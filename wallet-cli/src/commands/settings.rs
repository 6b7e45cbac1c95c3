//! Settings command - backend routing and server address

use anyhow::Result;
use clap::{Subcommand, ValueEnum};
use colored::Colorize;

use super::get_context;
use crate::output;
use wallet_core::config::Config;

#[derive(Clone, Copy, ValueEnum)]
pub enum Toggle {
    On,
    Off,
}

#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Show current settings
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Route wallet calls to the remote server (on) or the local backend (off)
    Remote {
        state: Toggle,
    },
    /// Set the remote server base URL
    BaseUrl {
        url: String,
    },
}

pub fn run(command: Option<SettingsCommands>) -> Result<()> {
    let ctx = get_context()?;

    match command.unwrap_or(SettingsCommands::Show { json: false }) {
        SettingsCommands::Show { json } => {
            let network = ctx.network_config()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&network)?);
                return Ok(());
            }
            println!("{}", "Settings".bold());
            println!("  Backend: {}", network.backend_name());
            println!("  Server:  {}", network.base_url);
            println!(
                "  File:    {}",
                Config::settings_path(ctx.wallet_dir()).display()
            );
        }
        SettingsCommands::Remote { state } => {
            let config = ctx.set_use_remote(matches!(state, Toggle::On))?;
            if config.use_remote_server {
                output::success(&format!("Using remote server at {}", config.base_url));
            } else {
                output::success("Using local backend");
            }
        }
        SettingsCommands::BaseUrl { url } => {
            let config = ctx.set_base_url(&url)?;
            output::success(&format!("Server set to {}", config.base_url));
            if !config.use_remote_server {
                output::info("Remote server is off. Enable it with `wallet settings remote on`.");
            }
        }
    }

    Ok(())
}
