//! Wallet CLI - a demo payment wallet in your terminal

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use wallet_core::services::LogEvent;

mod commands;
mod output;

use commands::{contacts, login, logs, settings, status, theme, transfer};

/// Wallet - send money to your contacts
#[derive(Parser)]
#[command(name = "wallet", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and keep the session
    Login {
        /// Account email (prompted when missing)
        #[arg(long)]
        email: Option<String>,
        /// Password (falls back to WALLET_PASSWORD, then a prompt)
        #[arg(long)]
        password: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Forget the saved session
    Logout,

    /// Show the logged-in user, balance and backend
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the accounts you can send money to
    Contacts {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Send money to a contact
    Transfer {
        /// Contact id or account number
        contact: String,
        /// Amount as typed, e.g. "25,00" or "2500" (cents)
        amount: String,
        /// Skip confirmation prompt
        #[arg(long, short)]
        yes: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show or change backend settings
    Settings {
        #[command(subcommand)]
        command: Option<settings::SettingsCommands>,
    },

    /// Show or set the display theme
    Theme {
        /// system, light or dark
        mode: Option<String>,
    },

    /// View and manage the event log
    Logs {
        #[command(subcommand)]
        command: logs::LogsCommands,
    },
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Login { .. } => "login",
            Commands::Logout => "logout",
            Commands::Status { .. } => "status",
            Commands::Contacts { .. } => "contacts",
            Commands::Transfer { .. } => "transfer",
            Commands::Settings { .. } => "settings",
            Commands::Theme { .. } => "theme",
            Commands::Logs { .. } => "logs",
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            commands::report_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let logger = commands::get_logger();
    commands::log_event(
        &logger,
        LogEvent::new("command_executed").with_command(cli.command.name()),
    );

    match cli.command {
        Commands::Login { email, password, json } => login::run(&logger, email, password, json),
        Commands::Logout => login::run_logout(),
        Commands::Status { json } => status::run(json),
        Commands::Contacts { json } => contacts::run(json),
        Commands::Transfer { contact, amount, yes, json } => {
            transfer::run(&logger, &contact, &amount, yes, json)
        }
        Commands::Settings { command } => settings::run(command),
        Commands::Theme { mode } => theme::run(mode),
        Commands::Logs { command } => logs::run(logger.as_ref(), command),
    }
}
