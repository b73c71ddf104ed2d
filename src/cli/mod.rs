//! Command-line surface.
//!
//! Thin handlers over the store and core: each command fetches what it
//! needs, calls the framework-agnostic logic, and prints. The subcommand
//! tree mirrors the ledger's three record kinds plus the balance panel.

/// Subcommand handlers
pub mod commands;

use clap::{Parser, Subcommand};

use crate::config::{Preferences, Settings};
use crate::errors::Result;
use crate::store::StoreClient;

/// Household expense splitting for two people.
#[derive(Parser, Debug)]
#[command(name = "split-buddy", version, about)]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show who owes whom across the unsettled ledger
    Balance,
    /// Log, list, settle, and delete shared expenses
    #[command(subcommand)]
    Expense(commands::expense::ExpenseCommand),
    /// Manage the participants and the primary viewer
    #[command(subcommand)]
    User(commands::user::UserCommand),
    /// Manage expense categories
    #[command(subcommand)]
    Category(commands::category::CategoryCommand),
}

/// Dispatches a parsed invocation.
///
/// Settings and the primary-viewer preference are read once here and passed
/// down; handlers never reach back into the environment.
pub async fn run(cli: Cli) -> Result<()> {
    let settings = Settings::from_env();
    let preferences = Preferences::load(&settings.preferences_path)?;
    let store = StoreClient::new(&settings)?;

    match cli.command {
        Commands::Balance => commands::balance::run(&store, preferences).await,
        Commands::Expense(command) => commands::expense::run(&store, preferences, command).await,
        Commands::User(command) => commands::user::run(&store, &settings, preferences, command).await,
        Commands::Category(command) => commands::category::run(&store, command).await,
    }
}
