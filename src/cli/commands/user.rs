//! Participant commands - list, add, delete, and the primary viewer.

use clap::Subcommand;

use crate::config::{Preferences, Settings};
use crate::errors::Result;
use crate::store::{self, StoreClient};

/// User subcommands.
#[derive(Subcommand, Debug)]
pub enum UserCommand {
    /// List the household's users
    List,
    /// Add a user
    Add {
        /// Display name
        name: String,
        /// Contact email
        #[arg(long)]
        email: Option<String>,
    },
    /// Make a user the primary viewer, whose perspective colors amounts
    SetPrimary {
        /// User id
        id: i64,
    },
    /// Remove a user
    Delete {
        /// User id
        id: i64,
    },
}

/// Dispatches a user subcommand.
pub async fn run(
    store: &StoreClient,
    settings: &Settings,
    preferences: Preferences,
    command: UserCommand,
) -> Result<()> {
    match command {
        UserCommand::List => list(store, preferences).await,
        UserCommand::Add { name, email } => add(store, &name, email.as_deref()).await,
        UserCommand::SetPrimary { id } => set_primary(store, settings, id).await,
        UserCommand::Delete { id } => delete(store, id).await,
    }
}

async fn list(store: &StoreClient, preferences: Preferences) -> Result<()> {
    let users = store::users::list_users(store).await?;
    if users.is_empty() {
        println!("No users yet.");
        return Ok(());
    }
    for user in &users {
        let marker = if preferences.primary_user_id == Some(user.id) {
            " (primary viewer)"
        } else {
            ""
        };
        match &user.email {
            Some(email) => println!("#{} {} <{email}>{marker}", user.id, user.name),
            None => println!("#{} {}{marker}", user.id, user.name),
        }
    }
    Ok(())
}

async fn add(store: &StoreClient, name: &str, email: Option<&str>) -> Result<()> {
    let user = store::users::create_user(store, name, email).await?;
    println!("Added user #{} {}", user.id, user.name);
    Ok(())
}

async fn set_primary(store: &StoreClient, settings: &Settings, id: i64) -> Result<()> {
    // Confirm the user exists in the store before persisting the preference.
    let user = store::users::get_user(store, id).await?;
    let updated = Preferences {
        primary_user_id: Some(user.id),
    };
    updated.save(&settings.preferences_path)?;
    println!("{} is now the primary viewer.", user.name);
    Ok(())
}

async fn delete(store: &StoreClient, id: i64) -> Result<()> {
    store::users::delete_user(store, id).await?;
    println!("Deleted user #{id}");
    Ok(())
}
