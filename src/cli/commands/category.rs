//! Category commands - the display/filter tags expenses are filed under.

use clap::Subcommand;

use crate::errors::Result;
use crate::store::{self, StoreClient};

/// Category subcommands.
#[derive(Subcommand, Debug)]
pub enum CategoryCommand {
    /// List the categories
    List,
    /// Add a category
    Add {
        /// Display name
        name: String,
    },
    /// Remove a category
    Delete {
        /// Category id
        id: i64,
    },
}

/// Dispatches a category subcommand.
pub async fn run(store: &StoreClient, command: CategoryCommand) -> Result<()> {
    match command {
        CategoryCommand::List => {
            let categories = store::categories::list_categories(store).await?;
            if categories.is_empty() {
                println!("No categories yet.");
                return Ok(());
            }
            for category in &categories {
                println!("#{} {}", category.id, category.name);
            }
            Ok(())
        }
        CategoryCommand::Add { name } => {
            let category = store::categories::create_category(store, &name).await?;
            println!("Added category #{} {}", category.id, category.name);
            Ok(())
        }
        CategoryCommand::Delete { id } => {
            store::categories::delete_category(store, id).await?;
            println!("Deleted category #{id}");
            Ok(())
        }
    }
}
