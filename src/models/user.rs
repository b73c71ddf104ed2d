//! User record - one of the household's participants.

use serde::{Deserialize, Serialize};

/// User record from the data store's `users` table.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: i64,
    /// Display name
    pub name: String,
    /// Contact email, if the store has one on file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}
