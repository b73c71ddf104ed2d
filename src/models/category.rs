//! Category record - a display/filter tag for expenses.
//! Categories never influence settlement math.

use serde::{Deserialize, Serialize};

/// Category record from the data store's `categories` table.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Category {
    /// Unique identifier for the category
    pub id: i64,
    /// Display name
    pub name: String,
}
