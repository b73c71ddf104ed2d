//! Category persistence against the store's `categories` table.

use super::StoreClient;
use crate::errors::{Error, Result};
use crate::models::Category;

/// Fetches all categories, ordered by id.
pub async fn list_categories(store: &StoreClient) -> Result<Vec<Category>> {
    store.get_json("categories", "select=*&order=id.asc").await
}

/// Stores a new category and returns it as recorded.
pub async fn create_category(store: &StoreClient, name: &str) -> Result<Category> {
    let rows: Vec<Category> = store
        .post_returning("categories", &serde_json::json!({ "name": name }))
        .await?;
    rows.into_iter().next().ok_or(Error::EmptyResult {
        endpoint: "categories".to_string(),
    })
}

/// Removes a category.
pub async fn delete_category(store: &StoreClient, id: i64) -> Result<()> {
    store.delete("categories", &format!("id=eq.{id}")).await
}
