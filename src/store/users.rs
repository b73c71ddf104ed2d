//! User persistence against the store's `users` table.

use super::StoreClient;
use crate::errors::{Error, Result};
use crate::models::User;

/// Fetches all users, ordered by id so the participant pair is stable.
pub async fn list_users(store: &StoreClient) -> Result<Vec<User>> {
    store.get_json("users", "select=*&order=id.asc").await
}

/// Fetches a single user by id.
///
/// # Errors
/// [`Error::UserNotFound`] when no row matches.
pub async fn get_user(store: &StoreClient, id: i64) -> Result<User> {
    let rows: Vec<User> = store
        .get_json("users", &format!("select=*&id=eq.{id}"))
        .await?;
    rows.into_iter().next().ok_or(Error::UserNotFound { id })
}

/// Stores a new user and returns it as recorded.
pub async fn create_user(store: &StoreClient, name: &str, email: Option<&str>) -> Result<User> {
    let rows: Vec<User> = store
        .post_returning("users", &serde_json::json!({ "name": name, "email": email }))
        .await?;
    rows.into_iter().next().ok_or(Error::EmptyResult {
        endpoint: "users".to_string(),
    })
}

/// Removes a user.
pub async fn delete_user(store: &StoreClient, id: i64) -> Result<()> {
    store.delete("users", &format!("id=eq.{id}")).await
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::config::Settings;
    use std::path::PathBuf;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: &str) -> StoreClient {
        let settings = Settings {
            store_url: base_url.to_string(),
            store_api_key: None,
            preferences_path: PathBuf::from("unused"),
            timeout_secs: 5,
        };
        StoreClient::new(&settings).unwrap()
    }

    #[tokio::test]
    async fn users_come_back_in_stable_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .and(query_param("order", "id.asc"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"[
                    {"id": 1, "name": "Alex", "email": "alex@example.com"},
                    {"id": 2, "name": "Robin"}
                ]"#,
                "application/json",
            ))
            .mount(&server)
            .await;

        let users = list_users(&test_client(&server.uri())).await.unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].name, "Alex");
        assert_eq!(users[1].email, None);
    }

    #[tokio::test]
    async fn missing_users_are_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .and(query_param("id", "eq.7"))
            .respond_with(ResponseTemplate::new(200).set_body_raw("[]", "application/json"))
            .mount(&server)
            .await;

        let error = get_user(&test_client(&server.uri()), 7).await.unwrap_err();
        assert!(matches!(error, Error::UserNotFound { id: 7 }));
    }
}
