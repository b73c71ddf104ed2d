//! Expense persistence against the store's `expenses` table.

use super::StoreClient;
use crate::errors::{Error, Result};
use crate::models::{ExpenseDraft, ExpenseRecord};

/// Columns and embedded objects fetched with every expense read.
const EXPENSE_SELECT: &str = "select=*,users(id,name,email),categories(id,name)";

/// Fetches the full ledger, newest-first, with the payer and category
/// embedded.
pub async fn list_expenses(store: &StoreClient) -> Result<Vec<ExpenseRecord>> {
    store
        .get_json("expenses", &format!("{EXPENSE_SELECT}&order=added_at.desc"))
        .await
}

/// Fetches a single expense by id.
///
/// # Errors
/// [`Error::ExpenseNotFound`] when no row matches.
pub async fn get_expense(store: &StoreClient, id: i64) -> Result<ExpenseRecord> {
    let rows: Vec<ExpenseRecord> = store
        .get_json("expenses", &format!("{EXPENSE_SELECT}&id=eq.{id}"))
        .await?;
    rows.into_iter().next().ok_or(Error::ExpenseNotFound { id })
}

/// Stores a new expense and returns it as recorded.
pub async fn create_expense(store: &StoreClient, draft: &ExpenseDraft) -> Result<ExpenseRecord> {
    let rows: Vec<ExpenseRecord> = store.post_returning("expenses", draft).await?;
    rows.into_iter().next().ok_or(Error::EmptyResult {
        endpoint: "expenses".to_string(),
    })
}

/// Replaces an expense wholesale.
///
/// # Errors
/// [`Error::ExpenseNotFound`] when no row matches the id.
pub async fn update_expense(
    store: &StoreClient,
    id: i64,
    draft: &ExpenseDraft,
) -> Result<ExpenseRecord> {
    let rows: Vec<ExpenseRecord> = store
        .patch_returning("expenses", &format!("id=eq.{id}"), draft)
        .await?;
    rows.into_iter().next().ok_or(Error::ExpenseNotFound { id })
}

/// Sets only the settled flag.
///
/// # Errors
/// [`Error::ExpenseNotFound`] when no row matches the id.
pub async fn set_paid(store: &StoreClient, id: i64, paid: bool) -> Result<ExpenseRecord> {
    let rows: Vec<ExpenseRecord> = store
        .patch_returning(
            "expenses",
            &format!("id=eq.{id}"),
            &serde_json::json!({ "paid": paid }),
        )
        .await?;
    rows.into_iter().next().ok_or(Error::ExpenseNotFound { id })
}

/// Removes an expense from the ledger.
pub async fn delete_expense(store: &StoreClient, id: i64) -> Result<()> {
    store.delete("expenses", &format!("id=eq.{id}")).await
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::config::Settings;
    use crate::core::settlement::SplitPolicy;
    use std::path::PathBuf;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: &str) -> StoreClient {
        let settings = Settings {
            store_url: base_url.to_string(),
            store_api_key: Some("secret-key".to_string()),
            preferences_path: PathBuf::from("unused"),
            timeout_secs: 5,
        };
        StoreClient::new(&settings).unwrap()
    }

    #[tokio::test]
    async fn list_expenses_tolerates_loose_records() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/expenses"))
            .and(query_param("order", "added_at.desc"))
            .and(header("apikey", "secret-key"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"[
                    {
                        "id": 1,
                        "user_id": "2",
                        "amount": "49.90",
                        "category_id": 3,
                        "created_at": "2026-02-07",
                        "split_type": "50/50",
                        "description": "weekly shop",
                        "paid": false,
                        "added_at": "2026-02-07T18:30:00Z",
                        "users": {"id": 2, "name": "Robin"},
                        "categories": {"id": 3, "name": "groceries"}
                    },
                    {
                        "id": 2,
                        "amount": 12,
                        "created_at": "2026-02-06",
                        "added_at": "2026-02-06T10:00:00Z",
                        "users": {"id": 1, "name": "Alex"}
                    }
                ]"#,
                "application/json",
            ))
            .mount(&server)
            .await;

        let expenses = list_expenses(&test_client(&server.uri())).await.unwrap();
        assert_eq!(expenses.len(), 2);
        assert_eq!(expenses[0].payer_id(), Some(2));
        assert_eq!(expenses[0].amount_value(), Some(49.90));
        assert_eq!(expenses[1].payer_id(), Some(1));
        assert_eq!(expenses[1].amount_value(), Some(12.0));
    }

    #[tokio::test]
    async fn store_failures_carry_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/expenses"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
            .mount(&server)
            .await;

        let error = list_expenses(&test_client(&server.uri())).await.unwrap_err();
        match error {
            crate::errors::Error::Store {
                endpoint,
                status,
                body,
            } => {
                assert_eq!(endpoint, "expenses");
                assert_eq!(status, 503);
                assert_eq!(body, "maintenance");
            }
            other => panic!("expected a store error, got {other}"),
        }
    }

    #[tokio::test]
    async fn create_expense_returns_the_stored_representation() {
        let server = MockServer::start().await;
        let draft = ExpenseDraft {
            user_id: 1,
            amount: 30.0,
            category_id: 2,
            created_at: chrono::NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            split_type: SplitPolicy::PayerCoversOther,
            description: "pharmacy".to_string(),
            paid: false,
        };

        Mock::given(method("POST"))
            .and(path("/expenses"))
            .and(header("Prefer", "return=representation"))
            .and(body_json(&draft))
            .respond_with(ResponseTemplate::new(201).set_body_raw(
                r#"[{
                    "id": 7,
                    "user_id": 1,
                    "amount": 30.0,
                    "category_id": 2,
                    "created_at": "2026-03-01",
                    "split_type": "100-other",
                    "description": "pharmacy",
                    "paid": false,
                    "added_at": "2026-03-01T12:00:00Z"
                }]"#,
                "application/json",
            ))
            .mount(&server)
            .await;

        let expense = create_expense(&test_client(&server.uri()), &draft)
            .await
            .unwrap();
        assert_eq!(expense.id, 7);
        assert_eq!(expense.split_policy(), Some(SplitPolicy::PayerCoversOther));
    }

    #[tokio::test]
    async fn set_paid_on_a_missing_row_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/expenses"))
            .and(query_param("id", "eq.99"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw("[]", "application/json"),
            )
            .mount(&server)
            .await;

        let error = set_paid(&test_client(&server.uri()), 99, true)
            .await
            .unwrap_err();
        assert!(matches!(
            error,
            crate::errors::Error::ExpenseNotFound { id: 99 }
        ));
    }
}
