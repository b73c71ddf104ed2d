//! Shared test utilities for `SplitBuddy`.
//!
//! This module provides builders for record types with sensible defaults,
//! so tests can assemble a ledger without talking to a store.

#![allow(clippy::expect_used)]

use chrono::{NaiveDate, TimeZone, Utc};

use crate::models::{ExpenseRecord, RawAmount, RawId, User};

/// Creates a test user with no email on file.
pub fn test_user(id: i64, name: &str) -> User {
    User {
        id,
        name: name.to_string(),
        email: None,
    }
}

/// Creates a test expense with sensible defaults.
///
/// # Defaults
/// * `category_id`: 1
/// * `created_at`: 2026-02-07
/// * `added_at`: 2026-02-07T12:00:00Z
/// * `description`: "Test expense"
/// * `paid`: false
/// * no embedded user or category objects
pub fn test_expense(id: i64, payer_id: i64, amount: f64, split_type: &str) -> ExpenseRecord {
    ExpenseRecord {
        id,
        user_id: Some(RawId::Number(payer_id)),
        amount: Some(RawAmount::Number(amount)),
        category_id: Some(RawId::Number(1)),
        created_at: NaiveDate::from_ymd_opt(2026, 2, 7).expect("valid test date"),
        split_type: Some(split_type.to_string()),
        description: "Test expense".to_string(),
        paid: false,
        added_at: Utc
            .with_ymd_and_hms(2026, 2, 7, 12, 0, 0)
            .single()
            .expect("valid test timestamp"),
        user: None,
        category: None,
    }
}
