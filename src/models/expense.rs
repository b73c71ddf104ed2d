//! Expense record - one shared purchase in the household ledger.
//!
//! The store delivers these records with loose typing: the amount may be a
//! JSON number or a numeric-looking string, the payer may appear as a direct
//! foreign key or only inside the embedded `users` object, and the split
//! token's spelling varies. The wrappers here preserve whatever arrived so a
//! single dirty record cannot fail a whole fetch; parsing happens downstream,
//! one record at a time.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::core::settlement::SplitPolicy;
use crate::models::{Category, User};

/// An identifier that may arrive as a JSON number or a numeric string.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RawId {
    /// Proper numeric identifier
    Number(i64),
    /// Identifier serialized as a string, e.g. `"2"`
    Text(String),
}

impl RawId {
    /// Parses the identifier into an `i64`, if it holds one.
    #[must_use]
    pub fn parse(&self) -> Option<i64> {
        match self {
            Self::Number(id) => Some(*id),
            Self::Text(text) => text.trim().parse().ok(),
        }
    }
}

impl From<i64> for RawId {
    fn from(id: i64) -> Self {
        Self::Number(id)
    }
}

/// A monetary amount that may arrive as a JSON number or a numeric string.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RawAmount {
    /// Proper numeric amount
    Number(f64),
    /// Amount serialized as a string, e.g. `"12.50"`
    Text(String),
}

impl RawAmount {
    /// Parses the amount into a finite `f64`, if it holds one.
    #[must_use]
    pub fn parse(&self) -> Option<f64> {
        let value = match self {
            Self::Number(value) => *value,
            Self::Text(text) => text.trim().parse().ok()?,
        };
        value.is_finite().then_some(value)
    }
}

impl From<f64> for RawAmount {
    fn from(amount: f64) -> Self {
        Self::Number(amount)
    }
}

/// Expense record from the data store's `expenses` table.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ExpenseRecord {
    /// Unique identifier for the expense
    pub id: i64,
    /// Foreign key of the payer; may be absent when only the embedded
    /// object is present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<RawId>,
    /// Purchase amount in currency units
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<RawAmount>,
    /// Foreign key of the category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<RawId>,
    /// Date the expense was incurred
    pub created_at: NaiveDate,
    /// Split-policy token as stored; spelling and casing vary upstream
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub split_type: Option<String>,
    /// Free-text description
    #[serde(default)]
    pub description: String,
    /// Whether the expense has been settled outside the ledger
    #[serde(default)]
    pub paid: bool,
    /// When the record was added to the store
    pub added_at: DateTime<Utc>,
    /// Payer object as embedded by the store's relational select
    #[serde(
        default,
        rename = "users",
        alias = "user",
        skip_serializing_if = "Option::is_none"
    )]
    pub user: Option<User>,
    /// Category object as embedded by the store's relational select
    #[serde(
        default,
        rename = "categories",
        alias = "category",
        skip_serializing_if = "Option::is_none"
    )]
    pub category: Option<Category>,
}

impl ExpenseRecord {
    /// Resolves the payer's id. The direct foreign key wins; the embedded
    /// payer object is only consulted when the key is absent, so an
    /// unparseable key stays unparseable instead of silently changing payer.
    #[must_use]
    pub fn payer_id(&self) -> Option<i64> {
        match &self.user_id {
            Some(raw) => raw.parse(),
            None => self.user.as_ref().map(|user| user.id),
        }
    }

    /// Resolves the category id: direct foreign key, else the embedded
    /// object.
    #[must_use]
    pub fn category_ref(&self) -> Option<i64> {
        match &self.category_id {
            Some(raw) => raw.parse(),
            None => self.category.as_ref().map(|category| category.id),
        }
    }

    /// Parses the purchase amount into a finite value.
    #[must_use]
    pub fn amount_value(&self) -> Option<f64> {
        self.amount.as_ref().and_then(RawAmount::parse)
    }

    /// Parses the split token into a recognized policy.
    #[must_use]
    pub fn split_policy(&self) -> Option<SplitPolicy> {
        self.split_type
            .as_deref()
            .and_then(SplitPolicy::parse_token)
    }
}

/// Payload for creating or replacing an expense.
///
/// Unlike [`ExpenseRecord`], a draft is strictly typed: we never write the
/// loose shapes we tolerate on the way in.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ExpenseDraft {
    /// Paying user id
    pub user_id: i64,
    /// Purchase amount in currency units
    pub amount: f64,
    /// Category id
    pub category_id: i64,
    /// Date the expense was incurred
    pub created_at: NaiveDate,
    /// Split policy, serialized as its canonical token
    pub split_type: SplitPolicy,
    /// Free-text description
    #[serde(default)]
    pub description: String,
    /// Whether the expense is already settled
    #[serde(default)]
    pub paid: bool,
}

impl ExpenseDraft {
    /// Creates a draft with the ledger's form defaults: even split, unpaid,
    /// empty description.
    #[must_use]
    pub fn new(user_id: i64, category_id: i64, amount: f64, created_at: NaiveDate) -> Self {
        Self {
            user_id,
            amount,
            category_id,
            created_at,
            split_type: SplitPolicy::EvenSplit,
            description: String::new(),
            paid: false,
        }
    }
}
