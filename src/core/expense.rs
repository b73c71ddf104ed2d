//! Ledger view operations - ordering, category filtering, month grouping.
//!
//! These shape the fetched ledger for presentation without touching the
//! settlement math: the listing is newest-first by record time, optionally
//! narrowed to one category, optionally grouped by the month the expense was
//! incurred.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::models::ExpenseRecord;

/// Sorts expenses newest-first by the time they were recorded.
pub fn sort_newest_first(expenses: &mut [ExpenseRecord]) {
    expenses.sort_by(|a, b| b.added_at.cmp(&a.added_at));
}

/// Category selection for the ledger view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Show every expense
    All,
    /// Show only expenses in the given category
    Id(i64),
}

/// Filters expenses by category, matching the direct foreign key or the
/// embedded category object.
#[must_use]
pub fn filter_by_category(
    expenses: &[ExpenseRecord],
    filter: CategoryFilter,
) -> Vec<ExpenseRecord> {
    match filter {
        CategoryFilter::All => expenses.to_vec(),
        CategoryFilter::Id(category_id) => expenses
            .iter()
            .filter(|expense| expense.category_ref() == Some(category_id))
            .cloned()
            .collect(),
    }
}

/// One calendar month of expenses, newest-first.
#[derive(Clone, Debug, PartialEq)]
pub struct MonthGroup {
    /// Human-readable label, e.g. "March 2026"
    pub label: String,
    /// Expenses incurred that month, newest-first
    pub expenses: Vec<ExpenseRecord>,
}

/// Groups expenses by the calendar month they were incurred, months
/// newest-first and expenses within each month newest-first.
#[must_use]
pub fn group_by_month(expenses: &[ExpenseRecord]) -> Vec<MonthGroup> {
    let mut months: BTreeMap<(i32, u32), Vec<ExpenseRecord>> = BTreeMap::new();
    for expense in expenses {
        months
            .entry((expense.created_at.year(), expense.created_at.month()))
            .or_default()
            .push(expense.clone());
    }

    months
        .into_iter()
        .rev()
        .map(|((year, month), mut group)| {
            group.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            MonthGroup {
                label: month_label(year, month),
                expenses: group,
            }
        })
        .collect()
}

fn month_label(year: i32, month: u32) -> String {
    // The month came from a valid date, so its first day exists.
    NaiveDate::from_ymd_opt(year, month, 1)
        .map_or_else(|| format!("{month}/{year}"), |date| date.format("%B %Y").to_string())
}
