//! Expense ledger commands - log, list, settle, and delete shared
//! purchases.

use chrono::NaiveDate;
use clap::{Args, Subcommand};

use crate::config::Preferences;
use crate::core::display::{format_money, format_signed_amount};
use crate::core::expense::{CategoryFilter, filter_by_category, group_by_month, sort_newest_first};
use crate::core::settlement::SplitPolicy;
use crate::errors::{Error, Result};
use crate::models::{ExpenseDraft, ExpenseRecord};
use crate::store::{self, StoreClient};

/// Expense subcommands.
#[derive(Subcommand, Debug)]
pub enum ExpenseCommand {
    /// List the ledger, newest first
    List {
        /// Only show expenses in this category
        #[arg(long)]
        category: Option<i64>,
        /// Group the listing by the month the expense was incurred
        #[arg(long)]
        by_month: bool,
    },
    /// Log a shared expense
    Add(AddArgs),
    /// Flip an expense between settled and outstanding
    Toggle {
        /// Expense id
        id: i64,
    },
    /// Remove an expense from the ledger
    Delete {
        /// Expense id
        id: i64,
    },
}

/// Arguments for `expense add`. Unspecified fields take the ledger's form
/// defaults: the primary viewer pays, the first category, today, an even
/// split, not yet settled.
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Purchase amount in currency units
    pub amount: f64,
    /// Paying user; defaults to the primary viewer, else the first user
    #[arg(long)]
    pub payer: Option<i64>,
    /// Category; defaults to the first category
    #[arg(long)]
    pub category: Option<i64>,
    /// Date the expense was incurred; defaults to today
    #[arg(long)]
    pub date: Option<NaiveDate>,
    /// Split policy, e.g. "50-50" or "100-other"
    #[arg(long, default_value = "50-50")]
    pub split: String,
    /// Free-text description
    #[arg(long, default_value = "")]
    pub description: String,
    /// Record the expense as already settled
    #[arg(long)]
    pub paid: bool,
}

/// Dispatches an expense subcommand.
pub async fn run(
    store: &StoreClient,
    preferences: Preferences,
    command: ExpenseCommand,
) -> Result<()> {
    match command {
        ExpenseCommand::List { category, by_month } => {
            list(store, preferences, category, by_month).await
        }
        ExpenseCommand::Add(args) => add(store, preferences, args).await,
        ExpenseCommand::Toggle { id } => toggle(store, id).await,
        ExpenseCommand::Delete { id } => delete(store, id).await,
    }
}

async fn list(
    store: &StoreClient,
    preferences: Preferences,
    category: Option<i64>,
    by_month: bool,
) -> Result<()> {
    let users = store::users::list_users(store).await?;
    let viewer_id = preferences
        .primary_user_id
        .or_else(|| users.first().map(|user| user.id));

    let mut expenses = store::expenses::list_expenses(store).await?;
    sort_newest_first(&mut expenses);
    let filter = category.map_or(CategoryFilter::All, CategoryFilter::Id);
    let expenses = filter_by_category(&expenses, filter);

    if expenses.is_empty() {
        println!("No expenses recorded.");
        return Ok(());
    }

    if by_month {
        for group in group_by_month(&expenses) {
            println!("{}", group.label);
            for expense in &group.expenses {
                println!("  {}", expense_line(expense, viewer_id));
            }
        }
    } else {
        for expense in &expenses {
            println!("{}", expense_line(expense, viewer_id));
        }
    }
    Ok(())
}

fn expense_line(expense: &ExpenseRecord, viewer_id: Option<i64>) -> String {
    let amount = format_signed_amount(expense, viewer_id)
        .unwrap_or_else(|| "(no amount)".to_string());
    let payer = expense
        .user
        .as_ref()
        .map_or("unknown", |user| user.name.as_str());
    let category = expense
        .category
        .as_ref()
        .map_or("-", |category| category.name.as_str());
    let description = if expense.description.is_empty() {
        "(no description)"
    } else {
        expense.description.as_str()
    };
    let settled = if expense.paid { " [settled]" } else { "" };

    format!(
        "#{} {} {amount} {description} - paid by {payer} [{category}]{settled}",
        expense.id, expense.created_at
    )
}

async fn add(store: &StoreClient, preferences: Preferences, args: AddArgs) -> Result<()> {
    if !args.amount.is_finite() || args.amount < 0.0 {
        return Err(Error::Command {
            message: format!("amount must be a non-negative number, got {}", args.amount),
        });
    }
    let split = SplitPolicy::parse_token(&args.split).ok_or_else(|| Error::Command {
        message: format!(
            "unrecognized split policy '{}'; use 50-50 or 100-other",
            args.split
        ),
    })?;

    let payer = match (args.payer, preferences.primary_user_id) {
        (Some(id), _) => id,
        (None, Some(id)) => id,
        (None, None) => store::users::list_users(store)
            .await?
            .first()
            .map(|user| user.id)
            .ok_or_else(|| Error::Command {
                message: "no users exist yet; add one with `user add`".to_string(),
            })?,
    };
    let category = match args.category {
        Some(id) => id,
        None => store::categories::list_categories(store)
            .await?
            .first()
            .map(|category| category.id)
            .ok_or_else(|| Error::Command {
                message: "no categories exist yet; add one with `category add`".to_string(),
            })?,
    };
    let date = args
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    let draft = ExpenseDraft {
        user_id: payer,
        amount: args.amount,
        category_id: category,
        created_at: date,
        split_type: split,
        description: args.description,
        paid: args.paid,
    };
    let expense = store::expenses::create_expense(store, &draft).await?;
    println!(
        "Recorded expense #{}: {} ({split}) on {date}",
        expense.id,
        format_money(args.amount)
    );
    Ok(())
}

async fn toggle(store: &StoreClient, id: i64) -> Result<()> {
    let expense = store::expenses::get_expense(store, id).await?;
    let updated = store::expenses::set_paid(store, id, !expense.paid).await?;
    if updated.paid {
        println!("Expense #{id} marked settled.");
    } else {
        println!("Expense #{id} marked outstanding.");
    }
    Ok(())
}

async fn delete(store: &StoreClient, id: i64) -> Result<()> {
    store::expenses::delete_expense(store, id).await?;
    println!("Deleted expense #{id}");
    Ok(())
}
