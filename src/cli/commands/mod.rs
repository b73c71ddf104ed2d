//! Subcommand handlers, one module per record kind plus the balance panel.

/// The balance panel
pub mod balance;
/// Category management
pub mod category;
/// Expense ledger operations
pub mod expense;
/// Participant management
pub mod user;
