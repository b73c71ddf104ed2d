//! Record types mirroring the external data store's tables.
//! These are wire-faithful: field names match the store's columns, and the
//! expense record tolerates the loose typing the store is known to produce.

pub mod category;
pub mod expense;
pub mod user;

pub use category::Category;
pub use expense::{ExpenseDraft, ExpenseRecord, RawAmount, RawId};
pub use user::User;
