//! The domain types for expense records and the types needed to create them.

mod category;
mod expense;

pub use category::Category;
pub use expense::{ExpenseForm, ExpenseId, ExpenseRecord, NewExpense, UserId};
