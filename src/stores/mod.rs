//! Contains the trait and implementations for objects that store
//! [expense records](crate::models::ExpenseRecord).

mod memory;
mod sqlite;

pub use memory::{DEMO_USER, MemoryExpenseStore};
pub use sqlite::SqliteExpenseStore;

use crate::{
    Error,
    models::{ExpenseId, ExpenseRecord, NewExpense, UserId},
};

/// Handles the persistence of expense records.
///
/// Every operation is scoped to a user: a store must never return or touch
/// another user's records. The engine never talks to a store directly, it
/// only operates on the sequence that [ExpenseStore::load] returns.
pub trait ExpenseStore {
    /// Retrieve all of `user_id`'s expense records in insertion order.
    ///
    /// # Errors
    /// Returns an [Error::StoreUnavailable] if the underlying storage fails.
    fn load(&self, user_id: &UserId) -> Result<Vec<ExpenseRecord>, Error>;

    /// Create a new expense record for `user_id`.
    ///
    /// The store assigns the record's ID and creation timestamp. Validation
    /// is the caller's job, see [NewExpense::new].
    ///
    /// # Errors
    /// Returns an [Error::StoreUnavailable] if the underlying storage fails.
    fn add(&self, user_id: &UserId, expense: NewExpense) -> Result<ExpenseRecord, Error>;

    /// Delete `user_id`'s expense record with the given `id`.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::NotFound] if the record does not exist or belongs to
    ///   another user,
    /// - or [Error::StoreUnavailable] if the underlying storage fails.
    fn delete(&self, user_id: &UserId, id: ExpenseId) -> Result<(), Error>;
}
