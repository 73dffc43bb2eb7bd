//! Implements an in-memory expense store.
//!
//! Used as the demo-mode backend and as the fixture store in endpoint tests.
//! Selecting it is a configuration choice (the `--demo` flag), the SQLite
//! store is never silently swapped out at runtime.

use std::sync::{Arc, Mutex};

use time::{Duration, OffsetDateTime};

use crate::{
    Error,
    models::{Category, ExpenseId, ExpenseRecord, NewExpense, UserId},
    stores::ExpenseStore,
};

/// Stores expense records in memory. All records are lost when the process
/// exits.
#[derive(Debug, Clone, Default)]
pub struct MemoryExpenseStore {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    next_id: ExpenseId,
    records: Vec<ExpenseRecord>,
}

/// The user that demo fixture data belongs to.
pub const DEMO_USER: &str = "demo";

impl MemoryExpenseStore {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with sample expenses for the [DEMO_USER] user,
    /// dated relative to today so the monthly figures are non-trivial.
    pub fn with_demo_data() -> Self {
        let today = OffsetDateTime::now_utc().date();
        let fixtures = [
            ("Groceries", 86.40, Category::Food, today),
            ("Bus pass", 45.0, Category::Transport, today - Duration::days(2)),
            ("Streaming", 14.99, Category::Entertainment, today - Duration::days(6)),
            ("Electricity", 120.55, Category::Bills, today - Duration::days(20)),
            ("Paperback", 18.0, Category::Education, today - Duration::days(35)),
            ("Weekend trip", 240.0, Category::Travel, today - Duration::days(40)),
        ];

        let store = Self::new();

        {
            let mut inner = store.inner.lock().unwrap();
            let user_id = UserId::new(DEMO_USER);
            let created_at = OffsetDateTime::now_utc();

            for (title, amount, category, date) in fixtures {
                inner.next_id += 1;
                let record = ExpenseRecord {
                    id: inner.next_id,
                    title: title.to_owned(),
                    amount,
                    category,
                    date: Some(date),
                    description: None,
                    user_id: user_id.clone(),
                    created_at,
                };
                inner.records.push(record);
            }
        }

        store
    }
}

impl ExpenseStore for MemoryExpenseStore {
    fn load(&self, user_id: &UserId) -> Result<Vec<ExpenseRecord>, Error> {
        let inner = self.inner.lock().unwrap();

        Ok(inner
            .records
            .iter()
            .filter(|record| &record.user_id == user_id)
            .cloned()
            .collect())
    }

    fn add(&self, user_id: &UserId, expense: NewExpense) -> Result<ExpenseRecord, Error> {
        let mut inner = self.inner.lock().unwrap();

        inner.next_id += 1;
        let record = expense.into_record(inner.next_id, user_id.clone(), OffsetDateTime::now_utc());
        inner.records.push(record.clone());

        Ok(record)
    }

    fn delete(&self, user_id: &UserId, id: ExpenseId) -> Result<(), Error> {
        let mut inner = self.inner.lock().unwrap();

        let position = inner
            .records
            .iter()
            .position(|record| record.id == id && &record.user_id == user_id)
            .ok_or(Error::NotFound)?;
        inner.records.remove(position);

        Ok(())
    }
}

#[cfg(test)]
mod memory_expense_store_tests {
    use crate::{
        Error,
        models::{ExpenseForm, NewExpense, UserId},
        stores::{ExpenseStore, MemoryExpenseStore, memory::DEMO_USER},
    };

    fn lunch_expense() -> NewExpense {
        NewExpense::new(ExpenseForm {
            title: "Lunch".to_owned(),
            amount: 12.5,
            category: "food".to_owned(),
            date: Some("2024-01-10".to_owned()),
            description: None,
        })
        .unwrap()
    }

    #[test]
    fn add_then_load_round_trips_the_record() {
        let store = MemoryExpenseStore::new();
        let user = UserId::new("alice");

        let record = store.add(&user, lunch_expense()).unwrap();
        let loaded = store.load(&user).unwrap();

        assert!(record.id > 0);
        assert_eq!(loaded, vec![record]);
    }

    #[test]
    fn assigns_unique_ids() {
        let store = MemoryExpenseStore::new();
        let user = UserId::new("alice");

        let first = store.add(&user, lunch_expense()).unwrap();
        let second = store.add(&user, lunch_expense()).unwrap();

        assert_ne!(first.id, second.id);
    }

    #[test]
    fn load_is_scoped_to_the_user() {
        let store = MemoryExpenseStore::new();
        store.add(&UserId::new("alice"), lunch_expense()).unwrap();

        let loaded = store.load(&UserId::new("bob")).unwrap();

        assert_eq!(loaded, Vec::new());
    }

    #[test]
    fn delete_then_load_excludes_the_record() {
        let store = MemoryExpenseStore::new();
        let user = UserId::new("alice");
        let record = store.add(&user, lunch_expense()).unwrap();

        store.delete(&user, record.id).unwrap();

        assert_eq!(store.load(&user).unwrap(), Vec::new());
    }

    #[test]
    fn delete_missing_record_returns_not_found() {
        let store = MemoryExpenseStore::new();

        let result = store.delete(&UserId::new("alice"), 42);

        assert_eq!(result, Err(Error::NotFound));
    }

    #[test]
    fn demo_data_belongs_to_the_demo_user() {
        let store = MemoryExpenseStore::with_demo_data();

        let records = store.load(&UserId::new(DEMO_USER)).unwrap();

        assert!(!records.is_empty());
        assert!(records.iter().all(|record| record.date.is_some()));
    }
}
