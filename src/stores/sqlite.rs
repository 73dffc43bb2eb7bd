//! Implements a SQLite backed expense store.

use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Row};
use time::OffsetDateTime;

use crate::{
    Error,
    models::{ExpenseId, ExpenseRecord, NewExpense, UserId},
    stores::ExpenseStore,
};

/// Stores expense records in a SQLite database.
///
/// The schema must have been set up with [initialize](crate::initialize_db)
/// before the store is used.
#[derive(Debug, Clone)]
pub struct SqliteExpenseStore {
    connection: Arc<Mutex<Connection>>,
}

impl SqliteExpenseStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }

    fn map_row(row: &Row, user_id: &UserId) -> rusqlite::Result<ExpenseRecord> {
        let category_text: String = row.get(3)?;
        let category = category_text.parse().map_err(|error: Error| {
            rusqlite::Error::FromSqlConversionFailure(
                3,
                rusqlite::types::Type::Text,
                Box::new(error),
            )
        })?;

        Ok(ExpenseRecord {
            id: row.get(0)?,
            title: row.get(1)?,
            amount: row.get(2)?,
            category,
            date: row.get(4)?,
            description: row.get(5)?,
            user_id: user_id.clone(),
            created_at: row.get(6)?,
        })
    }
}

impl ExpenseStore for SqliteExpenseStore {
    /// Retrieve all of `user_id`'s expense records in insertion order.
    ///
    /// # Panics
    /// Panics if the lock for the database connection is already held by the
    /// same thread.
    fn load(&self, user_id: &UserId) -> Result<Vec<ExpenseRecord>, Error> {
        let connection = self.connection.lock().unwrap();

        let mut statement = connection.prepare(
            "SELECT id, title, amount, category, date, description, created_at
             FROM expense
             WHERE user_id = ?1
             ORDER BY id ASC",
        )?;

        let records = statement
            .query_map((user_id.as_str(),), |row| Self::map_row(row, user_id))?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(records)
    }

    /// Create a new expense record in the database.
    ///
    /// # Panics
    /// Panics if the lock for the database connection is already held by the
    /// same thread.
    fn add(&self, user_id: &UserId, expense: NewExpense) -> Result<ExpenseRecord, Error> {
        let created_at = OffsetDateTime::now_utc();
        let connection = self.connection.lock().unwrap();

        connection.execute(
            "INSERT INTO expense (user_id, title, amount, category, date, description, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            (
                user_id.as_str(),
                expense.title(),
                expense.amount(),
                expense.category().as_str(),
                expense.date(),
                expense.description(),
                created_at,
            ),
        )?;

        let id = connection.last_insert_rowid();

        Ok(expense.into_record(id, user_id.clone(), created_at))
    }

    /// Delete `user_id`'s expense record with the given `id`.
    ///
    /// # Panics
    /// Panics if the lock for the database connection is already held by the
    /// same thread.
    fn delete(&self, user_id: &UserId, id: ExpenseId) -> Result<(), Error> {
        let connection = self.connection.lock().unwrap();

        let rows_affected = connection.execute(
            "DELETE FROM expense WHERE id = ?1 AND user_id = ?2",
            (id, user_id.as_str()),
        )?;

        if rows_affected == 0 {
            return Err(Error::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod sqlite_expense_store_tests {
    use std::sync::{Arc, Mutex};

    use rusqlite::Connection;
    use time::macros::date;

    use crate::{
        Error,
        db::initialize,
        models::{Category, ExpenseForm, NewExpense, UserId},
        stores::{ExpenseStore, SqliteExpenseStore},
    };

    fn create_store() -> SqliteExpenseStore {
        let connection = Connection::open_in_memory().expect("Could not open database in memory");
        initialize(&connection).expect("Could not initialize database");

        SqliteExpenseStore::new(Arc::new(Mutex::new(connection)))
    }

    fn lunch_expense() -> NewExpense {
        NewExpense::new(ExpenseForm {
            title: "Lunch".to_owned(),
            amount: 12.5,
            category: "food".to_owned(),
            date: Some("2024-01-10".to_owned()),
            description: Some("Dumplings".to_owned()),
        })
        .unwrap()
    }

    #[test]
    fn add_then_load_round_trips_the_record() {
        let store = create_store();
        let user = UserId::new("alice");

        let record = store.add(&user, lunch_expense()).unwrap();
        let loaded = store.load(&user).unwrap();

        assert!(record.id > 0);
        assert_eq!(loaded, vec![record]);
    }

    #[test]
    fn load_returns_records_in_insertion_order() {
        let store = create_store();
        let user = UserId::new("alice");
        let first = store.add(&user, lunch_expense()).unwrap();
        let second = store
            .add(
                &user,
                NewExpense::new(ExpenseForm {
                    title: "Bus fare".to_owned(),
                    amount: 3.0,
                    category: "transport".to_owned(),
                    date: None,
                    description: None,
                })
                .unwrap(),
            )
            .unwrap();

        let loaded = store.load(&user).unwrap();

        assert_eq!(loaded, vec![first, second]);
    }

    #[test]
    fn load_preserves_all_fields() {
        let store = create_store();
        let user = UserId::new("alice");
        store.add(&user, lunch_expense()).unwrap();

        let loaded = store.load(&user).unwrap();

        let record = &loaded[0];
        assert_eq!(record.title, "Lunch");
        assert_eq!(record.amount, 12.5);
        assert_eq!(record.category, Category::Food);
        assert_eq!(record.date, Some(date!(2024 - 01 - 10)));
        assert_eq!(record.description, Some("Dumplings".to_owned()));
        assert_eq!(record.user_id, user);
    }

    #[test]
    fn load_is_scoped_to_the_user() {
        let store = create_store();
        let alice = UserId::new("alice");
        let bob = UserId::new("bob");
        store.add(&alice, lunch_expense()).unwrap();

        let loaded = store.load(&bob).unwrap();

        assert_eq!(loaded, Vec::new());
    }

    #[test]
    fn delete_then_load_excludes_the_record() {
        let store = create_store();
        let user = UserId::new("alice");
        let record = store.add(&user, lunch_expense()).unwrap();

        store.delete(&user, record.id).unwrap();

        assert_eq!(store.load(&user).unwrap(), Vec::new());
    }

    #[test]
    fn delete_missing_record_returns_not_found() {
        let store = create_store();
        let user = UserId::new("alice");

        let result = store.delete(&user, 42);

        assert_eq!(result, Err(Error::NotFound));
    }

    #[test]
    fn delete_cannot_touch_another_users_record() {
        let store = create_store();
        let alice = UserId::new("alice");
        let bob = UserId::new("bob");
        let record = store.add(&alice, lunch_expense()).unwrap();

        let result = store.delete(&bob, record.id);

        assert_eq!(result, Err(Error::NotFound));
        assert_eq!(store.load(&alice).unwrap().len(), 1);
    }
}
