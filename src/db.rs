//! Sets up the database schema for the SQLite expense store.

use rusqlite::Connection;

/// Create the tables and indices for the expense store if they do not
/// already exist.
///
/// # Errors
/// Returns an error if there is an unexpected SQL error.
pub fn initialize(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS expense (
            id INTEGER PRIMARY KEY,
            user_id TEXT NOT NULL,
            title TEXT NOT NULL,
            amount REAL NOT NULL,
            category TEXT NOT NULL,
            date TEXT,
            description TEXT,
            created_at TEXT NOT NULL
        )",
        (),
    )?;

    connection.execute(
        "CREATE INDEX IF NOT EXISTS expense_user_id ON expense (user_id)",
        (),
    )?;

    Ok(())
}
