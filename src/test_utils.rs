//! Helper functions for building expense records in tests.

use time::{Date, OffsetDateTime, macros::datetime};

use crate::models::{Category, ExpenseId, ExpenseRecord, UserId};

/// The creation timestamp used for test records unless a test overrides it.
pub const TEST_CREATED_AT: OffsetDateTime = datetime!(2024-01-01 0:00 UTC);

/// Create an expense record with fixed owner and creation time.
pub fn expense_record(
    id: ExpenseId,
    title: &str,
    amount: f64,
    category: Category,
    date: Option<Date>,
) -> ExpenseRecord {
    ExpenseRecord {
        id,
        title: title.to_owned(),
        amount,
        category,
        date,
        description: None,
        user_id: UserId::new("test-user"),
        created_at: TEST_CREATED_AT,
    }
}
