//! This file defines the `ExpenseRecord` type, the core type of the
//! application, and the validated `NewExpense` type used to create one.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use time::{
    Date, OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description,
};

use crate::{Error, models::Category};

/// Alias for the integer type used for expense record IDs.
///
/// IDs are assigned by the store when a record is created and never change.
pub type ExpenseId = i64;

/// The identifier of the user that owns a set of expense records.
///
/// User IDs are opaque strings asserted by the external identity provider.
/// Every store operation is scoped to one user ID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    /// Create a user ID from the identity provider's subject string.
    pub fn new(id: &str) -> Self {
        Self(id.to_owned())
    }

    /// The user ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One recorded expense.
///
/// Records are immutable once created. There is deliberately no edit
/// operation, a wrong record is deleted and re-entered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// The ID assigned by the store on creation.
    pub id: ExpenseId,
    /// A short, non-empty name for the expense.
    pub title: String,
    /// How much money was spent. Always greater than zero.
    pub amount: f64,
    /// The category the expense is filed under.
    pub category: Category,
    /// The day the expense occurred. Distinct from [ExpenseRecord::created_at]
    /// and may be absent for records imported from older clients.
    pub date: Option<Date>,
    /// Optional free text describing the expense.
    pub description: Option<String>,
    /// The user that owns this record.
    pub user_id: UserId,
    /// When the record was created, assigned by the store. Only used as a
    /// fallback sort key when [ExpenseRecord::date] is absent.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// The raw client payload for creating an expense.
///
/// Use [NewExpense::new] to validate a form before handing it to a store.
#[derive(Debug, Clone, Deserialize)]
pub struct ExpenseForm {
    /// A short name for the expense.
    pub title: String,
    /// How much money was spent.
    pub amount: f64,
    /// The name of an expense category, e.g. "food".
    pub category: String,
    /// The day the expense occurred as a `YYYY-MM-DD` string.
    pub date: Option<String>,
    /// Optional free text describing the expense.
    pub description: Option<String>,
}

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// A validated expense, ready to be inserted into a store.
///
/// The store assigns the record's ID and creation timestamp, everything else
/// comes from here. Constructing a `NewExpense` is the only validation gate,
/// so a store never sees an empty title or a non-positive amount.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    title: String,
    amount: f64,
    category: Category,
    date: Option<Date>,
    description: Option<String>,
}

impl NewExpense {
    /// Validate a client-submitted expense form.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::EmptyTitle] if the title is empty or whitespace,
    /// - [Error::InvalidAmount] if the amount is not a finite number greater
    ///   than zero,
    /// - [Error::UnknownCategory] if the category does not name one of the
    ///   fixed categories,
    /// - or [Error::InvalidDate] if the date is not a valid `YYYY-MM-DD`
    ///   calendar date.
    pub fn new(form: ExpenseForm) -> Result<Self, Error> {
        let title = form.title.trim();
        if title.is_empty() {
            return Err(Error::EmptyTitle);
        }

        if !form.amount.is_finite() || form.amount <= 0.0 {
            return Err(Error::InvalidAmount(form.amount.to_string()));
        }

        let category = form.category.trim().parse()?;

        let date = match form.date.as_deref().map(str::trim) {
            Some(text) if !text.is_empty() => Some(
                Date::parse(text, DATE_FORMAT).map_err(|_| Error::InvalidDate(text.to_owned()))?,
            ),
            _ => None,
        };

        let description = form
            .description
            .map(|text| text.trim().to_owned())
            .filter(|text| !text.is_empty());

        Ok(Self {
            title: title.to_owned(),
            amount: form.amount,
            category,
            date,
            description,
        })
    }

    /// The validated, trimmed title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The validated amount. Finite and greater than zero.
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// The expense category.
    pub fn category(&self) -> Category {
        self.category
    }

    /// The day the expense occurred, if one was given.
    pub fn date(&self) -> Option<Date> {
        self.date
    }

    /// The trimmed description, if one was given.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Combine the validated fields with the store-assigned `id` and
    /// `created_at` into a full record.
    pub fn into_record(
        self,
        id: ExpenseId,
        user_id: UserId,
        created_at: OffsetDateTime,
    ) -> ExpenseRecord {
        ExpenseRecord {
            id,
            title: self.title,
            amount: self.amount,
            category: self.category,
            date: self.date,
            description: self.description,
            user_id,
            created_at,
        }
    }
}
