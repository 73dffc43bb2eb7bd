//! Defines the app level error type and its conversion to JSON responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// An empty string was used as an expense title.
    #[error("expense titles must not be empty")]
    EmptyTitle,

    /// A zero, negative or non-finite amount was used to create an expense.
    #[error("{0} is not a valid amount, amounts must be greater than zero")]
    InvalidAmount(String),

    /// A string that does not name one of the fixed expense categories.
    #[error("{0:?} is not a recognised expense category")]
    UnknownCategory(String),

    /// A date string that could not be parsed as a `YYYY-MM-DD` calendar
    /// date.
    #[error("could not parse {0:?} as a calendar date (expected YYYY-MM-DD)")]
    InvalidDate(String),

    /// A month string that could not be parsed as a `YYYY-MM` calendar
    /// month.
    #[error("could not parse {0:?} as a calendar month (expected YYYY-MM)")]
    InvalidMonth(String),

    /// A string that does not name one of the supported sort keys.
    #[error("{0:?} is not a valid sort key")]
    InvalidSortKey(String),

    /// The requested expense could not be found.
    ///
    /// The client should refresh its expense list, the expense may have
    /// already been deleted.
    #[error("the requested expense could not be found")]
    NotFound,

    /// The request carried no valid session cookie.
    #[error("no session cookie, create a session first")]
    Unauthorized,

    /// An unhandled error from the expense store.
    ///
    /// The wrapped error should only be logged on the server. Clients get a
    /// generic transient message and should retry later; their in-memory
    /// state is still valid.
    #[error("the expense store is unavailable: {0}")]
    StoreUnavailable(rusqlite::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::StoreUnavailable(error)
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status_code, message) = match self {
            Error::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            Error::Unauthorized => (StatusCode::UNAUTHORIZED, self.to_string()),
            Error::StoreUnavailable(error) => {
                tracing::error!("the expense store is unavailable: {error}");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "the expense store is temporarily unavailable, try again later".to_owned(),
                )
            }
            // The remaining variants are validation errors, reported before
            // anything is sent to the store.
            error => (StatusCode::UNPROCESSABLE_ENTITY, error.to_string()),
        };

        (status_code, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
