//! The endpoint for recording a new expense.

use axum::{Json, extract::State, http::StatusCode};

use crate::{
    AppState, Error,
    models::{ExpenseForm, ExpenseRecord, NewExpense},
    session::Session,
    stores::ExpenseStore,
};

/// A route handler that validates an expense form and stores it.
///
/// Validation failures are reported with 422 before anything reaches the
/// store. On success the stored record, including its assigned ID, comes
/// back with 201 so the client can display it without reloading.
pub async fn create_expense<S: ExpenseStore>(
    State(state): State<AppState<S>>,
    session: Session,
    Json(form): Json<ExpenseForm>,
) -> Result<(StatusCode, Json<ExpenseRecord>), Error> {
    let expense = NewExpense::new(form)?;

    let record = state.store.add(&session.user_id, expense)?;

    tracing::info!(
        "recorded expense {} for user {}",
        record.id,
        session.user_id
    );

    Ok((StatusCode::CREATED, Json(record)))
}
