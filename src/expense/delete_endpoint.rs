//! The endpoint for deleting an expense.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    AppState, Error, models::ExpenseId, session::Session, stores::ExpenseStore,
};

/// A route handler that deletes one of the session user's expenses.
///
/// Deletes are hard: there is no recovery once the store confirms the
/// delete. A 404 means the record was already gone and the client should
/// refresh its list.
pub async fn delete_expense<S: ExpenseStore>(
    State(state): State<AppState<S>>,
    session: Session,
    Path(expense_id): Path<ExpenseId>,
) -> Result<StatusCode, Error> {
    state.store.delete(&session.user_id, expense_id)?;

    tracing::info!(
        "deleted expense {expense_id} for user {}",
        session.user_id
    );

    Ok(StatusCode::NO_CONTENT)
}
