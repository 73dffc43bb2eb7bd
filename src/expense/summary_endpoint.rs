//! The endpoint for the dashboard summary statistics.

use axum::{Json, extract::State};
use time::OffsetDateTime;

use crate::{
    AppState, Error,
    engine::{self, MonthKey, Summary},
    session::Session,
    stores::ExpenseStore,
};

/// A route handler that summarises the session user's full expense list.
///
/// The reference month and day come from the server clock here, at the
/// boundary. The engine itself never reads the clock.
pub async fn get_summary<S: ExpenseStore>(
    State(state): State<AppState<S>>,
    session: Session,
) -> Result<Json<Summary>, Error> {
    let today = OffsetDateTime::now_utc().date();
    let current_month = MonthKey::from_date(today);

    let records = state.store.load(&session.user_id)?;

    Ok(Json(engine::summarize(&records, current_month, today)))
}
