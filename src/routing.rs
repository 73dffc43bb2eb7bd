//! Application router configuration.

use axum::{
    Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};

use crate::{
    AppState, Error, endpoints,
    expense::{create_expense, delete_expense, get_summary, list_expenses},
    session::{create_session, delete_session},
    stores::ExpenseStore,
};

/// Return a router with all the app's routes.
pub fn build_router<S>(state: AppState<S>) -> Router
where
    S: ExpenseStore + Clone + Send + Sync + 'static,
{
    Router::new()
        .route(endpoints::COFFEE, get(get_coffee))
        .route(
            endpoints::SESSION,
            post(create_session).delete(delete_session),
        )
        .route(
            endpoints::EXPENSES,
            get(list_expenses::<S>).post(create_expense::<S>),
        )
        .route(endpoints::DELETE_EXPENSE, delete(delete_expense::<S>))
        .route(endpoints::SUMMARY, get(get_summary::<S>))
        .fallback(not_found)
        .with_state(state)
}

async fn get_coffee() -> Response {
    StatusCode::IM_A_TEAPOT.into_response()
}

async fn not_found() -> Response {
    Error::NotFound.into_response()
}
