//! Helper functions for testing the expense endpoints against a server
//! backed by the in-memory store.

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_extra::extract::cookie::Cookie;
use axum_test::TestServer;

use crate::{
    AUTH_USER_HEADER, AppState, COOKIE_USER_ID, build_router, endpoints,
    models::ExpenseRecord, stores::MemoryExpenseStore,
};

/// Spawn a test server and create a session for the given user, returning
/// the session cookie to attach to requests.
pub async fn spawn_server_with_session(user: &'static str) -> (TestServer, Cookie<'static>) {
    let state = AppState::new("42", MemoryExpenseStore::new());
    let server = TestServer::new(build_router(state));

    let response = server
        .post(endpoints::SESSION)
        .add_header(
            HeaderName::from_static(AUTH_USER_HEADER),
            HeaderValue::from_static(user),
        )
        .await;
    response.assert_status(StatusCode::NO_CONTENT);

    (server, response.cookie(COOKIE_USER_ID))
}

/// Record an expense through the API and return the stored record.
pub async fn post_expense(
    server: &TestServer,
    cookie: &Cookie<'static>,
    body: serde_json::Value,
) -> ExpenseRecord {
    let response = server
        .post(endpoints::EXPENSES)
        .add_cookie(cookie.clone())
        .json(&body)
        .await;

    response.assert_status(StatusCode::CREATED);
    response.json::<ExpenseRecord>()
}
