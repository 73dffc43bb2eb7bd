//! Expenseur is a small self-hosted web service for tracking personal
//! expenses.
//!
//! The service exposes a JSON API for recording, listing, deleting and
//! summarising expenses. All list views and summary statistics are computed
//! by the pure functions in [engine]; the HTTP layer is glue that loads a
//! user's records from an [ExpenseStore](stores::ExpenseStore) and hands
//! them to the engine. Identity is asserted by a fronting proxy and carried
//! in a signed session cookie, so every store operation is scoped to one
//! user.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod db;
mod endpoints;
mod error;
mod expense;
mod routing;
mod session;
mod state;

pub mod engine;
pub mod models;
pub mod stores;

#[cfg(test)]
mod test_utils;

pub use db::initialize as initialize_db;
pub use error::Error;
pub use routing::build_router;
pub use session::{AUTH_USER_HEADER, COOKIE_USER_ID};
pub use state::AppState;

/// An async task that waits for either the ctrl+c or terminate signal,
/// whichever comes first, and then signals the server to shut down
/// gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
