//! Implements the shared state of the HTTP server.

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use sha2::{Digest, Sha512};

/// The state of the HTTP server, generic over the expense store backing it.
///
/// The store is chosen by configuration when the server starts (SQLite in
/// normal operation, the in-memory store in demo mode and tests).
#[derive(Debug, Clone)]
pub struct AppState<S> {
    /// The key used for signing and encrypting private cookies.
    pub cookie_key: Key,

    /// The expense store every request operates on.
    pub store: S,
}

impl<S> AppState<S> {
    /// Create a new [AppState] for `store`, deriving the cookie signing key
    /// from `cookie_secret`.
    pub fn new(cookie_secret: &str, store: S) -> Self {
        Self {
            cookie_key: create_cookie_key(cookie_secret),
            store,
        }
    }
}

// this impl tells `PrivateCookieJar` how to access the key from our state
impl<S> FromRef<AppState<S>> for Key {
    fn from_ref(state: &AppState<S>) -> Self {
        state.cookie_key.clone()
    }
}

/// Create a signing key for cookies from a `secret` string.
fn create_cookie_key(secret: &str) -> Key {
    let hash = Sha512::digest(secret);

    Key::from(&hash)
}
