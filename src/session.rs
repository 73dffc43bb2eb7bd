//! Session handling: exchanging a proxy-asserted identity for a signed
//! session cookie, and extracting the session on every expense request.
//!
//! The authentication provider itself is external. A fronting identity-aware
//! proxy verifies the user and asserts their ID in the [AUTH_USER_HEADER]
//! request header; this module only turns that assertion into a private
//! cookie and back into a [Session] value. There are no ambient globals, the
//! session is passed explicitly to whatever needs it.

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, StatusCode, request::Parts},
};
use axum_extra::extract::cookie::{Cookie, Key, PrivateCookieJar, SameSite};

use crate::{Error, models::UserId};

/// The name of the cookie that stores the session's user ID.
pub const COOKIE_USER_ID: &str = "user_id";

/// The request header in which the fronting proxy asserts the authenticated
/// user's ID.
pub const AUTH_USER_HEADER: &str = "x-auth-user";

/// The authenticated user context scoping a request.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// The user every store operation in this request is scoped to.
    pub user_id: UserId,
}

impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
    Key: axum::extract::FromRef<S>,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = match PrivateCookieJar::<Key>::from_request_parts(parts, state).await {
            Ok(jar) => jar,
            Err(error) => match error {},
        };

        let cookie = jar.get(COOKIE_USER_ID).ok_or(Error::Unauthorized)?;
        let user_id = cookie.value().trim();

        if user_id.is_empty() {
            return Err(Error::Unauthorized);
        }

        Ok(Session {
            user_id: UserId::new(user_id),
        })
    }
}

/// A route handler that exchanges the proxy-asserted identity header for a
/// signed session cookie.
pub async fn create_session(
    jar: PrivateCookieJar,
    headers: HeaderMap,
) -> Result<(PrivateCookieJar, StatusCode), Error> {
    let user_id = headers
        .get(AUTH_USER_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or(Error::Unauthorized)?;

    tracing::info!("created session for user {user_id}");

    let cookie = Cookie::build((COOKIE_USER_ID, user_id.to_owned()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .build();

    Ok((jar.add(cookie), StatusCode::NO_CONTENT))
}

/// A route handler that clears the session cookie.
pub async fn delete_session(jar: PrivateCookieJar) -> (PrivateCookieJar, StatusCode) {
    let cookie = Cookie::build((COOKIE_USER_ID, "")).path("/").build();

    (jar.remove(cookie), StatusCode::NO_CONTENT)
}
