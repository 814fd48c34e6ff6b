//! Bearer Token Extraction
//!
//! Helpers mapping the `Authorization` header to a calling member id.
//! Two flavors on purpose: the listing endpoint's `by_user` filter is
//! skipped silently for anonymous callers, while `by_server_id` and the
//! mutation endpoints demand a valid token.

use axum::http::HeaderMap;
use uuid::Uuid;

use super::state::AppState;
use crate::auth::{AuthError, AuthResult};

/// Pull the raw token out of an `Authorization: Bearer <token>` header
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
}

/// The calling member, if a valid token was presented
///
/// Absent or invalid tokens yield `None`; callers treat the request as
/// anonymous.
pub fn authenticated_member(state: &AppState, headers: &HeaderMap) -> Option<Uuid> {
    let token = bearer_token(headers)?;
    state.auth.authenticate(token).ok()
}

/// The calling member, or an auth error
///
/// A missing header maps to `AuthenticationRequired`; a bad token surfaces
/// its own validation error.
pub fn require_member(state: &AppState, headers: &HeaderMap) -> AuthResult<Uuid> {
    let token = bearer_token(headers).ok_or(AuthError::AuthenticationRequired)?;
    state.auth.authenticate(token)
}
