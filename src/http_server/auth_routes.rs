//! Auth HTTP Routes
//!
//! Signup and login issue the bearer tokens the directory's authenticated
//! filters require; `/user` echoes the calling member.

use std::sync::Arc;

use axum::{
    extract::{Json, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Router,
};
use serde::Serialize;

use super::errors::{auth_error, ApiError};
use super::extract::require_member;
use super::state::AppState;
use crate::auth::{AuthError, LoginRequest, Member, SignupRequest};
use crate::observability::Logger;

/// Auth routes with shared state
pub fn auth_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/signup", post(signup_handler))
        .route("/login", post(login_handler))
        .route("/user", get(get_member_handler))
        .with_state(state)
}

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub member: MemberResponse,
    pub access_token: String,
    pub expires_in: u64,
}

#[derive(Debug, Serialize)]
pub struct MemberResponse {
    pub id: String,
    pub username: String,
    pub created_at: String,
}

impl From<&Member> for MemberResponse {
    fn from(member: &Member) -> Self {
        Self {
            id: member.id.to_string(),
            username: member.username.clone(),
            created_at: member.created_at.to_rfc3339(),
        }
    }
}

// ==================
// Handlers
// ==================

/// Signup handler
async fn signup_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let (member, access_token) = state.auth.signup(request).map_err(auth_error)?;

    Logger::info("MEMBER_SIGNUP", &[("username", &member.username)]);

    let response = AuthResponse {
        member: MemberResponse::from(&member),
        access_token,
        expires_in: state.auth.token_ttl_seconds() as u64,
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// Login handler
async fn login_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let (member, access_token) = state.auth.login(request).map_err(|e| {
        Logger::warn("MEMBER_LOGIN_FAILED", &[]);
        auth_error(e)
    })?;

    Logger::info("MEMBER_LOGIN", &[("username", &member.username)]);

    let response = AuthResponse {
        member: MemberResponse::from(&member),
        access_token,
        expires_in: state.auth.token_ttl_seconds() as u64,
    };
    Ok(Json(response))
}

/// Current member handler
async fn get_member_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<MemberResponse>, ApiError> {
    let member_id = require_member(&state, &headers).map_err(auth_error)?;

    let member = state
        .auth
        .member(member_id)
        .map_err(auth_error)?
        .ok_or_else(|| auth_error(AuthError::InvalidCredentials))?;

    Ok(Json(MemberResponse::from(&member)))
}
