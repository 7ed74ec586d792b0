// handlers/public/auth.rs - token acquisition for the portals

use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::config;
use crate::error::ApiError;
use crate::middleware::ApiResponse;
use crate::session::{self, Claims};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// POST /auth/login - Authenticate a portal account and receive a session token
///
/// Expected Input:
/// ```json
/// {
///   "username": "string",   // Required
///   "password": "string"    // Required
/// }
/// ```
///
/// Expected Output (Success):
/// ```json
/// {
///   "success": true,
///   "data": {
///     "token": "eyJhbGciOiJIUzI1NiI...",
///     "user": {
///       "id": "user_uuid",
///       "username": "instructor",
///       "role": "instructor"
///     },
///     "expires_in": 86400
///   }
/// }
/// ```
///
/// Failed credentials always produce the same 401; the caller cannot tell
/// an unknown account from a wrong password.
pub async fn login_post(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<ApiResponse<Value>, ApiError> {
    if payload.username.trim().is_empty() || payload.password.is_empty() {
        return Err(ApiError::bad_request("Username and password are required"));
    }

    let user = state
        .directory
        .authenticate(&payload.username, &payload.password)
        .ok_or_else(|| {
            tracing::warn!("failed login attempt for '{}'", payload.username);
            ApiError::unauthorized("Invalid username or password")
        })?;

    let claims = Claims::for_user(user);
    let token = session::issue_token(&claims)?;
    let expires_in = config::config().security.jwt_expiry_hours * 3600;

    tracing::info!("session issued for '{}' ({})", user.username, user.role);

    Ok(ApiResponse::success(json!({
        "token": token,
        "user": {
            "id": user.id,
            "username": user.username,
            "role": user.role,
        },
        "expires_in": expires_in
    })))
}
