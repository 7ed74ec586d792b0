// handlers/protected/auth.rs - session introspection for authenticated callers

use axum::Extension;
use serde_json::{json, Value};

use crate::middleware::ApiResponse;
use crate::session::Identity;

/// GET /api/auth/whoami - Current identity: role, derived flags, permissions
///
/// Expected Output:
/// ```json
/// {
///   "success": true,
///   "data": {
///     "id": "user_uuid",
///     "username": "instructor",
///     "role": "instructor",
///     "flags": {
///       "is_admin": false,
///       "is_instructor": true,
///       "is_student": false,
///       "is_authenticated": true
///     },
///     "permissions": ["read.courses", "create.sessions"]
///   }
/// }
/// ```
pub async fn whoami(Extension(identity): Extension<Identity>) -> ApiResponse<Value> {
    let flags = identity.flags();
    let permissions: Vec<&str> = identity.permissions.iter().collect();

    ApiResponse::success(json!({
        "id": identity.user_id,
        "username": identity.username,
        "role": identity.role,
        "flags": flags,
        "permissions": permissions,
    }))
}

/// DELETE /api/auth/session - Logout acknowledgement
///
/// Tokens are stateless; discarding one is the client's job. The endpoint
/// exists so every portal makes the same call on logout and the event
/// lands in the gate's logs.
pub async fn session_logout(Extension(identity): Extension<Identity>) -> ApiResponse<Value> {
    tracing::info!("session closed for '{}'", identity.username);
    ApiResponse::success(json!({ "logged_out": true }))
}
