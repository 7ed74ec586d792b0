// handlers/protected/permissions.rs - ad-hoc capability checks
//
// Portals call this to decide whether to show an action (button, menu
// entry) before the user attempts it. The check is the same exact-match
// the server enforces; this endpoint only exposes it.

use axum::{extract::Query, Extension};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::ApiResponse;
use crate::session::Identity;

#[derive(Debug, Deserialize)]
pub struct CheckParams {
    /// Single capability, e.g. `manage.users`
    pub capability: Option<String>,
    /// Comma-separated list; allowed when at least one is held
    pub any: Option<String>,
    /// Comma-separated list; allowed only when all are held
    pub all: Option<String>,
}

/// GET /api/permissions/check - Evaluate a capability against the session
///
/// Exactly one of `capability`, `any`, or `all` must be supplied:
/// `?capability=manage.users`, `?any=read.users,manage.users`,
/// `?all=read.users,manage.users`.
pub async fn check_get(
    Extension(identity): Extension<Identity>,
    Query(params): Query<CheckParams>,
) -> Result<ApiResponse<Value>, ApiError> {
    let supplied = [
        params.capability.is_some(),
        params.any.is_some(),
        params.all.is_some(),
    ]
    .iter()
    .filter(|v| **v)
    .count();

    if supplied != 1 {
        return Err(ApiError::bad_request(
            "Supply exactly one of 'capability', 'any', or 'all'",
        ));
    }

    let allowed = if let Some(capability) = &params.capability {
        identity.permissions.has_permission(capability)
    } else if let Some(list) = &params.any {
        identity.permissions.has_any_permission(split_list(list))
    } else if let Some(list) = &params.all {
        identity.permissions.has_all_permissions(split_list(list))
    } else {
        unreachable!("one parameter is present per the check above")
    };

    Ok(ApiResponse::success(json!({ "allowed": allowed })))
}

fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty())
}
